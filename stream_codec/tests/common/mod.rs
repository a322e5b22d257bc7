#![allow(dead_code)]

use std::io::{self, Read, Write};

use rand::Rng;
use rand_pcg::Lcg64Xsh32;

/// Deterministic RNG, so every run sees the same inputs.
pub fn rng() -> Lcg64Xsh32 {
	const STATE: u64 = 3141592653;
	const STREAM: u64 = 5897932384;
	Lcg64Xsh32::new(STATE, STREAM)
}

pub fn random_bytes<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
	let mut bytes = vec![0u8; len];
	rng.fill(bytes.as_mut_slice());
	bytes
}

/// Random string of characters drawn from `range` of code points,
/// skipping surrogates.
pub fn random_string<R: Rng>(rng: &mut R, len: usize, range: std::ops::RangeInclusive<u32>) -> String {
	let mut out = String::with_capacity(len);
	while out.chars().count() < len {
		if let Some(c) = char::from_u32(rng.gen_range(range.clone())) {
			out.push(c);
		}
	}
	out
}

/// Reader which never returns more than `chunk_size` bytes per `read` call,
/// and is interrupted once before its first read.
pub struct ChunkedReader<'a> {
	data: &'a [u8],
	chunk_size: usize,
	interrupted: bool,
}

impl<'a> ChunkedReader<'a> {
	pub fn new(data: &'a [u8], chunk_size: usize) -> Self {
		Self {
			data,
			chunk_size,
			interrupted: false,
		}
	}

	pub fn remaining(&self) -> &[u8] {
		self.data
	}
}

impl Read for ChunkedReader<'_> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if !self.interrupted {
			self.interrupted = true;
			return Err(io::ErrorKind::Interrupted.into());
		}
		let len = buf.len().min(self.chunk_size).min(self.data.len());
		buf[..len].copy_from_slice(&self.data[..len]);
		self.data = &self.data[len..];
		Ok(len)
	}
}

/// Writer which accepts `limit` bytes in total, then fails every write.
pub struct LimitedWriter {
	pub written: Vec<u8>,
	limit: usize,
}

impl LimitedWriter {
	pub fn new(limit: usize) -> Self {
		Self {
			written: Vec::new(),
			limit,
		}
	}
}

impl Write for LimitedWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let room = self.limit - self.written.len();
		if room == 0 {
			return Err(io::Error::new(io::ErrorKind::Other, "sink full"));
		}
		let len = buf.len().min(room);
		self.written.extend_from_slice(&buf[..len]);
		Ok(len)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
