//! Bulk transfer of opaque byte blocks.

use std::io::{ErrorKind, Read, Write};

use tracing::debug;

use crate::{CodecError, Result};

/// Smallest initial buffer used by [`read_all`].
pub const MIN_READ_BUFFER: usize = 1024;

/// Chunk size used by [`pipe`], and the most [`read_exact`] allocates ahead
/// of data actually arriving.
pub const PIPE_CHUNK_SIZE: usize = 8192;

/// Read `reader` to the end.
///
/// Returns an empty `Vec` if `reader` yields nothing.
#[inline]
pub fn read_all<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>> {
	read_all_with_hint(reader, 0)
}

/// Read `reader` to the end, starting with a buffer of at least `hint` bytes.
///
/// `hint` is typically the number of bytes the source reports as available.
/// Each time the buffer fills it grows by the size it had before its last
/// growth, so sizes follow a Fibonacci-like progression. The result is
/// shrunk to fit.
pub fn read_all_with_hint<R: Read + ?Sized>(reader: &mut R, hint: usize) -> Result<Vec<u8>> {
	let mut buf = vec![0u8; hint.max(MIN_READ_BUFFER)];
	let mut prev_size = buf.len();
	let mut len = 0;

	loop {
		if len == buf.len() {
			let grow_by = prev_size;
			prev_size = buf.len();
			buf.resize(buf.len() + grow_by, 0);
		}

		match reader.read(&mut buf[len..]) {
			Ok(0) => break,
			Ok(count) => len += count,
			Err(err) if err.kind() == ErrorKind::Interrupted => {}
			Err(err) => return Err(err.into()),
		}
	}

	buf.truncate(len);
	buf.shrink_to_fit();
	debug!(len, "read_all complete");
	Ok(buf)
}

/// Read exactly `len` bytes.
///
/// Fails with `EndOfInput` if `reader` is exhausted first. Memory is
/// allocated as data arrives, so a corrupt `len` can't trigger a huge
/// allocation up front.
pub fn read_exact<R: Read + ?Sized>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
	let mut buf = Vec::with_capacity(len.min(PIPE_CHUNK_SIZE));
	while buf.len() < len {
		let start = buf.len();
		let end = start + (len - start).min(PIPE_CHUNK_SIZE.max(start));
		buf.resize(end, 0);

		let mut filled = start;
		while filled < end {
			match reader.read(&mut buf[filled..end]) {
				Ok(0) => return Err(CodecError::EndOfInput),
				Ok(count) => filled += count,
				Err(err) if err.kind() == ErrorKind::Interrupted => {}
				Err(err) => return Err(err.into()),
			}
		}
	}
	Ok(buf)
}

/// Copy everything from `reader` to `writer`, unchanged.
///
/// Returns number of bytes copied.
pub fn pipe<W, R>(writer: &mut W, reader: &mut R) -> Result<u64>
where
	W: Write + ?Sized,
	R: Read + ?Sized,
{
	let mut chunk = [0u8; PIPE_CHUNK_SIZE];
	let mut total = 0u64;

	loop {
		let count = match reader.read(&mut chunk) {
			Ok(0) => break,
			Ok(count) => count,
			Err(err) if err.kind() == ErrorKind::Interrupted => continue,
			Err(err) => return Err(err.into()),
		};
		writer.write_all(&chunk[..count])?;
		total += count as u64;
	}

	debug!(total, "pipe complete");
	Ok(total)
}
