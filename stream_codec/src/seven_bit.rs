//! Streams for carrying 8-bit data over a 7-bit-clean channel.
//!
//! [`SevenBitWriter`] repacks the bits of every byte written to it into groups
//! of 7, each sent as one byte in range `0..=127`. Bits are taken least
//! significant first. [`SevenBitReader`] reverses the transform.
//!
//! The writer must be closed with [`close`](SevenBitWriter::close) or
//! [`finish`](SevenBitWriter::finish) to send the final partial group.
//! Dropping it without closing loses up to 6 trailing bits.
//!
//! A failed write to the underlying stream may leave part of the output
//! behind, so the writer is closed by any such failure. Later writes fail
//! with `StreamClosed` rather than emitting misaligned groups.
//!
//! ```
//! use std::io::{Read, Write};
//! use stream_codec::{SevenBitReader, SevenBitWriter};
//!
//! let mut writer = SevenBitWriter::new(Vec::new());
//! writer.write_all(b"\xff\x00\x80").unwrap();
//! let packed = writer.finish().unwrap();
//! assert!(packed.iter().all(|&b| b < 0x80));
//!
//! let mut out = Vec::new();
//! SevenBitReader::new(packed.as_slice()).read_to_end(&mut out).unwrap();
//! assert_eq!(out, b"\xff\x00\x80");
//! ```

use std::io::{self, ErrorKind, Read, Write};

use tracing::debug;

use crate::{CodecError, Result};

const GROUP_MASK: u32 = 0x7F;

/// Whether a [`SevenBitWriter`] still accepts writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
	Open,
	Closed,
}

/// Bit accumulator for encoding. Holds fewer than 7 bits between bytes.
#[derive(Clone, Copy, Debug, Default)]
struct Packer {
	buffer: u32,
	bits: u32,
}

impl Packer {
	#[inline]
	fn push(&mut self, byte: u8, out: &mut Vec<u8>) {
		self.buffer |= (byte as u32) << self.bits;
		out.push((self.buffer & GROUP_MASK) as u8);
		self.buffer >>= 7;
		self.bits += 1;
		if self.bits == 7 {
			out.push((self.buffer & GROUP_MASK) as u8);
			self.buffer = 0;
			self.bits = 0;
		}
	}

	/// Emit pending bits, if any, as a final group.
	#[inline]
	fn flush(&mut self, out: &mut Vec<u8>) {
		if self.bits > 0 {
			out.push((self.buffer & GROUP_MASK) as u8);
			self.buffer = 0;
			self.bits = 0;
		}
	}
}

/// Bit accumulator for decoding. Holds fewer than 8 bits between groups.
#[derive(Clone, Copy, Debug, Default)]
struct Unpacker {
	buffer: u32,
	bits: u32,
}

impl Unpacker {
	/// Add a 7-bit group. Returns a byte once 8 bits are available.
	#[inline]
	fn push(&mut self, group: u8) -> Option<u8> {
		self.buffer |= (group as u32 & GROUP_MASK) << self.bits;
		self.bits += 7;
		if self.bits >= 8 {
			let byte = self.buffer as u8;
			self.buffer >>= 8;
			self.bits -= 8;
			Some(byte)
		} else {
			None
		}
	}
}

/// Repack `bytes` into 7-bit groups, including the final partial group.
pub fn encode_seven_bit(bytes: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(packed_len(bytes.len()));
	let mut packer = Packer::default();
	for &byte in bytes {
		packer.push(byte, &mut out);
	}
	packer.flush(&mut out);
	out
}

/// Reassemble bytes from 7-bit groups. Trailing bits which don't make up a
/// whole byte are discarded.
pub fn decode_seven_bit(groups: &[u8]) -> Vec<u8> {
	let mut unpacker = Unpacker::default();
	groups.iter().filter_map(|&group| unpacker.push(group)).collect()
}

/// Number of 7-bit groups `len` bytes pack into.
#[inline]
pub const fn packed_len(len: usize) -> usize {
	(len * 8 + 6) / 7
}

/// Writer which repacks bytes into 7-bit groups before passing them on.
#[derive(Debug)]
pub struct SevenBitWriter<W: Write> {
	inner: W,
	packer: Packer,
	state: StreamState,
}

impl<W: Write> SevenBitWriter<W> {
	/// Create new `SevenBitWriter` writing to `inner`.
	pub fn new(inner: W) -> Self {
		Self {
			inner,
			packer: Packer::default(),
			state: StreamState::Open,
		}
	}

	#[inline]
	pub fn state(&self) -> StreamState {
		self.state
	}

	#[inline]
	pub fn get_ref(&self) -> &W {
		&self.inner
	}

	/// Get mutable ref to the underlying writer.
	///
	/// Writing to it directly will corrupt the output.
	#[inline]
	pub fn get_mut(&mut self) -> &mut W {
		&mut self.inner
	}

	/// Send the final partial group and flush underlying writer.
	///
	/// Any later write fails with `StreamClosed`. Closing again is a no-op.
	pub fn close(&mut self) -> Result<()> {
		if self.state == StreamState::Closed {
			return Ok(());
		}

		let mut tail = Vec::with_capacity(1);
		self.packer.flush(&mut tail);
		self.state = StreamState::Closed;
		self.send(&tail)?;
		self.inner.flush()?;

		debug!(tail_groups = tail.len(), "seven-bit writer closed");
		Ok(())
	}

	/// Pass groups to the underlying writer. Closes on failure, as an unknown
	/// prefix of `groups` may already have been written.
	fn send(&mut self, groups: &[u8]) -> io::Result<()> {
		self.inner.write_all(groups).map_err(|err| {
			self.state = StreamState::Closed;
			debug!(error = %err, "seven-bit writer closed by failed write");
			err
		})
	}

	/// Close and return the underlying writer.
	pub fn finish(mut self) -> Result<W> {
		self.close()?;
		Ok(self.inner)
	}

	/// Return the underlying writer without closing.
	///
	/// Any pending partial group is lost.
	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: Write> Write for SevenBitWriter<W> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if self.state == StreamState::Closed {
			return Err(CodecError::StreamClosed.into());
		}

		let mut out = Vec::with_capacity(packed_len(buf.len()) + 1);
		for &byte in buf {
			self.packer.push(byte, &mut out);
		}
		self.send(&out)?;
		Ok(buf.len())
	}

	/// Flush underlying writer. Pending bits stay buffered until `close`.
	fn flush(&mut self) -> io::Result<()> {
		self.inner.flush()
	}
}

/// Reader which reassembles bytes from 7-bit groups.
///
/// Groups are masked to their low 7 bits. End of stream is reached when
/// `inner` is exhausted, discarding any leftover bits.
#[derive(Debug)]
pub struct SevenBitReader<R: Read> {
	inner: R,
	unpacker: Unpacker,
}

impl<R: Read> SevenBitReader<R> {
	/// Create new `SevenBitReader` reading from `inner`.
	pub fn new(inner: R) -> Self {
		Self {
			inner,
			unpacker: Unpacker::default(),
		}
	}

	#[inline]
	pub fn get_ref(&self) -> &R {
		&self.inner
	}

	#[inline]
	pub fn get_mut(&mut self) -> &mut R {
		&mut self.inner
	}

	pub fn into_inner(self) -> R {
		self.inner
	}
}

impl<R: Read> Read for SevenBitReader<R> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let mut groups = [0u8; 256];
		let mut filled = 0;

		while filled < buf.len() {
			// Never request more groups than needed to fill `buf`, so no decoded
			// byte is left without somewhere to go
			let wanted_bits = (buf.len() - filled) * 8 - self.unpacker.bits as usize;
			let wanted = ((wanted_bits + 6) / 7).min(groups.len());

			let count = match self.inner.read(&mut groups[..wanted]) {
				Ok(count) => count,
				Err(err) if err.kind() == ErrorKind::Interrupted => continue,
				Err(err) => return Err(err),
			};
			if count == 0 {
				break;
			}

			for &group in &groups[..count] {
				if let Some(byte) = self.unpacker.push(group) {
					buf[filled] = byte;
					filled += 1;
				}
			}

			if filled > 0 {
				break;
			}
		}

		Ok(filled)
	}
}
