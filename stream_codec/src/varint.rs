//! Signed variable-length integers.
//!
//! # Format
//!
//! A value is stored in 1, 2, 4 or 8 bytes, little-endian. The low 2 bits of
//! the first byte hold the width class and the remaining bits hold the value,
//! shifted left by 2 and sign-extended to the full width:
//!
//! ```text
//! class 0: 1 byte   6-bit value   -32 ..= 31
//! class 1: 2 bytes  14-bit value  -8192 ..= 8191
//! class 2: 4 bytes  30-bit value  -2^29 ..= 2^29 - 1
//! class 3: 8 bytes  62-bit value  -2^61 ..= 2^61 - 1
//! ```
//!
//! The smallest width which can hold the value is always chosen, so `0`
//! encodes as the single byte `0x00`.

use std::io::{Read, Write};

use crate::{CodecError, Result};

/// Smallest value which can be encoded.
pub const VARINT_MIN: i64 = -(1 << 61);

/// Largest value which can be encoded.
pub const VARINT_MAX: i64 = (1 << 61) - 1;

/// Maximum number of bytes an encoded VarInt occupies.
pub const MAX_VARINT_BYTES: usize = 8;

/// Get number of bytes `value` encodes to, or `None` if it's out of range.
pub const fn varint_len(value: i64) -> Option<usize> {
	if value >= -(1 << 5) && value < (1 << 5) {
		Some(1)
	} else if value >= -(1 << 13) && value < (1 << 13) {
		Some(2)
	} else if value >= -(1 << 29) && value < (1 << 29) {
		Some(4)
	} else if value >= VARINT_MIN && value <= VARINT_MAX {
		Some(8)
	} else {
		None
	}
}

/// Encode `value` into a fixed buffer.
///
/// Returns the buffer and number of bytes of it which are used.
pub fn encode_varint(value: i64) -> Result<([u8; MAX_VARINT_BYTES], usize)> {
	let len = varint_len(value).ok_or(CodecError::VarIntOutOfRange(value))?;
	let class = len.trailing_zeros() as i64;
	let tagged = (value << 2) | class;
	Ok((tagged.to_le_bytes(), len))
}

/// Write `value` to `writer`.
pub fn write_varint<W: Write + ?Sized>(writer: &mut W, value: i64) -> Result<()> {
	let (bytes, len) = encode_varint(value)?;
	writer.write_all(&bytes[..len])?;
	Ok(())
}

/// Read a value from `reader`.
pub fn read_varint<R: Read + ?Sized>(reader: &mut R) -> Result<i64> {
	let mut bytes = [0u8; MAX_VARINT_BYTES];
	reader.read_exact(&mut bytes[..1])?;
	let len = 1usize << (bytes[0] & 0b11);
	reader.read_exact(&mut bytes[1..len])?;
	Ok(unpack(bytes, len))
}

/// Decode a value from the start of `bytes`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_varint(bytes: &[u8]) -> Result<(i64, usize)> {
	let first = *bytes.first().ok_or(CodecError::EndOfInput)?;
	let len = 1usize << (first & 0b11);
	let src = bytes.get(..len).ok_or(CodecError::EndOfInput)?;

	let mut buf = [0u8; MAX_VARINT_BYTES];
	buf[..len].copy_from_slice(src);
	Ok((unpack(buf, len), len))
}

/// Sign-extend the low `len` bytes of `bytes`, then drop the class bits.
///
/// Both shifts right must be arithmetic for negative values to survive.
#[inline]
fn unpack(bytes: [u8; MAX_VARINT_BYTES], len: usize) -> i64 {
	let unused_bits = (MAX_VARINT_BYTES - len) as u32 * 8;
	let raw = u64::from_le_bytes(bytes);
	let signed = ((raw << unused_bits) as i64) >> unused_bits;
	signed >> 2
}
