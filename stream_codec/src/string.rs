//! String codecs.
//!
//! Three wire forms are supported:
//!
//! * [`write_string`] / [`read_string`]: 4-byte big-endian length in UTF-16
//!   code units (`-1` for `None`), then each code unit as 2 big-endian bytes.
//! * [`write_ascii`] / [`read_ascii`]: VarInt length (`-1` for `None`), then
//!   one byte per character. Only characters up to `U+00FF` can be written.
//! * [`write_utf`] / [`read_utf`]: modified UTF-8. 2-byte big-endian length of
//!   the payload in bytes, then 1 to 3 bytes per UTF-16 code unit. `U+0000` is
//!   written as the 2-byte sequence `C0 80` so the payload never contains a
//!   zero byte.

use std::io::{Read, Write};

use crate::{
	bulk,
	primitives::{read_i32, read_u16, write_i32},
	varint::{read_varint, write_varint},
	CodecError, Result,
};

/// Maximum payload length of a modified UTF-8 string.
pub const MAX_UTF_LEN: usize = u16::MAX as usize;

/// Length prefix which stands for `None`.
const NULL_LEN: i64 = -1;

/// Write a string as a 4-byte length followed by 16-bit code units.
pub fn write_string<W: Write + ?Sized>(writer: &mut W, value: Option<&str>) -> Result<()> {
	let value = match value {
		Some(value) => value,
		None => return write_i32(writer, NULL_LEN as i32),
	};

	let mut bytes = Vec::with_capacity(4 + value.len() * 2);
	bytes.extend_from_slice(&[0; 4]);
	for unit in value.encode_utf16() {
		bytes.extend_from_slice(&unit.to_be_bytes());
	}

	let units = (bytes.len() - 4) / 2;
	let len = i32::try_from(units).map_err(|_| CodecError::StringTooLong {
		len: units,
		max: i32::MAX as usize,
	})?;
	bytes[..4].copy_from_slice(&len.to_be_bytes());

	writer.write_all(&bytes)?;
	Ok(())
}

/// Read a string written by [`write_string`].
pub fn read_string<R: Read + ?Sized>(reader: &mut R) -> Result<Option<String>> {
	let len = match checked_len(read_i32(reader)? as i64)? {
		Some(len) => len,
		None => return Ok(None),
	};
	let byte_len = len.checked_mul(2).ok_or(CodecError::MalformedLength(len as i64))?;
	let bytes = bulk::read_exact(reader, byte_len)?;

	let units = bytes
		.chunks_exact(2)
		.map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
	from_utf16(units).map(Some)
}

/// Write a string with a VarInt length and one byte per character.
///
/// Fails with `CharOutOfRange` if any character is above `U+00FF`. Nothing is
/// written in that case.
pub fn write_ascii<W: Write + ?Sized>(writer: &mut W, value: Option<&str>) -> Result<()> {
	let value = match value {
		Some(value) => value,
		None => return write_varint(writer, NULL_LEN),
	};

	let bytes = value
		.chars()
		.enumerate()
		.map(|(position, c)| {
			// `char` is unsigned, so there's no negative code to fold
			let code = c as u32;
			u8::try_from(code).map_err(|_| CodecError::CharOutOfRange { code, position })
		})
		.collect::<Result<Vec<u8>>>()?;

	write_varint(writer, bytes.len() as i64)?;
	writer.write_all(&bytes)?;
	Ok(())
}

/// Read a string written by [`write_ascii`]. Each byte becomes the character
/// with that code point.
pub fn read_ascii<R: Read + ?Sized>(reader: &mut R) -> Result<Option<String>> {
	let len = match checked_len(read_varint(reader)?)? {
		Some(len) => len,
		None => return Ok(None),
	};
	let bytes = bulk::read_exact(reader, len)?;
	Ok(Some(bytes.into_iter().map(char::from).collect()))
}

/// Get length of the modified UTF-8 payload for `value`, excluding the 2-byte
/// length prefix.
pub fn utf_len(value: &str) -> usize {
	value.encode_utf16().map(unit_len).sum()
}

/// Write a string in modified UTF-8.
///
/// Fails with `StringTooLong` if the payload would exceed [`MAX_UTF_LEN`]
/// bytes.
pub fn write_utf<W: Write + ?Sized>(writer: &mut W, value: &str) -> Result<()> {
	let len = utf_len(value);
	if len > MAX_UTF_LEN {
		return Err(CodecError::StringTooLong { len, max: MAX_UTF_LEN });
	}

	let mut bytes = Vec::with_capacity(2 + len);
	bytes.extend_from_slice(&(len as u16).to_be_bytes());
	for unit in value.encode_utf16() {
		match unit_len(unit) {
			1 => bytes.push(unit as u8),
			2 => bytes.extend_from_slice(&[0xC0 | (unit >> 6) as u8, 0x80 | (unit & 0x3F) as u8]),
			_ => bytes.extend_from_slice(&[
				0xE0 | (unit >> 12) as u8,
				0x80 | ((unit >> 6) & 0x3F) as u8,
				0x80 | (unit & 0x3F) as u8,
			]),
		}
	}

	writer.write_all(&bytes)?;
	Ok(())
}

/// Read a string written by [`write_utf`].
///
/// Positions in `MalformedEncoding` errors are offsets into the payload,
/// not counting the length prefix.
pub fn read_utf<R: Read + ?Sized>(reader: &mut R) -> Result<String> {
	let len = read_u16(reader)? as usize;
	let bytes = bulk::read_exact(reader, len)?;

	let mut units = Vec::with_capacity(len);
	let mut pos = 0;
	while let Some(&lead) = bytes.get(pos) {
		let unit = match lead >> 4 {
			0..=7 => {
				pos += 1;
				lead as u16
			}
			12 | 13 => {
				let b2 = continuation(&bytes, pos, 1)?;
				pos += 2;
				((lead & 0x1F) as u16) << 6 | (b2 & 0x3F) as u16
			}
			14 => {
				let b2 = continuation(&bytes, pos, 1)?;
				let b3 = continuation(&bytes, pos, 2)?;
				pos += 3;
				((lead & 0x0F) as u16) << 12 | ((b2 & 0x3F) as u16) << 6 | (b3 & 0x3F) as u16
			}
			_ => return Err(CodecError::MalformedEncoding { byte: lead, position: pos }),
		};
		units.push(unit);
	}

	from_utf16(units.into_iter())
}

/// Number of modified UTF-8 bytes for one UTF-16 code unit.
#[inline]
fn unit_len(unit: u16) -> usize {
	match unit {
		0x0001..=0x007F => 1,
		0x0000 | 0x0080..=0x07FF => 2,
		_ => 3,
	}
}

/// Get continuation byte `offset` bytes after the lead byte at `lead_pos`.
///
/// A sequence cut short by the end of the payload is reported against its
/// lead byte.
#[inline]
fn continuation(bytes: &[u8], lead_pos: usize, offset: usize) -> Result<u8> {
	let pos = lead_pos + offset;
	match bytes.get(pos) {
		Some(&byte) if byte & 0xC0 == 0x80 => Ok(byte),
		Some(&byte) => Err(CodecError::MalformedEncoding { byte, position: pos }),
		None => Err(CodecError::MalformedEncoding {
			byte: bytes[lead_pos],
			position: lead_pos,
		}),
	}
}

/// Interpret a length prefix. `-1` is `None`, any other negative is an error.
pub(crate) fn checked_len(len: i64) -> Result<Option<usize>> {
	match len {
		NULL_LEN => Ok(None),
		len if len < 0 => Err(CodecError::MalformedLength(len)),
		len => usize::try_from(len)
			.map(Some)
			.map_err(|_| CodecError::MalformedLength(len)),
	}
}

/// Collect UTF-16 code units into a `String`, rejecting unpaired surrogates.
fn from_utf16<I: Iterator<Item = u16>>(units: I) -> Result<String> {
	let mut out = String::new();
	let mut position = 0;
	for c in char::decode_utf16(units) {
		match c {
			Ok(c) => {
				out.push(c);
				position += c.len_utf16();
			}
			Err(_) => return Err(CodecError::InvalidUtf16 { position }),
		}
	}
	Ok(out)
}
