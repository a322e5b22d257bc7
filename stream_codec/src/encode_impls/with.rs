//! Proxies for `#[codec_with]`, selecting an alternative wire form for a
//! field.
//!
//! ```
//! use stream_codec::{Ascii, Decode, Encode, VarInt};
//!
//! #[derive(Encode, Decode, Debug, PartialEq)]
//! struct Entry {
//! 	#[codec_with(Ascii)]
//! 	name: String,
//! 	#[codec_with(VarInt)]
//! 	size: i64,
//! }
//! ```

use std::io::{Read, Write};

use crate::{
	string::{read_ascii, read_utf, write_ascii, write_utf},
	varint::{read_varint, write_varint},
	CodecError, DecodeWith, EncodeWith, Result,
};

/// Encode strings with the single-byte ASCII codec.
pub struct Ascii;

/// Encode strings in modified UTF-8.
pub struct Utf;

/// Encode integers as VarInts.
pub struct VarInt;

impl EncodeWith<String> for Ascii {
	#[inline]
	fn encode_with<W: Write + ?Sized>(value: &String, writer: &mut W) -> Result<()> {
		write_ascii(writer, Some(value))
	}
}

impl DecodeWith<String> for Ascii {
	#[inline]
	fn decode_with<R: Read + ?Sized>(reader: &mut R) -> Result<String> {
		read_ascii(reader)?.ok_or(CodecError::MalformedLength(-1))
	}
}

impl EncodeWith<Option<String>> for Ascii {
	#[inline]
	fn encode_with<W: Write + ?Sized>(value: &Option<String>, writer: &mut W) -> Result<()> {
		write_ascii(writer, value.as_deref())
	}
}

impl DecodeWith<Option<String>> for Ascii {
	#[inline]
	fn decode_with<R: Read + ?Sized>(reader: &mut R) -> Result<Option<String>> {
		read_ascii(reader)
	}
}

impl EncodeWith<String> for Utf {
	#[inline]
	fn encode_with<W: Write + ?Sized>(value: &String, writer: &mut W) -> Result<()> {
		write_utf(writer, value)
	}
}

impl DecodeWith<String> for Utf {
	#[inline]
	fn decode_with<R: Read + ?Sized>(reader: &mut R) -> Result<String> {
		read_utf(reader)
	}
}

impl EncodeWith<i64> for VarInt {
	#[inline]
	fn encode_with<W: Write + ?Sized>(value: &i64, writer: &mut W) -> Result<()> {
		write_varint(writer, *value)
	}
}

impl DecodeWith<i64> for VarInt {
	#[inline]
	fn decode_with<R: Read + ?Sized>(reader: &mut R) -> Result<i64> {
		read_varint(reader)
	}
}

impl EncodeWith<i32> for VarInt {
	#[inline]
	fn encode_with<W: Write + ?Sized>(value: &i32, writer: &mut W) -> Result<()> {
		write_varint(writer, *value as i64)
	}
}

impl DecodeWith<i32> for VarInt {
	#[inline]
	fn decode_with<R: Read + ?Sized>(reader: &mut R) -> Result<i32> {
		let value = read_varint(reader)?;
		i32::try_from(value).map_err(|_| CodecError::VarIntOutOfRange(value))
	}
}
