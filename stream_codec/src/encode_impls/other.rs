use std::io::{Read, Write};

use crate::{
	primitives::{read_i32, write_i32},
	string::{checked_len, read_string, write_string},
	CodecError, Decode, Encode, Result,
};

/// Elements reserved up front when decoding a `Vec`, whatever its length
/// prefix claims.
const MAX_PREALLOCATED_ELEMENTS: usize = 1024;

impl Encode for str {
	#[inline]
	fn encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
		write_string(writer, Some(self))
	}
}

impl Encode for String {
	#[inline]
	fn encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
		write_string(writer, Some(self))
	}
}

impl Decode for String {
	/// Fails with `MalformedLength(-1)` on a null string. Use
	/// `Option<String>` for fields which may be null.
	#[inline]
	fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
		read_string(reader)?.ok_or(CodecError::MalformedLength(-1))
	}
}

impl Encode for Option<String> {
	#[inline]
	fn encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
		write_string(writer, self.as_deref())
	}
}

impl Decode for Option<String> {
	#[inline]
	fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
		read_string(reader)
	}
}

/// 4-byte element count, then each element.
impl<T: Encode> Encode for Vec<T> {
	fn encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
		let len = i32::try_from(self.len()).map_err(|_| CodecError::TooManyElements {
			len: self.len(),
			max: i32::MAX as usize,
		})?;
		write_i32(writer, len)?;
		for value in self {
			value.encode(writer)?;
		}
		Ok(())
	}
}

impl<T: Decode> Decode for Vec<T> {
	fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
		let raw_len = read_i32(reader)? as i64;
		let len = checked_len(raw_len)?.ok_or(CodecError::MalformedLength(raw_len))?;

		let mut values = Vec::with_capacity(len.min(MAX_PREALLOCATED_ELEMENTS));
		for _ in 0..len {
			values.push(T::decode(reader)?);
		}
		Ok(values)
	}
}

/// Elements only. Length is known from the type.
impl<T: Encode, const N: usize> Encode for [T; N] {
	fn encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
		for value in self {
			value.encode(writer)?;
		}
		Ok(())
	}
}

impl<T: Decode, const N: usize> Decode for [T; N] {
	fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
		let mut values = Vec::with_capacity(N);
		for _ in 0..N {
			values.push(T::decode(reader)?);
		}
		// Exactly `N` elements were pushed, so conversion can't fail
		values
			.try_into()
			.map_err(|values: Vec<T>| CodecError::MalformedLength(values.len() as i64))
	}
}

impl<T: Encode + ?Sized> Encode for Box<T> {
	#[inline]
	fn encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
		(**self).encode(writer)
	}
}

impl<T: Decode> Decode for Box<T> {
	#[inline]
	fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
		T::decode(reader).map(Box::new)
	}
}
