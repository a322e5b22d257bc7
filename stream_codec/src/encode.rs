use std::io::{Read, Write};

use crate::Result;

/// Trait for types which can be written to a byte stream.
///
/// Implement by hand, or with `#[derive(Encode)]` which writes each field in
/// declaration order.
pub trait Encode {
	fn encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()>;
}

/// Trait for types which can be read from a byte stream.
///
/// Must read exactly what the matching [`Encode`] impl writes.
pub trait Decode: Sized {
	fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self>;
}

/// Trait for use with `#[codec_with]`.
///
/// Lets a proxy type pick a different wire form for a field, e.g.
/// [`Ascii`](crate::Ascii) for a `String` field.
pub trait EncodeWith<T: ?Sized> {
	fn encode_with<W: Write + ?Sized>(value: &T, writer: &mut W) -> Result<()>;
}

/// Trait for use with `#[codec_with]`. Counterpart of [`EncodeWith`].
pub trait DecodeWith<T> {
	fn decode_with<R: Read + ?Sized>(reader: &mut R) -> Result<T>;
}
