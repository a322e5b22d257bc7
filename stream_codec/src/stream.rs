//! Extension traits exposing every codec as a method on `io::Write` /
//! `io::Read`.
//!
//! ```
//! use stream_codec::{DataRead, DataWrite, StringTable};
//!
//! let mut out = Vec::new();
//! let mut table = StringTable::new();
//! out.write_i32(7).unwrap();
//! out.write_varint(-33).unwrap();
//! out.write_indexed(&mut table, Some("x")).unwrap();
//!
//! let mut input = out.as_slice();
//! let mut table = StringTable::new();
//! assert_eq!(input.read_i32().unwrap(), 7);
//! assert_eq!(input.read_varint().unwrap(), -33);
//! assert_eq!(input.read_indexed(&mut table).unwrap().as_deref(), Some("x"));
//! ```

use std::io::{Read, Write};

use crate::{bulk, primitives, string, table, varint, Decode, Encode, Result, StringTable};

/// Codec methods for every `io::Write`.
pub trait DataWrite: Write {
	#[inline]
	fn write_bool(&mut self, value: bool) -> Result<()> {
		primitives::write_bool(self, value)
	}

	#[inline]
	fn write_u8(&mut self, value: u8) -> Result<()> {
		primitives::write_u8(self, value)
	}

	#[inline]
	fn write_i8(&mut self, value: i8) -> Result<()> {
		primitives::write_i8(self, value)
	}

	#[inline]
	fn write_u16(&mut self, value: u16) -> Result<()> {
		primitives::write_u16(self, value)
	}

	#[inline]
	fn write_i16(&mut self, value: i16) -> Result<()> {
		primitives::write_i16(self, value)
	}

	#[inline]
	fn write_i32(&mut self, value: i32) -> Result<()> {
		primitives::write_i32(self, value)
	}

	#[inline]
	fn write_i64(&mut self, value: i64) -> Result<()> {
		primitives::write_i64(self, value)
	}

	#[inline]
	fn write_f32(&mut self, value: f32) -> Result<()> {
		primitives::write_f32(self, value)
	}

	#[inline]
	fn write_f64(&mut self, value: f64) -> Result<()> {
		primitives::write_f64(self, value)
	}

	#[inline]
	fn write_varint(&mut self, value: i64) -> Result<()> {
		varint::write_varint(self, value)
	}

	#[inline]
	fn write_string(&mut self, value: Option<&str>) -> Result<()> {
		string::write_string(self, value)
	}

	#[inline]
	fn write_ascii(&mut self, value: Option<&str>) -> Result<()> {
		string::write_ascii(self, value)
	}

	#[inline]
	fn write_utf(&mut self, value: &str) -> Result<()> {
		string::write_utf(self, value)
	}

	#[inline]
	fn write_indexed(&mut self, table: &mut StringTable, value: Option<&str>) -> Result<()> {
		table::write_indexed(self, table, value)
	}

	#[inline]
	fn write_encoded<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
		value.encode(self)
	}

	/// Copy all of `reader` into this writer. Returns number of bytes copied.
	#[inline]
	fn pipe_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<u64> {
		bulk::pipe(self, reader)
	}
}

impl<W: Write + ?Sized> DataWrite for W {}

/// Codec methods for every `io::Read`.
pub trait DataRead: Read {
	#[inline]
	fn read_bool(&mut self) -> Result<bool> {
		primitives::read_bool(self)
	}

	#[inline]
	fn read_u8(&mut self) -> Result<u8> {
		primitives::read_u8(self)
	}

	#[inline]
	fn read_i8(&mut self) -> Result<i8> {
		primitives::read_i8(self)
	}

	#[inline]
	fn read_u16(&mut self) -> Result<u16> {
		primitives::read_u16(self)
	}

	#[inline]
	fn read_i16(&mut self) -> Result<i16> {
		primitives::read_i16(self)
	}

	#[inline]
	fn read_i32(&mut self) -> Result<i32> {
		primitives::read_i32(self)
	}

	#[inline]
	fn read_i64(&mut self) -> Result<i64> {
		primitives::read_i64(self)
	}

	#[inline]
	fn read_f32(&mut self) -> Result<f32> {
		primitives::read_f32(self)
	}

	#[inline]
	fn read_f64(&mut self) -> Result<f64> {
		primitives::read_f64(self)
	}

	#[inline]
	fn read_u16_le(&mut self) -> Result<u16> {
		primitives::read_u16_le(self)
	}

	#[inline]
	fn read_u32_le(&mut self) -> Result<u32> {
		primitives::read_u32_le(self)
	}

	#[inline]
	fn read_f32_le(&mut self) -> Result<f32> {
		primitives::read_f32_le(self)
	}

	#[inline]
	fn read_varint(&mut self) -> Result<i64> {
		varint::read_varint(self)
	}

	#[inline]
	fn read_string(&mut self) -> Result<Option<String>> {
		string::read_string(self)
	}

	#[inline]
	fn read_ascii(&mut self) -> Result<Option<String>> {
		string::read_ascii(self)
	}

	#[inline]
	fn read_utf(&mut self) -> Result<String> {
		string::read_utf(self)
	}

	#[inline]
	fn read_indexed(&mut self, table: &mut StringTable) -> Result<Option<String>> {
		table::read_indexed(self, table)
	}

	#[inline]
	fn read_decoded<T: Decode>(&mut self) -> Result<T> {
		T::decode(self)
	}

	/// Read exactly `len` bytes. Named to avoid clashing with
	/// `Read::read_exact`.
	#[inline]
	fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
		bulk::read_exact(self, len)
	}

	#[inline]
	fn read_all(&mut self) -> Result<Vec<u8>> {
		bulk::read_all(self)
	}
}

impl<R: Read + ?Sized> DataRead for R {}
