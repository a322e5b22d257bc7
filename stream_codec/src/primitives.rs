//! Fixed-width primitives.
//!
//! Everything is big-endian (most significant byte first) unless the function
//! name ends in `_le`. Little-endian support is read-only, for consuming data
//! produced by foreign-endian writers.
//!
//! Floats go through `to_bits` / `from_bits`, never a numeric cast, so `NaN`
//! payloads and `-0.0` survive a round trip unchanged.

use std::io::{Read, Write};

use crate::Result;

/// Read exactly `N` bytes. Fails with `EndOfInput` if any are missing.
#[inline]
pub(crate) fn read_array<const N: usize, R: Read + ?Sized>(reader: &mut R) -> Result<[u8; N]> {
	let mut bytes = [0u8; N];
	reader.read_exact(&mut bytes)?;
	Ok(bytes)
}

/// Write a `bool` as 1 byte: `1` for `true`, `0` for `false`.
#[inline]
pub fn write_bool<W: Write + ?Sized>(writer: &mut W, value: bool) -> Result<()> {
	write_u8(writer, value as u8)
}

/// Read a `bool`. Any non-zero byte is `true`.
#[inline]
pub fn read_bool<R: Read + ?Sized>(reader: &mut R) -> Result<bool> {
	Ok(read_u8(reader)? != 0)
}

#[inline]
pub fn write_u8<W: Write + ?Sized>(writer: &mut W, value: u8) -> Result<()> {
	writer.write_all(&[value])?;
	Ok(())
}

#[inline]
pub fn read_u8<R: Read + ?Sized>(reader: &mut R) -> Result<u8> {
	let [byte] = read_array::<1, _>(reader)?;
	Ok(byte)
}

#[inline]
pub fn write_i8<W: Write + ?Sized>(writer: &mut W, value: i8) -> Result<()> {
	write_u8(writer, value as u8)
}

#[inline]
pub fn read_i8<R: Read + ?Sized>(reader: &mut R) -> Result<i8> {
	Ok(read_u8(reader)? as i8)
}

/// Write an unsigned 16-bit value. This is also the wire form of a single
/// UTF-16 code unit ("char").
#[inline]
pub fn write_u16<W: Write + ?Sized>(writer: &mut W, value: u16) -> Result<()> {
	writer.write_all(&value.to_be_bytes())?;
	Ok(())
}

#[inline]
pub fn read_u16<R: Read + ?Sized>(reader: &mut R) -> Result<u16> {
	Ok(u16::from_be_bytes(read_array(reader)?))
}

#[inline]
pub fn write_i16<W: Write + ?Sized>(writer: &mut W, value: i16) -> Result<()> {
	writer.write_all(&value.to_be_bytes())?;
	Ok(())
}

#[inline]
pub fn read_i16<R: Read + ?Sized>(reader: &mut R) -> Result<i16> {
	Ok(i16::from_be_bytes(read_array(reader)?))
}

#[inline]
pub fn write_i32<W: Write + ?Sized>(writer: &mut W, value: i32) -> Result<()> {
	writer.write_all(&value.to_be_bytes())?;
	Ok(())
}

#[inline]
pub fn read_i32<R: Read + ?Sized>(reader: &mut R) -> Result<i32> {
	Ok(i32::from_be_bytes(read_array(reader)?))
}

/// Write an `i64` as two big-endian 4-byte halves, high half first.
#[inline]
pub fn write_i64<W: Write + ?Sized>(writer: &mut W, value: i64) -> Result<()> {
	write_i32(writer, (value >> 32) as i32)?;
	write_i32(writer, value as i32)
}

/// Read an `i64` written as two big-endian 4-byte halves.
#[inline]
pub fn read_i64<R: Read + ?Sized>(reader: &mut R) -> Result<i64> {
	let high = read_i32(reader)? as i64;
	let low = read_i32(reader)? as u32 as i64;
	Ok((high << 32) | low)
}

#[inline]
pub fn write_f32<W: Write + ?Sized>(writer: &mut W, value: f32) -> Result<()> {
	write_i32(writer, value.to_bits() as i32)
}

#[inline]
pub fn read_f32<R: Read + ?Sized>(reader: &mut R) -> Result<f32> {
	Ok(f32::from_bits(read_i32(reader)? as u32))
}

#[inline]
pub fn write_f64<W: Write + ?Sized>(writer: &mut W, value: f64) -> Result<()> {
	write_i64(writer, value.to_bits() as i64)
}

#[inline]
pub fn read_f64<R: Read + ?Sized>(reader: &mut R) -> Result<f64> {
	Ok(f64::from_bits(read_i64(reader)? as u64))
}

/// Read an unsigned 16-bit value stored least significant byte first.
#[inline]
pub fn read_u16_le<R: Read + ?Sized>(reader: &mut R) -> Result<u16> {
	Ok(u16::from_le_bytes(read_array(reader)?))
}

/// Read an unsigned 32-bit value stored least significant byte first.
#[inline]
pub fn read_u32_le<R: Read + ?Sized>(reader: &mut R) -> Result<u32> {
	Ok(u32::from_le_bytes(read_array(reader)?))
}

/// Read an IEEE-754 `f32` whose bits are stored least significant byte first.
#[inline]
pub fn read_f32_le<R: Read + ?Sized>(reader: &mut R) -> Result<f32> {
	Ok(f32::from_bits(read_u32_le(reader)?))
}
