use std::io::{Read, Write};

use crate::{primitives, Decode, Encode, Result};

macro_rules! impl_primitive {
	($ty:ty, $write:ident, $read:ident) => {
		impl Encode for $ty {
			#[inline]
			fn encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
				primitives::$write(writer, *self)
			}
		}

		impl Decode for $ty {
			#[inline]
			fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
				primitives::$read(reader)
			}
		}
	};
}

impl_primitive!(bool, write_bool, read_bool);

impl_primitive!(u8, write_u8, read_u8);
impl_primitive!(u16, write_u16, read_u16);

impl_primitive!(i8, write_i8, read_i8);
impl_primitive!(i16, write_i16, read_i16);
impl_primitive!(i32, write_i32, read_i32);
impl_primitive!(i64, write_i64, read_i64);

impl_primitive!(f32, write_f32, read_f32);
impl_primitive!(f64, write_f64, read_f64);
