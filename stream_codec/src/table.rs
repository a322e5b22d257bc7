//! Indexed string table.
//!
//! A writer and a reader each keep their own [`StringTable`]. The first time a
//! string is written it's sent in full and appended to the writer's table. Any
//! later occurrence is sent as just its index in the table. The reader appends
//! new strings to its own table in the same order, so both tables stay
//! identical as long as every write is matched by a read, in order.
//!
//! Nothing detects a writer and reader falling out of step. A mismatch yields
//! wrong strings, not an error.
//!
//! # Format
//!
//! ```text
//! -1                      None
//! index < table.len()     back-reference to an existing entry
//! index == table.len()    new entry, followed by the string (ASCII codec)
//! ```

use std::{
	collections::HashMap,
	io::{Read, Write},
	ops::Index,
	slice,
};

use tracing::trace;

use crate::{
	string::{read_ascii, write_ascii},
	varint::{read_varint, write_varint},
	CodecError, Result,
};

/// Ordered, append-only list of strings seen so far in a stream session.
///
/// Entries are never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
	strings: Vec<String>,
	lookup: HashMap<String, usize>,
}

impl StringTable {
	/// Create new empty `StringTable`.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Create new empty `StringTable` with space for `capacity` entries.
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			strings: Vec::with_capacity(capacity),
			lookup: HashMap::with_capacity(capacity),
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.strings.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.strings.is_empty()
	}

	/// Get entry at `index`.
	#[inline]
	pub fn get(&self, index: usize) -> Option<&str> {
		self.strings.get(index).map(String::as_str)
	}

	/// Get index of `value`, if it's in the table.
	#[inline]
	pub fn position(&self, value: &str) -> Option<usize> {
		self.lookup.get(value).copied()
	}

	/// Append `value` to table and return its index.
	///
	/// Writers check `position` first. A reader appends whatever the stream
	/// sends, so a duplicate can arrive. `position` keeps the first index.
	fn push(&mut self, value: String) -> usize {
		let index = self.strings.len();
		trace!(index, value = value.as_str(), "string table append");
		self.lookup.entry(value.clone()).or_insert(index);
		self.strings.push(value);
		index
	}

	/// Get all entries, in order.
	#[inline]
	pub fn as_slice(&self) -> &[String] {
		&self.strings
	}

	#[inline]
	pub fn iter(&self) -> slice::Iter<'_, String> {
		self.strings.iter()
	}
}

impl Index<usize> for StringTable {
	type Output = str;

	#[inline]
	fn index(&self, index: usize) -> &str {
		&self.strings[index]
	}
}

impl<'a> IntoIterator for &'a StringTable {
	type Item = &'a String;
	type IntoIter = slice::Iter<'a, String>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Write `value`, as a back-reference if it's already in `table`.
///
/// A new string is appended to `table` only after it has been written
/// successfully.
pub fn write_indexed<W: Write + ?Sized>(
	writer: &mut W,
	table: &mut StringTable,
	value: Option<&str>,
) -> Result<()> {
	let value = match value {
		Some(value) => value,
		None => return write_varint(writer, -1),
	};

	if let Some(index) = table.position(value) {
		return write_varint(writer, index as i64);
	}

	// Encode fully before writing, so a rejected string leaves no partial entry
	let mut bytes = Vec::with_capacity(value.len() + 8);
	write_varint(&mut bytes, table.len() as i64)?;
	write_ascii(&mut bytes, Some(value))?;
	writer.write_all(&bytes)?;
	table.push(value.to_string());
	Ok(())
}

/// Read a value written by [`write_indexed`], appending to `table` if it's a
/// new entry.
pub fn read_indexed<R: Read + ?Sized>(
	reader: &mut R,
	table: &mut StringTable,
) -> Result<Option<String>> {
	let index = read_varint(reader)?;
	if index < 0 {
		return Ok(None);
	}

	let len = table.len();
	match usize::try_from(index) {
		Ok(index) if index < len => Ok(Some(table.strings[index].clone())),
		Ok(index) if index == len => {
			// A new entry can't be `None`
			let value = read_ascii(reader)?.ok_or(CodecError::MalformedLength(-1))?;
			table.push(value.clone());
			Ok(Some(value))
		}
		_ => Err(CodecError::UnknownTableIndex { index, len }),
	}
}
