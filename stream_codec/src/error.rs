//! Error type shared by every codec.

use std::io;

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while encoding to a sink or decoding from a source.
///
/// All errors are terminal for the operation that raised them. After an error
/// part-way through a sequence, any shared session state (e.g. a
/// [`StringTable`](crate::StringTable)) should be discarded.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Source ran out before a complete value could be read.
	#[error("unexpected end of input")]
	EndOfInput,

	/// Value does not fit in the 62-bit VarInt field.
	#[error("value {0} is outside the VarInt range")]
	VarIntOutOfRange(i64),

	/// Character cannot be written as a single byte.
	#[error("character U+{code:04X} at index {position} does not fit in one byte")]
	CharOutOfRange { code: u32, position: usize },

	/// Encoded payload exceeds what the length prefix can express.
	#[error("encoded string is {len} bytes, maximum is {max}")]
	StringTooLong { len: usize, max: usize },

	/// Collection has more elements than its count prefix can express.
	#[error("collection has {len} elements, maximum is {max}")]
	TooManyElements { len: usize, max: usize },

	/// Byte sequence breaks the modified UTF-8 rules.
	#[error("malformed input: byte {byte:#04x} at position {position}")]
	MalformedEncoding { byte: u8, position: usize },

	/// Length prefix is negative and not the null sentinel.
	#[error("malformed length prefix {0}")]
	MalformedLength(i64),

	/// Decoded code units contain an unpaired surrogate.
	#[error("unpaired surrogate in code unit {position}")]
	InvalidUtf16 { position: usize },

	/// Table back-reference points past the end of the table.
	#[error("string table index {index} out of range (table has {len} entries)")]
	UnknownTableIndex { index: i64, len: usize },

	/// Write attempted on a stream that has been closed.
	#[error("stream is closed")]
	StreamClosed,

	/// Underlying sink or source failed.
	#[error("I/O error: {0}")]
	Io(#[source] io::Error),
}

impl From<io::Error> for CodecError {
	/// EOF maps to [`CodecError::EndOfInput`]. A `CodecError` previously
	/// wrapped into an `io::Error` is unwrapped back to its original variant.
	fn from(err: io::Error) -> Self {
		if err.get_ref().map_or(false, |inner| inner.is::<CodecError>()) {
			let kind = err.kind();
			return match err.into_inner().map(|inner| inner.downcast::<CodecError>()) {
				Some(Ok(codec_err)) => *codec_err,
				Some(Err(inner)) => CodecError::Io(io::Error::new(kind, inner)),
				None => CodecError::Io(io::Error::from(kind)),
			};
		}
		if err.kind() == io::ErrorKind::UnexpectedEof {
			return CodecError::EndOfInput;
		}
		CodecError::Io(err)
	}
}

impl From<CodecError> for io::Error {
	fn from(err: CodecError) -> Self {
		match err {
			CodecError::Io(err) => err,
			CodecError::EndOfInput => io::Error::new(io::ErrorKind::UnexpectedEof, err),
			CodecError::StreamClosed => io::Error::new(io::ErrorKind::BrokenPipe, err),
			_ => io::Error::new(io::ErrorKind::InvalidData, err),
		}
	}
}
