//! Codecs for reading and writing typed values on byte streams.
//!
//! Every codec works on any `std::io::Write` sink or `std::io::Read` source,
//! either as free functions in the modules below or as methods via the
//! [`DataWrite`] and [`DataRead`] extension traits.
//!
//! * [`varint`]: signed integers in 1, 2, 4 or 8 bytes.
//! * [`primitives`]: big-endian fixed-width values, plus little-endian readers.
//! * [`string`]: length-prefixed 16-bit, single-byte and modified UTF-8 strings.
//! * [`table`]: strings deduplicated against a per-session [`StringTable`].
//! * [`seven_bit`]: streams repacking bytes for 7-bit-clean transports.
//! * [`bulk`]: whole-stream reads and stream-to-stream copies.
//!
//! All operations are synchronous and block on the underlying stream.

#[cfg(feature = "derive")]
pub use stream_codec_derive::{Decode, Encode};

mod error;
pub use error::{CodecError, Result};

mod encode;
pub use encode::{Decode, DecodeWith, Encode, EncodeWith};

mod encode_impls;
pub use encode_impls::{Ascii, Utf, VarInt};

mod stream;
pub use stream::{DataRead, DataWrite};

pub mod bulk;
pub mod primitives;
pub mod seven_bit;
pub use seven_bit::{SevenBitReader, SevenBitWriter, StreamState};
pub mod string;
pub mod table;
pub use table::StringTable;
pub mod varint;
