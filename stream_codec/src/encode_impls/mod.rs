mod other;
mod primitives;
mod with;
pub use with::{Ascii, Utf, VarInt};
