use syn::{parse_macro_input, Data, DeriveInput};

mod common;
mod structs;
use structs::{derive_decode_struct, derive_encode_struct};

/// Derive `Encode`, writing each field in declaration order.
///
/// A field can use a proxy codec with `#[codec_with(Proxy)]`, where `Proxy`
/// implements `EncodeWith<FieldType>`.
#[proc_macro_derive(Encode, attributes(codec_with))]
pub fn encode(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	let generics = common::add_bounds(input.generics, quote::quote!(::stream_codec::Encode));

	let output = match input.data {
		Data::Struct(data) => derive_encode_struct(data, input.ident, generics),
		Data::Enum(_) => common::unsupported(&input.ident, "enums"),
		Data::Union(_) => common::unsupported(&input.ident, "unions"),
	};
	output.into()
}

/// Derive `Decode`, reading each field in declaration order.
///
/// A field can use a proxy codec with `#[codec_with(Proxy)]`, where `Proxy`
/// implements `DecodeWith<FieldType>`.
#[proc_macro_derive(Decode, attributes(codec_with))]
pub fn decode(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	let generics = common::add_bounds(input.generics, quote::quote!(::stream_codec::Decode));

	let output = match input.data {
		Data::Struct(data) => derive_decode_struct(data, input.ident, generics),
		Data::Enum(_) => common::unsupported(&input.ident, "enums"),
		Data::Union(_) => common::unsupported(&input.ident, "unions"),
	};
	output.into()
}
