use proc_macro2::TokenStream;
use syn::{parse_quote, Field, Generics, Ident, Path, TypeParamBound};

/// Add `bound` to every type param.
pub fn add_bounds(mut generics: Generics, bound: TokenStream) -> Generics {
	let bound: TypeParamBound = parse_quote!(#bound);
	for param in generics.type_params_mut() {
		param.bounds.push(bound.clone());
	}
	generics
}

/// Compile error for a type the derives can't handle.
pub fn unsupported(ident: &Ident, what: &str) -> TokenStream {
	syn::Error::new_spanned(ident, format!("Deriving codecs on {} not supported", what))
		.to_compile_error()
}

/// Get proxy path from `#[codec_with(Proxy)]` attribute on field, if present.
///
/// A repeated attribute, or one whose argument isn't a single path, is an
/// error spanned on the offending attribute.
pub fn get_with(field: &Field) -> syn::Result<Option<Path>> {
	let mut with = None;
	for attr in field.attrs.iter().filter(|attr| attr.path.is_ident("codec_with")) {
		if with.is_some() {
			return Err(syn::Error::new_spanned(
				attr,
				"Only one `#[codec_with]` attribute allowed per field",
			));
		}
		let path = attr.parse_args::<Path>().map_err(|err| {
			syn::Error::new(err.span(), "`#[codec_with]` needs a path e.g. `#[codec_with(Ascii)]`")
		})?;
		with = Some(path);
	}
	Ok(with)
}
