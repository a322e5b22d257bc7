use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Field, Fields, Generics, Ident, Index};

use crate::common::get_with;

pub fn derive_encode_struct(data: DataStruct, ident: Ident, generics: Generics) -> TokenStream {
	let field_stmts: Vec<TokenStream> = match &data.fields {
		Fields::Named(fields) => fields
			.named
			.iter()
			.map(|field| {
				let field_name = field.ident.as_ref().expect("Missing field name");
				get_encode_stmt(quote! {#field_name}, field)
			})
			.collect(),
		Fields::Unnamed(fields) => fields
			.unnamed
			.iter()
			.enumerate()
			.map(|(index, field)| {
				let index = Index::from(index);
				get_encode_stmt(quote! {#index}, field)
			})
			.collect(),
		Fields::Unit => vec![],
	};

	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::stream_codec::Encode for #ident #type_generics #where_clause {
			fn encode<__W: ::std::io::Write + ?Sized>(
				&self,
				writer: &mut __W,
			) -> ::stream_codec::Result<()> {
				#(#field_stmts)*
				::std::result::Result::Ok(())
			}
		}
	}
}

pub fn derive_decode_struct(data: DataStruct, ident: Ident, generics: Generics) -> TokenStream {
	// Struct expression fields are evaluated in the order written,
	// so fields are read in declaration order
	let body = match &data.fields {
		Fields::Named(fields) => {
			let inits = fields.named.iter().map(|field| {
				let field_name = field.ident.as_ref().expect("Missing field name");
				let expr = get_decode_expr(field);
				quote! { #field_name: #expr }
			});
			quote! { Self { #(#inits),* } }
		}
		Fields::Unnamed(fields) => {
			let exprs = fields.unnamed.iter().map(get_decode_expr);
			quote! { Self(#(#exprs),*) }
		}
		Fields::Unit => quote! { Self },
	};

	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::stream_codec::Decode for #ident #type_generics #where_clause {
			fn decode<__R: ::std::io::Read + ?Sized>(
				reader: &mut __R,
			) -> ::stream_codec::Result<Self> {
				::std::result::Result::Ok(#body)
			}
		}
	}
}

fn get_encode_stmt(field_name: TokenStream, field: &Field) -> TokenStream {
	let ty = &field.ty;
	let with = match get_with(field) {
		Ok(with) => with,
		Err(err) => return err.to_compile_error(),
	};
	match with {
		Some(with) => {
			quote_spanned! {field.span()=>
				<#with as ::stream_codec::EncodeWith<#ty>>::encode_with(&self.#field_name, writer)?;
			}
		}
		None => {
			quote_spanned! {field.span()=>
				::stream_codec::Encode::encode(&self.#field_name, writer)?;
			}
		}
	}
}

fn get_decode_expr(field: &Field) -> TokenStream {
	let ty = &field.ty;
	let with = match get_with(field) {
		Ok(with) => with,
		Err(err) => return err.to_compile_error(),
	};
	match with {
		Some(with) => {
			quote_spanned! {field.span()=>
				<#with as ::stream_codec::DecodeWith<#ty>>::decode_with(reader)?
			}
		}
		None => {
			quote_spanned! {field.span()=>
				<#ty as ::stream_codec::Decode>::decode(reader)?
			}
		}
	}
}
