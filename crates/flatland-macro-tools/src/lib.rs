use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod builder;
mod fields;

/// Implements `crate::shape::SelfClone` so the shape can be cloned behind
/// a `Box<dyn Shape>`.
#[proc_macro_derive(Shape)]
pub fn shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = input.ident;
    let generics = input.generics;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote!(
        impl #impl_generics crate::shape::SelfClone for #ident #ty_generics #where_clause {
            fn self_clone(&self) -> Box<dyn crate::shape::Shape> {
                Box::new(self.clone())
            }
        }
    )
    .into()
}

#[proc_macro_derive(Builder, attributes(default, builder))]
pub fn builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    builder::macro_builder(input)
}

#[proc_macro_derive(Fields, attributes(r, w))]
pub fn fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::macro_fields(input)
}
