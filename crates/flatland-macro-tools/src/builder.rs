use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Field, Ident, Meta, Type};

struct BuilderField {
    ident: Ident,
    ty: Type,
    // `#[default = literal]` or `#[default(expr)]`, falls back to `Default::default()`
    default: Option<Expr>,
    // `#[builder(skip)]` keeps the field but hides its setter
    has_setter: bool,
}

impl BuilderField {
    fn parse(field: &Field) -> Option<Self> {
        let mut default = None;
        let mut has_setter = true;

        for attr in &field.attrs {
            if attr.path().is_ident("default") {
                default = match &attr.meta {
                    Meta::NameValue(meta) => Some(meta.value.clone()),
                    Meta::List(list) => list.parse_args().ok(),
                    Meta::Path(_) => None,
                };
            } else if attr.path().is_ident("builder") {
                let _ = attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        has_setter = false;
                    }
                    Ok(())
                });
            }
        }

        Some(Self {
            ident: field.ident.clone()?,
            ty: field.ty.clone(),
            default,
            has_setter,
        })
    }
}

pub fn macro_builder(input: DeriveInput) -> TokenStream {
    let target = input.ident;
    let vis = input.vis;
    let builder = Ident::new(&format!("{target}Builder"), target.span());

    let Data::Struct(data) = input.data else {
        return syn::Error::new(target.span(), "Builder can only be derived for structs")
            .into_compile_error()
            .into();
    };

    let fields: Vec<BuilderField> = data.fields.iter().filter_map(BuilderField::parse).collect();
    if fields.len() != data.fields.len() {
        return syn::Error::new(target.span(), "Builder needs a struct with named fields")
            .into_compile_error()
            .into();
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let declarations = fields.iter().map(|BuilderField { ident, ty, .. }| quote!(#ident: #ty));

    let defaults = fields.iter().map(|BuilderField { ident, default, .. }| match default {
        Some(expr) => quote!(#ident: #expr),
        None => quote!(#ident: Default::default()),
    });

    let moves = fields.iter().map(|BuilderField { ident, .. }| quote!(#ident: builder.#ident));

    let setters = fields
        .iter()
        .filter(|field| field.has_setter)
        .map(|BuilderField { ident, ty, .. }| {
            quote!(
                pub fn #ident(mut self, value: impl Into<#ty>) -> Self {
                    self.#ident = value.into();
                    self
                }
            )
        });

    quote!(
        #[derive(Clone, Debug)]
        #vis struct #builder #impl_generics #where_clause {
            #(#declarations,)*
        }

        impl #impl_generics Default for #builder #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #(#defaults,)*
                }
            }
        }

        impl #impl_generics From<#builder #ty_generics> for #target #ty_generics #where_clause {
            fn from(builder: #builder #ty_generics) -> Self {
                Self {
                    #(#moves,)*
                }
            }
        }

        // the target starts from the same defaults as its builder
        impl #impl_generics Default for #target #ty_generics #where_clause {
            fn default() -> Self {
                #builder::default().into()
            }
        }

        impl #impl_generics #builder #ty_generics #where_clause {
            pub fn new() -> Self {
                Self::default()
            }

            #(#setters)*
        }
    )
    .into()
}
