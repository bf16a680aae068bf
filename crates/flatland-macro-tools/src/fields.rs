use proc_macro::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::{meta::ParseNestedMeta, parenthesized, Attribute, Data, DeriveInput, Field, Ident, Type, Visibility};

// readers of these types return the value, every other type is borrowed
const COPY_TYPES: [&str; 16] = [
    "bool", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128",
    "f32", "f64", "FloatNum", "ID",
];

#[derive(Clone)]
enum Writer {
    /// `field_mut(&mut self) -> &mut T`
    Mut,
    /// `set_field(&mut self, impl Into<T>) -> &mut Self`
    Set,
    /// `set_field(&mut self, FnOnce(T) -> T) -> &mut Self`
    Reducer,
}

#[derive(Clone)]
struct Options {
    vis: Visibility,
    copy: bool,
    skip: bool,
    writer: Writer,
}

impl Options {
    fn new(vis: &Visibility) -> Self {
        Self {
            vis: vis.clone(),
            copy: false,
            skip: false,
            writer: Writer::Mut,
        }
    }

    fn parse_item(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("vis") {
            let content;
            parenthesized!(content in meta.input);
            self.vis = content.parse()?;
        } else if meta.path.is_ident("copy") {
            self.copy = true;
        } else if meta.path.is_ident("skip") {
            self.skip = true;
        } else if meta.path.is_ident("set") {
            self.writer = Writer::Set;
        } else if meta.path.is_ident("reducer") {
            self.writer = Writer::Reducer;
        }
        Ok(())
    }

    /// `#[name]` or `#[name(...)]`, `None` when the attribute is absent
    fn from_attrs(attrs: &[Attribute], name: &str, vis: &Visibility) -> Option<Self> {
        let attr = attrs.iter().find(|attr| attr.path().is_ident(name))?;
        let mut options = Self::new(vis);
        // a bare `#[r]` has no nested items to parse
        let _ = attr.parse_nested_meta(|meta| options.parse_item(meta));
        Some(options)
    }
}

struct Accessors<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    read: Option<Options>,
    write: Option<Options>,
}

impl<'a> Accessors<'a> {
    /// field attributes win over the ones on the struct
    fn new(field: &'a Field, ident: &'a Ident, input: &DeriveInput) -> Self {
        let lookup = |name| {
            Options::from_attrs(&field.attrs, name, &input.vis)
                .or_else(|| Options::from_attrs(&input.attrs, name, &input.vis))
        };
        Self {
            ident,
            ty: &field.ty,
            read: lookup("r"),
            write: lookup("w"),
        }
    }

    fn is_skipped(&self) -> bool {
        [&self.read, &self.write]
            .into_iter()
            .flatten()
            .any(|options| options.skip)
    }

    fn is_copy_type(&self) -> bool {
        let Type::Path(path) = self.ty else {
            return false;
        };
        let name = path.to_token_stream().to_string();
        COPY_TYPES.contains(&name.as_str())
    }

    fn reader(&self) -> Option<impl ToTokens> {
        let Options { vis, copy, .. } = self.read.as_ref()?;
        let Self { ident, ty, .. } = self;
        Some(if *copy || self.is_copy_type() {
            quote!(#vis fn #ident(&self) -> #ty { self.#ident })
        } else {
            quote!(#vis fn #ident(&self) -> &#ty { &self.#ident })
        })
    }

    fn writer(&self) -> Option<impl ToTokens> {
        let Options { vis, writer, .. } = self.write.as_ref()?;
        let Self { ident, ty, .. } = self;
        let setter = format_ident!("set_{}", ident);
        Some(match writer {
            Writer::Mut => {
                let getter = format_ident!("{}_mut", ident);
                quote!(#vis fn #getter(&mut self) -> &mut #ty { &mut self.#ident })
            }
            Writer::Set => quote!(
                #vis fn #setter(&mut self, value: impl Into<#ty>) -> &mut Self {
                    self.#ident = value.into();
                    self
                }
            ),
            Writer::Reducer => quote!(
                #vis fn #setter(&mut self, reducer: impl FnOnce(#ty) -> #ty) -> &mut Self {
                    self.#ident = reducer(core::mem::take(&mut self.#ident));
                    self
                }
            ),
        })
    }
}

pub fn macro_fields(input: DeriveInput) -> TokenStream {
    let ident = &input.ident;

    let Data::Struct(data) = &input.data else {
        return syn::Error::new(ident.span(), "Fields can only be derived for structs")
            .into_compile_error()
            .into();
    };

    let methods: Vec<_> = data
        .fields
        .iter()
        .filter_map(|field| {
            let field_ident = field.ident.as_ref()?;
            let accessors = Accessors::new(field, field_ident, &input);
            if accessors.is_skipped() {
                return None;
            }
            let reader = accessors.reader();
            let writer = accessors.writer();
            Some(quote!(#reader #writer))
        })
        .collect();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote!(
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    )
    .into()
}
