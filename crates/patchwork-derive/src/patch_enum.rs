use crate::util::PatchOptions;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Expr, ExprLit, ExprUnary, Fields, Lit, UnOp, Variant, ext::IdentExt};

// derive_patch_enum
pub fn derive_patch_enum(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    expand(&input).unwrap_or_else(Error::into_compile_error)
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "PatchEnum cannot be derived for generic types",
        ));
    }

    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "PatchEnum can only be derived for enums",
        ));
    };

    let mut entries = Vec::with_capacity(data.variants.len());
    let mut arms = Vec::with_capacity(data.variants.len());
    let mut next_discriminant = 0_i64;

    for (index, variant) in data.variants.iter().enumerate() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "PatchEnum variants cannot carry fields",
            ));
        }

        let options = PatchOptions::from_attrs(&variant.attrs)?;
        if options.skip {
            return Err(Error::new_spanned(
                variant,
                "`skip` is not supported on enum variants",
            ));
        }

        let name = options
            .rename
            .as_ref()
            .map_or_else(|| variant.ident.unraw().to_string(), syn::LitStr::value);
        let discriminant = match explicit_discriminant(variant)? {
            Some(value) => value,
            None => next_discriminant,
        };
        next_discriminant = discriminant.checked_add(1).unwrap_or(i64::MAX);

        let variant_ident = &variant.ident;
        entries.push(quote!((#name, #discriminant)));
        arms.push(quote!(#index => ::std::option::Option::Some(Self::#variant_ident),));
    }

    let enum_name = ident.to_string();

    Ok(quote! {
        impl ::patchwork::enums::PatchEnum for #ident {
            const NAME: &'static str = #enum_name;
            const VARIANTS: &'static [(&'static str, i64)] = &[#(#entries),*];

            fn from_variant(index: usize) -> ::std::option::Option<Self> {
                match index {
                    #(#arms)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        ::patchwork::patch_enum!(#ident);
    })
}

// Only integer literals, optionally negated, are understood.
fn explicit_discriminant(variant: &Variant) -> Result<Option<i64>, Error> {
    let Some((_, expr)) = &variant.discriminant else {
        return Ok(None);
    };

    let value = match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse::<i64>()?,
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) => lit.base10_parse::<i64>()?.checked_neg().ok_or_else(|| {
                Error::new_spanned(expr, "discriminant does not fit in i64")
            })?,
            _ => return Err(unsupported_discriminant(expr)),
        },
        _ => return Err(unsupported_discriminant(expr)),
    };

    Ok(Some(value))
}

fn unsupported_discriminant(expr: &Expr) -> Error {
    Error::new_spanned(expr, "PatchEnum discriminants must be integer literals")
}
