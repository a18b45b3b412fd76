use crate::util::PatchOptions;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::{Data, DeriveInput, Error, Fields, Ident};

// derive_patchable
pub fn derive_patchable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    expand(&input).unwrap_or_else(Error::into_compile_error)
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;
    let message = "Patchable can only be derived for structs with named fields";

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Patchable cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => return Err(Error::new_spanned(other, message)),
        },
        _ => return Err(Error::new_spanned(ident, message)),
    };

    let mut seen: HashMap<String, &Ident> = HashMap::new();
    let mut registrations = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(field_ident) = &field.ident else {
            continue;
        };

        let options = PatchOptions::from_attrs(&field.attrs)?;
        if options.skip {
            continue;
        }

        let property = options.name_for(field_ident);
        if let Some(previous) = seen.insert(property.clone(), field_ident) {
            return Err(Error::new_spanned(
                field_ident,
                format!("patch property `{property}` is already used by field `{previous}`"),
            ));
        }

        registrations.push(quote! {
            .field(#property, |target: &mut #ident| &mut target.#field_ident)
        });
    }

    let type_name = ident.to_string();

    Ok(quote! {
        impl ::patchwork::traits::Patchable for #ident {
            fn descriptor() -> &'static ::patchwork::descriptor::TypeDescriptor<Self> {
                static DESCRIPTOR: ::std::sync::OnceLock<
                    ::patchwork::descriptor::TypeDescriptor<#ident>,
                > = ::std::sync::OnceLock::new();

                DESCRIPTOR.get_or_init(|| {
                    ::patchwork::descriptor::TypeDescriptor::<#ident>::builder(#type_name)
                        #(#registrations)*
                        .build()
                })
            }
        }

        ::patchwork::patch_object!(#ident);
    })
}
