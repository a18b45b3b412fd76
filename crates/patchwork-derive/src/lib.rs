use proc_macro::TokenStream;

mod patch_enum;
mod patchable;
mod util;

/// Build a cached field descriptor table and register the struct as a
/// nested-object field.
#[proc_macro_derive(Patchable, attributes(patch))]
pub fn derive_patchable(input: TokenStream) -> TokenStream {
    patchable::derive_patchable(input.into()).into()
}

/// Build the member table of a unit enum and register it as an enum field.
#[proc_macro_derive(PatchEnum, attributes(patch))]
pub fn derive_patch_enum(input: TokenStream) -> TokenStream {
    patch_enum::derive_patch_enum(input.into()).into()
}
