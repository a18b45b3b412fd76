use convert_case::{Case, Casing};
use syn::{Attribute, Error, Ident, LitStr, ext::IdentExt};

///
/// PatchOptions
///
/// Parsed `#[patch(...)]` attributes of a field or variant.
///

#[derive(Default)]
pub struct PatchOptions {
    pub rename: Option<LitStr>,
    pub skip: bool,
}

impl PatchOptions {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut options = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("patch")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(Error::new_spanned(&name, "patch name cannot be empty"));
                    }
                    options.rename = Some(name);
                    Ok(())
                } else {
                    Err(meta.error("unsupported patch attribute, expected `rename` or `skip`"))
                }
            })?;
        }

        Ok(options)
    }

    /// Explicit rename, or the UpperCamel form of the identifier.
    pub fn name_for(&self, ident: &Ident) -> String {
        self.rename.as_ref().map_or_else(
            || ident.unraw().to_string().to_case(Case::Pascal),
            LitStr::value,
        )
    }
}
