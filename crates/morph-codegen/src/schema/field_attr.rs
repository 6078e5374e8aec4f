use super::ErrorSet;

/// Options collected from the `#[shape(...)]` attributes of one field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// `#[shape(skip)]`: the field is not part of the shape
    pub(crate) skip: bool,

    /// `#[shape(read_only)]`: no setter is generated
    pub(crate) read_only: bool,

    /// `#[shape(write_only)]`: no getter is generated
    pub(crate) write_only: bool,

    /// `#[shape(rename = "...")]`: name used for convention matching
    pub(crate) rename: Option<syn::LitStr>,
}

impl FieldAttr {
    pub(super) fn populate_from_ast(
        &mut self,
        attr: &syn::Attribute,
        errs: &mut ErrorSet,
    ) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if self.skip {
                    errs.spanned(&meta.path, "duplicate `skip` option");
                }
                self.skip = true;
            } else if meta.path.is_ident("read_only") {
                if self.read_only {
                    errs.spanned(&meta.path, "duplicate `read_only` option");
                }
                self.read_only = true;
            } else if meta.path.is_ident("write_only") {
                if self.write_only {
                    errs.spanned(&meta.path, "duplicate `write_only` option");
                }
                self.write_only = true;
            } else if meta.path.is_ident("rename") {
                let lit: syn::LitStr = meta.value()?.parse()?;

                if self.rename.is_some() {
                    errs.spanned(&lit, "duplicate `rename` option");
                } else if lit.value().is_empty() {
                    errs.spanned(&lit, "`rename` must not be empty");
                } else {
                    self.rename = Some(lit);
                }
            } else {
                return Err(syn::Error::new_spanned(
                    &meta.path,
                    "expected `skip`, `read_only`, `write_only` or `rename = \"...\"`",
                ));
            }

            Ok(())
        })
    }
}
