use super::{ErrorSet, FieldAttr};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field in the generated shape (skipped fields excluded)
    pub(crate) index: usize,

    /// Rust identifier of the struct field
    pub(crate) ident: syn::Ident,

    /// Name used for convention matching
    pub(crate) name: String,

    /// Field type, with `Self` rewritten to the struct identifier
    pub(crate) ty: syn::Type,

    pub(crate) access: Access,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl Access {
    pub(crate) fn is_readable(self) -> bool {
        matches!(self, Access::ReadWrite | Access::ReadOnly)
    }

    pub(crate) fn is_writable(self) -> bool {
        matches!(self, Access::ReadWrite | Access::WriteOnly)
    }
}

impl Field {
    /// Parses one struct field. Returns `Ok(None)` for `#[shape(skip)]`.
    pub(super) fn from_ast(
        field: &syn::Field,
        shape_ident: &syn::Ident,
        index: usize,
    ) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "shape fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("shape") {
                if let Err(err) = attrs.populate_from_ast(attr, &mut errs) {
                    errs.push(err);
                }
            }
        }

        if attrs.read_only && attrs.write_only {
            errs.spanned(field, "`read_only` and `write_only` cannot be combined");
        }

        if attrs.skip && (attrs.read_only || attrs.write_only || attrs.rename.is_some()) {
            errs.spanned(field, "`skip` cannot be combined with other shape options");
        }

        let attrs = errs.finish(attrs)?;

        if attrs.skip {
            return Ok(None);
        }

        let access = if attrs.read_only {
            Access::ReadOnly
        } else if attrs.write_only {
            Access::WriteOnly
        } else {
            Access::ReadWrite
        };

        let name = match &attrs.rename {
            Some(lit) => lit.value(),
            None => unraw(ident),
        };

        let mut ty = field.ty.clone();
        rewrite_self(&mut ty, shape_ident);

        Ok(Some(Self {
            index,
            ident: ident.clone(),
            name,
            ty,
            access,
        }))
    }
}

/// Field name without the `r#` prefix of raw identifiers.
fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

fn rewrite_self(ty: &mut syn::Type, shape: &syn::Ident) {
    use syn::visit_mut::VisitMut;

    struct RewriteSelf<'a>(&'a syn::Ident);

    impl VisitMut for RewriteSelf<'_> {
        fn visit_path_mut(&mut self, path: &mut syn::Path) {
            syn::visit_mut::visit_path_mut(self, path);

            if path.is_ident("Self") {
                path.segments[0].ident = self.0.clone();
            }
        }
    }

    RewriteSelf(shape).visit_type_mut(ty);
}
