use super::{ErrorSet, Field};

use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct Shape {
    /// Struct visibility, reused for the generated members struct
    pub(crate) vis: syn::Visibility,

    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Fields that are part of the shape, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Identifier of the generated `<Struct>Members` type
    pub(crate) members_struct_ident: syn::Ident,
}

impl Shape {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Shape` can only be derived for structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "shape fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "shape generics are not supported",
            ));
        }

        let mut fields: Vec<Field> = vec![];
        let mut names: HashMap<String, syn::Ident> = HashMap::new();
        let mut errs = ErrorSet::new();

        for node in node.named.iter() {
            match Field::from_ast(node, &ast.ident, fields.len()) {
                Ok(Some(field)) => {
                    if let Some(other) = names.get(&field.name) {
                        errs.push(syn::Error::new_spanned(
                            node,
                            format!(
                                "field name `{}` is already used by `{}`",
                                field.name, other
                            ),
                        ));
                    } else {
                        names.insert(field.name.clone(), field.ident.clone());
                    }

                    fields.push(field);
                }
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        errs.finish(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            members_struct_ident: struct_ident("Members", ast),
        })
    }
}

fn struct_ident(suffix: &str, ast: &syn::DeriveInput) -> syn::Ident {
    syn::Ident::new(&format!("{}{}", ast.ident, suffix), ast.ident.span())
}
