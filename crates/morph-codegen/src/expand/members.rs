use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Generates `<Struct>Members` with one method per field returning a
    /// typed `Member` handle, plus `<Struct>::members()` to obtain it.
    pub(super) fn expand_members_struct(&self) -> TokenStream {
        let morph = &self.morph;
        let vis = &self.shape.vis;
        let shape_ident = &self.shape.ident;
        let members_struct_ident = &self.shape.members_struct_ident;

        let methods = self.shape.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let field_index = util::int(field.index);
            let field_name = util::str(&field.name);
            let ty = &field.ty;

            quote! {
                #vis fn #field_ident(&self) -> #morph::Member<#shape_ident, #ty> {
                    #morph::Member::new(#field_index, #field_name)
                }
            }
        });

        quote! {
            impl #shape_ident {
                #vis fn members() -> #members_struct_ident {
                    #members_struct_ident { _priv: () }
                }
            }

            #[derive(Debug, Clone, Copy)]
            #vis struct #members_struct_ident {
                _priv: (),
            }

            #[allow(dead_code)]
            impl #members_struct_ident {
                #( #methods )*
            }
        }
    }
}
