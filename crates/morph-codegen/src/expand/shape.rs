use super::{util, Expand};
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_shape_impl(&self) -> TokenStream {
        let morph = &self.morph;
        let shape_ident = &self.shape.ident;
        let shape_name = util::str(&shape_ident.to_string());
        let fields = self.shape.fields.iter().map(|field| self.expand_field(field));

        quote! {
            impl #morph::Shape for #shape_ident {
                fn shape() -> &'static #morph::FieldShape<Self> {
                    static SHAPE: std::sync::OnceLock<#morph::FieldShape<#shape_ident>> =
                        std::sync::OnceLock::new();

                    SHAPE.get_or_init(|| {
                        #morph::FieldShape::new(#shape_name, vec![ #( #fields ),* ])
                    })
                }
            }
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let morph = &self.morph;
        let shape_ident = &self.shape.ident;
        let field_ident = &field.ident;
        let field_name = util::str(&field.name);
        let ty = &field.ty;

        let getter = field.access.is_readable().then(|| {
            quote! {
                .with_getter(|this: &#shape_ident| {
                    #morph::Value::new(#morph::Clone::clone(&this.#field_ident))
                })
            }
        });

        let setter = field.access.is_writable().then(|| {
            quote! {
                .with_setter(|this: &mut #shape_ident, value: #morph::Value| {
                    this.#field_ident = value.downcast::<#ty>()?;
                    #morph::Result::Ok(())
                })
            }
        });

        quote! {
            #morph::Field::<#shape_ident>::new::<#ty>(#field_name)
                #getter
                #setter
        }
    }
}
