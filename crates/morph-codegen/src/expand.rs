mod members;
mod shape;
mod util;

use crate::schema::Shape;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The shape being expanded
    shape: &'a Shape,

    /// Path prefix for morph types
    morph: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let shape_impl = self.expand_shape_impl();
        let members_struct = self.expand_members_struct();

        wrap_in_const(quote! {
            #shape_impl
            #members_struct
        })
    }
}

pub(super) fn shape(shape: &Shape) -> TokenStream {
    Expand {
        shape,
        morph: quote!(_morph::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use morph as _morph;
            #code
        };
    }
}
