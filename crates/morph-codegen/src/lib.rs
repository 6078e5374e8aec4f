mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let shape = schema::Shape::from_ast(&item)?;

    Ok(expand::shape(&shape))
}
