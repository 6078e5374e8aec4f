use proc_macro2::{Span, TokenStream};
use quote::ToTokens;

pub(crate) fn int(v: usize) -> TokenStream {
    syn::LitInt::new(&v.to_string(), Span::call_site()).into_token_stream()
}

pub(crate) fn str(v: &str) -> TokenStream {
    syn::LitStr::new(v, Span::call_site()).into_token_stream()
}
