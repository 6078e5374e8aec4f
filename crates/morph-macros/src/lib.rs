extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `morph::Shape`, the field table used for convention matching,
/// and a `members()` accessor returning typed field handles.
///
/// Field options:
///
/// - `#[shape(skip)]`: leave the field out of the shape
/// - `#[shape(read_only)]`: the field can be mapped from but not into
/// - `#[shape(write_only)]`: the field can be mapped into but not from; its
///   type does not need to implement `Clone`
/// - `#[shape(rename = "name")]`: match the field under another name
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    match morph_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
