//! Code generation for the `type-list` crate.
//!
//! The procedural macros exported by `type-list-macro` are thin wrappers around the functions in
//! this crate, which take and return [`proc_macro2::TokenStream`]s and can therefore be exercised
//! from ordinary tests.

use {
    lazy_static::lazy_static,
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::FoundCrate,
    quote::quote,
    syn::Ident,
};

mod error;

pub mod derive;
pub mod generate;
pub mod key;

pub use error::CodegenError;

lazy_static! {
    static ref CRATE_NAME: String = match proc_macro_crate::crate_name("type-list") {
        Ok(FoundCrate::Name(name)) => name,
        // Inside the library itself, `extern crate self as type_list` makes the absolute path work.
        Ok(FoundCrate::Itself) | Err(_) => "type_list".to_owned(),
    };
}

/// The absolute path of the `type-list` crate, as seen from the crate currently being compiled.
pub fn crate_path() -> TokenStream {
    let name = Ident::new(&CRATE_NAME, Span::call_site());
    quote!(::#name)
}
