//! Procedural macros for the [`type-list`](https://docs.rs/type-list) crate.
//!
//! Everything here is re-exported from `type_list`; depend on that crate instead of this one.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    syn::{parse_macro_input, DeriveInput},
    type_list_codegen::{derive, generate, key},
};

fn emit(result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    result.unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Derive `Container` (and `Identity`) for a generic type whose single type parameter holds a
/// tuple of elements.
///
/// ```
/// use std::marker::PhantomData;
/// use type_list::prelude::*;
///
/// #[derive(Container)]
/// struct OtherList<T = ()>(PhantomData<T>);
///
/// assert_eq!(size::<OtherList<(u8, u16)>>(), 2);
/// ```
///
/// The identity of a container depends on its name, which can be overridden:
///
/// ```
/// # use std::marker::PhantomData;
/// # use type_list::prelude::*;
/// #[derive(Container)]
/// #[type_list(key = "my_crate::lists::OtherList")]
/// struct OtherList<T = ()>(PhantomData<T>);
/// ```
#[proc_macro_derive(Container, attributes(type_list))]
pub fn derive_container(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    emit(derive::container(input))
}

/// Derive `Identity` for a type, so that it can be found, counted and deduplicated in type lists.
///
/// ```
/// use type_list::prelude::*;
///
/// #[derive(Identity)]
/// struct Meters;
///
/// #[derive(Identity)]
/// struct Feet;
///
/// assert!(contains::<Meters, TypeList<(Feet, Meters)>>());
/// assert!(!contains::<Meters, TypeList<(Feet,)>>());
/// ```
#[proc_macro_derive(Identity, attributes(type_list))]
pub fn derive_identity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    emit(derive::identity(input))
}

/// Derive `Instantiate` and `Extract` for a generic type whose parameters are all type parameters,
/// so that it can take part in `Apply` and `Extract` with exactly as many arguments as it declares.
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// #[derive(Template)]
/// struct Pair<A, B>(A, B);
///
/// assert_type_eq_all!(Extracted<Pair<u8, char>>, TypeList<(u8, char)>);
/// assert_type_eq_all!(Applied<Pair<(), ()>, TypeList<(i32, f64)>>, Pair<i32, f64>);
/// ```
///
/// A type cannot be both a `Container` and a `Template`: containers are templates already.
#[proc_macro_derive(Template)]
pub fn derive_template(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    emit(derive::template(input))
}

/// The nominal identity key of the given name, as a type.
#[proc_macro]
pub fn key(input: TokenStream) -> TokenStream {
    key::key_macro(input.into()).into()
}

/// The identity key of a type constructor applied to arguments: `generic_key!(Name; A, B)`.
#[proc_macro]
pub fn generic_key(input: TokenStream) -> TokenStream {
    emit(key::generic_key_macro(input.into()))
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    emit(generate::arity(input.into()).map(generate::impl_tuples))
}

#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    emit(generate::arity(input.into()).map(generate::unary_conversions))
}
