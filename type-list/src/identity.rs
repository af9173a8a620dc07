//! Element identity.
//!
//! The trait solver cannot ask whether two arbitrary types are the same, so every type taking part
//! in a comparison carries a type-level [`Key`](Identity::Key) instead. Two types are considered
//! identical when their keys are.
//!
//! A *nominal* key is the 64-bit FNV-1a hash of a name, spelled out as an inductive list of
//! sixteen hexadecimal digits, each digit a [unary](crate::unary) number. A *generic* key pairs the
//! nominal key of a type constructor with the list of its arguments' keys, so `Option<u8>` and
//! `Option<i8>` are told apart.
//!
//! Identities are provided for the primitive types, references, raw pointers, slices, arrays of
//! up to 64 elements, `fn` pointers of up to six arguments, tuples, [`TypeList`], [`Option`],
//! [`Result`], [`PhantomData`] and, with the `std` feature, [`String`], [`Box`], [`Vec`] and
//! [`HashMap`](std::collections::HashMap). Function pointers with higher-ranked lifetimes, such as
//! `fn(&u8)`, and `unsafe` or `extern` function pointers have none. Anything else derives one:
//!
//! ```
//! use type_list::prelude::*;
//!
//! #[derive(Identity)]
//! struct Celsius;
//!
//! #[derive(Identity)]
//! struct Reading<Unit>(f64, core::marker::PhantomData<Unit>);
//!
//! assert!(contains::<Reading<Celsius>, (u8, Reading<Celsius>)>());
//! assert!(!contains::<Reading<Celsius>, (u8, Reading<u8>)>());
//! ```
//!
//! A derived key is unique to its definition, so same-named types in different modules are told
//! apart, and no derived type is ever identical to a built-in one. Derived keys can change from one
//! build to the next; where a key must be stable, give it explicitly with
//! `#[type_list(key = "...")]`. Two types given the same explicit key are identical.

use core::marker::PhantomData;

use type_list_macro::{generic_key, key};

use crate::{
    boolean::{Bool, False, True},
    tuple::Tuple,
    unary::{Compare, Number, ToUnary, Unary, S, Z},
    TypeList,
};

/// A type with a type-level identity key.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no type-level identity",
    label = "this type cannot be compared with other list elements",
    note = "add `#[derive(type_list::Identity)]` to its definition"
)]
pub trait Identity {
    /// The key identifying `Self`.
    type Key;
}

/// The identity keys of every element of an inductive list.
pub trait EachIdentity {
    /// The inductive list of keys.
    type Keys;
}

impl EachIdentity for () {
    type Keys = ();
}

impl<T: Identity, Ts: EachIdentity> EachIdentity for (T, Ts) {
    type Keys = (T::Key, Ts::Keys);
}

/// Structural equality of identity keys.
///
/// Digits are compared as unary numbers; pairs are compared component by component, stopping at
/// the first difference.
pub trait KeyEq<Other> {
    /// [`True`] if the keys are the same.
    type Equal: Bool;
}

/// [`True`] if `A` and `B` have the same identity.
pub type SameKey<A, B> = <<A as Identity>::Key as KeyEq<<B as Identity>::Key>>::Equal;

impl KeyEq<Z> for Z {
    type Equal = True;
}

impl<M: Unary> KeyEq<S<M>> for Z {
    type Equal = False;
}

impl KeyEq<()> for Z {
    type Equal = False;
}

impl<C, D> KeyEq<(C, D)> for Z {
    type Equal = False;
}

impl<N: Unary> KeyEq<Z> for S<N> {
    type Equal = False;
}

impl<N: Unary, M: Unary> KeyEq<S<M>> for S<N>
where
    (N, M): Compare<False, True, False>,
    <(N, M) as Compare<False, True, False>>::Result: Bool,
{
    type Equal = <(N, M) as Compare<False, True, False>>::Result;
}

impl<N: Unary> KeyEq<()> for S<N> {
    type Equal = False;
}

impl<N: Unary, C, D> KeyEq<(C, D)> for S<N> {
    type Equal = False;
}

impl KeyEq<Z> for () {
    type Equal = False;
}

impl<M: Unary> KeyEq<S<M>> for () {
    type Equal = False;
}

impl KeyEq<()> for () {
    type Equal = True;
}

impl<C, D> KeyEq<(C, D)> for () {
    type Equal = False;
}

impl<A, B> KeyEq<Z> for (A, B) {
    type Equal = False;
}

impl<A, B, M: Unary> KeyEq<S<M>> for (A, B) {
    type Equal = False;
}

impl<A, B> KeyEq<()> for (A, B) {
    type Equal = False;
}

impl<A, B, C, D> KeyEq<(C, D)> for (A, B)
where
    A: KeyEq<C>,
    A::Equal: sealed::KeyEqThen<B, D>,
{
    type Equal = <A::Equal as sealed::KeyEqThen<B, D>>::Equal;
}

mod sealed {
    use super::*;

    /// Compare the rest of two keys only if their first components matched.
    pub trait KeyEqThen<B, D> {
        type Equal: Bool;
    }

    impl<B, D> KeyEqThen<B, D> for False {
        type Equal = False;
    }

    impl<B: KeyEq<D>, D> KeyEqThen<B, D> for True {
        type Equal = B::Equal;
    }
}

macro_rules! nominal_identity {
    ($($name:ident),* $(,)?) => {
        $(
            impl Identity for $name {
                type Key = key!($name);
            }
        )*
    };
}

nominal_identity! {
    bool, char, str,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}

impl<T: Identity + ?Sized> Identity for &T {
    type Key = generic_key!(&; T);
}

impl<T: Identity + ?Sized> Identity for &mut T {
    type Key = generic_key!(&mut; T);
}

impl<T: Identity> Identity for Option<T> {
    type Key = generic_key!(Option; T);
}

impl<T: Identity, E: Identity> Identity for Result<T, E> {
    type Key = generic_key!(Result; T, E);
}

impl<T: Identity + ?Sized> Identity for PhantomData<T> {
    type Key = generic_key!(PhantomData; T);
}

impl<T: Identity + ?Sized> Identity for *const T {
    type Key = generic_key!(*const; T);
}

impl<T: Identity + ?Sized> Identity for *mut T {
    type Key = generic_key!(*mut; T);
}

impl<T: Identity> Identity for [T] {
    type Key = generic_key!([]; T);
}

/// The length takes part in the key as a unary number, so arrays are keyed up to length 64.
impl<T: Identity, const N: usize> Identity for [T; N]
where
    Number<N>: ToUnary,
{
    type Key = (key!([;]), (T::Key, (<Number<N> as ToUnary>::AsUnary, ())));
}

macro_rules! fn_identity {
    ($($arg:ident),*) => {
        impl<R: Identity, $($arg: Identity),*> Identity for fn($($arg),*) -> R {
            type Key = generic_key!(fn; R $(, $arg)*);
        }
    };
}

fn_identity!();
fn_identity!(A);
fn_identity!(A, B);
fn_identity!(A, B, C);
fn_identity!(A, B, C, D);
fn_identity!(A, B, C, D, E);
fn_identity!(A, B, C, D, E, F);

impl<T: Tuple> Identity for TypeList<T>
where
    T::AsList: EachIdentity,
{
    type Key = (key!(TypeList), <T::AsList as EachIdentity>::Keys);
}

#[cfg(feature = "std")]
mod std_identities {
    use std::collections::HashMap;

    use super::*;

    impl Identity for String {
        type Key = key!(String);
    }

    impl<T: Identity + ?Sized> Identity for Box<T> {
        type Key = generic_key!(Box; T);
    }

    impl<T: Identity> Identity for Vec<T> {
        type Key = generic_key!(Vec; T);
    }

    /// The hasher does not take part in the identity of a map.
    impl<K: Identity, V: Identity, H> Identity for HashMap<K, V, H> {
        type Key = generic_key!(HashMap; K, V);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    fn same<A: Identity + ?Sized, B: Identity + ?Sized>() -> bool
    where
        A::Key: KeyEq<B::Key>,
    {
        <SameKey<A, B>>::VALUE
    }

    assert_type_eq_all!(SameKey<i32, i32>, True);
    assert_type_eq_all!(SameKey<i32, u32>, False);

    #[test]
    fn primitives_are_distinct() {
        assert!(same::<u8, u8>());
        assert!(same::<str, str>());
        assert!(!same::<u8, i8>());
        assert!(!same::<f32, f64>());
        assert!(!same::<bool, char>());
        assert!(!same::<usize, u64>());
    }

    #[test]
    fn generic_keys_depend_on_arguments() {
        assert!(same::<Option<u8>, Option<u8>>());
        assert!(!same::<Option<u8>, Option<i8>>());
        assert!(!same::<Result<u8, char>, Result<char, u8>>());
        assert!(!same::<&u8, &mut u8>());
        assert!(!same::<&u8, u8>());
        assert!(!same::<PhantomData<u8>, Option<u8>>());
    }

    #[test]
    fn nominal_and_generic_keys_differ() {
        assert!(!same::<u8, Option<u8>>());
        assert!(!same::<Option<u8>, u8>());
        assert!(!same::<(), u8>());
    }

    #[test]
    fn lists_and_tuples() {
        assert!(same::<(u8, char), (u8, char)>());
        assert!(!same::<(u8, char), (char, u8)>());
        assert!(!same::<(u8,), (u8, u8)>());
        assert!(!same::<TypeList<(u8,)>, (u8,)>());
        assert!(same::<TypeList<()>, TypeList>());
    }

    #[test]
    fn pointers_slices_and_arrays() {
        assert!(same::<*const u8, *const u8>());
        assert!(!same::<*const u8, *mut u8>());
        assert!(!same::<*const u8, &u8>());
        assert!(same::<[u8], [u8]>());
        assert!(!same::<[u8], [i8]>());
        assert!(same::<[u8; 4], [u8; 4]>());
        assert!(!same::<[u8; 4], [u8; 5]>());
        assert!(!same::<[u8; 4], [i8; 4]>());
        assert!(!same::<[u8; 1], [u8]>());
        assert!(!same::<[u8; 0], ()>());
        assert!(same::<[u8; 64], [u8; 64]>());
    }

    #[test]
    fn function_pointers() {
        assert!(same::<fn(), fn()>());
        assert!(same::<fn(u8) -> char, fn(u8) -> char>());
        assert!(!same::<fn(u8) -> char, fn(char) -> u8>());
        assert!(!same::<fn(u8), fn(u8, u8)>());
        assert!(!same::<fn() -> u8, fn(u8)>());
        assert!(!same::<fn(u8), (u8,)>());
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_types() {
        use std::collections::HashMap;

        assert!(same::<String, String>());
        assert!(!same::<String, str>());
        assert!(!same::<Box<u8>, Vec<u8>>());
        assert!(same::<HashMap<u8, char>, HashMap<u8, char>>());
        assert!(!same::<HashMap<u8, char>, HashMap<char, u8>>());
    }
}
