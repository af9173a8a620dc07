/*!
> **type list (noun):** An ordered, heterogeneous, fixed-size sequence of types, known entirely at
> compile time.

This crate is a small algebra of type-level functions over type lists. It answers questions
about a list (its size, its first and last elements, the element at an index, the index of an
element, whether it contains a type) and builds new lists from old ones (by pushing and popping
at either end, filtering, mapping, deduplicating, merging, and moving elements into and out of
other generic types).

There is no runtime behavior at all. Every operation is a trait whose impls are evaluated by the
trait solver, so every answer is available at compile time and every misuse, such as asking for
the head of an empty list, is a compile error.

## What now?

- Start with the **[tutorial-style tour of the crate](tutorial)**.
- Read the **[quick reference](#quick-reference)** below for the whole vocabulary at a glance.
- If you need to **make your own types into lists, list elements or templates**, see the
  [`Container`](macro@Container), [`Identity`](macro@Identity) and [`Template`](macro@Template)
  derives.

## Quick reference

The **[`prelude`]** module exports everything below; most programs should
`use type_list::prelude::*;`.

Lists are written as a tuple of elements inside a template, usually [`TypeList`]:
`TypeList<(i32, f64, char)>`. In the table, `L` is a list, `T` an element type and `N` an index.

| Operation | Trait | Accessor | Result template |
| :-------- | :---- | :------- | :-------------- |
| number of elements | [`Size`] | [`size::<L>()`](size) | |
| first element | [`Head`] | [`HeadOf<L>`], [`FirstOf<L>`] | |
| last element | [`Last`] | [`LastOf<L>`] | |
| all but the first | [`Tail`] | [`TailOf<L>`] | `L` |
| element at `N` | [`TypeAt<N>`](TypeAt) | [`TypeAtOf<L, N>`] | |
| index of `T`, or [`NPOS`] | [`IndexOf<T>`](IndexOf) | [`index_of::<T, L>()`](index_of) | |
| prepend `T` | [`PushFront<T>`](PushFront) | [`PushedFront<T, L>`] | [`TypeList`] |
| append `T` | [`PushBack<T>`](PushBack) | [`PushedBack<T, L>`] | `L` |
| drop the first | [`PopFront`] | [`PoppedFront<L>`] | `L` |
| drop the last | [`PopBack`] | [`PoppedBack<L>`] | [`TypeList`], or `L` when empty |
| instantiate `F` with `L` | [`Apply<L>`](Apply) | [`Applied<F, L>`] | `F` |
| type arguments of `X` | [`Extract`] | [`Extracted<X>`] | [`TypeList`] |
| wrap each element | [`ForEach<F>`](ForEach) | [`ForEachOf<F, L>`] | `L` |
| map each element | [`Transform<F>`](Transform) | [`Transformed<F, L>`] | `L` |
| keep matching elements | [`Filter<P>`](Filter) | [`Filtered<P, L>`] | `L` |
| concatenate lists | [`Merge`] | [`Merged<(L1, L2, ...)>`](Merged) | `L1`, or [`TypeList`] for none |
| membership | [`Contains<T>`](Contains) | [`Contained<T, L>`], [`contains::<T, L>()`](contains) | |
| remove repeats | [`RemoveDuplicates`] | [`Deduplicated<L>`] | [`TypeList`] |
| equality | [`Equals<R>`](Equals) | [`Equal<L, R>`], [`NotEqual<L, R>`], [`equal::<L, R>()`](equal) | |

## Features

- `std` (default): identities and templates for [`String`], [`Box`], [`Vec`] and
  [`HashMap`](std::collections::HashMap). Without it, the crate is `no_std`.

Long lists need deep trait resolution. The crate itself sets `#![recursion_limit = "256"]`, and
code working with lists of more than a few dozen elements may need the same.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

// Generated paths name the crate absolutely, which must also work from inside it.
extern crate self as type_list;

pub mod boolean;
pub mod filter;
pub mod identity;
pub mod map;
pub mod tuple;
pub mod tutorial;
pub mod unary;

mod access;
mod apply;
mod container;
mod list;
mod merge;
mod mutate;
mod set;

pub use access::{
    index_of, size, FirstOf, Head, HeadOf, IndexOf, Last, LastOf, Size, Tail, TailOf, TypeAt,
    TypeAtOf, NPOS,
};
pub use apply::{Applied, Apply, Extract, Extracted, Instantiate};
pub use container::{equal, not_equal, Container, Equal, Equals, NotEqual, TypeList};
pub use filter::{Filter, Filtered, Predicate};
pub use identity::Identity;
pub use map::{ForEach, ForEachOf, Transform, Transformed, TypeConstructor, TypeFn};
pub use merge::{Merge, Merged};
pub use mutate::{
    PopBack, PopFront, PoppedBack, PoppedFront, PushBack, PushFront, PushedBack, PushedFront,
};
pub use set::{contains, Contained, Contains, Deduplicated, RemoveDuplicates};
pub use type_list_macro::{Container, Identity, Template};

/// The prelude module for quickly getting started with `type-list`.
///
/// This module is designed to be imported as `use type_list::prelude::*;`, which brings into scope
/// every list operation, the built-in predicates and constructors, and the derive macros.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::access::*;
    #[doc(no_inline)]
    pub use crate::apply::{Applied, Apply, Extract, Extracted, Instantiate};
    #[doc(no_inline)]
    pub use crate::container::{equal, not_equal, Container, Equal, Equals, NotEqual, TypeList};
    #[doc(no_inline)]
    pub use crate::filter::{
        holds, Filter, Filtered, In, IsFloat, IsInteger, IsSigned, IsUnsigned, Not, Predicate,
        SameAs,
    };
    #[doc(no_inline)]
    pub use crate::identity::Identity;
    #[cfg(feature = "std")]
    #[doc(no_inline)]
    pub use crate::map::{BoxOf, VecOf};
    #[doc(no_inline)]
    pub use crate::map::{
        ForEach, ForEachOf, Id, MakeSigned, MakeUnsigned, OptionOf, PhantomDataOf, ResultOf,
        Transform, Transformed, TypeConstructor, TypeFn,
    };
    #[doc(no_inline)]
    pub use crate::merge::*;
    #[doc(no_inline)]
    pub use crate::mutate::*;
    #[doc(no_inline)]
    pub use crate::set::*;
    #[doc(no_inline)]
    pub use type_list_macro::{Container, Identity, Template};
}

static_assertions::assert_impl_all!(TypeList<(u8, char)>: Copy, Send, Sync, Eq);
static_assertions::const_assert_eq!(size_of::<TypeList<(u64, u64)>>(), 0);

#[cfg(test)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/list_properties.rs"));
}
