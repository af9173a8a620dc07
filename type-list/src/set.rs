//! Membership and deduplication.

use crate::{
    boolean::Bool,
    container::{Container, ElemsOf},
    identity::Identity,
    list,
    tuple::List,
    TypeList,
};

/// Whether a list holds `T`.
///
/// Elements are compared by [`Identity`]. The search stops at the first match, so elements after
/// it need no identity of their own.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
///
/// assert!(contains::<i32, TypeList<(char, i32)>>());
/// assert!(!contains::<i32, TypeList<(char,)>>());
/// assert!(!contains::<i32, TypeList>());
/// ```
pub trait Contains<T> {
    /// [`True`](crate::boolean::True) if the list holds `T`.
    type Found: Bool;
}

impl<L: Container, T: Identity> Contains<T> for L
where
    ElemsOf<L>: list::Search<T>,
{
    type Found = <ElemsOf<L> as list::Search<T>>::Found;
}

/// [`True`](crate::boolean::True) if the list `L` holds `T`.
pub type Contained<T, L> = <L as Contains<T>>::Found;

/// Whether the list `L` holds `T`.
pub const fn contains<T, L: Contains<T>>() -> bool {
    <L::Found as Bool>::VALUE
}

/// Remove every repeated element, keeping the first occurrence of each. The result is always a
/// [`TypeList`].
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     Deduplicated<TypeList<(i32, i32, char, f64, char, i32, f64, char)>>,
///     TypeList<(i32, char, f64)>
/// );
/// assert_type_eq_all!(Deduplicated<(u8, u8)>, TypeList<(u8,)>);
/// ```
pub trait RemoveDuplicates {
    /// The list without repeated elements.
    type Deduplicated;
}

impl<L: Container> RemoveDuplicates for L
where
    ElemsOf<L>: list::Dedup<()>,
    <ElemsOf<L> as list::Dedup<()>>::Deduplicated: List,
{
    type Deduplicated =
        TypeList<<<ElemsOf<L> as list::Dedup<()>>::Deduplicated as List>::AsTuple>;
}

/// The list `L` without repeated elements.
pub type Deduplicated<L> = <L as RemoveDuplicates>::Deduplicated;
