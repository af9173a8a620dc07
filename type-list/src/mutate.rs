//! Adding and removing elements at either end of a list.
//!
//! Each operation documents the template its result is built from. In short: pushing to the front
//! always yields a [`TypeList`]; pushing to the back and popping from the front keep the template
//! of the input; popping from the back keeps it only when the result is empty.

use crate::{
    container::{Container, ElemsOf, RebuiltOf},
    list,
    tuple::{HasLength, List},
    TypeList,
};

/// Prepend `T`. The result is always a [`TypeList`], whatever the template of the input.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(PushedFront<u8, TypeList<(char,)>>, TypeList<(u8, char)>);
/// assert_type_eq_all!(PushedFront<u8, (char,)>, TypeList<(u8, char)>);
/// assert_type_eq_all!(PushedFront<u8, TypeList>, TypeList<(u8,)>);
/// ```
pub trait PushFront<T> {
    /// The list with `T` in front.
    type Pushed;
}

impl<L: Container, T> PushFront<T> for L
where
    (T, ElemsOf<L>): List,
{
    type Pushed = TypeList<<(T, ElemsOf<L>) as List>::AsTuple>;
}

/// The list `L` with `T` prepended.
pub type PushedFront<T, L> = <L as PushFront<T>>::Pushed;

/// Append `T`, keeping the template of the input.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(PushedBack<u8, TypeList<(char,)>>, TypeList<(char, u8)>);
/// assert_type_eq_all!(PushedBack<u8, (char,)>, (char, u8));
/// ```
pub trait PushBack<T> {
    /// The list with `T` at the back.
    type Pushed;
}

impl<L: Container, T> PushBack<T> for L
where
    ElemsOf<L>: list::Append<T>,
    <ElemsOf<L> as list::Append<T>>::Appended: List,
{
    type Pushed = RebuiltOf<L, <ElemsOf<L> as list::Append<T>>::Appended>;
}

/// The list `L` with `T` appended.
pub type PushedBack<T, L> = <L as PushBack<T>>::Pushed;

/// Remove the first element, keeping the template of the input. Popping from an empty list gives
/// the empty list.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(PoppedFront<TypeList<(u8, char)>>, TypeList<(char,)>);
/// assert_type_eq_all!(PoppedFront<TypeList>, TypeList);
/// ```
pub trait PopFront {
    /// The list without its first element.
    type Popped;
}

impl<L: Container> PopFront for L
where
    ElemsOf<L>: list::Rest,
{
    type Popped = RebuiltOf<L, <ElemsOf<L> as list::Rest>::Rest>;
}

/// The list `L` without its first element.
pub type PoppedFront<L> = <L as PopFront>::Popped;

/// Remove the last element. Popping from an empty list gives the empty list.
///
/// The list is rebuilt by pushing its leading elements back on the front, so a result with any
/// elements left is a [`TypeList`]. An empty result keeps the template of the input.
///
/// # Examples
///
/// ```
/// use std::marker::PhantomData;
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// #[derive(Container)]
/// struct OtherList<T = ()>(PhantomData<T>);
///
/// assert_type_eq_all!(PoppedBack<TypeList<(u8, i16, char)>>, TypeList<(u8, i16)>);
/// assert_type_eq_all!(PoppedBack<OtherList<(u8, i16, char)>>, TypeList<(u8, i16)>);
/// assert_type_eq_all!(PoppedBack<OtherList<(u8,)>>, OtherList);
/// assert_type_eq_all!(PoppedBack<OtherList>, OtherList);
/// ```
pub trait PopBack {
    /// The list without its last element.
    type Popped;
}

impl<L: Container> PopBack for L
where
    ElemsOf<L>: HasLength + list::PopBackFrom<L, <ElemsOf<L> as HasLength>::Length>,
{
    type Popped = <ElemsOf<L> as list::PopBackFrom<L, <ElemsOf<L> as HasLength>::Length>>::Popped;
}

/// The list `L` without its last element.
pub type PoppedBack<L> = <L as PopBack>::Popped;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{index_of, size};
    use core::marker::PhantomData;
    use static_assertions::assert_type_eq_all;

    #[derive(crate::Container)]
    struct OtherList<T = ()>(PhantomData<T>);

    assert_type_eq_all!(PushedFront<u8, OtherList<(char,)>>, TypeList<(u8, char)>);
    assert_type_eq_all!(PushedBack<u8, OtherList<(char,)>>, OtherList<(char, u8)>);
    assert_type_eq_all!(PushedBack<u8, OtherList>, OtherList<(u8,)>);
    assert_type_eq_all!(PoppedFront<OtherList<(u8, char)>>, OtherList<(char,)>);
    assert_type_eq_all!(PoppedFront<OtherList>, OtherList);

    assert_type_eq_all!(PoppedBack<TypeList>, TypeList);
    assert_type_eq_all!(PoppedBack<TypeList<(u8,)>>, TypeList);
    assert_type_eq_all!(PoppedBack<TypeList<(u8, char)>>, TypeList<(u8,)>);
    assert_type_eq_all!(PoppedBack<(u8,)>, ());
    assert_type_eq_all!(PoppedBack<(u8, char)>, TypeList<(u8,)>);
    assert_type_eq_all!(PoppedBack<OtherList<(u8, char)>>, TypeList<(u8,)>);

    type L = TypeList<(char, i16)>;

    assert_type_eq_all!(PoppedFront<PushedFront<u8, L>>, L);
    assert_type_eq_all!(PoppedBack<PushedBack<u8, L>>, L);

    #[test]
    fn pushed_front_is_at_index_zero() {
        assert_eq!(index_of::<u8, PushedFront<u8, L>>(), 0);
        assert_eq!(index_of::<i16, PushedFront<i16, L>>(), 0);
        assert_eq!(index_of::<u8, PushedBack<u8, L>>(), 2);
    }

    #[test]
    fn popping_shrinks_by_one() {
        assert_eq!(size::<PoppedFront<L>>(), size::<L>() - 1);
        assert_eq!(size::<PoppedBack<L>>(), size::<L>() - 1);
        assert_eq!(size::<PoppedFront<TypeList>>(), 0);
        assert_eq!(size::<PoppedBack<TypeList>>(), 0);
    }
}
