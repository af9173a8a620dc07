//! Reading a list: its size, its ends, and its elements by position or by type.

use crate::{
    container::{Container, ElemsOf, RebuiltOf},
    identity::Identity,
    list,
    tuple::HasLength,
    unary::{Number, ToUnary, Unary},
};

/// The index returned by [`index_of`] when the type is not in the list.
///
/// No list can hold `usize::MAX` elements, so this never collides with a real index.
pub const NPOS: usize = usize::MAX;

/// The number of elements in a list.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
///
/// assert_eq!(size::<TypeList>(), 0);
/// assert_eq!(size::<TypeList<(u8, u8, char)>>(), 3);
/// assert_eq!(size::<(u8, u8)>(), 2);
/// ```
pub trait Size {
    /// The number of elements.
    const SIZE: usize;
}

impl<L: Container> Size for L
where
    ElemsOf<L>: HasLength,
{
    const SIZE: usize = <<ElemsOf<L> as HasLength>::Length as Unary>::VALUE;
}

/// The number of elements in the list `L`.
pub const fn size<L: Size>() -> usize {
    L::SIZE
}

/// The first element of a non-empty list.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(HeadOf<TypeList<(u8, char)>>, u8);
/// assert_type_eq_all!(FirstOf<TypeList<(u8, char)>>, u8);
/// ```
///
/// An empty list has no head:
///
/// ```compile_fail
/// use type_list::prelude::*;
///
/// let _: HeadOf<TypeList> = todo!();
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot take the head of `{Self}`",
    label = "the head of a type list only exists when the list is not empty"
)]
pub trait Head {
    /// The first element.
    type First;
}

impl<L: Container> Head for L
where
    ElemsOf<L>: list::First,
{
    type First = <ElemsOf<L> as list::First>::First;
}

/// The first element of the list `L`.
pub type HeadOf<L> = <L as Head>::First;

/// The first element of the list `L`; the same as [`HeadOf`].
pub type FirstOf<L> = HeadOf<L>;

/// The last element of a non-empty list.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(LastOf<TypeList<(u8, i16, char)>>, char);
/// assert_type_eq_all!(LastOf<TypeList<(u8,)>>, u8);
/// ```
///
/// ```compile_fail
/// use type_list::prelude::*;
///
/// let _: LastOf<TypeList> = todo!();
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot take the last element of `{Self}`",
    label = "the last element of a type list only exists when the list is not empty"
)]
pub trait Last {
    /// The last element.
    type Last;
}

impl<L: Container> Last for L
where
    ElemsOf<L>: list::Last,
{
    type Last = <ElemsOf<L> as list::Last>::Last;
}

/// The last element of the list `L`.
pub type LastOf<L> = <L as Last>::Last;

/// Every element but the first, in the same template. The tail of an empty list is the empty list.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(TailOf<TypeList<(u8, i16, char)>>, TypeList<(i16, char)>);
/// assert_type_eq_all!(TailOf<TypeList>, TypeList);
/// assert_type_eq_all!(TailOf<(u8, char)>, (char,));
/// ```
pub trait Tail {
    /// The rest of the list.
    type Rest;
}

impl<L: Container> Tail for L
where
    ElemsOf<L>: list::Rest,
{
    type Rest = RebuiltOf<L, <ElemsOf<L> as list::Rest>::Rest>;
}

/// The tail of the list `L`.
pub type TailOf<L> = <L as Tail>::Rest;

/// The element at index `N`, counting from zero.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// type L = TypeList<(u8, i16, char)>;
///
/// assert_type_eq_all!(TypeAtOf<L, 0>, u8);
/// assert_type_eq_all!(TypeAtOf<L, 2>, char);
/// ```
///
/// An index past the end does not compile:
///
/// ```compile_fail
/// use type_list::prelude::*;
///
/// let _: TypeAtOf<TypeList<(u8, i16, char)>, 3> = todo!();
/// ```
#[diagnostic::on_unimplemented(
    message = "index {N} is out of range for `{Self}`",
    label = "the index must be less than the size of the list"
)]
pub trait TypeAt<const N: usize> {
    /// The element at index `N`.
    type Element;
}

impl<L: Container, const N: usize> TypeAt<N> for L
where
    Number<N>: ToUnary,
    ElemsOf<L>: list::Select<<Number<N> as ToUnary>::AsUnary>,
{
    type Element = <ElemsOf<L> as list::Select<<Number<N> as ToUnary>::AsUnary>>::Element;
}

/// The element at index `N` of the list `L`.
pub type TypeAtOf<L, const N: usize> = <L as TypeAt<N>>::Element;

/// The index of the first occurrence of `T`, or [`NPOS`] if the list does not hold `T`.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
///
/// type L = TypeList<(u8, i16, char, i16)>;
///
/// assert_eq!(index_of::<u8, L>(), 0);
/// assert_eq!(index_of::<i16, L>(), 1);
/// assert_eq!(index_of::<f32, L>(), NPOS);
/// ```
pub trait IndexOf<T> {
    /// The index of `T`.
    const INDEX: usize;
}

impl<L: Container, T: Identity> IndexOf<T> for L
where
    ElemsOf<L>: list::Position<T>,
{
    const INDEX: usize = <ElemsOf<L> as list::Position<T>>::INDEX;
}

/// The index of the first `T` in the list `L`, or [`NPOS`].
pub const fn index_of<T, L: IndexOf<T>>() -> usize {
    L::INDEX
}
