//! The two spellings of a sequence of elements.
//!
//! A container holds its elements as a flat tuple, `(A, B, C)`, because that is what people write.
//! Every operation works on the nested spelling, `(A, (B, (C, ())))`, because the trait solver can
//! take it apart one element at a time: one impl for `()` and one for `(Head, Tail)`. An operation
//! converts the elements of its input with [`Tuple`], recurses, and converts the result back with
//! [`List`] before rebuilding the container.
//!
//! Both conversions, and the identity of every tuple, are generated for tuples of up to 64
//! elements. Longer lists can still be built, for instance by [`Merge`](crate::Merge), but cannot
//! be written flat.

use super::unary::*;

/// A flat tuple of elements, with its nested spelling.
pub trait Tuple: Sized {
    /// `(A, (B, (C, ())))` for `(A, B, C)`.
    type AsList: List<AsTuple = Self>;
}

/// A nested list of elements, with its flat spelling.
pub trait List: Sized {
    /// `(A, B, C)` for `(A, (B, (C, ())))`.
    type AsTuple: Tuple<AsList = Self>;
}

/// The number of elements of a nested list, in unary. [`Size`](crate::Size) and Pop-back count
/// with it.
pub trait HasLength {
    /// The number of elements.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// The nested spelling of the flat tuple `T`.
pub type ListOf<T> = <T as Tuple>::AsList;

/// The flat spelling of the nested list `L`.
pub type TupleOf<L> = <L as List>::AsTuple;

type_list_macro::impl_tuples!(64);
