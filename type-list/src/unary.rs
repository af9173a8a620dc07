//! Type-level natural numbers in unary: [`Z`] is zero and [`S<N>`](S) is `N + 1`.
//!
//! Lists use them in three places. [`TypeAt<N>`](crate::TypeAt) turns its const index into a unary
//! number and peels one element off per successor. Pop-back counts the length of its input in
//! unary to find the last element. Every digit of an [identity key](crate::identity) is a unary
//! number from 0 to 15, and two keys are compared digit by digit with [`Compare`].
//!
//! Const generics and unary numbers meet in [`Number<N>`](Number): `UnaryOf<3>` is `S<S<S<Z>>>`,
//! and conversions are generated for every `N` up to 64, which bounds both indices and array
//! lengths in keys.

/// Zero: the length of the empty list, and the index of a list's head.
///
/// ```
/// use type_list::unary::{Unary, Z};
///
/// assert_eq!(Z::VALUE, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`: the length of a list one element longer, or the next index.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number for the constant `N`, for `N` up to 64.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A unary number. [`size`](crate::size) reads a list's length through `VALUE`.
///
/// ```
/// use type_list::unary::{Unary, UnaryOf};
///
/// assert_eq!(<UnaryOf<5>>::VALUE, 5);
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The number as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Pick `IfLess`, `IfEqual` or `IfGreater` by comparing the pair of unary numbers `(N, M)`.
///
/// Key digits are compared with `Compare<False, True, False>`, which is [`True`](crate::boolean::True)
/// exactly when the digits are equal.
///
/// ```
/// use type_list::unary::{Compare, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u8);
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u16);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u32);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Compare {
    /// The branch selected by the comparison.
    type Result;
}

impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<N>) {
    type Result = IfLess;
}

/// Implemented only by [`Number`].
pub trait Constant: sealed::Constant {}

/// A const generic `usize` as a type, so that indices and array lengths can be converted to unary.
#[allow(missing_debug_implementations, missing_copy_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// `Number<N>` to unary. Implemented for `N` from 0 through 64; a larger index or array length has
/// no unary form, and the operation using it does not compile.
pub trait ToUnary {
    /// The unary form of `Self`.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// Unary to `Number<N>`, the inverse of [`ToUnary`].
pub trait ToConstant: Unary {
    /// The `Number` equal to `Self`.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

type_list_macro::generate_unary_conversion_impls!(64);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Compare {}
    impl<N: Unary, M: Unary> Compare for (N, M) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(UnaryOf<3>, S<S<S<Z>>>);
    assert_type_eq_all!(<S<S<Z>> as ToConstant>::AsConstant, Number<2>);

    #[test]
    fn values_count_successors() {
        assert_eq!(Z::VALUE, 0);
        assert_eq!(<S<S<S<Z>>>>::VALUE, 3);
        assert_eq!(<UnaryOf<64>>::VALUE, 64);
    }

    #[test]
    fn compare_selects_branch() {
        type Less = <(UnaryOf<3>, UnaryOf<7>) as Compare<i8, u8, char>>::Result;
        type Same = <(UnaryOf<7>, UnaryOf<7>) as Compare<i8, u8, char>>::Result;
        type More = <(UnaryOf<9>, UnaryOf<7>) as Compare<i8, u8, char>>::Result;
        assert_type_eq_all!(Less, i8);
        assert_type_eq_all!(Same, u8);
        assert_type_eq_all!(More, char);
    }
}
