//! Mapping a type-level function over every element of a list.
//!
//! There are two flavors. [`ForEach`] wraps each element in a generic type, described by a
//! [`TypeConstructor`]. [`Transform`] replaces each element with the result of a [`TypeFn`], which
//! may compute anything per element. Both keep the template of the input.

use core::marker::PhantomData;

use crate::{
    container::{Container, ElemsOf, RebuiltOf},
    list,
    tuple::List,
};

/// A generic type, viewed as a function from one type to another.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// struct Pair;
///
/// impl TypeConstructor for Pair {
///     type Applied<T> = (T, T);
/// }
///
/// assert_type_eq_all!(ForEachOf<Pair, TypeList<(u8, char)>>, TypeList<((u8, u8), (char, char))>);
/// ```
pub trait TypeConstructor {
    /// The constructor applied to `T`.
    type Applied<T>;
}

/// Wraps an element in [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OptionOf;

impl TypeConstructor for OptionOf {
    type Applied<T> = Option<T>;
}

/// Wraps an element in [`PhantomData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PhantomDataOf;

impl TypeConstructor for PhantomDataOf {
    type Applied<T> = PhantomData<T>;
}

/// Wraps an element in a [`Result`] with the error type `E`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    Hash(bound = "")
)]
pub struct ResultOf<E>(PhantomData<fn() -> E>);

impl<E> TypeConstructor for ResultOf<E> {
    type Applied<T> = Result<T, E>;
}

/// Wrap every element `T` of a list in `F::Applied<T>`.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ForEachOf<OptionOf, TypeList<(u8, char)>>,
///     TypeList<(Option<u8>, Option<char>)>
/// );
/// assert_type_eq_all!(ForEachOf<OptionOf, TypeList>, TypeList);
/// ```
pub trait ForEach<F> {
    /// The list of wrapped elements.
    type Mapped;
}

impl<L: Container, F> ForEach<F> for L
where
    ElemsOf<L>: list::EachApplied<F>,
    <ElemsOf<L> as list::EachApplied<F>>::Applied: List,
{
    type Mapped = RebuiltOf<L, <ElemsOf<L> as list::EachApplied<F>>::Applied>;
}

/// The list `L` with every element wrapped by `F`.
pub type ForEachOf<F, L> = <L as ForEach<F>>::Mapped;

/// A function from types to types, defined by one impl per input.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// struct Widen;
///
/// impl TypeFn<u8> for Widen {
///     type Output = u16;
/// }
///
/// impl TypeFn<u16> for Widen {
///     type Output = u32;
/// }
///
/// assert_type_eq_all!(Transformed<Widen, TypeList<(u8, u16)>>, TypeList<(u16, u32)>);
/// ```
pub trait TypeFn<T> {
    /// The image of `T`.
    type Output;
}

/// The identity function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id;

impl<T> TypeFn<T> for Id {
    type Output = T;
}

/// The signed integer of the same width; signed integers map to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MakeSigned;

/// The unsigned integer of the same width; unsigned integers map to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MakeUnsigned;

macro_rules! same_width {
    ($($signed:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl TypeFn<$signed> for MakeSigned {
                type Output = $signed;
            }

            impl TypeFn<$unsigned> for MakeSigned {
                type Output = $signed;
            }

            impl TypeFn<$signed> for MakeUnsigned {
                type Output = $unsigned;
            }

            impl TypeFn<$unsigned> for MakeUnsigned {
                type Output = $unsigned;
            }
        )*
    };
}

same_width! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}

/// Replace every element `T` of a list with `<F as TypeFn<T>>::Output`.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     Transformed<MakeSigned, TypeList<(u8, i16, usize)>>,
///     TypeList<(i8, i16, isize)>
/// );
/// ```
///
/// Every element must be in the domain of the function:
///
/// ```compile_fail
/// use type_list::prelude::*;
///
/// let _: Transformed<MakeSigned, TypeList<(u8, f32)>> = todo!();
/// ```
pub trait Transform<F> {
    /// The list of images.
    type Transformed;
}

impl<L: Container, F> Transform<F> for L
where
    ElemsOf<L>: list::EachOutput<F>,
    <ElemsOf<L> as list::EachOutput<F>>::Outputs: List,
{
    type Transformed = RebuiltOf<L, <ElemsOf<L> as list::EachOutput<F>>::Outputs>;
}

/// The list `L` with every element replaced by its image under `F`.
pub type Transformed<F, L> = <L as Transform<F>>::Transformed;

#[cfg(feature = "std")]
mod std_constructors {
    use super::TypeConstructor;

    /// Wraps an element in [`Box`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct BoxOf;

    impl TypeConstructor for BoxOf {
        type Applied<T> = Box<T>;
    }

    /// Wraps an element in [`Vec`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct VecOf;

    impl TypeConstructor for VecOf {
        type Applied<T> = Vec<T>;
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use std_constructors::{BoxOf, VecOf};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeList;
    use static_assertions::assert_type_eq_all;

    #[derive(crate::Container)]
    struct OtherList<T = ()>(PhantomData<T>);

    assert_type_eq_all!(
        ForEachOf<PhantomDataOf, OtherList<(u8, char)>>,
        OtherList<(PhantomData<u8>, PhantomData<char>)>
    );
    assert_type_eq_all!(
        ForEachOf<ResultOf<char>, (u8,)>,
        (Result<u8, char>,)
    );
    assert_type_eq_all!(Transformed<Id, OtherList<(u8, char)>>, OtherList<(u8, char)>);
    assert_type_eq_all!(
        Transformed<MakeUnsigned, TypeList<(i8, u16, i64, isize)>>,
        TypeList<(u8, u16, u64, usize)>
    );
    assert_type_eq_all!(Transformed<MakeSigned, TypeList>, TypeList);

    #[cfg(feature = "std")]
    assert_type_eq_all!(
        ForEachOf<BoxOf, ForEachOf<VecOf, TypeList<(u8,)>>>,
        TypeList<(Box<Vec<u8>>,)>
    );
}
