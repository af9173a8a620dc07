//! Keeping the elements of a list that satisfy a predicate.

use core::marker::PhantomData;

use crate::{
    boolean::{self, Bool, False, True},
    container::{Container, ElemsOf, RebuiltOf},
    identity::{Identity, KeyEq},
    list,
    set::Contains,
    tuple::List,
};

/// A compile-time predicate on types.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use type_list::boolean::{False, True};
///
/// struct IsByte;
///
/// impl Predicate<u8> for IsByte {
///     type Holds = True;
/// }
///
/// impl Predicate<i8> for IsByte {
///     type Holds = True;
/// }
///
/// impl Predicate<u16> for IsByte {
///     type Holds = False;
/// }
///
/// assert!(holds::<IsByte, u8>());
/// assert_eq!(size::<Filtered<IsByte, TypeList<(u8, u16, i8)>>>(), 2);
/// ```
pub trait Predicate<T> {
    /// [`True`] if the predicate holds for `T`.
    type Holds: Bool;
}

/// Whether `P` holds for `T`.
pub const fn holds<P: Predicate<T>, T>() -> bool {
    <P::Holds as Bool>::VALUE
}

macro_rules! primitive_predicate {
    (
        $(#[$attr:meta])*
        $name:ident {
            holds: [$($yes:ty),* $(,)?],
            fails: [$($no:ty),* $(,)?] $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name;

        $(
            impl Predicate<$yes> for $name {
                type Holds = True;
            }
        )*

        $(
            impl Predicate<$no> for $name {
                type Holds = False;
            }
        )*
    };
}

primitive_predicate! {
    /// Holds for the signed integers and the floating point types. Defined for the primitive
    /// types.
    IsSigned {
        holds: [i8, i16, i32, i64, i128, isize, f32, f64],
        fails: [u8, u16, u32, u64, u128, usize, bool, char, ()],
    }
}

primitive_predicate! {
    /// Holds for the unsigned integers. Defined for the primitive types.
    IsUnsigned {
        holds: [u8, u16, u32, u64, u128, usize],
        fails: [i8, i16, i32, i64, i128, isize, f32, f64, bool, char, ()],
    }
}

primitive_predicate! {
    /// Holds for the integers, signed or unsigned. Defined for the primitive types.
    IsInteger {
        holds: [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize],
        fails: [f32, f64, bool, char, ()],
    }
}

primitive_predicate! {
    /// Holds for the floating point types. Defined for the primitive types.
    IsFloat {
        holds: [f32, f64],
        fails: [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, ()],
    }
}

/// Holds for `T`, and for nothing else.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    Hash(bound = "")
)]
pub struct SameAs<T: ?Sized>(PhantomData<fn() -> PhantomData<T>>);

impl<T: Identity + ?Sized, U: Identity> Predicate<U> for SameAs<T>
where
    U::Key: KeyEq<T::Key>,
{
    type Holds = <U::Key as KeyEq<T::Key>>::Equal;
}

/// Holds for the elements of the list `L`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    Hash(bound = "")
)]
pub struct In<L>(PhantomData<fn() -> L>);

impl<L: Contains<T>, T> Predicate<T> for In<L> {
    type Holds = L::Found;
}

/// Holds exactly when `P` does not.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    Hash(bound = "")
)]
pub struct Not<P>(PhantomData<fn() -> P>);

impl<P: Predicate<T>, T> Predicate<T> for Not<P> {
    type Holds = boolean::Not<P::Holds>;
}

/// Keep the elements for which the predicate `P` holds, in order, in the template of the input.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     Filtered<IsSigned, TypeList<(u32, i32, u64, i64, u8, i8)>>,
///     TypeList<(i32, i64, i8)>
/// );
/// assert_type_eq_all!(Filtered<IsSigned, TypeList<(u8, u16)>>, TypeList);
/// ```
pub trait Filter<P> {
    /// The elements for which `P` holds.
    type Filtered;
}

impl<L: Container, P> Filter<P> for L
where
    ElemsOf<L>: list::Keep<P>,
    <ElemsOf<L> as list::Keep<P>>::Kept: List,
{
    type Filtered = RebuiltOf<L, <ElemsOf<L> as list::Keep<P>>::Kept>;
}

/// The elements of the list `L` for which `P` holds.
pub type Filtered<P, L> = <L as Filter<P>>::Filtered;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeList;
    use static_assertions::{assert_not_impl_any, assert_type_eq_all};

    #[derive(crate::Container)]
    struct OtherList<T = ()>(PhantomData<T>);

    assert_type_eq_all!(<IsSigned as Predicate<f32>>::Holds, True);
    assert_type_eq_all!(<IsSigned as Predicate<u32>>::Holds, False);
    assert_type_eq_all!(<IsSigned as Predicate<bool>>::Holds, False);
    assert_not_impl_any!(IsSigned: Predicate<&'static str>, Predicate<Option<i8>>);

    type Mixed = TypeList<(u8, f32, i16, char, u64, f64)>;

    assert_type_eq_all!(Filtered<IsUnsigned, Mixed>, TypeList<(u8, u64)>);
    assert_type_eq_all!(Filtered<IsInteger, Mixed>, TypeList<(u8, i16, u64)>);
    assert_type_eq_all!(Filtered<IsFloat, Mixed>, TypeList<(f32, f64)>);
    assert_type_eq_all!(Filtered<Not<IsInteger>, Mixed>, TypeList<(f32, char, f64)>);
    assert_type_eq_all!(Filtered<SameAs<char>, Mixed>, TypeList<(char,)>);
    assert_type_eq_all!(
        Filtered<In<(u64, u8, bool)>, Mixed>,
        TypeList<(u8, u64)>
    );
    assert_type_eq_all!(
        Filtered<IsSigned, OtherList<(u8, i8)>>,
        OtherList<(i8,)>
    );
    assert_type_eq_all!(Filtered<IsSigned, OtherList>, OtherList);

    #[test]
    fn predicates_hold() {
        assert!(holds::<IsSigned, i128>());
        assert!(!holds::<IsSigned, usize>());
        assert!(holds::<Not<IsFloat>, u8>());
        assert!(holds::<In<TypeList<(u8, char)>>, char>());
        assert!(!holds::<In<TypeList>, char>());
        assert!(!holds::<SameAs<str>, &'static str>());
        assert!(holds::<SameAs<&'static str>, &'static str>());
    }
}
