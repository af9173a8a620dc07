//! Moving elements between a list and the parameters of another template.
//!
//! [`Apply`] instantiates a template with the elements of a list; [`Extract`] goes the other way,
//! collecting the type arguments of an instantiated template into a [`TypeList`].
//!
//! A template is named by any one of its instances: `Option<()>` names `Option`, and the bare
//! path [`TypeList`] names the list template. Containers accept any number of arguments; the
//! standard generic types, and your own types deriving [`Template`](macro@crate::Template), accept
//! exactly as many as they declare.

use core::marker::PhantomData;

use crate::{container::Container, tuple::Tuple, TypeList};

/// A template that can be instantiated with the type arguments `Args`.
pub trait Instantiate<Args> {
    /// The template applied to `Args`.
    type Instance;
}

impl<C: Container, Args: Tuple> Instantiate<Args> for C {
    type Instance = C::Rebuild<Args>;
}

impl<T, A> Instantiate<(A,)> for Option<T> {
    type Instance = Option<A>;
}

impl<T, E, A, B> Instantiate<(A, B)> for Result<T, E> {
    type Instance = Result<A, B>;
}

impl<T: ?Sized, A> Instantiate<(A,)> for PhantomData<T> {
    type Instance = PhantomData<A>;
}

/// Instantiate the template `Self` with the elements of the list `L`.
///
/// # Examples
///
/// ```
/// use std::marker::PhantomData;
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// #[derive(Container)]
/// struct Some<T = ()>(PhantomData<T>);
///
/// assert_type_eq_all!(Applied<Some, TypeList<(i32, char)>>, Some<(i32, char)>);
/// assert_type_eq_all!(Applied<Some, TypeList>, Some);
/// assert_type_eq_all!(Applied<Option<()>, TypeList<(u8,)>>, Option<u8>);
/// assert_type_eq_all!(Applied<Result<(), ()>, (u8, char)>, Result<u8, char>);
/// ```
///
/// A template that takes a fixed number of parameters rejects any other number:
///
/// ```compile_fail
/// use type_list::prelude::*;
///
/// let _: Applied<Option<()>, TypeList<(u8, u8)>> = todo!();
/// ```
pub trait Apply<L> {
    /// The instance of `Self` holding the elements of `L`.
    type Applied;
}

impl<F, L: Container> Apply<L> for F
where
    F: Instantiate<L::Elems>,
{
    type Applied = F::Instance;
}

/// The template `F` applied to the elements of the list `L`.
pub type Applied<F, L> = <F as Apply<L>>::Applied;

/// Collect the type arguments of an instantiated template into a [`TypeList`].
///
/// Only type parameters are extracted; arrays and other types with value parameters have no
/// `Extract` impl.
///
/// # Examples
///
/// ```
/// use std::marker::PhantomData;
/// use type_list::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// #[derive(Container)]
/// struct Some<T = ()>(PhantomData<T>);
///
/// assert_type_eq_all!(Extracted<Some<(i32, char)>>, TypeList<(i32, char)>);
/// assert_type_eq_all!(Extracted<Option<u8>>, TypeList<(u8,)>);
/// assert_type_eq_all!(Extracted<Result<i32, String>>, TypeList<(i32, String)>);
/// ```
pub trait Extract {
    /// The type arguments of `Self`.
    type Extracted;
}

impl<C: Container> Extract for C {
    type Extracted = TypeList<C::Elems>;
}

impl<T> Extract for Option<T> {
    type Extracted = TypeList<(T,)>;
}

impl<T, E> Extract for Result<T, E> {
    type Extracted = TypeList<(T, E)>;
}

impl<T> Extract for PhantomData<T> {
    type Extracted = TypeList<(T,)>;
}

/// The type arguments of `X`, as a [`TypeList`].
pub type Extracted<X> = <X as Extract>::Extracted;

#[cfg(feature = "std")]
mod std_templates {
    use std::collections::HashMap;

    use super::*;

    impl<T, A> Instantiate<(A,)> for Vec<T> {
        type Instance = Vec<A>;
    }

    impl<T> Extract for Vec<T> {
        type Extracted = TypeList<(T,)>;
    }

    /// The hasher is carried over unchanged.
    impl<K, V, H, A, B> Instantiate<(A, B)> for HashMap<K, V, H> {
        type Instance = HashMap<A, B, H>;
    }

    impl<K, V, H> Extract for HashMap<K, V, H> {
        type Extracted = TypeList<(K, V)>;
    }
}
