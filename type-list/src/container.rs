use core::marker::PhantomData;

use crate::{
    boolean::Bool,
    identity::{Identity, KeyEq},
    tuple::{List, Tuple},
};

/// A list of types, known entirely at compile time.
///
/// The elements are written as a tuple: `TypeList<(i32, f64, char)>` holds `i32`, `f64` and
/// `char`, in that order. A `TypeList` is a zero-sized marker with no runtime behavior; all of its
/// operations are traits and type aliases evaluated by the trait solver.
///
/// The element tuple defaults to `()`, so the bare path `TypeList` is both the empty list and the
/// name of the template, for operations such as [`Apply`](crate::Apply) that take one.
///
/// # Examples
///
/// ```
/// use type_list::prelude::*;
///
/// type Numbers = TypeList<(i32, f64)>;
///
/// assert_eq!(size::<Numbers>(), 2);
/// assert_eq!(Numbers::new(), TypeList::<(i32, f64)>::new());
/// assert_ne!(Numbers::new(), TypeList::<(f64, i32)>::new());
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    Hash(bound = "")
)]
pub struct TypeList<T = ()>(PhantomData<fn() -> T>);

impl<T> TypeList<T> {
    /// The (only) value of this list type.
    pub const fn new() -> Self {
        TypeList(PhantomData)
    }
}

/// A template holding a tuple of element types: [`TypeList`], any user type deriving
/// [`Container`](macro@crate::Container), or a bare tuple.
///
/// Every operation of this crate is implemented for every container, and says which template its
/// result is built from.
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
/// assert_type_eq_all!(<OtherList<(u8, char)> as Container>::Elems, (u8, char));
/// assert_type_eq_all!(<OtherList<(u8, char)> as Container>::Rebuild<(i64,)>, OtherList<(i64,)>);
/// assert_type_eq_all!(<(u8, char) as Container>::Rebuild<(i64,)>, (i64,));
/// ```
pub trait Container {
    /// The elements, as a flat tuple.
    type Elems: Tuple;
    /// The same template, holding the elements `Es` instead.
    type Rebuild<Es: Tuple>: Container<Elems = Es>;
}

impl<T: Tuple> Container for TypeList<T> {
    type Elems = T;
    type Rebuild<Es: Tuple> = TypeList<Es>;
}

impl<T: Tuple> Container for T {
    type Elems = T;
    type Rebuild<Es: Tuple> = Es;
}

/// The elements of a container as an inductive list.
pub(crate) type ElemsOf<L> = <<L as Container>::Elems as Tuple>::AsList;

/// The template of `L` rebuilt around the inductive list `Ts`.
pub(crate) type RebuiltOf<L, Ts> = <L as Container>::Rebuild<<Ts as List>::AsTuple>;

/// Compare two containers: they are equal if they share a template and hold the same elements in
/// the same order.
///
/// # Examples
///
/// ```
/// use std::marker::PhantomData;
/// use type_list::prelude::*;
///
/// #[derive(Container)]
/// struct OtherList<T = ()>(PhantomData<T>);
///
/// assert!(equal::<TypeList<(i32, char)>, TypeList<(i32, char)>>());
/// assert!(not_equal::<TypeList<(i32, char)>, TypeList<(char, i32)>>());
/// assert!(not_equal::<TypeList<(i32,)>, OtherList<(i32,)>>());
/// ```
pub trait Equals<Rhs> {
    /// [`True`](crate::boolean::True) if the containers are equal.
    type Equal: Bool;
}

impl<L, R> Equals<R> for L
where
    L: Container + Identity,
    R: Container + Identity,
    L::Key: KeyEq<R::Key>,
{
    type Equal = <L::Key as KeyEq<R::Key>>::Equal;
}

/// [`True`](crate::boolean::True) if `A` and `B` are equal containers.
pub type Equal<A, B> = <A as Equals<B>>::Equal;

/// [`True`](crate::boolean::True) if `A` and `B` are not equal containers.
pub type NotEqual<A, B> = <Equal<A, B> as Bool>::Not;

/// Whether `A` and `B` are equal containers.
pub const fn equal<A, B>() -> bool
where
    A: Equals<B>,
{
    <Equal<A, B> as Bool>::VALUE
}

/// Whether `A` and `B` are not equal containers.
pub const fn not_equal<A, B>() -> bool
where
    A: Equals<B>,
{
    !equal::<A, B>()
}

/// Lists compare by [`Equals`]. The right-hand side can be any container, so its type is never
/// inferred from the left: write `TypeList::<(u8,)>::new()`, not `TypeList::new()`.
impl<T, R> PartialEq<R> for TypeList<T>
where
    Self: Equals<R>,
{
    fn eq(&self, _: &R) -> bool {
        equal::<Self, R>()
    }
}

impl<T> Eq for TypeList<T> where Self: Equals<Self> {}
