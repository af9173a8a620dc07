//! Concatenating lists.

use crate::{
    container::{Container, ElemsOf},
    list,
};

/// Concatenate a container of lists, left to right.
///
/// The result is built from the template of the first list. Merging no lists gives an empty
/// [`TypeList`](crate::TypeList), and merging a single list gives that list unchanged.
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
/// assert_type_eq_all!(Merged<()>, TypeList);
/// assert_type_eq_all!(Merged<(OtherList<(u8,)>,)>, OtherList<(u8,)>);
/// assert_type_eq_all!(
///     Merged<(TypeList<(i32, f64)>, OtherList<(char,)>)>,
///     TypeList<(i32, f64, char)>
/// );
/// assert_type_eq_all!(
///     Merged<(OtherList<(i32,)>, TypeList, TypeList<(char, u8)>)>,
///     OtherList<(i32, char, u8)>
/// );
/// ```
pub trait Merge {
    /// The concatenation of the lists.
    type Merged;
}

impl<Ls: Container> Merge for Ls
where
    ElemsOf<Ls>: list::MergeAll,
{
    type Merged = <ElemsOf<Ls> as list::MergeAll>::Merged;
}

/// The concatenation of the lists held by `Ls`.
pub type Merged<Ls> = <Ls as Merge>::Merged;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{access::size, TypeList};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Merged<TypeList>, TypeList);
    assert_type_eq_all!(Merged<TypeList<(TypeList, TypeList)>>, TypeList);
    assert_type_eq_all!(Merged<((u8,), (i8, u8))>, (u8, i8, u8));
    assert_type_eq_all!(Merged<((), (i8,))>, (i8,));

    #[test]
    fn sizes_add_up() {
        type A = TypeList<(u8, u16)>;
        type B = (char,);
        type C = TypeList<(i8, i16, i32)>;
        assert_eq!(
            size::<Merged<(A, B, C)>>(),
            size::<A>() + size::<B>() + size::<C>()
        );
    }
}
