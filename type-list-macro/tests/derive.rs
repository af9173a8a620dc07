use {
    static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all},
    std::marker::PhantomData,
    type_list::prelude::*,
};

#[derive(Container)]
struct OtherList<T = ()>(PhantomData<T>);

#[derive(Container)]
#[type_list(key = "tests::Renamed")]
struct Renamed<T = ()>(PhantomData<T>);

#[derive(Identity)]
struct Marker;

#[derive(Identity)]
#[type_list(key = "derive::other::Marker")]
struct OtherMarker;

#[derive(Identity)]
struct Tagged<'a, T: ?Sized>(&'a T);

#[allow(dead_code)]
#[derive(Identity)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

assert_impl_all!(OtherList<(u8, char)>: Container, Identity);
assert_impl_all!(Marker: Identity);
assert_impl_all!(Tagged<'static, str>: Identity);
assert_not_impl_any!(Marker: Container);

assert_type_eq_all!(<OtherList<(u8, char)> as Container>::Elems, (u8, char));
assert_type_eq_all!(
    <OtherList<(u8, char)> as Container>::Rebuild<(i64,)>,
    OtherList<(i64,)>
);

#[test]
fn derived_containers_are_distinct_templates() {
    assert!(equal::<OtherList<(u8,)>, OtherList<(u8,)>>());
    assert!(not_equal::<OtherList<(u8,)>, TypeList<(u8,)>>());
    assert!(not_equal::<OtherList<(u8,)>, Renamed<(u8,)>>());
    assert!(not_equal::<OtherList<(u8,)>, OtherList<(u16,)>>());
}

#[test]
fn derived_identities_are_distinct() {
    assert!(contains::<Marker, TypeList<(u8, Marker)>>());
    assert!(!contains::<Marker, TypeList<(u8, OtherMarker)>>());
    assert_eq!(index_of::<OtherMarker, (Marker, OtherMarker)>(), 1);
}

#[test]
fn generic_identities_depend_on_arguments() {
    assert!(contains::<Either<u8, char>, (Either<char, u8>, Either<u8, char>)>());
    assert!(!contains::<Either<u8, char>, (Either<char, u8>,)>());
    assert!(contains::<Tagged<'static, str>, (Tagged<'static, str>,)>());
}

#[test]
fn containers_are_elements_too() {
    type Nested = TypeList<(OtherList<(u8,)>, OtherList<(u16,)>, OtherList<(u8,)>)>;
    assert_eq!(size::<Deduplicated<Nested>>(), 2);
}

mod first {
    #[derive(type_list::Identity)]
    pub struct Error;
}

mod second {
    #[derive(type_list::Identity)]
    pub struct Error;
}

mod shadowing {
    use std::marker::PhantomData;

    #[derive(type_list::Container)]
    pub struct TypeList<T = ()>(PhantomData<T>);

    #[allow(dead_code)]
    #[derive(type_list::Identity)]
    pub struct Option<T>(pub T);
}

#[test]
fn same_names_in_different_modules_are_different_types() {
    assert!(!contains::<first::Error, (second::Error,)>());
    assert!(contains::<first::Error, (second::Error, first::Error)>());
    assert_eq!(index_of::<second::Error, (first::Error, second::Error)>(), 1);
    assert_eq!(
        size::<Deduplicated<(first::Error, second::Error, first::Error)>>(),
        2
    );
}

#[test]
fn derived_types_never_match_built_in_types() {
    assert!(not_equal::<TypeList<(u8,)>, shadowing::TypeList<(u8,)>>());
    assert!(equal::<shadowing::TypeList<(u8,)>, shadowing::TypeList<(u8,)>>());
    assert!(!contains::<Option<u8>, (shadowing::Option<u8>,)>());
    assert!(!contains::<shadowing::Option<u8>, (Option<u8>,)>());
    assert!(contains::<shadowing::Option<u8>, (Option<u8>, shadowing::Option<u8>)>());
}

#[allow(dead_code)]
#[derive(Template)]
struct Pair<A, B>(A, B);

#[allow(dead_code)]
#[derive(Template)]
struct Bounded<T: Copy>(T);

#[derive(Template)]
struct Unit;

assert_impl_all!(Pair<(), ()>: Apply<(u8, u8)>, Extract);
assert_not_impl_any!(Pair<(), ()>: Apply<(u8,)>, Apply<(u8, u8, u8)>);
assert_not_impl_any!(Bounded<u8>: Apply<(String,)>);
assert_not_impl_any!(Pair<u8, u8>: Container);

#[test]
fn templates_apply_and_extract() {
    assert_type_eq_all!(Extracted<Pair<u8, char>>, TypeList<(u8, char)>);
    assert_type_eq_all!(Applied<Pair<(), ()>, TypeList<(i32, f64)>>, Pair<i32, f64>);
    assert_type_eq_all!(Applied<Bounded<u8>, (i16,)>, Bounded<i16>);
    assert_type_eq_all!(Extracted<Unit>, TypeList);
    assert_type_eq_all!(Applied<Unit, TypeList>, Unit);
}

#[test]
fn apply_and_extract_are_inverse_on_templates() {
    type X = Pair<u8, char>;
    type L = TypeList<(i32, f64)>;
    assert_type_eq_all!(Applied<Pair<(), ()>, Extracted<X>>, X);
    assert_type_eq_all!(Extracted<Applied<Pair<(), ()>, L>>, L);
}
