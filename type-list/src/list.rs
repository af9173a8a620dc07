//! Structural recursion over inductive lists.
//!
//! Every public operation converts a container's elements into an inductive list, runs one of the
//! helpers below, and rebuilds a container from the result. The helpers are public traits in a
//! private module, so they can appear in the bounds of public impls without being nameable
//! outside the crate.

use crate::{
    access::NPOS,
    boolean::{Bool, False, If, True},
    container::{Container, ElemsOf, RebuiltOf},
    filter::Predicate,
    identity::{Identity, KeyEq},
    map::{TypeConstructor, TypeFn},
    mutate::{PushFront, PushedFront},
    tuple::List,
    unary::{Unary, S, Z},
    TypeList,
};

#[diagnostic::on_unimplemented(
    message = "cannot take the first element of an empty type list",
    label = "this list has no elements"
)]
pub trait First {
    type First;
}

impl<T, Ts> First for (T, Ts) {
    type First = T;
}

#[diagnostic::on_unimplemented(
    message = "cannot take the last element of an empty type list",
    label = "this list has no elements"
)]
pub trait Last {
    type Last;
}

impl<T> Last for (T, ()) {
    type Last = T;
}

impl<T, U, Ts> Last for (T, (U, Ts))
where
    (U, Ts): Last,
{
    type Last = <(U, Ts) as Last>::Last;
}

/// Everything but the first element; the empty list has no first element to drop.
pub trait Rest {
    type Rest: List;
}

impl Rest for () {
    type Rest = ();
}

impl<T, Ts: List> Rest for (T, Ts) {
    type Rest = Ts;
}

#[diagnostic::on_unimplemented(
    message = "type list index out of range",
    label = "this list is too short for the requested index"
)]
pub trait Select<N: Unary> {
    type Element;
}

impl<T, Ts> Select<Z> for (T, Ts) {
    type Element = T;
}

impl<T, Ts, N: Unary> Select<S<N>> for (T, Ts)
where
    Ts: Select<N>,
{
    type Element = Ts::Element;
}

pub trait Position<T> {
    const INDEX: usize;
}

impl<T> Position<T> for () {
    const INDEX: usize = NPOS;
}

impl<T: Identity, H: Identity, Ts> Position<T> for (H, Ts)
where
    H::Key: KeyEq<T::Key>,
    <H::Key as KeyEq<T::Key>>::Equal: PositionThen<T, Ts>,
{
    const INDEX: usize = <<H::Key as KeyEq<T::Key>>::Equal as PositionThen<T, Ts>>::INDEX;
}

/// Dispatch on whether the current element matched.
pub trait PositionThen<T, Ts> {
    const INDEX: usize;
}

impl<T, Ts> PositionThen<T, Ts> for True {
    const INDEX: usize = 0;
}

impl<T, Ts: Position<T>> PositionThen<T, Ts> for False {
    const INDEX: usize = match Ts::INDEX {
        NPOS => NPOS,
        index => index + 1,
    };
}

pub trait Search<T> {
    type Found: Bool;
}

impl<T> Search<T> for () {
    type Found = False;
}

impl<T: Identity, H: Identity, Ts> Search<T> for (H, Ts)
where
    H::Key: KeyEq<T::Key>,
    <H::Key as KeyEq<T::Key>>::Equal: SearchThen<T, Ts>,
{
    type Found = <<H::Key as KeyEq<T::Key>>::Equal as SearchThen<T, Ts>>::Found;
}

/// Dispatch on whether the current element matched. After a match the rest of the list is not
/// inspected.
pub trait SearchThen<T, Ts> {
    type Found: Bool;
}

impl<T, Ts> SearchThen<T, Ts> for True {
    type Found = True;
}

impl<T, Ts: Search<T>> SearchThen<T, Ts> for False {
    type Found = Ts::Found;
}

pub trait Append<T> {
    type Appended;
}

impl<T> Append<T> for () {
    type Appended = (T, ());
}

impl<T, H, Ts: Append<T>> Append<T> for (H, Ts) {
    type Appended = (H, Ts::Appended);
}

pub trait Concat<Rhs> {
    type Concatenated;
}

impl<Rhs> Concat<Rhs> for () {
    type Concatenated = Rhs;
}

impl<Rhs, H, Ts: Concat<Rhs>> Concat<Rhs> for (H, Ts) {
    type Concatenated = (H, Ts::Concatenated);
}

/// Drop the last element of a list taken from the container `L`, counting down its `Length`.
///
/// The last two elements or fewer end in an empty `L`; every element before them is pushed back
/// on the front, which builds a [`TypeList`].
pub trait PopBackFrom<L, Length> {
    type Popped;
}

impl<L: Container> PopBackFrom<L, Z> for () {
    type Popped = L::Rebuild<()>;
}

impl<L: Container, T> PopBackFrom<L, S<Z>> for (T, ()) {
    type Popped = L::Rebuild<()>;
}

impl<L, T, U, Ts, N> PopBackFrom<L, S<S<N>>> for (T, (U, Ts))
where
    (U, Ts): PopBackFrom<L, S<N>>,
    <(U, Ts) as PopBackFrom<L, S<N>>>::Popped: PushFront<T>,
{
    type Popped = PushedFront<T, <(U, Ts) as PopBackFrom<L, S<N>>>::Popped>;
}

pub trait EachApplied<F> {
    type Applied;
}

impl<F: TypeConstructor> EachApplied<F> for () {
    type Applied = ();
}

impl<F: TypeConstructor, T, Ts: EachApplied<F>> EachApplied<F> for (T, Ts) {
    type Applied = (F::Applied<T>, Ts::Applied);
}

pub trait EachOutput<F> {
    type Outputs;
}

impl<F> EachOutput<F> for () {
    type Outputs = ();
}

impl<F: TypeFn<T>, T, Ts: EachOutput<F>> EachOutput<F> for (T, Ts) {
    type Outputs = (F::Output, Ts::Outputs);
}

pub trait Keep<P> {
    type Kept;
}

impl<P> Keep<P> for () {
    type Kept = ();
}

impl<P: Predicate<T>, T, Ts: Keep<P>> Keep<P> for (T, Ts) {
    type Kept = If<P::Holds, (T, Ts::Kept), Ts::Kept>;
}

/// Fold a list of containers into the template of the first.
pub trait MergeAll {
    type Merged;
}

impl MergeAll for () {
    type Merged = TypeList;
}

impl<L> MergeAll for (L, ()) {
    type Merged = L;
}

impl<L1, L2, Ls> MergeAll for (L1, (L2, Ls))
where
    L1: Container,
    L2: Container,
    ElemsOf<L1>: Concat<ElemsOf<L2>>,
    <ElemsOf<L1> as Concat<ElemsOf<L2>>>::Concatenated: List,
    (
        RebuiltOf<L1, <ElemsOf<L1> as Concat<ElemsOf<L2>>>::Concatenated>,
        Ls,
    ): MergeAll,
{
    type Merged = <(
        RebuiltOf<L1, <ElemsOf<L1> as Concat<ElemsOf<L2>>>::Concatenated>,
        Ls,
    ) as MergeAll>::Merged;
}

/// Keep the first occurrence of every element, accumulating the survivors in `Acc`.
pub trait Dedup<Acc> {
    type Deduplicated;
}

impl<Acc> Dedup<Acc> for () {
    type Deduplicated = Acc;
}

impl<Acc, H, Ts> Dedup<Acc> for (H, Ts)
where
    Acc: Search<H> + Append<H>,
    Ts: Dedup<If<<Acc as Search<H>>::Found, Acc, <Acc as Append<H>>::Appended>>,
{
    type Deduplicated = <Ts as Dedup<
        If<<Acc as Search<H>>::Found, Acc, <Acc as Append<H>>::Appended>,
    >>::Deduplicated;
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<(u8, (char, ())) as Last>::Last, char);
    assert_type_eq_all!(<(u8, (char, ())) as Select<S<Z>>>::Element, char);
    assert_type_eq_all!(<(u8, ()) as Append<char>>::Appended, (u8, (char, ())));
    assert_type_eq_all!(<(u8, ()) as Concat<(char, ())>>::Concatenated, (u8, (char, ())));
    assert_type_eq_all!(
        <(u8, (i8, (u8, ()))) as Dedup<()>>::Deduplicated,
        (u8, (i8, ()))
    );
    assert_type_eq_all!(<(u8, ()) as PopBackFrom<(), S<Z>>>::Popped, ());

    #[test]
    fn position_counts_from_the_front() {
        assert_eq!(<(u8, (char, (u8, ()))) as Position<u8>>::INDEX, 0);
        assert_eq!(<(u8, (char, (u8, ()))) as Position<char>>::INDEX, 1);
        assert_eq!(<(u8, (char, ())) as Position<i8>>::INDEX, NPOS);
        assert_eq!(<() as Position<i8>>::INDEX, NPOS);
    }

    struct Anonymous;

    #[test]
    fn search_stops_at_first_match() {
        // `Anonymous` has no identity, but it is never reached.
        assert!(<<(u8, (Anonymous, ())) as Search<u8>>::Found as Bool>::VALUE);
        assert!(!<<() as Search<u8>>::Found as Bool>::VALUE);
    }
}
