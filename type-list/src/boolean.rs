//! Type-level booleans, [`True`] and [`False`].
//!
//! Predicates, equality and membership all answer with one of these two types. The combinators
//! are associated types of [`Bool`], so any `B: Bool` can be negated, combined or branched on
//! without further bounds.

/// The type-level `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// The type-level `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// A type-level boolean.
///
/// # Examples
///
/// ```
/// use type_list::boolean::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert!(True::VALUE);
/// assert!(!<Not<True>>::VALUE);
///
/// assert_type_eq_all!(And<True, False>, False);
/// assert_type_eq_all!(Or<True, False>, True);
/// assert_type_eq_all!(If<False, u8, char>, char);
/// ```
pub trait Bool: sealed::Bool + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level boolean.
    const VALUE: bool;
    /// The negation of `Self`.
    type Not: Bool;
    /// `Self` and `B`.
    type And<B: Bool>: Bool;
    /// `Self` or `B`.
    type Or<B: Bool>: Bool;
    /// `Then` if `Self` is [`True`], otherwise `Else`.
    type If<Then, Else>;
}

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
    type If<Then, Else> = Then;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
    type If<Then, Else> = Else;
}

/// The negation of `B`.
pub type Not<B> = <B as Bool>::Not;

/// The conjunction of `A` and `B`.
pub type And<A, B> = <A as Bool>::And<B>;

/// The disjunction of `A` and `B`.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `Then` if `B` is [`True`], otherwise `Else`.
pub type If<B, Then, Else> = <B as Bool>::If<Then, Else>;

mod sealed {
    pub trait Bool {}
    impl Bool for super::True {}
    impl Bool for super::False {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Not<Not<True>>, True);
    assert_type_eq_all!(And<True, True>, True);
    assert_type_eq_all!(And<False, True>, False);
    assert_type_eq_all!(Or<False, False>, False);
    assert_type_eq_all!(Or<False, True>, True);
    assert_type_eq_all!(If<True, u8, char>, u8);

    #[test]
    fn values() {
        assert!(True::VALUE);
        assert!(!False::VALUE);
        assert!(<Or<False, True>>::VALUE);
        assert!(!<And<True, False>>::VALUE);
    }
}
