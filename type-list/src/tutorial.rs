/*! The introductory tutorial for `type-list` (nothing is exported from this module).

# Lists of types

A type list is an ordered sequence of types, known entirely at compile time. Write one by
putting a tuple of element types inside [`TypeList`]:

```
use type_list::prelude::*;

type Numbers = TypeList<(i32, f64, u8)>;
```

Nothing about a type list exists at runtime. Every question you can ask of it is answered by the
trait solver, and every operation on it produces another type. The answers to value-valued
questions are `const fn`s:

```
# use type_list::prelude::*;
# type Numbers = TypeList<(i32, f64, u8)>;
const SIZE: usize = size::<Numbers>();
const HAS_BYTE: bool = contains::<u8, Numbers>();

assert_eq!(SIZE, 3);
assert!(HAS_BYTE);
assert_eq!(index_of::<f64, Numbers>(), 1);
```

Type-valued questions are type aliases. (Here and elsewhere in this tutorial, we use the
[`assert_type_eq_all!`](static_assertions::assert_type_eq_all) macro from the
[`static_assertions`] crate to assert that Rust sees these types as equal.)

```
# use type_list::prelude::*;
# use static_assertions::assert_type_eq_all;
# type Numbers = TypeList<(i32, f64, u8)>;
assert_type_eq_all!(HeadOf<Numbers>, i32);
assert_type_eq_all!(LastOf<Numbers>, u8);
assert_type_eq_all!(TypeAtOf<Numbers, 1>, f64);
assert_type_eq_all!(TailOf<Numbers>, TypeList<(f64, u8)>);
```

Asking for something that is not there is a compile error, not a runtime one:

```compile_fail
# use type_list::prelude::*;
type Nothing = HeadOf<TypeList>;
let _: Nothing = todo!();
```

# Building new lists

Lists grow and shrink at either end:

```
# use type_list::prelude::*;
# use static_assertions::assert_type_eq_all;
type L = TypeList<(char, bool)>;

assert_type_eq_all!(PushedFront<u8, L>, TypeList<(u8, char, bool)>);
assert_type_eq_all!(PushedBack<u8, L>, TypeList<(char, bool, u8)>);
assert_type_eq_all!(PoppedFront<L>, TypeList<(bool,)>);
assert_type_eq_all!(PoppedBack<L>, TypeList<(char,)>);
```

Whole lists can be filtered by a [`Predicate`](crate::filter::Predicate), transformed element by
element, deduplicated and merged:

```
# use type_list::prelude::*;
# use static_assertions::assert_type_eq_all;
type Raw = TypeList<(u8, i16, u8, f32)>;

assert_type_eq_all!(Filtered<IsSigned, Raw>, TypeList<(i16, f32)>);
assert_type_eq_all!(Deduplicated<Raw>, TypeList<(u8, i16, f32)>);
assert_type_eq_all!(ForEachOf<OptionOf, TypeList<(u8,)>>, TypeList<(Option<u8>,)>);
assert_type_eq_all!(Transformed<MakeUnsigned, TypeList<(i8, u16)>>, TypeList<(u8, u16)>);
assert_type_eq_all!(
    Merged<(TypeList<(u8,)>, TypeList<(i16, f32)>)>,
    TypeList<(u8, i16, f32)>
);
```

# Templates

A list does not have to be a [`TypeList`]. Any generic type whose single type parameter holds
the element tuple can be a list; derive [`Container`](macro@crate::Container) for it. The bare
tuple is a list too.

```
use std::marker::PhantomData;
use type_list::prelude::*;
# use static_assertions::assert_type_eq_all;

#[derive(Container)]
struct Row<T = ()>(PhantomData<T>);

assert_eq!(size::<Row<(u8, char)>>(), 2);
assert_type_eq_all!(TailOf<Row<(u8, char)>>, Row<(char,)>);
assert_type_eq_all!(TailOf<(u8, char)>, (char,));
```

Operations say which template their result is built from. Most keep the template of their input,
but pushing to the front always gives a [`TypeList`], as does deduplication. Two lists are only
equal when they have the same template and the same elements:

```
# use std::marker::PhantomData;
# use type_list::prelude::*;
# #[derive(Container)]
# struct Row<T = ()>(PhantomData<T>);
assert!(equal::<Row<(u8,)>, Row<(u8,)>>());
assert!(not_equal::<Row<(u8,)>, TypeList<(u8,)>>());
assert_eq!(TypeList::<(u8,)>::new(), TypeList::<(u8,)>::new());
```

The elements of a list can be moved into another template with [`Applied`](crate::Applied), and
the type arguments of a generic type collected into a list with [`Extracted`](crate::Extracted):

```
# use type_list::prelude::*;
# use static_assertions::assert_type_eq_all;
assert_type_eq_all!(Applied<Result<(), ()>, TypeList<(u8, String)>>, Result<u8, String>);
assert_type_eq_all!(Extracted<Result<u8, String>>, TypeList<(u8, String)>);
```

Your own generic types join in by deriving [`Template`](macro@crate::Template):

```
# use type_list::prelude::*;
# use static_assertions::assert_type_eq_all;
#[derive(Template)]
struct Pair<A, B>(A, B);

assert_type_eq_all!(Applied<Pair<(), ()>, TypeList<(u8, char)>>, Pair<u8, char>);
assert_type_eq_all!(Extracted<Pair<u8, char>>, TypeList<(u8, char)>);
```

# Identity

To tell whether a list contains a type, the crate must decide whether two types are the same,
which Rust's trait system cannot do for arbitrary types. Instead, every type taking part in
[`contains`](crate::contains), [`index_of`](crate::index_of), deduplication or equality carries a
type-level [`Identity`](trait@crate::Identity). Primitive types and common standard types have one
already; your own types derive it:

```
# use type_list::prelude::*;
#[derive(Identity)]
struct Meters;

#[derive(Identity)]
struct Feet;

assert!(contains::<Feet, TypeList<(Meters, Feet)>>());
assert_eq!(index_of::<Meters, TypeList<(Feet, Meters, Meters)>>(), 1);
```

Without an identity, these operations do not compile:

```compile_fail
# use type_list::prelude::*;
struct Anonymous;

let _ = contains::<Anonymous, TypeList<(u8,)>>();
```
*/

#[allow(unused_imports)] // For documentation linking
use crate::prelude::*;
