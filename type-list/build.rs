use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for every list over a small alphabet of element types, up to a
    // fixed length. This makes it much less likely that an error in an operation's base cases or
    // template handling goes uncaught.

    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("list_properties.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(f, "use static_assertions::assert_type_eq_all;")?;
    writeln!(f)?;

    let lists: Vec<Elems> = Elems::enumerate(3).collect();

    writeln!(f, "#[test]")?;
    writeln!(f, "fn sizes_and_indices() {{")?;
    for list in &lists {
        let l = list.in_type_list();
        writeln!(f, "    assert_eq!(size::<{}>(), {});", l, list.0.len())?;
        writeln!(
            f,
            "    assert_eq!(size::<PoppedFront<{}>>(), {});",
            l,
            list.0.len().saturating_sub(1)
        )?;
        writeln!(
            f,
            "    assert_eq!(size::<PoppedBack<{}>>(), {});",
            l,
            list.0.len().saturating_sub(1)
        )?;
        for elem in Elem::ALL {
            let index = match list.0.iter().position(|e| e == elem) {
                Some(index) => index.to_string(),
                None => "NPOS".to_owned(),
            };
            writeln!(f, "    assert_eq!(index_of::<{}, {}>(), {});", elem, l, index)?;
            writeln!(
                f,
                "    assert_eq!(contains::<{}, {}>(), {});",
                elem,
                l,
                list.0.contains(elem)
            )?;
            writeln!(f, "    assert_eq!(index_of::<{0}, PushedFront<{0}, {1}>>(), 0);", elem, l)?;
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn structural_operations() {{")?;
    for list in &lists {
        let l = list.in_type_list();
        if let (Some(first), Some(last)) = (list.0.first(), list.0.last()) {
            writeln!(f, "    assert_type_eq_all!(HeadOf<{}>, {});", l, first)?;
            writeln!(f, "    assert_type_eq_all!(LastOf<{}>, {});", l, last)?;
            writeln!(
                f,
                "    assert_type_eq_all!(TailOf<{}>, {});",
                l,
                Elems(list.0[1..].to_vec()).in_type_list()
            )?;
            for (i, elem) in list.0.iter().enumerate() {
                writeln!(f, "    assert_type_eq_all!(TypeAtOf<{}, {}>, {});", l, i, elem)?;
            }
        }
        for elem in Elem::ALL {
            writeln!(
                f,
                "    assert_type_eq_all!(PoppedBack<PushedBack<{0}, {1}>>, {1});",
                elem, l
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(PoppedFront<PushedFront<{0}, {1}>>, {1});",
                elem, l
            )?;
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn filtering_and_deduplication() {{")?;
    for list in &lists {
        let l = list.in_type_list();
        writeln!(
            f,
            "    assert_type_eq_all!(Filtered<IsSigned, {}>, {});",
            l,
            list.filter(Elem::is_signed).in_type_list()
        )?;
        writeln!(
            f,
            "    assert_type_eq_all!(Filtered<Not<IsSigned>, {}>, {});",
            l,
            list.filter(|e| !e.is_signed()).in_type_list()
        )?;
        writeln!(
            f,
            "    assert_type_eq_all!(Deduplicated<{}>, {});",
            l,
            list.deduplicated().in_type_list()
        )?;
        writeln!(
            f,
            "    assert_type_eq_all!(Deduplicated<Deduplicated<{0}>>, Deduplicated<{0}>);",
            l
        )?;
        writeln!(
            f,
            "    assert_type_eq_all!(Merged<({0}, {0})>, {1});",
            l,
            Elems(list.0.iter().chain(&list.0).copied().collect()).in_type_list()
        )?;
        writeln!(f, "    assert!(equal::<{0}, {0}>());", l)?;
        writeln!(f, "    assert!(not_equal::<{}, {}>());", l, list.as_tuple())?;
    }
    writeln!(f, "}}")?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Elem {
    U8,
    I16,
    Char,
}

impl Elem {
    const ALL: &'static [Elem] = &[Elem::U8, Elem::I16, Elem::Char];

    fn is_signed(&self) -> bool {
        matches!(self, Elem::I16)
    }
}

impl Display for Elem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Elem::U8 => write!(f, "u8"),
            Elem::I16 => write!(f, "i16"),
            Elem::Char => write!(f, "char"),
        }
    }
}

/// A sequence of elements, displayed as a flat tuple.
#[derive(Clone, Debug)]
struct Elems(Vec<Elem>);

impl Elems {
    /// Every sequence over the alphabet, shortest first, up to `max_len` elements.
    fn enumerate(max_len: usize) -> impl Iterator<Item = Elems> {
        (0..=max_len).flat_map(|len| {
            let count = Elem::ALL.len().pow(len as u32);
            (0..count).map(move |mut n| {
                let mut elems = Vec::with_capacity(len);
                for _ in 0..len {
                    elems.push(Elem::ALL[n % Elem::ALL.len()]);
                    n /= Elem::ALL.len();
                }
                Elems(elems)
            })
        })
    }

    fn filter(&self, keep: impl Fn(&Elem) -> bool) -> Elems {
        Elems(self.0.iter().copied().filter(|e| keep(e)).collect())
    }

    fn deduplicated(&self) -> Elems {
        let mut seen = Vec::new();
        for elem in &self.0 {
            if !seen.contains(elem) {
                seen.push(*elem);
            }
        }
        Elems(seen)
    }

    fn as_tuple(&self) -> String {
        self.to_string()
    }

    fn in_type_list(&self) -> String {
        format!("TypeList<{}>", self)
    }
}

impl Display for Elems {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let count = self.0.len();
        write!(f, "(")?;
        for (i, e) in self.0.iter().enumerate() {
            write!(f, "{}", e)?;
            if i + 1 < count {
                write!(f, ", ")?;
            }
        }
        if count == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
