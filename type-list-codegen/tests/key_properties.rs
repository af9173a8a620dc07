use {
    quickcheck::{QuickCheck, TestResult},
    type_list_codegen::key::{self, DIGITS},
};

fn digits_roundtrip_property(hash: u64) -> TestResult {
    let digits = key::digits(hash);
    if digits.iter().any(|&digit| digit >= 16) {
        return TestResult::error(format!("{:x} has a digit out of range: {:?}", hash, digits));
    }
    TestResult::from_bool(key::from_digits(&digits) == hash)
}

fn whitespace_property(name: String) -> TestResult {
    let spaced: String = name.chars().flat_map(|c| [c, ' ']).collect();
    TestResult::from_bool(
        key::nominal(&name).to_string() == key::nominal(&spaced).to_string(),
    )
}

fn key_is_a_type_property(name: String) -> TestResult {
    match syn::parse2::<syn::Type>(key::nominal(&name)) {
        Ok(_) => TestResult::passed(),
        Err(error) => TestResult::error(format!("key of {:?} is not a type: {}", name, error)),
    }
}

#[test]
fn digits_roundtrip() {
    QuickCheck::new().quickcheck(digits_roundtrip_property as fn(_) -> TestResult)
}

#[test]
fn whitespace_is_ignored() {
    QuickCheck::new().quickcheck(whitespace_property as fn(_) -> TestResult)
}

#[test]
fn every_key_is_a_type() {
    QuickCheck::new()
        .tests(20)
        .quickcheck(key_is_a_type_property as fn(_) -> TestResult)
}

#[test]
fn keys_have_sixteen_digits() {
    assert_eq!(key::digits(u64::MAX), [15; DIGITS]);
    assert_eq!(key::digits(0), [0; DIGITS]);
}
