//! Identity keys.
//!
//! A nominal key is the 64-bit FNV-1a hash of a type's name, spelled out at the type level as an
//! inductive list of sixteen hexadecimal digits, most significant first. Each digit is a unary
//! number, so two keys can be compared by the trait solver without any const evaluation.
//!
//! Keys come in three shapes, told apart by their first component:
//!
//! - nominal: `(digit, (digit, ...))`, for built-in types without parameters;
//! - generic: `(nominal, argument keys)`, for built-in type constructors;
//! - derived: `((), (nominal, argument keys))`, for every type with a derived identity.
//!
//! Since no built-in key starts with `()`, a derived type is never identical to a built-in one,
//! whatever it is called.

use {
    proc_macro2::TokenStream,
    quote::quote,
    syn::{parse::Parser, punctuated::Punctuated, Token, Type},
};

use crate::crate_path;

/// The number of hexadecimal digits in a key.
pub const DIGITS: usize = 16;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hash a name with 64-bit FNV-1a.
pub fn fnv1a(name: &str) -> u64 {
    name.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Split a hash into its hexadecimal digits, most significant first.
pub fn digits(hash: u64) -> [u8; DIGITS] {
    let mut digits = [0; DIGITS];
    for (i, digit) in digits.iter_mut().enumerate() {
        let shift = 4 * (DIGITS - 1 - i);
        *digit = ((hash >> shift) & 0xf) as u8;
    }
    digits
}

/// Reassemble a hash from its digits.
pub fn from_digits(digits: &[u8; DIGITS]) -> u64 {
    digits
        .iter()
        .fold(0, |hash, &digit| (hash << 4) | u64::from(digit))
}

/// Normalize the name a key is computed from: whitespace inside a token stream is not significant.
pub fn normalize(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The unary type-level number for a single digit.
fn unary(digit: u8) -> TokenStream {
    let c = crate_path();
    let mut tokens = quote!(#c::unary::Z);
    for _ in 0..digit {
        tokens = quote!(#c::unary::S<#tokens>);
    }
    tokens
}

/// The type-level key of a name.
pub fn nominal(name: &str) -> TokenStream {
    digits(fnv1a(&normalize(name)))
        .iter()
        .rev()
        .fold(quote!(()), |rest, &digit| {
            let digit = unary(digit);
            quote!((#digit, #rest))
        })
}

/// The inductive list of the identity keys of `args`.
pub fn argument_keys(args: &[Type]) -> TokenStream {
    let c = crate_path();
    args.iter().rev().fold(quote!(()), |rest, arg| {
        quote!((<#arg as #c::Identity>::Key, #rest))
    })
}

/// The generic key of a type constructor named `name` applied to `args`: the nominal key of the
/// constructor paired with the inductive list of the arguments' keys.
pub fn generic(name: &str, args: &[Type]) -> TokenStream {
    let tag = nominal(name);
    let keys = argument_keys(args);
    quote!((#tag, #keys))
}

/// The key of a derived identity: the nominal key of `name` paired with `args` (an inductive list
/// of keys), behind the `()` marker that sets derived keys apart from built-in ones.
pub fn derived(name: &str, args: TokenStream) -> TokenStream {
    let tag = nominal(name);
    quote!(((), (#tag, #args)))
}

/// Expand `key!(...)`: the nominal key of whatever tokens are written between the parentheses.
pub fn key_macro(input: TokenStream) -> TokenStream {
    nominal(&input.to_string())
}

/// Expand `generic_key!(Name; A, B, ...)`: the generic key of `Name` applied to the listed types.
pub fn generic_key_macro(input: TokenStream) -> syn::Result<TokenStream> {
    let mut tokens = input.into_iter();
    let mut name = TokenStream::new();
    for token in tokens.by_ref() {
        if let proc_macro2::TokenTree::Punct(ref punct) = token {
            if punct.as_char() == ';' {
                break;
            }
        }
        name.extend(std::iter::once(token));
    }
    let rest: TokenStream = tokens.collect();
    let args = Punctuated::<Type, Token![,]>::parse_terminated.parse2(rest)?;
    let args: Vec<Type> = args.into_iter().collect();
    Ok(generic(&name.to_string(), &args))
}
