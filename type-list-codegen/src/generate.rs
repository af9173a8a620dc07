//! Generators for the families of impls that cannot be written inductively: the conversions
//! between flat tuples and inductive lists (along with the identity of each tuple), and between
//! `usize` constants and unary numbers.

use {
    proc_macro2::{Literal, TokenStream},
    quote::{format_ident, quote},
    syn::LitInt,
};

use crate::{crate_path, key, CodegenError};

/// The largest arity any generator will produce.
pub const MAX_ARITY: usize = 256;

/// Parse the single integer argument of a generator invocation.
pub fn arity(input: TokenStream) -> syn::Result<usize> {
    let lit: LitInt = syn::parse2(input)?;
    let requested = lit.base10_parse::<usize>()?;
    if requested > MAX_ARITY {
        return Err(CodegenError::ArityTooLarge {
            requested,
            max: MAX_ARITY,
        }
        .at(lit.span()));
    }
    Ok(requested)
}

/// The `Tuple`, `List` and `Identity` impls for one arity.
fn tuple_impls(arity: usize) -> TokenStream {
    let c = crate_path();
    let params: Vec<_> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
    let list = params
        .iter()
        .rev()
        .fold(quote!(()), |rest, param| quote!((#param, #rest)));
    let tag = key::nominal("tuple");
    quote! {
        impl<#(#params),*> #c::tuple::Tuple for (#(#params,)*) {
            type AsList = #list;
        }

        impl<#(#params),*> #c::tuple::List for #list {
            type AsTuple = (#(#params,)*);
        }

        impl<#(#params),*> #c::Identity for (#(#params,)*)
        where
            #list: #c::identity::EachIdentity,
        {
            type Key = (#tag, <#list as #c::identity::EachIdentity>::Keys);
        }
    }
}

/// Expand `impl_tuples!(N)`: tuple/list conversions for every arity from zero through `N`.
pub fn impl_tuples(max: usize) -> TokenStream {
    (0..=max).map(tuple_impls).collect()
}

/// The unary number `n`, spelled out.
fn unary(n: usize) -> TokenStream {
    let c = crate_path();
    (0..n).fold(quote!(#c::unary::Z), |inner, _| quote!(#c::unary::S<#inner>))
}

/// Expand `generate_unary_conversion_impls!(N)`: `Number<k>` to and from unary for every `k` from
/// zero through `N`.
pub fn unary_conversions(max: usize) -> TokenStream {
    let c = crate_path();
    (0..=max)
        .map(|n| {
            let lit = Literal::usize_unsuffixed(n);
            let unary = unary(n);
            quote! {
                impl #c::unary::ToUnary for #c::unary::Number<#lit> {
                    type AsUnary = #unary;
                }

                impl #c::unary::ToConstant for #unary {
                    type AsConstant = #c::unary::Number<#lit>;
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_parses_integer_literals() {
        assert_eq!(arity(quote!(64)).unwrap(), 64);
        assert!(arity(quote!(sixty_four)).is_err());
    }

    #[test]
    fn arity_is_bounded() {
        let error = arity(quote!(1000)).unwrap_err();
        assert_eq!(
            error.to_string(),
            CodegenError::ArityTooLarge {
                requested: 1000,
                max: MAX_ARITY
            }
            .to_string()
        );
    }

    #[test]
    fn empty_tuple_is_the_empty_list() {
        let tokens = tuple_impls(0).to_string();
        assert!(tokens.contains("for ()"));
        assert!(tokens.contains("type AsList = ()"));
        assert!(tokens.contains("type AsTuple = ()"));
    }

    #[test]
    fn singleton_tuple_keeps_its_trailing_comma() {
        let tokens = tuple_impls(1).to_string();
        assert!(tokens.contains("for (T0 ,)"));
        assert!(tokens.contains("type AsList = (T0 , ())"));
    }

    #[test]
    fn impls_cover_every_arity() {
        let file: syn::File = syn::parse2(impl_tuples(4)).unwrap();
        assert_eq!(file.items.len(), 3 * 5);
        let file: syn::File = syn::parse2(unary_conversions(4)).unwrap();
        assert_eq!(file.items.len(), 2 * 5);
    }

    #[test]
    fn unary_is_nested_successors() {
        let expected: syn::Type =
            syn::parse_quote!(::type_list::unary::S<::type_list::unary::S<::type_list::unary::Z>>);
        assert_eq!(syn::parse2::<syn::Type>(unary(2)).unwrap(), expected);
    }
}
