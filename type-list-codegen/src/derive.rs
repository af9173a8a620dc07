//! `#[derive(Container)]`, `#[derive(Identity)]` and `#[derive(Template)]`.

use {
    proc_macro2::{Group, Span, TokenStream, TokenTree},
    quote::{quote, ToTokens},
    std::sync::atomic::{AtomicUsize, Ordering},
    syn::{
        spanned::Spanned, Attribute, DeriveInput, GenericParam, Ident, Lit, Meta, NestedMeta, Type,
    },
};

use crate::{crate_path, key, CodegenError};

/// Derived identities expanded so far in the crate being compiled.
static EXPANSIONS: AtomicUsize = AtomicUsize::new(0);

/// The name a derived key is hashed from.
///
/// A `key` given in `#[type_list(key = "...")]` is used as written, so it is the same in every
/// build. Otherwise the type's name is qualified by the crate being compiled and by a count of the
/// identities derived in it so far, which tells apart same-named types in different modules or
/// crates.
fn key_name(ident: &Ident, attrs: &[Attribute]) -> syn::Result<String> {
    let mut explicit: Option<String> = None;
    for attr in attrs.iter().filter(|attr| attr.path.is_ident("type_list")) {
        let list = match attr.parse_meta()? {
            Meta::List(list) => list,
            _ => return Err(CodegenError::MalformedAttribute.at(attr.span())),
        };
        for nested in list.nested {
            match nested {
                NestedMeta::Meta(Meta::NameValue(pair)) if pair.path.is_ident("key") => {
                    let value = match pair.lit {
                        Lit::Str(value) => value,
                        other => return Err(CodegenError::MalformedAttribute.at(other.span())),
                    };
                    if explicit.is_some() {
                        return Err(CodegenError::DuplicateKey.at(value.span()));
                    }
                    if value.value().trim().is_empty() {
                        return Err(CodegenError::EmptyKey.at(value.span()));
                    }
                    explicit = Some(value.value());
                }
                other => return Err(CodegenError::MalformedAttribute.at(other.span())),
            }
        }
    }
    Ok(explicit.unwrap_or_else(|| discriminated(ident)))
}

/// The name of `ident`, made unique to this expansion.
fn discriminated(ident: &Ident) -> String {
    let krate = std::env::var("CARGO_CRATE_NAME").unwrap_or_default();
    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let count = EXPANSIONS.fetch_add(1, Ordering::Relaxed);
    format!("{}@{}#{}::{}", krate, version, count, ident)
}

/// Reject const parameters, which can never take part in a type list.
fn reject_const_params(input: &DeriveInput) -> syn::Result<()> {
    for param in &input.generics.params {
        if let GenericParam::Const(konst) = param {
            return Err(
                CodegenError::ConstParameter(konst.ident.to_string()).at(konst.ident.span())
            );
        }
    }
    Ok(())
}

/// Reject lifetime parameters, which cannot be carried over to a rebuilt type.
fn reject_lifetime_params(input: &DeriveInput) -> syn::Result<()> {
    for param in &input.generics.params {
        if let GenericParam::Lifetime(def) = param {
            return Err(CodegenError::LifetimeParameter(def.lifetime.ident.to_string())
                .at(def.lifetime.span()));
        }
    }
    Ok(())
}

/// The single type parameter of a container.
fn element_param(input: &DeriveInput) -> syn::Result<&Ident> {
    reject_const_params(input)?;
    reject_lifetime_params(input)?;
    let types: Vec<&Ident> = input.generics.type_params().map(|param| &param.ident).collect();
    match types.as_slice() {
        [] => Err(CodegenError::NoElementParameter.at(input.ident.span())),
        [param] => Ok(param),
        [_, extra, ..] => Err(CodegenError::TooManyTypeParameters(types.len()).at(extra.span())),
    }
}

/// Expand `#[derive(Container)]`.
///
/// The container's only type parameter holds the element tuple. Both [`Container`] and
/// [`Identity`] are generated; the identity of a container is a derived key for its template,
/// holding the identities of its elements.
///
/// [`Container`]: https://docs.rs/type-list/latest/type_list/trait.Container.html
/// [`Identity`]: https://docs.rs/type-list/latest/type_list/trait.Identity.html
pub fn container(input: DeriveInput) -> syn::Result<TokenStream> {
    let c = crate_path();
    let param = element_param(&input)?;
    let name = key_name(&input.ident, &input.attrs)?;
    let ident = &input.ident;
    let key = key::derived(
        &name,
        quote!(<<#param as #c::tuple::Tuple>::AsList as #c::identity::EachIdentity>::Keys),
    );
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let predicates = where_clause.map(|clause| &clause.predicates);
    let rebuilt = Ident::new("__Elems", Span::mixed_site());

    Ok(quote! {
        impl #impl_generics #c::Container for #ident #ty_generics
        where
            #param: #c::tuple::Tuple,
            #predicates
        {
            type Elems = #param;
            type Rebuild<#rebuilt: #c::tuple::Tuple> = #ident<#rebuilt>;
        }

        impl #impl_generics #c::Identity for #ident #ty_generics
        where
            #param: #c::tuple::Tuple,
            <#param as #c::tuple::Tuple>::AsList: #c::identity::EachIdentity,
            #predicates
        {
            type Key = #key;
        }
    })
}

/// Expand `#[derive(Identity)]`.
///
/// The key holds the identity of every type parameter, each of which must have one of its own.
/// Lifetime parameters do not take part in identity.
pub fn identity(input: DeriveInput) -> syn::Result<TokenStream> {
    let c = crate_path();
    reject_const_params(&input)?;
    let name = key_name(&input.ident, &input.attrs)?;
    let ident = &input.ident;
    let params: Vec<&Ident> = input
        .generics
        .type_params()
        .map(|param| &param.ident)
        .collect();
    let args: Vec<Type> = params
        .iter()
        .map(|param| syn::parse_quote!(#param))
        .collect();
    let key = key::derived(&name, key::argument_keys(&args));
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let predicates = where_clause.map(|clause| &clause.predicates);

    Ok(quote! {
        impl #impl_generics #c::Identity for #ident #ty_generics
        where
            #(#params: #c::Identity,)*
            #predicates
        {
            type Key = #key;
        }
    })
}

/// Replace every occurrence of an identifier in `from` with its counterpart in `to`.
fn rename(tokens: TokenStream, from: &[&Ident], to: &[Ident]) -> TokenStream {
    tokens
        .into_iter()
        .map(|tree| match tree {
            TokenTree::Ident(ident) => TokenTree::Ident(
                from.iter()
                    .zip(to)
                    .find(|(old, _)| **old == &ident)
                    .map_or(ident, |(_, new)| new.clone()),
            ),
            TokenTree::Group(group) => {
                let mut renamed = Group::new(group.delimiter(), rename(group.stream(), from, to));
                renamed.set_span(group.span());
                TokenTree::Group(renamed)
            }
            other => other,
        })
        .collect()
}

/// Expand `#[derive(Template)]`.
///
/// Every parameter of a template must be a type parameter. The template can be instantiated with
/// exactly as many arguments as it declares, each satisfying the bounds of the parameter it
/// replaces, and its arguments can be extracted in declaration order.
pub fn template(input: DeriveInput) -> syn::Result<TokenStream> {
    let c = crate_path();
    reject_const_params(&input)?;
    reject_lifetime_params(&input)?;
    let ident = &input.ident;
    let params: Vec<&Ident> = input
        .generics
        .type_params()
        .map(|param| &param.ident)
        .collect();
    let args: Vec<Ident> = params
        .iter()
        .map(|param| Ident::new(&format!("__{}", param), Span::mixed_site()))
        .collect();
    let bounds: Vec<TokenStream> = input
        .generics
        .type_params()
        .map(|param| param.bounds.to_token_stream())
        .collect();
    let arg_bounds: Vec<TokenStream> = bounds
        .iter()
        .map(|bound| rename(bound.clone(), &params, &args))
        .collect();
    let predicates: Vec<TokenStream> = input
        .generics
        .where_clause
        .iter()
        .flat_map(|clause| clause.predicates.iter())
        .map(ToTokens::to_token_stream)
        .collect();
    let arg_predicates: Vec<TokenStream> = predicates
        .iter()
        .map(|predicate| rename(predicate.clone(), &params, &args))
        .collect();

    Ok(quote! {
        impl<#(#params: #bounds,)* #(#args: #arg_bounds,)*> #c::Instantiate<(#(#args,)*)>
            for #ident<#(#params),*>
        where
            #(#predicates,)*
            #(#arg_predicates,)*
        {
            type Instance = #ident<#(#args),*>;
        }

        impl<#(#params: #bounds),*> #c::Extract for #ident<#(#params),*>
        where
            #(#predicates,)*
        {
            type Extracted = #c::TypeList<(#(#params,)*)>;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn error_of(result: syn::Result<TokenStream>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn container_with_one_parameter() {
        let input: DeriveInput = parse_quote! {
            struct OtherList<T = ()>(core::marker::PhantomData<T>);
        };
        let file: syn::File = syn::parse2(container(input).unwrap()).unwrap();
        assert_eq!(file.items.len(), 2);
    }

    #[test]
    fn container_keeps_declared_bounds() {
        let input: DeriveInput = parse_quote! {
            struct Bounded<T>(T) where T: Copy;
        };
        let expanded = container(input).unwrap().to_string();
        assert!(expanded.contains("T : Copy"));
    }

    #[test]
    fn container_without_parameters() {
        let input: DeriveInput = parse_quote!(
            struct Empty;
        );
        assert_eq!(
            error_of(container(input)),
            CodegenError::NoElementParameter.to_string()
        );
    }

    #[test]
    fn container_with_two_parameters() {
        let input: DeriveInput = parse_quote! {
            struct Pair<A, B>(A, B);
        };
        assert_eq!(
            error_of(container(input)),
            CodegenError::TooManyTypeParameters(2).to_string()
        );
    }

    #[test]
    fn container_with_lifetime() {
        let input: DeriveInput = parse_quote! {
            struct Borrowed<'a, T>(&'a T);
        };
        assert_eq!(
            error_of(container(input)),
            CodegenError::LifetimeParameter("a".to_owned()).to_string()
        );
    }

    #[test]
    fn const_parameters_are_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Sized<T, const N: usize>([T; N]);
        };
        assert_eq!(
            error_of(identity(input.clone())),
            CodegenError::ConstParameter("N".to_owned()).to_string()
        );
        assert_eq!(
            error_of(container(input)),
            CodegenError::ConstParameter("N".to_owned()).to_string()
        );
    }

    #[test]
    fn same_names_get_different_keys() {
        let input: DeriveInput = parse_quote!(
            struct Error;
        );
        let first = identity(input.clone()).unwrap().to_string();
        let second = identity(input).unwrap().to_string();
        assert_ne!(first, second);
        assert!(!first.contains(&key::nominal("Error").to_string()));
    }

    #[test]
    fn derived_keys_never_match_built_in_keys() {
        let input: DeriveInput = parse_quote! {
            #[type_list(key = "Option")]
            struct Option<T>(T);
        };
        let expanded = identity(input).unwrap().to_string();
        let derived = key::derived("Option", key::argument_keys(&[parse_quote!(T)])).to_string();
        assert!(expanded.contains(&derived));
        assert_ne!(derived, key::generic("Option", &[parse_quote!(T)]).to_string());
    }

    #[test]
    fn identity_of_generic_type_bounds_every_parameter() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<'a, T: ?Sized, U>(&'a T, U);
        };
        let expanded = identity(input).unwrap().to_string();
        assert!(expanded.contains("T : :: type_list :: Identity"));
        assert!(expanded.contains("U : :: type_list :: Identity"));
    }

    #[test]
    fn explicit_key_overrides_name() {
        let input: DeriveInput = parse_quote! {
            #[type_list(key = "crate::a::Marker")]
            struct Marker;
        };
        let first = identity(input.clone()).unwrap().to_string();
        let second = identity(input).unwrap().to_string();
        assert_eq!(first, second);
        assert!(first.contains(&key::nominal("crate::a::Marker").to_string()));
        assert!(!first.contains(&key::nominal("Marker").to_string()));
    }

    #[test]
    fn template_instantiates_and_extracts() {
        let input: DeriveInput = parse_quote! {
            struct Pair<A, B>(A, B);
        };
        let file: syn::File = syn::parse2(template(input).unwrap()).unwrap();
        assert_eq!(file.items.len(), 2);
    }

    #[test]
    fn template_bounds_carry_over_to_arguments() {
        let input: DeriveInput = parse_quote! {
            struct Bounded<A: Copy, B>(A, B) where B: Into<A>;
        };
        let expanded = template(input).unwrap().to_string();
        assert!(expanded.contains("__A : Copy"));
        assert!(expanded.contains("__B : Into < __A >"));
        assert!(expanded.contains("B : Into < A >"));
    }

    #[test]
    fn template_rejects_value_and_lifetime_parameters() {
        let input: DeriveInput = parse_quote! {
            struct Array<T, const N: usize>([T; N]);
        };
        assert_eq!(
            error_of(template(input)),
            CodegenError::ConstParameter("N".to_owned()).to_string()
        );
        let input: DeriveInput = parse_quote! {
            struct Borrowed<'a, T>(&'a T);
        };
        assert_eq!(
            error_of(template(input)),
            CodegenError::LifetimeParameter("a".to_owned()).to_string()
        );
    }

    #[test]
    fn malformed_attributes() {
        let input: DeriveInput = parse_quote! {
            #[type_list(name = "Marker")]
            struct Marker;
        };
        assert_eq!(
            error_of(identity(input)),
            CodegenError::MalformedAttribute.to_string()
        );

        let input: DeriveInput = parse_quote! {
            #[type_list(key = "a", key = "b")]
            struct Marker;
        };
        assert_eq!(
            error_of(identity(input)),
            CodegenError::DuplicateKey.to_string()
        );

        let input: DeriveInput = parse_quote! {
            #[type_list(key = " ")]
            struct Marker;
        };
        assert_eq!(error_of(identity(input)), CodegenError::EmptyKey.to_string());
    }
}
