use {proc_macro2::Span, thiserror::Error};

/// A reason a derive or generator macro refused its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// `#[derive(Container)]` needs a type parameter to hold the element tuple.
    #[error("a container must have exactly one type parameter holding its elements, found none")]
    NoElementParameter,
    /// `#[derive(Container)]` found more than one candidate element parameter.
    #[error(
        "a container must have exactly one type parameter holding its elements, found {0}"
    )]
    TooManyTypeParameters(usize),
    /// Lifetime parameters cannot be carried through a rebuilt container.
    #[error("containers cannot have lifetime parameters, found `'{0}`")]
    LifetimeParameter(String),
    /// Value parameters have no identity and cannot be list elements.
    #[error("const parameter `{0}` is not supported: type lists only hold types")]
    ConstParameter(String),
    /// The `#[type_list(...)]` attribute did not have the shape `key = "..."`.
    #[error("expected `#[type_list(key = \"...\")]`")]
    MalformedAttribute,
    /// The key of a type was given more than once.
    #[error("duplicate `key` in `#[type_list(...)]`")]
    DuplicateKey,
    /// An explicit key was empty.
    #[error("a `key` must not be empty")]
    EmptyKey,
    /// A generator was asked for more arities than it supports.
    #[error("cannot generate impls beyond arity {max}, requested {requested}")]
    ArityTooLarge { requested: usize, max: usize },
}

impl CodegenError {
    /// Attach a span, producing an error that can be emitted as `compile_error!`.
    pub fn at(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}
