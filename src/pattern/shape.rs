//! Patterns describing expected shapes.

use crate::error::{AdtError, Result};
use crate::sealed::{Value, Variant};

/// The shape a scrutinee is expected to have.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Matches anything and binds nothing.
    Wildcard,
    /// Matches a value equal to this one.
    Literal(Value),
    /// Matches anything and binds it to the name.
    Capture(String),
    /// Matches a variant and its arguments.
    Constructor(ConstructorPattern),
}

/// A variant tag with one nested pattern per constructor argument.
///
/// Only [`Pattern::constructor`] and the fixed-arity helpers build one, so the
/// argument count always satisfies the variant's arity.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorPattern {
    variant: Variant,
    arguments: Vec<Pattern>,
}

impl ConstructorPattern {
    /// The variant this pattern expects.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The nested argument patterns.
    #[must_use]
    pub fn arguments(&self) -> &[Pattern] {
        &self.arguments
    }
}

impl Pattern {
    /// A capture binding `name`.
    pub fn capture(name: impl Into<String>) -> Self {
        Self::Capture(name.into())
    }

    /// A literal compared with `==`.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// A constructor pattern, checked against the variant's arity.
    ///
    /// ```rust
    /// use kindred::pattern::Pattern;
    /// use kindred::sealed::Variant;
    /// use kindred::AdtError;
    ///
    /// assert!(Pattern::constructor(Variant::Some, vec![Pattern::Wildcard]).is_ok());
    /// assert!(matches!(
    ///     Pattern::constructor(Variant::Cons, vec![Pattern::Wildcard]),
    ///     Err(AdtError::Arity { .. })
    /// ));
    /// ```
    pub fn constructor(variant: Variant, arguments: Vec<Self>) -> Result<Self> {
        let arity = variant.arity();
        if !arity.accepts(arguments.len()) {
            return Err(AdtError::Arity {
                variant: variant.name().to_string(),
                expected: arity,
                found: arguments.len(),
            });
        }
        Ok(Self::Constructor(ConstructorPattern { variant, arguments }))
    }

    /// Like [`Pattern::constructor`], resolving the variant from its tag.
    ///
    /// Abstract family names and undeclared tags fail with
    /// [`AdtError::SealViolation`].
    pub fn tagged(tag: &str, arguments: Vec<Self>) -> Result<Self> {
        Self::constructor(tag.parse()?, arguments)
    }

    const fn fixed(variant: Variant, arguments: Vec<Self>) -> Self {
        Self::Constructor(ConstructorPattern { variant, arguments })
    }

    /// Matches the empty list.
    #[must_use]
    pub const fn nil() -> Self {
        Self::fixed(Variant::Nil, Vec::new())
    }

    /// Matches a non-empty list, splitting it into head and tail.
    #[must_use]
    pub fn cons(head: Self, tail: Self) -> Self {
        Self::fixed(Variant::Cons, vec![head, tail])
    }

    /// Matches a list of exactly `elements.len()` elements.
    ///
    /// Fails with [`AdtError::Arity`] if `elements` is empty.
    pub fn non_empty_list(elements: Vec<Self>) -> Result<Self> {
        Self::constructor(Variant::NonEmptyList, elements)
    }

    /// Matches a present optional value.
    #[must_use]
    pub fn some(value: Self) -> Self {
        Self::fixed(Variant::Some, vec![value])
    }

    /// Matches an absent optional value.
    #[must_use]
    pub const fn none() -> Self {
        Self::fixed(Variant::None, Vec::new())
    }

    /// Matches a successful validation.
    #[must_use]
    pub fn success(value: Self) -> Self {
        Self::fixed(Variant::Success, vec![value])
    }

    /// Matches a failed validation.
    #[must_use]
    pub fn failure(error: Self) -> Self {
        Self::fixed(Variant::Failure, vec![error])
    }

    /// Matches a pair.
    #[must_use]
    pub fn pair(first: Self, second: Self) -> Self {
        Self::fixed(Variant::Pair, vec![first, second])
    }
}
