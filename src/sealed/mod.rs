//! Sealed variant families.
//!
//! A sealed family is a closed set of mutually exclusive shapes. Two layers
//! enforce the closure:
//!
//! - Statically, each family is a crate type ([`ImmList`], [`Option`],
//!   [`Validation`], and pairs) that implements [`SealedFamily`]. The trait has a
//!   private supertrait, so no type outside this crate can join a family.
//! - Dynamically, [`Value`] is the universe the matching engine works on, and
//!   [`construct`] is its only validated entry point: it refuses abstract
//!   family names and undeclared tags, and checks every variant's [`Arity`]
//!   and argument types.
//!
//! # Examples
//!
//! ```rust
//! use kindred::sealed::{construct, Family, SealedFamily, Value, Variant};
//! use kindred::persistent::ImmList;
//!
//! let list: ImmList<i32> = ImmList::new();
//! assert_eq!(list.variant(), Variant::Nil);
//! assert_eq!(<ImmList<i32> as SealedFamily>::FAMILY, Family::List);
//!
//! let cons = construct("Cons", vec![Value::Int(1), Value::list([2, 3])]).unwrap();
//! assert_eq!(cons.to_string(), "List(1, 2, 3)");
//! ```
//!
//! Types outside the crate cannot implement [`SealedFamily`]:
//!
//! ```compile_fail
//! use kindred::sealed::{Family, SealedFamily, Variant};
//!
//! struct Tree;
//!
//! impl SealedFamily for Tree {
//!     const FAMILY: Family = Family::List;
//!
//!     fn variant(&self) -> Variant {
//!         Variant::Nil
//!     }
//! }
//! ```
//!
//! [`Arity`]: crate::Arity

mod construct;
mod value;

pub use construct::construct;
pub use value::Value;

use std::fmt;
use std::str::FromStr;

use crate::control::Validation;
use crate::error::{AdtError, Arity, SealReason};
use crate::persistent::ImmList;

/// A sealed family of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Persistent lists: `Nil`, `Cons`, `NonEmptyList`.
    List,
    /// Optional values: `Some`, `None`.
    Option,
    /// Accumulating validations: `Success`, `Failure`.
    Validation,
    /// Pairs, whose single variant shares the family's name.
    Pair,
}

impl Family {
    /// Every family.
    pub const ALL: [Self; 4] = [Self::List, Self::Option, Self::Validation, Self::Pair];

    /// The family's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Option => "Option",
            Self::Validation => "Validation",
            Self::Pair => "Pair",
        }
    }

    /// The variants that make up this family.
    #[must_use]
    pub const fn variants(self) -> &'static [Variant] {
        match self {
            Self::List => &[Variant::Nil, Variant::Cons, Variant::NonEmptyList],
            Self::Option => &[Variant::Some, Variant::None],
            Self::Validation => &[Variant::Success, Variant::Failure],
            Self::Pair => &[Variant::Pair],
        }
    }

    /// Returns `true` if the family name denotes an abstract supertype that
    /// cannot itself be constructed.
    #[must_use]
    pub const fn is_abstract(self) -> bool {
        !matches!(self, Self::Pair)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A concrete variant of a sealed family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The empty list.
    Nil,
    /// A head element followed by a tail list.
    Cons,
    /// A list built from one or more elements.
    NonEmptyList,
    /// A present optional value.
    Some,
    /// An absent optional value.
    None,
    /// A successful validation.
    Success,
    /// A failed validation.
    Failure,
    /// A pair of two values.
    Pair,
}

impl Variant {
    /// Every declared variant.
    pub const ALL: [Self; 8] = [
        Self::Nil,
        Self::Cons,
        Self::NonEmptyList,
        Self::Some,
        Self::None,
        Self::Success,
        Self::Failure,
        Self::Pair,
    ];

    /// The family this variant belongs to.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Nil | Self::Cons | Self::NonEmptyList => Family::List,
            Self::Some | Self::None => Family::Option,
            Self::Success | Self::Failure => Family::Validation,
            Self::Pair => Family::Pair,
        }
    }

    /// How many constructor arguments the variant takes.
    ///
    /// ```rust
    /// use kindred::Arity;
    /// use kindred::sealed::Variant;
    ///
    /// assert_eq!(Variant::Cons.arity(), Arity::Exactly(2));
    /// assert_eq!(Variant::NonEmptyList.arity(), Arity::AtLeast(1));
    /// ```
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Nil | Self::None => Arity::Exactly(0),
            Self::Some | Self::Success | Self::Failure => Arity::Exactly(1),
            Self::Cons | Self::Pair => Arity::Exactly(2),
            Self::NonEmptyList => Arity::AtLeast(1),
        }
    }

    /// The variant's tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Cons => "Cons",
            Self::NonEmptyList => "NonEmptyList",
            Self::Some => "Some",
            Self::None => "None",
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Pair => "Pair",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = AdtError;

    /// Resolves a tag, refusing abstract family names and undeclared tags.
    ///
    /// ```rust
    /// use kindred::sealed::Variant;
    /// use kindred::{AdtError, SealReason};
    ///
    /// assert_eq!("Cons".parse::<Variant>(), Ok(Variant::Cons));
    /// assert!(matches!(
    ///     "Option".parse::<Variant>(),
    ///     Err(AdtError::SealViolation { reason: SealReason::AbstractFamily, .. })
    /// ));
    /// ```
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let refuse = |reason| AdtError::SealViolation {
            requested: tag.to_string(),
            reason,
        };

        if Family::ALL
            .iter()
            .any(|family| family.is_abstract() && family.name() == tag)
        {
            return Err(refuse(SealReason::AbstractFamily));
        }

        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == tag)
            .ok_or_else(|| refuse(SealReason::UndeclaredVariant))
    }
}

mod private {
    pub trait Sealed {}

    impl<T> Sealed for crate::persistent::ImmList<T> {}
    impl<T> Sealed for Option<T> {}
    impl<E, A> Sealed for crate::control::Validation<E, A> {}
    impl<A, B> Sealed for (A, B) {}
}

/// A type belonging to one of the crate's sealed families.
///
/// The set of implementors is closed: the private supertrait keeps types
/// outside this crate from implementing it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a member of a sealed family",
    note = "sealed families are closed; only lists, options, validations and pairs belong to one"
)]
pub trait SealedFamily: private::Sealed {
    /// The family the type belongs to.
    const FAMILY: Family;

    /// The variant this value was built with.
    fn variant(&self) -> Variant;
}

impl<T> SealedFamily for ImmList<T> {
    const FAMILY: Family = Family::List;

    fn variant(&self) -> Variant {
        if self.is_empty() {
            Variant::Nil
        } else {
            Variant::Cons
        }
    }
}

impl<T> SealedFamily for Option<T> {
    const FAMILY: Family = Family::Option;

    fn variant(&self) -> Variant {
        match self {
            Some(_) => Variant::Some,
            None => Variant::None,
        }
    }
}

impl<E, A> SealedFamily for Validation<E, A> {
    const FAMILY: Family = Family::Validation;

    fn variant(&self) -> Variant {
        match self {
            Validation::Success(_) => Variant::Success,
            Validation::Failure(_) => Variant::Failure,
        }
    }
}

impl<A, B> SealedFamily for (A, B) {
    const FAMILY: Family = Family::Pair;

    fn variant(&self) -> Variant {
        Variant::Pair
    }
}
