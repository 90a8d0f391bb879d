//! Dynamic semigroup combination of values.

use crate::error::{AdtError, Result};
use crate::sealed::Value;
use crate::typeclass::Semigroup;

use super::{Pattern, match_on};

impl Value {
    /// Combines two values of the same runtime type.
    ///
    /// Integers and floats add, strings and lists concatenate, `Unit`
    /// combines to itself, optionals combine their payloads when both are
    /// present and otherwise keep the present one, pairs combine pairwise and
    /// validations follow [`Value::combine_validations`].
    ///
    /// # Errors
    ///
    /// - [`AdtError::TypeMismatch`] if the runtime types differ or the type
    ///   has no combination (`Bool`).
    /// - [`AdtError::Overflow`] if adding two integers leaves the `i64` range.
    ///
    /// ```rust
    /// use kindred::sealed::Value;
    ///
    /// assert_eq!(Value::from("a").try_combine(&Value::from("b")), Ok(Value::from("ab")));
    /// assert_eq!(Value::some(1).try_combine(&Value::none()), Ok(Value::some(1)));
    /// assert!(Value::Int(1).try_combine(&Value::from("b")).is_err());
    /// ```
    pub fn try_combine(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Unit, Self::Unit) => Ok(Self::Unit),
            (Self::Int(left), Self::Int(right)) => left
                .checked_add(*right)
                .map(Self::Int)
                .ok_or_else(|| AdtError::Overflow {
                    context: "combine".to_string(),
                    left: *left,
                    right: *right,
                }),
            (Self::Float(left), Self::Float(right)) => Ok(Self::Float(left + right)),
            (Self::Str(left), Self::Str(right)) => Ok(Self::Str(left.combine_ref(right))),
            (Self::List(left), Self::List(right)) => Ok(Self::List(left.append(right))),
            (Self::Optional(Some(left)), Self::Optional(Some(right))) => {
                Ok(Self::some(left.try_combine(right)?))
            }
            (Self::Optional(left), Self::Optional(right)) => {
                Ok(Self::Optional(left.clone().or_else(|| right.clone())))
            }
            (Self::Pair(left_first, left_second), Self::Pair(right_first, right_second)) => {
                Ok(Self::pair(
                    left_first.try_combine(right_first)?,
                    left_second.try_combine(right_second)?,
                ))
            }
            (Self::Validated(_), Self::Validated(_)) => {
                Self::combine_validations(self, other)
            }
            (Self::Bool(_), Self::Bool(_)) => Err(AdtError::type_mismatch(
                "combine",
                "a combinable type",
                "Bool",
            )),
            _ => Err(AdtError::type_mismatch(
                "combine",
                self.type_name(),
                other.type_name(),
            )),
        }
    }

    /// Combines two validations, accumulating failures.
    ///
    /// Clauses, in order:
    ///
    /// 1. `Success(a)`, `Success(b)` gives `Success(a combined with b)`.
    /// 2. `Failure(a)`, `Failure(b)` gives `Failure(a combined with b)`.
    /// 3. `Failure(_)`, anything gives `this`.
    /// 4. Otherwise `that`.
    ///
    /// # Errors
    ///
    /// [`AdtError::TypeMismatch`] if either side is not a validation or the
    /// payloads cannot be combined.
    ///
    /// ```rust
    /// use kindred::sealed::Value;
    ///
    /// let combined = Value::combine_validations(&Value::success("a"), &Value::failure("b"));
    /// assert_eq!(combined, Ok(Value::failure("b")));
    ///
    /// let combined = Value::combine_validations(&Value::failure("a"), &Value::failure("b"));
    /// assert_eq!(combined, Ok(Value::failure("ab")));
    /// ```
    pub fn combine_validations(this: &Self, that: &Self) -> Result<Self> {
        for side in [this, that] {
            if !matches!(side, Self::Validated(_)) {
                return Err(AdtError::type_mismatch(
                    "combine_validations",
                    "Validation",
                    side.type_name(),
                ));
            }
        }

        match_on::<Result<Self>, _>([this.clone(), that.clone()])
            .case(
                [
                    Pattern::success(Pattern::capture("a")),
                    Pattern::success(Pattern::capture("b")),
                ],
                |bindings| {
                    let combined = bindings.require("a")?.try_combine(bindings.require("b")?)?;
                    Ok(Self::success(combined))
                },
            )
            .case(
                [
                    Pattern::failure(Pattern::capture("a")),
                    Pattern::failure(Pattern::capture("b")),
                ],
                |bindings| {
                    let combined = bindings.require("a")?.try_combine(bindings.require("b")?)?;
                    Ok(Self::failure(combined))
                },
            )
            .case(
                [Pattern::failure(Pattern::Wildcard), Pattern::Wildcard],
                |_| Ok(this.clone()),
            )
            .otherwise(|| Ok(that.clone()))
            .evaluate()?
    }
}
