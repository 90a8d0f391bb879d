//! Validated construction of dynamic values.

use tracing::debug;

use crate::control::Validation;
use crate::error::{AdtError, Result};
use crate::persistent::ImmList;

use super::{Value, Variant};

/// Builds the variant named by `tag` from `arguments`.
///
/// Fails with
///
/// - [`AdtError::SealViolation`] for an abstract family name (`"List"`,
///   `"Option"`, `"Validation"`) or a tag no family declares,
/// - [`AdtError::Arity`] when the argument count does not satisfy the
///   variant's arity,
/// - [`AdtError::TypeMismatch`] when the second argument of `Cons` is not a
///   list.
///
/// # Examples
///
/// ```rust
/// use kindred::sealed::{construct, Value};
/// use kindred::{AdtError, Arity};
///
/// let nel = construct("NonEmptyList", vec![Value::Int(1), Value::Int(2)]).unwrap();
/// assert_eq!(nel, Value::list([1, 2]));
///
/// let error = construct("Nil", vec![Value::Int(1)]).unwrap_err();
/// assert_eq!(
///     error,
///     AdtError::Arity { variant: "Nil".to_string(), expected: Arity::Exactly(0), found: 1 }
/// );
/// ```
pub fn construct(tag: &str, arguments: Vec<Value>) -> Result<Value> {
    let variant = tag.parse::<Variant>().inspect_err(|error| {
        debug!(tag, %error, "refused sealed construction");
    })?;

    let arity = variant.arity();
    if !arity.accepts(arguments.len()) {
        debug!(%variant, %arity, found = arguments.len(), "constructor arity violated");
        return Err(arity_error(variant, arguments.len()));
    }

    let value = match variant {
        Variant::Nil => Value::List(ImmList::nil()),
        Variant::Cons => {
            let [head, tail] = exactly(variant, arguments)?;
            match tail {
                Value::List(tail) => Value::List(ImmList::cons(head, &tail)),
                other => {
                    debug!(found = other.type_name(), "Cons tail is not a list");
                    return Err(AdtError::type_mismatch(
                        "2nd argument of Cons",
                        "List",
                        other.type_name(),
                    ));
                }
            }
        }
        Variant::NonEmptyList => Value::List(ImmList::from(arguments)),
        Variant::Some => {
            let [value] = exactly(variant, arguments)?;
            Value::Optional(Some(Box::new(value)))
        }
        Variant::None => Value::Optional(None),
        Variant::Success => {
            let [value] = exactly(variant, arguments)?;
            Value::Validated(Validation::Success(Box::new(value)))
        }
        Variant::Failure => {
            let [error] = exactly(variant, arguments)?;
            Value::Validated(Validation::Failure(Box::new(error)))
        }
        Variant::Pair => {
            let [first, second] = exactly(variant, arguments)?;
            Value::Pair(Box::new(first), Box::new(second))
        }
    };
    Ok(value)
}

fn exactly<const N: usize>(variant: Variant, arguments: Vec<Value>) -> Result<[Value; N]> {
    arguments
        .try_into()
        .map_err(|arguments: Vec<Value>| arity_error(variant, arguments.len()))
}

fn arity_error(variant: Variant, found: usize) -> AdtError {
    AdtError::Arity {
        variant: variant.name().to_string(),
        expected: variant.arity(),
        found,
    }
}
