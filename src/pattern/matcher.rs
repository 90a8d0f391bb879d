//! First-match-wins evaluation of match expressions.

use tracing::{debug, trace};

use crate::control::Validation;
use crate::error::{AdtError, Arity, Result};
use crate::sealed::{Value, Variant};
use crate::typeclass::Show;

use super::bindings::{Bindings, Bound};
use super::shape::{ConstructorPattern, Pattern};

type Guard<'a> = Box<dyn Fn(&Bindings) -> bool + 'a>;
type Handler<'a, R> = Box<dyn FnOnce(Bindings) -> R + 'a>;

struct Clause<'a, R> {
    /// `None` matches any number of scrutinees.
    patterns: Option<Vec<Pattern>>,
    guard: Option<Guard<'a>>,
    handler: Handler<'a, R>,
}

/// Scrutinees together with an ordered list of clauses.
///
/// Built with [`match_on`] and run with [`MatchExpression::evaluate`]. The
/// first clause whose patterns all unify, and whose guard passes, produces the
/// result; later clauses are never tried.
pub struct MatchExpression<'a, R> {
    scrutinees: Vec<Value>,
    clauses: Vec<Clause<'a, R>>,
}

/// Starts a match expression over `scrutinees`.
///
/// # Examples
///
/// ```rust
/// use kindred::pattern::{match_on, Pattern};
/// use kindred::sealed::Value;
///
/// let describe = |value: Value| {
///     match_on([value])
///         .case([Pattern::nil()], |_| "empty".to_string())
///         .case(
///             [Pattern::cons(Pattern::capture("head"), Pattern::Wildcard)],
///             |bindings| {
///                 let head = bindings.get("head").map(ToString::to_string);
///                 format!("starts with {}", head.unwrap_or_default())
///             },
///         )
///         .evaluate()
/// };
///
/// assert_eq!(describe(Value::nil()), Ok("empty".to_string()));
/// assert_eq!(describe(Value::list([7, 8])), Ok("starts with 7".to_string()));
/// assert!(describe(Value::Int(1)).is_err());
/// ```
pub fn match_on<'a, R, I>(scrutinees: I) -> MatchExpression<'a, R>
where
    I: IntoIterator<Item = Value>,
{
    MatchExpression {
        scrutinees: scrutinees.into_iter().collect(),
        clauses: Vec::new(),
    }
}

impl<'a, R> MatchExpression<'a, R> {
    /// Adds a clause with one pattern per scrutinee.
    #[must_use]
    pub fn case<P, F>(mut self, patterns: P, handler: F) -> Self
    where
        P: IntoIterator<Item = Pattern>,
        F: FnOnce(Bindings) -> R + 'a,
    {
        self.clauses.push(Clause {
            patterns: Some(patterns.into_iter().collect()),
            guard: None,
            handler: Box::new(handler),
        });
        self
    }

    /// Adds a clause that also requires `guard` to accept its bindings.
    #[must_use]
    pub fn case_if<P, G, F>(mut self, patterns: P, guard: G, handler: F) -> Self
    where
        P: IntoIterator<Item = Pattern>,
        G: Fn(&Bindings) -> bool + 'a,
        F: FnOnce(Bindings) -> R + 'a,
    {
        self.clauses.push(Clause {
            patterns: Some(patterns.into_iter().collect()),
            guard: Some(Box::new(guard)),
            handler: Box::new(handler),
        });
        self
    }

    /// Adds a catch-all clause matching every scrutinee.
    #[must_use]
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.clauses.push(Clause {
            patterns: None,
            guard: None,
            handler: Box::new(|_| handler()),
        });
        self
    }

    /// Runs the clauses in order.
    ///
    /// # Errors
    ///
    /// - [`AdtError::Arity`] if a clause has a different number of patterns
    ///   than there are scrutinees; this is checked before any clause runs.
    /// - [`AdtError::NonExhaustiveMatch`] if no clause matches.
    pub fn evaluate(self) -> Result<R> {
        let Self {
            scrutinees,
            clauses,
        } = self;

        for (index, clause) in clauses.iter().enumerate() {
            if let Some(patterns) = &clause.patterns
                && patterns.len() != scrutinees.len()
            {
                return Err(AdtError::Arity {
                    variant: format!("match clause {}", index + 1),
                    expected: Arity::Exactly(scrutinees.len()),
                    found: patterns.len(),
                });
            }
        }

        for (index, clause) in clauses.into_iter().enumerate() {
            let Some(bindings) = unify_clause(clause.patterns.as_deref(), &scrutinees) else {
                continue;
            };
            if clause.guard.as_ref().is_some_and(|guard| !guard(&bindings)) {
                trace!(clause = index, "guard rejected clause");
                continue;
            }
            trace!(clause = index, bound = bindings.len(), "match clause selected");
            return Ok((clause.handler)(bindings));
        }

        let shown = show_scrutinees(&scrutinees);
        debug!(scrutinees = %shown, "non-exhaustive match");
        Err(AdtError::NonExhaustiveMatch { scrutinees: shown })
    }
}

fn show_scrutinees(scrutinees: &[Value]) -> String {
    let shown: Vec<String> = scrutinees.iter().map(Show::show).collect();
    format!("({})", shown.join(", "))
}

fn unify_clause(patterns: Option<&[Pattern]>, scrutinees: &[Value]) -> Option<Bindings> {
    let mut bindings = Bindings::new();
    if let Some(patterns) = patterns {
        for (pattern, scrutinee) in patterns.iter().zip(scrutinees) {
            if !unify(pattern, scrutinee, &mut bindings) {
                return None;
            }
        }
    }
    Some(bindings)
}

fn unify(pattern: &Pattern, value: &Value, bindings: &mut Bindings) -> bool {
    match pattern {
        Pattern::Wildcard => true,
        Pattern::Literal(expected) => expected == value,
        Pattern::Capture(name) => matches!(bindings.bind(name, value), Bound::Consistent),
        Pattern::Constructor(constructor) => unify_constructor(constructor, value, bindings),
    }
}

fn unify_constructor(
    constructor: &ConstructorPattern,
    value: &Value,
    bindings: &mut Bindings,
) -> bool {
    let arguments = constructor.arguments();
    match (constructor.variant(), value) {
        (Variant::Nil, Value::List(list)) => list.is_empty(),
        (Variant::Cons, Value::List(list)) => match (list.head(), arguments) {
            (Some(head), [head_pattern, tail_pattern]) => {
                unify(head_pattern, head, bindings)
                    && unify(tail_pattern, &Value::List(list.tail()), bindings)
            }
            _ => false,
        },
        (Variant::NonEmptyList, Value::List(list)) => {
            list.len() == arguments.len()
                && arguments
                    .iter()
                    .zip(list.iter())
                    .all(|(pattern, element)| unify(pattern, element, bindings))
        }
        (Variant::Some, Value::Optional(Some(inner)))
        | (Variant::Success, Value::Validated(Validation::Success(inner)))
        | (Variant::Failure, Value::Validated(Validation::Failure(inner))) => {
            unify_all(arguments, [&**inner], bindings)
        }
        (Variant::None, Value::Optional(None)) => true,
        (Variant::Pair, Value::Pair(first, second)) => {
            unify_all(arguments, [&**first, &**second], bindings)
        }
        _ => false,
    }
}

fn unify_all<const N: usize>(
    patterns: &[Pattern],
    values: [&Value; N],
    bindings: &mut Bindings,
) -> bool {
    patterns.len() == N
        && patterns
            .iter()
            .zip(values)
            .all(|(pattern, value)| unify(pattern, value, bindings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(value: Value) -> Result<&'static str> {
        match_on([value])
            .case([Pattern::nil()], |_| "nil")
            .case([Pattern::cons(Pattern::Wildcard, Pattern::nil())], |_| "one")
            .case([Pattern::cons(Pattern::Wildcard, Pattern::Wildcard)], |_| "many")
            .case([Pattern::some(Pattern::Wildcard)], |_| "some")
            .case([Pattern::none()], |_| "none")
            .evaluate()
    }

    #[rstest]
    #[case(Value::nil(), "nil")]
    #[case(Value::list([1]), "one")]
    #[case(Value::list([1, 2]), "many")]
    #[case(Value::some(1), "some")]
    #[case(Value::none(), "none")]
    fn first_matching_clause_wins(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(classify(value), Ok(expected));
    }

    #[rstest]
    fn uncovered_shape_is_non_exhaustive() {
        assert_eq!(
            classify(Value::success(1)),
            Err(AdtError::NonExhaustiveMatch {
                scrutinees: "(Success(1))".to_string(),
            })
        );
    }

    #[rstest]
    fn cons_binds_head_and_tail() {
        let result = match_on([Value::list([1, 2, 3])])
            .case(
                [Pattern::cons(Pattern::capture("h"), Pattern::capture("t"))],
                |bindings| (bindings["h"].clone(), bindings["t"].clone()),
            )
            .evaluate();
        assert_eq!(result, Ok((Value::Int(1), Value::list([2, 3]))));
    }

    #[rstest]
    fn non_empty_list_matches_exact_length() {
        let pattern = Pattern::non_empty_list(vec![Pattern::capture("a"), Pattern::capture("b")])
            .expect("two elements satisfy the arity");
        let matched = |value: Value| {
            match_on([value])
                .case([pattern.clone()], |bindings| bindings.len())
                .otherwise(|| 0)
                .evaluate()
        };
        assert_eq!(matched(Value::list([1, 2])), Ok(2));
        assert_eq!(matched(Value::list([1, 2, 3])), Ok(0));
        assert_eq!(matched(Value::list([1])), Ok(0));
    }

    #[rstest]
    fn literals_compare_by_equality() {
        let result = match_on([Value::some(2)])
            .case([Pattern::some(Pattern::literal(1))], |_| "one")
            .case([Pattern::some(Pattern::literal(2))], |_| "two")
            .evaluate();
        assert_eq!(result, Ok("two"));
    }

    #[rstest]
    fn repeated_capture_requires_equal_values() {
        let same = |first: Value, second: Value| {
            match_on([first, second])
                .case([Pattern::capture("x"), Pattern::capture("x")], |_| true)
                .otherwise(|| false)
                .evaluate()
        };
        assert_eq!(same(Value::Int(1), Value::Int(1)), Ok(true));
        assert_eq!(same(Value::Int(1), Value::Int(2)), Ok(false));
    }

    #[rstest]
    fn guard_failure_falls_through() {
        let result = match_on([Value::Int(5)])
            .case_if(
                [Pattern::capture("n")],
                |bindings| bindings["n"].as_int().is_some_and(|n| n > 10),
                |_| "big",
            )
            .case([Pattern::Wildcard], |_| "small")
            .evaluate();
        assert_eq!(result, Ok("small"));
    }

    #[rstest]
    fn failed_clause_leaves_no_bindings_behind() {
        let result = match_on([Value::pair(1, 2)])
            .case(
                [Pattern::pair(Pattern::capture("a"), Pattern::literal(3))],
                |bindings| bindings.len(),
            )
            .case([Pattern::pair(Pattern::Wildcard, Pattern::capture("b"))], |bindings| {
                bindings.len()
            })
            .evaluate();
        assert_eq!(result, Ok(1));
    }

    #[rstest]
    fn clause_with_wrong_pattern_count_is_an_arity_error() {
        let result = match_on([Value::Int(1), Value::Int(2)])
            .case([Pattern::Wildcard], |_| ())
            .evaluate();
        assert_eq!(
            result,
            Err(AdtError::Arity {
                variant: "match clause 1".to_string(),
                expected: Arity::Exactly(2),
                found: 1,
            })
        );
    }

    #[rstest]
    fn otherwise_never_fails() {
        for value in [Value::Unit, Value::nil(), Value::failure("e"), Value::pair(1, 2)] {
            let result = match_on([value, Value::Int(0)])
                .case([Pattern::none(), Pattern::Wildcard], |_| false)
                .otherwise(|| true)
                .evaluate();
            assert_eq!(result, Ok(true));
        }
    }

    #[rstest]
    fn later_clauses_are_not_run() {
        let calls = std::cell::RefCell::new(Vec::new());
        let result = match_on([Value::Int(1)])
            .case([Pattern::Wildcard], |_| calls.borrow_mut().push("first"))
            .case([Pattern::Wildcard], |_| calls.borrow_mut().push("second"))
            .evaluate();
        assert_eq!(result, Ok(()));
        assert_eq!(calls.into_inner(), vec!["first"]);
    }
}
