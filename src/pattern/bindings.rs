//! Names bound by a successful match.

use std::ops::Index;

use smallvec::SmallVec;

use crate::error::{AdtError, Result};
use crate::sealed::Value;

/// The captures bound by the clause that won a match.
///
/// Most clauses bind a handful of names, so they are kept inline in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: SmallVec<[(String, Value); 4]>,
}

/// Outcome of binding a name during unification.
pub(crate) enum Bound {
    /// The name was new, or already bound to an equal value.
    Consistent,
    /// The name was already bound to a different value.
    Conflicting,
}

impl Bindings {
    /// Creates an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// The value bound to `name`, or [`AdtError::UnboundCapture`].
    ///
    /// Handlers that propagate errors with `?` should prefer this over
    /// indexing, which panics on a missing name.
    ///
    /// # Errors
    ///
    /// [`AdtError::UnboundCapture`] if `name` is not bound.
    ///
    /// ```rust
    /// use kindred::pattern::{match_on, Pattern};
    /// use kindred::sealed::Value;
    /// use kindred::AdtError;
    ///
    /// let result = match_on([Value::some(1)])
    ///     .case([Pattern::some(Pattern::capture("x"))], |bindings| {
    ///         bindings.require("y").cloned()
    ///     })
    ///     .evaluate();
    /// assert_eq!(
    ///     result,
    ///     Ok(Err(AdtError::UnboundCapture { name: "y".to_string() }))
    /// );
    /// ```
    pub fn require(&self, name: &str) -> Result<&Value> {
        self.get(name).ok_or_else(|| AdtError::UnboundCapture {
            name: name.to_string(),
        })
    }

    /// Removes and returns the value bound to `name`.
    pub fn take(&mut self, name: &str) -> Option<Value> {
        let position = self.entries.iter().position(|(bound, _)| bound == name)?;
        Some(self.entries.remove(position).1)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn bind(&mut self, name: &str, value: &Value) -> Bound {
        match self.get(name) {
            Some(existing) if existing == value => Bound::Consistent,
            Some(_) => Bound::Conflicting,
            None => {
                self.entries.push((name.to_string(), value.clone()));
                Bound::Consistent
            }
        }
    }
}

impl Index<&str> for Bindings {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `name` is not bound. Use [`Bindings::get`] or
    /// [`Bindings::require`] when the name may be missing.
    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no binding named `{name}`"),
        }
    }
}
