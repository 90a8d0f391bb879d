//! The dynamic value universe.

use std::fmt;

use tracing::debug;

use crate::control::Validation;
use crate::error::{AdtError, Result};
use crate::persistent::ImmList;
use crate::typeclass::{Show, show_constructor};

use super::Variant;

/// A runtime value whose shape is inspected by the matching engine.
///
/// Scalars carry no variant; lists, optionals, validations and pairs report
/// the variant of their sealed family through [`Value::variant`]. Compound
/// values should be built with [`construct`](super::construct) or the helper
/// constructors, which always produce a well-formed shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The unit value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A persistent list of values.
    List(ImmList<Value>),
    /// An optional value.
    Optional(Option<Box<Value>>),
    /// A validation holding a failure or a success.
    Validated(Validation<Box<Value>, Box<Value>>),
    /// A pair of values.
    Pair(Box<Value>, Box<Value>),
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Value: Send, Sync);

impl Value {
    /// Builds a list from anything convertible into values.
    ///
    /// ```rust
    /// use kindred::sealed::Value;
    ///
    /// assert_eq!(Value::list([1, 2]).to_string(), "List(1, 2)");
    /// ```
    pub fn list<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(elements.into_iter().map(Into::into).collect())
    }

    /// The empty list.
    #[must_use]
    pub fn nil() -> Self {
        Self::List(ImmList::nil())
    }

    /// A present optional value.
    pub fn some(value: impl Into<Self>) -> Self {
        Self::Optional(Some(Box::new(value.into())))
    }

    /// An absent optional value.
    #[must_use]
    pub const fn none() -> Self {
        Self::Optional(None)
    }

    /// A successful validation.
    pub fn success(value: impl Into<Self>) -> Self {
        Self::Validated(Validation::Success(Box::new(value.into())))
    }

    /// A failed validation.
    pub fn failure(error: impl Into<Self>) -> Self {
        Self::Validated(Validation::Failure(Box::new(error.into())))
    }

    /// A pair.
    pub fn pair(first: impl Into<Self>, second: impl Into<Self>) -> Self {
        Self::Pair(Box::new(first.into()), Box::new(second.into()))
    }

    /// The runtime type name reported in errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Unit => "Unit",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Str(_) => "String",
            Self::List(_) => "List",
            Self::Optional(_) => "Option",
            Self::Validated(_) => "Validation",
            Self::Pair(..) => "Pair",
        }
    }

    /// The sealed variant of a compound value; `None` for scalars.
    ///
    /// A non-empty list reports [`Variant::Cons`].
    #[must_use]
    pub fn variant(&self) -> Option<Variant> {
        match self {
            Self::List(list) if list.is_empty() => Some(Variant::Nil),
            Self::List(_) => Some(Variant::Cons),
            Self::Optional(Some(_)) => Some(Variant::Some),
            Self::Optional(None) => Some(Variant::None),
            Self::Validated(Validation::Success(_)) => Some(Variant::Success),
            Self::Validated(Validation::Failure(_)) => Some(Variant::Failure),
            Self::Pair(..) => Some(Variant::Pair),
            Self::Unit | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_) => None,
        }
    }

    /// Returns the integer if this is an `Int`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the list if this is a `List`.
    #[must_use]
    pub const fn as_list(&self) -> Option<&ImmList<Self>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Folds a list left to right without a seed.
    ///
    /// The first element is the initial accumulator. Every intermediate
    /// result must have the same runtime type as the elements; otherwise the
    /// fold stops with [`AdtError::TypeMismatch`]. An empty list gives
    /// `Ok(None)`, and a scrutinee that is not a list is a type mismatch.
    ///
    /// ```rust
    /// use kindred::sealed::Value;
    /// use kindred::AdtError;
    ///
    /// let list = Value::list([1, 2, 3]);
    /// let sum = list.reduce(|x, y| Value::Int(x.as_int().unwrap() + y.as_int().unwrap()));
    /// assert_eq!(sum, Ok(Some(Value::Int(6))));
    ///
    /// let broken = list.reduce(|_, _| Value::from("oh no"));
    /// assert!(matches!(broken, Err(AdtError::TypeMismatch { .. })));
    /// ```
    pub fn reduce<F>(&self, mut combiner: F) -> Result<Option<Self>>
    where
        F: FnMut(Self, Self) -> Self,
    {
        let Self::List(list) = self else {
            return Err(AdtError::type_mismatch("reduce", "List", self.type_name()));
        };

        let mut elements = list.iter();
        let Some(first) = elements.next() else {
            return Ok(None);
        };

        let mut accumulator = first.clone();
        for element in elements {
            let combined = combiner(accumulator, element.clone());
            if combined.type_name() != element.type_name() {
                debug!(
                    expected = element.type_name(),
                    found = combined.type_name(),
                    "reduce combiner changed the element type"
                );
                return Err(AdtError::type_mismatch(
                    "result of reduce",
                    element.type_name(),
                    combined.type_name(),
                ));
            }
            accumulator = combined;
        }
        Ok(Some(accumulator))
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl From<$integer> for Value {
                fn from(value: $integer) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<ImmList<Self>> for Value {
    fn from(list: ImmList<Self>) -> Self {
        Self::List(list)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::list(elements)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::none, Self::some)
    }
}

impl<E: Into<Self>, A: Into<Self>> From<Validation<E, A>> for Value {
    fn from(validation: Validation<E, A>) -> Self {
        validation.fold(Self::failure, Self::success)
    }
}

impl<A: Into<Self>, B: Into<Self>> From<(A, B)> for Value {
    fn from((first, second): (A, B)) -> Self {
        Self::pair(first, second)
    }
}

impl Show for Value {
    fn show(&self) -> String {
        match self {
            Self::Unit => ().show(),
            Self::Bool(value) => value.show(),
            Self::Int(value) => value.show(),
            Self::Float(value) => value.show(),
            Self::Str(value) => value.show(),
            Self::List(list) => list.show(),
            Self::Optional(value) => value.show(),
            Self::Validated(validation) => validation.show(),
            Self::Pair(first, second) => show_constructor("Pair", [&**first, &**second]),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let (tag, arguments): (Variant, Vec<&Self>) = match self {
            Self::Unit => return serializer.serialize_unit(),
            Self::Bool(value) => return serializer.serialize_bool(*value),
            Self::Int(value) => return serializer.serialize_i64(*value),
            Self::Float(value) => return serializer.serialize_f64(*value),
            Self::Str(value) => return serializer.serialize_str(value),
            Self::List(list) if list.is_empty() => (Variant::Nil, Vec::new()),
            Self::List(list) => (Variant::NonEmptyList, list.iter().collect()),
            Self::Optional(Some(value)) => (Variant::Some, vec![&**value]),
            Self::Optional(None) => (Variant::None, Vec::new()),
            Self::Validated(Validation::Success(value)) => (Variant::Success, vec![&**value]),
            Self::Validated(Validation::Failure(error)) => (Variant::Failure, vec![&**error]),
            Self::Pair(first, second) => (Variant::Pair, vec![&**first, &**second]),
        };

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("tag", tag.name())?;
        map.serialize_entry("args", &arguments)?;
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar or a {\"tag\", \"args\"} object")
    }

    fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Unit)
    }

    fn visit_bool<E: serde::de::Error>(self, value: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> std::result::Result<Value, E> {
        Ok(Value::Int(value))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> std::result::Result<Value, E> {
        i64::try_from(value)
            .map(Value::Int)
            .map_err(|_| E::custom(format!("integer {value} does not fit in i64")))
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> std::result::Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> std::result::Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> std::result::Result<Value, E> {
        Ok(Value::Str(value))
    }

    fn visit_map<M>(self, mut access: M) -> std::result::Result<Value, M::Error>
    where
        M: serde::de::MapAccess<'de>,
    {
        use serde::de::Error;

        let mut tag: Option<String> = None;
        let mut arguments: Option<Vec<Value>> = None;

        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "tag" if tag.is_none() => tag = Some(access.next_value()?),
                "args" if arguments.is_none() => arguments = Some(access.next_value()?),
                "tag" | "args" => return Err(M::Error::custom(format!("duplicate field `{key}`"))),
                other => return Err(M::Error::unknown_field(other, &["tag", "args"])),
            }
        }

        let tag = tag.ok_or_else(|| M::Error::missing_field("tag"))?;
        super::construct(&tag, arguments.unwrap_or_default()).map_err(M::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Unit, "Unit")]
    #[case(Value::Bool(true), "Bool")]
    #[case(Value::Int(1), "Int")]
    #[case(Value::Float(1.5), "Float")]
    #[case(Value::from("a"), "String")]
    #[case(Value::nil(), "List")]
    #[case(Value::none(), "Option")]
    #[case(Value::success(1), "Validation")]
    #[case(Value::pair(1, 2), "Pair")]
    fn type_names(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.type_name(), expected);
    }

    #[rstest]
    #[case(Value::nil(), Some(Variant::Nil))]
    #[case(Value::list([1]), Some(Variant::Cons))]
    #[case(Value::some(1), Some(Variant::Some))]
    #[case(Value::none(), Some(Variant::None))]
    #[case(Value::success(1), Some(Variant::Success))]
    #[case(Value::failure("e"), Some(Variant::Failure))]
    #[case(Value::pair(1, 2), Some(Variant::Pair))]
    #[case(Value::Int(1), None)]
    fn variants(#[case] value: Value, #[case] expected: Option<Variant>) {
        assert_eq!(value.variant(), expected);
    }

    #[rstest]
    #[case(Value::list([1, 2, 3]), "List(1, 2, 3)")]
    #[case(Value::nil(), "List()")]
    #[case(Value::some(2), "Some(2)")]
    #[case(Value::none(), "None")]
    #[case(Value::success(1), "Success(1)")]
    #[case(Value::failure("b"), r#"Failure("b")"#)]
    #[case(Value::pair(1, "A"), r#"Pair(1, "A")"#)]
    #[case(Value::Unit, "()")]
    #[case(Value::Float(1.0), "1.0")]
    #[case(Value::Int(1), "1")]
    fn show(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.show(), expected);
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn conversions_from_static_values() {
        assert_eq!(Value::from(Some(1)), Value::some(1));
        assert_eq!(Value::from(None::<i32>), Value::none());
        assert_eq!(
            Value::from(Validation::<&str, i32>::Failure("e")),
            Value::failure("e")
        );
        assert_eq!(Value::from((1, "a")), Value::pair(1, "a"));
        assert_eq!(Value::from(vec![1, 2]), Value::list([1, 2]));
    }

    fn add(x: Value, y: Value) -> Value {
        match (x, y) {
            (Value::Int(x), Value::Int(y)) => Value::Int(x + y),
            (x, _) => x,
        }
    }

    #[rstest]
    fn reduce_sums_integers() {
        assert_eq!(Value::list([1, 2, 3]).reduce(add), Ok(Some(Value::Int(6))));
    }

    #[rstest]
    fn reduce_of_single_element_is_that_element() {
        assert_eq!(Value::list([7]).reduce(add), Ok(Some(Value::Int(7))));
    }

    #[rstest]
    fn reduce_of_empty_list_is_none() {
        assert_eq!(Value::nil().reduce(add), Ok(None));
    }

    #[rstest]
    fn reduce_rejects_a_combiner_changing_the_type() {
        let result = Value::list([1, 2, 3]).reduce(|_, _| Value::from("oh no"));
        assert_eq!(
            result,
            Err(AdtError::type_mismatch("result of reduce", "Int", "String"))
        );
    }

    #[rstest]
    fn reduce_rejects_a_non_list() {
        assert_eq!(
            Value::Int(1).reduce(add),
            Err(AdtError::type_mismatch("reduce", "List", "Int"))
        );
    }
}
