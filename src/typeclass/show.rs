//! Show type class - canonical textual rendering.
//!
//! `show` renders a value the way it would be written as a constructor
//! expression: `List(1, 2, 3)`, `Some(2)`, `None`, `Pair(1, "A")`. Strings
//! are quoted so that `Some("1")` and `Some(1)` stay distinguishable.
//!
//! Rendering is pure: showing the same value twice yields identical text.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Show;
//!
//! assert_eq!(Some(2).show(), "Some(2)");
//! assert_eq!(None::<i32>.show(), "None");
//! assert_eq!((1, "A").show(), r#"Pair(1, "A")"#);
//! ```

/// Canonical display form of a value.
pub trait Show {
    /// Renders `self`.
    fn show(&self) -> String;
}

/// Joins the shown elements with `", "` inside `name(...)`.
pub(crate) fn show_constructor<'a, T, I>(name: &str, elements: I) -> String
where
    T: Show + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let shown: Vec<String> = elements.into_iter().map(Show::show).collect();
    format!("{name}({})", shown.join(", "))
}

macro_rules! impl_show_via_display {
    ($($type:ty),+ $(,)?) => {
        $(
            impl Show for $type {
                #[inline]
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_show_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool,
);

// `Debug` keeps the decimal point, so `1.0` never shows like the integer `1`.
macro_rules! impl_show_for_float {
    ($($type:ty),+ $(,)?) => {
        $(
            impl Show for $type {
                #[inline]
                fn show(&self) -> String {
                    format!("{self:?}")
                }
            }
        )+
    };
}

impl_show_for_float!(f32, f64);

impl Show for char {
    fn show(&self) -> String {
        format!("{self:?}")
    }
}

impl Show for str {
    fn show(&self) -> String {
        format!("{self:?}")
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.as_str().show()
    }
}

impl Show for () {
    fn show(&self) -> String {
        "()".to_string()
    }
}

impl<T: Show + ?Sized> Show for &T {
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<T: Show + ?Sized> Show for Box<T> {
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<T: Show> Show for Option<T> {
    fn show(&self) -> String {
        match self {
            Some(value) => format!("Some({})", value.show()),
            None => "None".to_string(),
        }
    }
}

impl<A: Show, B: Show> Show for (A, B) {
    fn show(&self) -> String {
        format!("Pair({}, {})", self.0.show(), self.1.show())
    }
}

impl<T: Show> Show for Vec<T> {
    fn show(&self) -> String {
        show_constructor("Vec", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), "Some(2)")]
    #[case(None, "None")]
    fn option_show(#[case] value: Option<i32>, #[case] expected: &str) {
        assert_eq!(value.show(), expected);
    }

    #[rstest]
    #[case(1.0, "1.0")]
    #[case(0.5, "0.5")]
    #[case(-3.0, "-3.0")]
    fn floats_keep_their_decimal_point(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(value.show(), expected);
    }

    #[rstest]
    fn whole_floats_and_integers_show_differently() {
        assert_ne!(1.0_f64.show(), 1_i64.show());
        assert_eq!(2.0_f32.show(), "2.0");
    }

    #[rstest]
    fn strings_are_quoted() {
        assert_eq!("b".show(), "\"b\"");
        assert_eq!(String::from("say \"hi\"").show(), r#""say \"hi\"""#);
        assert_eq!('c'.show(), "'c'");
    }

    #[rstest]
    fn nested_option_show() {
        assert_eq!(Some(Some("x")).show(), r#"Some(Some("x"))"#);
    }

    #[rstest]
    fn pair_show() {
        assert_eq!((1, String::from("A")).show(), r#"Pair(1, "A")"#);
    }

    #[rstest]
    fn vec_show() {
        assert_eq!(vec![1, 2].show(), "Vec(1, 2)");
        assert_eq!(Vec::<i32>::new().show(), "Vec()");
    }

    #[rstest]
    fn show_is_idempotent() {
        let value = Some((1.5, true));
        assert_eq!(value.show(), value.show());
        assert_eq!(value.show(), "Some(Pair(1.5, true))");
    }
}
