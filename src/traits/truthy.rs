/// Truthiness, as used by the predicate-driven helpers.
///
/// Predicates passed to [`filter`](crate::collections::filter), [`every`](crate::collections::every)
/// and friends may return any `Truthy` value rather than just a [`bool`]. Zero, NaN, the empty
/// string, [`None`] and `()` are falsy, everything else is truthy.
///
/// A value is additionally _strictly false_ if it is the boolean `false` itself. Strict falseness
/// is a narrower test than falsiness and is what [`reject`](crate::collections::reject) keys on.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }

    /// Returns true only for the boolean `false` (or an equivalent, such as JSON `false`).
    fn is_strictly_false(&self) -> bool {
        false
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }

    fn is_strictly_false(&self) -> bool {
        !*self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    // NaN compares unequal to zero, so it has to be excluded explicitly.
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// The unit type stands in for "no value".
impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(T::is_truthy)
    }

    fn is_strictly_false(&self) -> bool {
        self.as_ref().is_some_and(T::is_strictly_false)
    }
}

/// Sequences are always truthy, even when empty.
impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }

    fn is_strictly_false(&self) -> bool {
        (**self).is_strictly_false()
    }
}

#[cfg(feature = "json")]
impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => false,
            Value::Bool(value) => *value,
            Value::Number(number) => number.as_f64().is_some_and(|value| value.is_truthy()),
            Value::String(value) => !value.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn is_strictly_false(&self) -> bool {
        matches!(self, serde_json::Value::Bool(false))
    }
}
