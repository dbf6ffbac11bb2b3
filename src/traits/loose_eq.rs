/// A coercive equality, looser than [`PartialEq`].
///
/// For plain Rust primitives there is nothing to coerce, so `loose_eq` is the same as `==`. The
/// difference shows for dynamically typed values: a JSON `1`, `"1"` and `true` are all loosely
/// equal to each other.
///
/// Loose equality also knows about "no value". A nullish value (`None`, JSON `null`) is loosely
/// equal to the absence of a value, which is what [`uniq`](crate::collections::uniq) compares
/// against before it has emitted anything.
pub trait LooseEq {
    fn loose_eq(&self, other: &Self) -> bool;

    /// Returns true if the value is loosely equal to the absence of a value.
    fn is_nullish(&self) -> bool {
        false
    }
}

macro_rules! impl_loose_eq_strict {
    ($($t:ty),*) => {
        $(
            impl LooseEq for $t {
                fn loose_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_loose_eq_strict!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    str
);

impl LooseEq for () {
    fn loose_eq(&self, _other: &Self) -> bool {
        true
    }

    fn is_nullish(&self) -> bool {
        true
    }
}

impl<T: LooseEq> LooseEq for Option<T> {
    fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs.loose_eq(rhs),
            (None, None) => true,
            _ => false,
        }
    }

    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

impl<T: LooseEq + ?Sized> LooseEq for &T {
    fn loose_eq(&self, other: &Self) -> bool {
        (**self).loose_eq(*other)
    }

    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::Value;

    use super::LooseEq;

    /// Numeric coercion of a primitive JSON value. Compound values have no numeric form here.
    fn to_number(value: &Value) -> Option<f64> {
        match value {
            Value::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
            Value::Number(number) => number.as_f64(),
            Value::String(value) => string_to_number(value),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Parses a string the way host number coercion does: surrounding whitespace is ignored, the
    /// empty string is zero, `0x`/`0o`/`0b` prefixes select a radix and `Infinity` is the only
    /// spelling of infinity. None stands for NaN.
    fn string_to_number(text: &str) -> Option<f64> {
        let trimmed = text.trim();

        let radix = match trimmed.get(..2) {
            Some("0x" | "0X") => Some(16),
            Some("0o" | "0O") => Some(8),
            Some("0b" | "0B") => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            let digits = &trimmed[2..];
            // from_str_radix accepts a sign, prefixed literals don't.
            if digits.starts_with(['+', '-']) {
                return None;
            }
            return u128::from_str_radix(digits, radix).ok().map(|number| number as f64);
        }

        match trimmed {
            "" => Some(0.0),
            "Infinity" | "+Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            // Rust also accepts "inf", "infinity" and "nan" in any case, the host doesn't.
            _ if trimmed.bytes().any(|byte| matches!(byte.to_ascii_lowercase(), b'i' | b'n')) => {
                None
            },
            _ => trimmed.parse().ok(),
        }
    }

    /// Primitive values are coerced to numbers when their types differ. Arrays and objects are
    /// only loosely equal to structurally equal arrays and objects.
    impl LooseEq for Value {
        fn loose_eq(&self, other: &Self) -> bool {
            match (self, other) {
                (Value::Null, Value::Null) => true,
                (Value::Null, _) | (_, Value::Null) => false,
                (Value::String(lhs), Value::String(rhs)) => lhs == rhs,
                (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => {
                    self == other
                },
                _ => match (to_number(self), to_number(other)) {
                    (Some(lhs), Some(rhs)) => lhs == rhs,
                    _ => false,
                },
            }
        }

        fn is_nullish(&self) -> bool {
            self.is_null()
        }
    }
}
