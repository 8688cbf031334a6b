//! Internal macros generating the scalar shape and codec impls.

/// Rank `(0, 0)` for each listed type.
macro_rules! impl_scalar_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Shape for $ty {
                const LIST_RANK: usize = 0;
                const MAP_RANK: usize = 0;
            }
        )*
    };
}

/// Integral types: an [`Integer`](crate::Integer) pattern spanning the
/// type's range, decimal text both ways.
macro_rules! impl_integer_convert {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Convert for $ty {
                fn to_pattern() -> $crate::Pattern {
                    $crate::Integer::new(<$ty>::MIN as i128, <$ty>::MAX as i128).into()
                }

                fn to_string_with(&self, pattern: &$crate::Pattern) -> $crate::Result<String> {
                    let text = self.to_string();
                    $crate::convert::ensure_match(&text, pattern)?;
                    Ok(text)
                }

                fn to_value_with(text: &str, pattern: &$crate::Pattern) -> $crate::Result<Self> {
                    $crate::convert::ensure_match(text, pattern)?;
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|_| $crate::Error::parse::<$ty>(text))
                }
            }
        )*
    };
}

/// Floating point types: a [`Double`](crate::Double) pattern spanning the
/// finite range of the type, shortest round-trip text.
///
/// The bounds are the `f64` values the rendered extremes read back as, so
/// `MAX` and `MIN` of a narrower type still match their own text.
macro_rules! impl_float_convert {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Convert for $ty {
                fn to_pattern() -> $crate::Pattern {
                    let max = <$ty>::MAX
                        .to_string()
                        .parse::<f64>()
                        .unwrap_or(f64::from(<$ty>::MAX));
                    $crate::Double::new(-max, max).into()
                }

                fn to_string_with(&self, pattern: &$crate::Pattern) -> $crate::Result<String> {
                    let text = $crate::pattern::format_float(*self, f64::from(self.abs()));
                    $crate::convert::ensure_match(&text, pattern)?;
                    Ok(text)
                }

                fn to_value_with(text: &str, pattern: &$crate::Pattern) -> $crate::Result<Self> {
                    $crate::convert::ensure_match(text, pattern)?;
                    match text.trim().parse::<$ty>() {
                        Ok(value) if value.is_finite() => Ok(value),
                        _ => Err($crate::Error::parse::<$ty>(text)),
                    }
                }
            }
        )*
    };
}
