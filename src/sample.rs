use num_traits::AsPrimitive;

/// Numeric type a channel smooths.
///
/// Arithmetic that needs fractions or differences (the exponential
/// recurrence, window means, delta checks) runs in `f64` and converts back
/// with `as` semantics: integer results truncate toward zero and saturate at
/// the type's bounds. Implemented only for types whose every value `f64`
/// represents exactly.
pub trait Sample: Copy + PartialOrd + Default + AsPrimitive<f64> {
    /// Convert an `f64` intermediate back into the sample type.
    fn from_f64(value: f64) -> Self;

    /// Absolute difference, free of overflow for any pair of values.
    fn distance(self, other: Self) -> f64 {
        abs(self.as_() - other.as_())
    }

    /// Magnitude of the value; saturates where the negation has no
    /// representation (`i32::MIN` becomes `i32::MAX`).
    fn magnitude(self) -> Self {
        Self::from_f64(abs(self.as_()))
    }
}

fn abs(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn from_f64(value: f64) -> Self {
                    value.as_()
                }
            }
        )*
    };
}

impl_sample!(f32, f64, u8, u16, u32, i8, i16, i32);
