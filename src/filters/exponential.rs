use num_traits::AsPrimitive;

use super::Filter;
use crate::sample::Sample;

/// Exponentially weighted moving average
///
/// `current = current + factor * (raw - current)`. The first sample seeds
/// the filter. Memory cost is one sample regardless of history length.
#[derive(Debug, Clone, Copy)]
pub struct Exponential<T> {
    factor: f64,
    current: T,
    initialized: bool,
}

impl<T: Sample> Exponential<T> {
    pub const DEFAULT_FACTOR: f64 = 0.5;

    /// Create new filter with the given factor and uninitialized state
    pub fn new(factor: f64) -> Self {
        Self {
            factor,
            current: T::default(),
            initialized: false,
        }
    }

    /// Weight of the newest sample.
    ///
    /// Not range checked: 0.0 freezes output at the seed value,
    /// 1.0 makes output track input exactly.
    pub fn set_factor(&mut self, factor: f64) {
        self.factor = factor;
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl<T: Sample> Default for Exponential<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACTOR)
    }
}

impl<T: Sample> Filter<T> for Exponential<T> {
    fn update(&mut self, raw: T) -> T {
        if !self.initialized {
            self.current = raw;
            self.initialized = true;
            return raw;
        }

        let previous: f64 = self.current.as_();
        self.current = T::from_f64(previous + self.factor * (raw.as_() - previous));
        self.current
    }

    fn peek(&self) -> T {
        self.current
    }

    fn reset(&mut self) {
        self.initialized = false;
        self.current = T::default();
    }
}
