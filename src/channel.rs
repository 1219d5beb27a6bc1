//! Validity gate around a single filter.
//!
//! A channel checks every raw sample against its enabled limits in fixed
//! order (minimum, maximum, max-delta) and forwards only accepted samples to
//! its filter. A rejected sample leaves both the filter and the cached output
//! untouched.

use num_traits::AsPrimitive;

use crate::filters::Filter;
use crate::logging::smooth_debug;
use crate::sample::Sample;

/// Limit that rejected a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    BelowMinimum,
    AboveMaximum,
    DeltaExceeded,
}

#[derive(Debug, Clone)]
pub struct Channel<T, F> {
    filter: F,
    minimum: Option<T>,
    maximum: Option<T>,
    max_delta: Option<T>,
    /// Last accepted raw sample; `None` until the first acceptance
    last_input: Option<T>,
    last_output: T,
    /// Output reported until the first acceptance
    initial: T,
    accepted: bool,
}

impl<T, F> Channel<T, F>
where
    T: Sample,
    F: Filter<T>,
{
    /// Channel with no limits. `invalid` replaces the filter's empty output
    /// as the value reported before the first accepted sample.
    pub fn new(filter: F, invalid: Option<T>) -> Self {
        let initial = invalid.unwrap_or_else(|| filter.peek());
        Self {
            filter,
            minimum: None,
            maximum: None,
            max_delta: None,
            last_input: None,
            last_output: initial,
            initial,
            accepted: true,
        }
    }

    /// Gate `raw` and, if accepted, feed it to the filter.
    ///
    /// Returns whether the sample was accepted.
    pub fn set_value(&mut self, raw: T) -> bool {
        match self.check(raw) {
            Some(rejection) => {
                smooth_debug!(
                    "rejected sample {} ({:?})",
                    AsPrimitive::<f64>::as_(raw),
                    rejection
                );
                self.accepted = false;
            }
            None => {
                self.accepted = true;
                self.last_input = Some(raw);
                self.last_output = self.filter.update(raw);
            }
        }
        self.accepted
    }

    /// First limit `raw` violates, if any.
    pub fn check(&self, raw: T) -> Option<Rejection> {
        if self.minimum.is_some_and(|min| raw < min) {
            return Some(Rejection::BelowMinimum);
        }
        if self.maximum.is_some_and(|max| raw > max) {
            return Some(Rejection::AboveMaximum);
        }
        // Delta applies only once a sample has been accepted
        if let (Some(delta), Some(last)) = (self.max_delta, self.last_input) {
            if raw.distance(last) > delta.as_() {
                return Some(Rejection::DeltaExceeded);
            }
        }
        None
    }

    pub fn set_minimum(&mut self, minimum: T) {
        self.minimum = Some(minimum);
        self.order_limits();
    }

    pub fn set_maximum(&mut self, maximum: T) {
        self.maximum = Some(maximum);
        self.order_limits();
    }

    /// Sign is dropped; the limit is stored as a magnitude.
    pub fn set_max_delta(&mut self, max_delta: T) {
        self.max_delta = Some(max_delta.magnitude());
    }

    pub fn reset_minimum(&mut self) {
        self.minimum = None;
    }

    pub fn reset_maximum(&mut self) {
        self.maximum = None;
    }

    pub fn reset_max_delta(&mut self) {
        self.max_delta = None;
    }

    fn order_limits(&mut self) {
        if let (Some(min), Some(max)) = (self.minimum, self.maximum) {
            if min > max {
                self.minimum = Some(max);
                self.maximum = Some(min);
            }
        }
    }

    pub fn minimum(&self) -> Option<T> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<T> {
        self.maximum
    }

    pub fn max_delta(&self) -> Option<T> {
        self.max_delta
    }

    /// Smoothed output; frozen at its previous value while samples are rejected
    pub fn value(&self) -> T {
        self.last_output
    }

    /// Last accepted raw sample, or the initial output before any acceptance
    pub fn input(&self) -> T {
        self.last_input.unwrap_or(self.initial)
    }

    /// Whether the most recent `set_value` was accepted; true before any sample
    pub fn is_valid(&self) -> bool {
        self.accepted
    }

    pub fn is_invalid(&self) -> bool {
        !self.accepted
    }

    /// Whether at least one sample has been accepted
    pub fn is_running(&self) -> bool {
        self.last_input.is_some()
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Clear the filter and the running state, keeping the limits.
    pub fn reset(&mut self) {
        self.filter.reset();
        self.last_input = None;
        self.last_output = self.initial;
        self.accepted = true;
    }
}
