/// Smoothing algorithms hosted by a channel
///
/// Every filter sees only accepted samples; validity gating lives in the channel.
#[cfg(feature = "filter-exponential")]
mod exponential;

#[cfg(feature = "filter-running")]
mod running;

#[cfg(feature = "filter-exponential")]
pub use exponential::Exponential;

#[cfg(feature = "filter-running")]
pub use running::{RunningAverage, Statistic};

/// Single-channel smoothing algorithm.
pub trait Filter<T> {
    /// Feed one accepted sample and return the new smoothed value.
    fn update(&mut self, raw: T) -> T;

    /// Current smoothed value without consuming input.
    ///
    /// Before the first update this is the type's default value.
    fn peek(&self) -> T;

    /// Return to the freshly constructed state, keeping configuration
    /// such as the factor or the statistic mode.
    fn reset(&mut self);
}
