use core::cmp::Ordering;

use heapless::{Deque, Vec};
use num_traits::AsPrimitive;

use super::Filter;
use crate::sample::Sample;

/// Statistic computed over the running window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Statistic {
    /// Arithmetic mean of the window
    #[default]
    Average,

    /// Middle value; mean of the two middle values for an even count
    Median,

    /// Smallest sample in the window
    Minimum,

    /// Largest sample in the window
    Maximum,
}

/// Running window filter over the last `N` accepted samples
///
/// Strict FIFO window: once full, each new sample evicts the oldest one.
/// Until the window fills, the statistic covers only the samples present.
/// RAM cost: N * size_of::<T>() bytes.
#[derive(Debug, Clone)]
pub struct RunningAverage<T, const N: usize = 5> {
    window: Deque<T, N>,
    statistic: Statistic,
    current: T,
}

impl<T: Sample, const N: usize> RunningAverage<T, N> {
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        const { assert!(N > 0, "RunningAverage capacity must be > 0") };

        Self {
            window: Deque::new(),
            statistic: Statistic::Average,
            current: T::default(),
        }
    }

    pub fn with_statistic(statistic: Statistic) -> Self {
        let mut filter = Self::new();
        filter.statistic = statistic;
        filter
    }

    /// Switch the statistic; the current value is recomputed from the
    /// samples already in the window.
    pub fn set_statistic(&mut self, statistic: Statistic) {
        self.statistic = statistic;
        self.current = self.compute();
    }

    pub fn set_average(&mut self) {
        self.set_statistic(Statistic::Average);
    }

    pub fn set_median(&mut self) {
        self.set_statistic(Statistic::Median);
    }

    pub fn set_minimum(&mut self) {
        self.set_statistic(Statistic::Minimum);
    }

    pub fn set_maximum(&mut self) {
        self.set_statistic(Statistic::Maximum);
    }

    pub fn statistic(&self) -> Statistic {
        self.statistic
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    /// Samples in the window, oldest first
    pub fn samples(&self) -> impl Iterator<Item = &T> {
        self.window.iter()
    }

    fn compute(&self) -> T {
        if self.window.is_empty() {
            return T::default();
        }

        match self.statistic {
            Statistic::Average => self.mean(),
            Statistic::Median => self.median(),
            Statistic::Minimum => self.extreme(Ordering::Less),
            Statistic::Maximum => self.extreme(Ordering::Greater),
        }
    }

    fn mean(&self) -> T {
        let sum: f64 = self.window.iter().map(|sample| sample.as_()).sum();
        T::from_f64(sum / self.window.len() as f64)
    }

    fn median(&self) -> T {
        let mut sorted: Vec<T, N> = self.window.iter().copied().collect();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            return sorted[mid];
        }

        let low: f64 = sorted[mid - 1].as_();
        let high: f64 = sorted[mid].as_();
        T::from_f64((low + high) / 2.0)
    }

    /// Sample that wins every comparison in the given direction
    fn extreme(&self, wins: Ordering) -> T {
        let mut iter = self.window.iter().copied();
        let first = iter.next().unwrap_or_default();
        iter.fold(first, |best, sample| {
            if sample.partial_cmp(&best) == Some(wins) {
                sample
            } else {
                best
            }
        })
    }
}

impl<T: Sample, const N: usize> Default for RunningAverage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample, const N: usize> Filter<T> for RunningAverage<T, N> {
    fn update(&mut self, raw: T) -> T {
        if self.window.is_full() {
            self.window.pop_front();
        }
        // Cannot fail: a slot was freed above when the window was full
        let _ = self.window.push_back(raw);

        self.current = self.compute();
        self.current
    }

    fn peek(&self) -> T {
        self.current
    }

    fn reset(&mut self) {
        self.window.clear();
        self.current = T::default();
    }
}
