#![no_std]

mod logging;
mod config;
mod sample;
mod channel;
mod engine;
pub mod filters;

pub use config::{Config, ConfigError};
pub use sample::Sample;
pub use channel::{Channel, Rejection};
pub use engine::{ChannelError, SmoothingEngine};
pub use filters::Filter;

#[cfg(feature = "filter-exponential")]
pub use filters::Exponential;

#[cfg(feature = "filter-running")]
pub use filters::{RunningAverage, Statistic};
