use heapless::Vec;

use crate::channel::Channel;
use crate::config::{Config, ConfigError};
use crate::filters::Filter;
use crate::logging::{smooth_debug, smooth_trace};
use crate::sample::Sample;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelError {
    /// Channel index outside `0..count`
    IndexOutOfBounds { index: usize, count: usize },
}

impl core::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChannelError::IndexOutOfBounds { index, count } => {
                write!(f, "channel index {} out of bounds for {} channels", index, count)
            }
        }
    }
}

/// Multi-channel smoothing engine
///
/// Holds up to `CAP` channels inline, each with its own `F` filter. Channels
/// are created by [`begin`](Self::begin); every per-channel operation is
/// bounds checked and returns [`ChannelError::IndexOutOfBounds`] for an index
/// outside the initialized range.
#[derive(Debug, Clone)]
pub struct SmoothingEngine<T, F, const CAP: usize = 8> {
    config: Config<T>,
    channels: Vec<Channel<T, F>, CAP>,
}

impl<T, F, const CAP: usize> SmoothingEngine<T, F, CAP>
where
    T: Sample,
    F: Filter<T> + Default,
{
    /// Engine with general limits applied to every channel at `begin`.
    /// Inverted limits are swapped and the delta is taken as a magnitude.
    pub fn new(config: Config<T>) -> Self {
        Self {
            config: config.normalized(),
            channels: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config<T> {
        &self.config
    }

    /// Create `measures` fresh channels, replacing any existing ones.
    ///
    /// Zero is treated as one.
    pub fn begin(&mut self, measures: usize) -> Result<(), ConfigError> {
        let measures = measures.max(1);
        if measures > CAP {
            return Err(ConfigError::TooManyChannels {
                requested: measures,
                capacity: CAP,
            });
        }

        if !self.channels.is_empty() {
            smooth_debug!("discarding {} channels", self.channels.len());
        }
        self.channels.clear();

        for _ in 0..measures {
            let mut channel = Channel::new(F::default(), self.config.invalid);
            if let Some(minimum) = self.config.minimum {
                channel.set_minimum(minimum);
            }
            if let Some(maximum) = self.config.maximum {
                channel.set_maximum(maximum);
            }
            if let Some(max_delta) = self.config.max_delta {
                channel.set_max_delta(max_delta);
            }
            // Capacity checked above
            let _ = self.channels.push(channel);
        }

        smooth_debug!("initialized {} channels", measures);
        Ok(())
    }

    /// Number of channels created by `begin`; zero before it
    pub fn measures(&self) -> usize {
        self.channels.len()
    }

    pub fn channel(&self, idx: usize) -> Result<&Channel<T, F>, ChannelError> {
        let count = self.channels.len();
        self.channels
            .get(idx)
            .ok_or(ChannelError::IndexOutOfBounds { index: idx, count })
    }

    pub fn channel_mut(&mut self, idx: usize) -> Result<&mut Channel<T, F>, ChannelError> {
        let count = self.channels.len();
        self.channels
            .get_mut(idx)
            .ok_or(ChannelError::IndexOutOfBounds { index: idx, count })
    }

    pub fn channels(&self) -> impl Iterator<Item = &Channel<T, F>> {
        self.channels.iter()
    }

    /// Feed a raw sample to channel `idx`; `Ok(false)` means it was rejected
    /// and the channel output still holds the previous value.
    pub fn set_value(&mut self, idx: usize, raw: T) -> Result<bool, ChannelError> {
        let accepted = self.channel_mut(idx)?.set_value(raw);
        smooth_trace!("channel {} accepted={}", idx, accepted);
        Ok(accepted)
    }

    pub fn value(&self, idx: usize) -> Result<T, ChannelError> {
        Ok(self.channel(idx)?.value())
    }

    pub fn input(&self, idx: usize) -> Result<T, ChannelError> {
        Ok(self.channel(idx)?.input())
    }

    pub fn minimum(&self, idx: usize) -> Result<Option<T>, ChannelError> {
        Ok(self.channel(idx)?.minimum())
    }

    pub fn maximum(&self, idx: usize) -> Result<Option<T>, ChannelError> {
        Ok(self.channel(idx)?.maximum())
    }

    pub fn max_delta(&self, idx: usize) -> Result<Option<T>, ChannelError> {
        Ok(self.channel(idx)?.max_delta())
    }

    pub fn is_valid(&self, idx: usize) -> Result<bool, ChannelError> {
        Ok(self.channel(idx)?.is_valid())
    }

    pub fn is_invalid(&self, idx: usize) -> Result<bool, ChannelError> {
        Ok(self.channel(idx)?.is_invalid())
    }

    /// Filter of channel `idx`, for reading its configuration.
    pub fn filter(&self, idx: usize) -> Result<&F, ChannelError> {
        Ok(self.channel(idx)?.filter())
    }

    /// Filter of channel `idx`, for reconfiguring it without `begin`.
    pub fn filter_mut(&mut self, idx: usize) -> Result<&mut F, ChannelError> {
        Ok(self.channel_mut(idx)?.filter_mut())
    }

    /// Apply `configure` to the filter of every channel.
    pub fn configure_filters(&mut self, mut configure: impl FnMut(&mut F)) {
        for channel in self.channels.iter_mut() {
            configure(channel.filter_mut());
        }
    }

    pub fn set_minimum(&mut self, idx: usize, minimum: T) -> Result<(), ChannelError> {
        self.channel_mut(idx)?.set_minimum(minimum);
        Ok(())
    }

    pub fn set_maximum(&mut self, idx: usize, maximum: T) -> Result<(), ChannelError> {
        self.channel_mut(idx)?.set_maximum(maximum);
        Ok(())
    }

    pub fn set_max_delta(&mut self, idx: usize, max_delta: T) -> Result<(), ChannelError> {
        self.channel_mut(idx)?.set_max_delta(max_delta);
        Ok(())
    }

    pub fn reset_minimum(&mut self, idx: usize) -> Result<(), ChannelError> {
        self.channel_mut(idx)?.reset_minimum();
        Ok(())
    }

    pub fn reset_maximum(&mut self, idx: usize) -> Result<(), ChannelError> {
        self.channel_mut(idx)?.reset_maximum();
        Ok(())
    }

    pub fn reset_max_delta(&mut self, idx: usize) -> Result<(), ChannelError> {
        self.channel_mut(idx)?.reset_max_delta();
        Ok(())
    }

    pub fn set_minimum_all(&mut self, minimum: T) {
        self.for_each_channel(|channel| channel.set_minimum(minimum));
    }

    pub fn set_maximum_all(&mut self, maximum: T) {
        self.for_each_channel(|channel| channel.set_maximum(maximum));
    }

    pub fn set_max_delta_all(&mut self, max_delta: T) {
        self.for_each_channel(|channel| channel.set_max_delta(max_delta));
    }

    pub fn reset_minimum_all(&mut self) {
        self.for_each_channel(Channel::reset_minimum);
    }

    pub fn reset_maximum_all(&mut self) {
        self.for_each_channel(Channel::reset_maximum);
    }

    pub fn reset_max_delta_all(&mut self) {
        self.for_each_channel(Channel::reset_max_delta);
    }

    /// Restart channel `idx` from the empty state, keeping its limits.
    pub fn reset(&mut self, idx: usize) -> Result<(), ChannelError> {
        self.channel_mut(idx)?.reset();
        Ok(())
    }

    pub fn reset_all(&mut self) {
        self.for_each_channel(Channel::reset);
    }

    fn for_each_channel(&mut self, apply: impl FnMut(&mut Channel<T, F>)) {
        self.channels.iter_mut().for_each(apply);
    }
}

impl<T, F, const CAP: usize> Default for SmoothingEngine<T, F, CAP>
where
    T: Sample,
    F: Filter<T> + Default,
{
    fn default() -> Self {
        Self::new(Config::default())
    }
}
