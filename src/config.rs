use crate::sample::Sample;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    TooManyChannels { requested: usize, capacity: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::TooManyChannels { requested, capacity } => write!(
                f,
                "requested {} channels but the engine holds at most {}",
                requested, capacity
            ),
        }
    }
}

/// Engine-wide settings applied to every channel by `begin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T> {
    /// General lower limit of the valid range
    pub minimum: Option<T>,

    /// General upper limit of the valid range
    pub maximum: Option<T>,

    /// General limit for the change between subsequent accepted samples
    pub max_delta: Option<T>,

    /// Value reported by a channel before it has accepted any sample.
    /// Falls back to the filter's empty output when unset.
    pub invalid: Option<T>,
}

impl<T> Default for Config<T> {
    fn default() -> Self {
        Self {
            minimum: None,
            maximum: None,
            max_delta: None,
            invalid: None,
        }
    }
}

impl<T: Sample> Config<T> {
    /// Valid range `[minimum, maximum]`; inverted limits are swapped.
    pub fn with_range(mut self, minimum: T, maximum: T) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    pub fn with_minimum(mut self, minimum: T) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_maximum(mut self, maximum: T) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Largest accepted change between subsequent samples; sign is ignored.
    pub fn with_max_delta(mut self, max_delta: T) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    pub fn with_invalid(mut self, invalid: T) -> Self {
        self.invalid = Some(invalid);
        self
    }

    /// Copy with `minimum <= maximum` and a non-negative delta.
    pub fn normalized(&self) -> Self {
        let (minimum, maximum) = match (self.minimum, self.maximum) {
            (Some(min), Some(max)) if min > max => (Some(max), Some(min)),
            limits => limits,
        };

        Self {
            minimum,
            maximum,
            max_delta: self.max_delta.map(Sample::magnitude),
            invalid: self.invalid,
        }
    }
}
