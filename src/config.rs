//! Loop timing configuration.

/// Default ticks between capture requests.
///
/// At the reference tick rate of roughly 12 kHz this samples the sensor
/// about every 100 ms, fast enough to track an ambient swing one step at
/// a time.
pub const DEFAULT_CAPTURE_INTERVAL_TICKS: u16 = 1200;

/// Default ticks the blend color stays on per dimmer cycle.
pub const DEFAULT_BLEND_ON_TICKS: u16 = 1;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The capture interval was zero; the sensor would never be polled.
    ZeroCaptureInterval,

    /// The blend-on duration was zero; blends would never light.
    ZeroBlendOnTicks,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroCaptureInterval => {
                write!(f, "capture interval must be at least one tick")
            }
            ConfigError::ZeroBlendOnTicks => {
                write!(f, "blend-on duration must be at least one tick")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Validated timing parameters for the control loop.
///
/// Both values count scheduler ticks, so their real-time meaning follows
/// from whatever rate the tick source runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    capture_interval_ticks: u16,
    blend_on_ticks: u16,
}

impl Config {
    /// Creates a configuration.
    ///
    /// # Errors
    /// * `ZeroCaptureInterval` - `capture_interval_ticks` is `0`
    /// * `ZeroBlendOnTicks` - `blend_on_ticks` is `0`
    pub const fn new(capture_interval_ticks: u16, blend_on_ticks: u16) -> Result<Self, ConfigError> {
        if capture_interval_ticks == 0 {
            return Err(ConfigError::ZeroCaptureInterval);
        }
        if blend_on_ticks == 0 {
            return Err(ConfigError::ZeroBlendOnTicks);
        }

        Ok(Self {
            capture_interval_ticks,
            blend_on_ticks,
        })
    }

    /// Ticks between capture requests.
    pub const fn capture_interval_ticks(&self) -> u16 {
        self.capture_interval_ticks
    }

    /// Ticks the blend color stays on per dimmer cycle.
    pub const fn blend_on_ticks(&self) -> u16 {
        self.blend_on_ticks
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_interval_ticks: DEFAULT_CAPTURE_INTERVAL_TICKS,
            blend_on_ticks: DEFAULT_BLEND_ON_TICKS,
        }
    }
}
