use crate::error::ConfigError;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// how long a poll session may run and how long it waits between attempts
/// the interval is also the delay before the very first attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    timeout: Duration,
    interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl PollConfig {
    /// a zero timeout or interval is rejected, a zero interval would never yield between attempts
    pub fn new(timeout: Duration, interval: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            timeout: non_zero("timeout", timeout)?,
            interval: non_zero("interval", interval)?,
        })
    }

    /// both values are seconds and must be positive and finite
    pub fn from_secs_f64(timeout_secs: f64, interval_secs: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            timeout: positive_secs("timeout", timeout_secs)?,
            interval: positive_secs("interval", interval_secs)?,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        self.timeout = non_zero("timeout", timeout)?;
        Ok(self)
    }

    pub fn with_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        self.interval = non_zero("interval", interval)?;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

fn non_zero(name: &'static str, value: Duration) -> Result<Duration, ConfigError> {
    if value.is_zero() {
        return Err(ConfigError::ZeroDuration { name });
    }
    Ok(value)
}

fn positive_secs(name: &'static str, value: f64) -> Result<Duration, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { name, value });
    }
    // finite and positive, only overflow past u64::MAX seconds can fail here
    let secs =
        Duration::try_from_secs_f64(value).map_err(|_| ConfigError::NotFinite { name, value })?;
    // below one nanosecond rounds down to nothing
    non_zero(name, secs)
}
