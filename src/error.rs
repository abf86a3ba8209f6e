//! the only failure a poll session hands back is a [`TimeoutError`]
//! it carries whatever the producer last failed with, or the "not executed yet" sentinel
//! when the deadline passed before any attempt was made

use std::time::Duration;
use thiserror::Error;

/// most recent cause of failure seen by a poll session
#[derive(Debug, Error)]
pub enum LastError<E> {
    #[error("Not executed yet.")]
    NotExecuted,
    #[error("{0}")]
    Producer(E),
}

impl<E> LastError<E> {
    pub fn is_not_executed(&self) -> bool {
        matches!(self, Self::NotExecuted)
    }

    pub fn producer_error(&self) -> Option<&E> {
        match self {
            Self::NotExecuted => None,
            Self::Producer(e) => Some(e),
        }
    }

    pub fn into_producer_error(self) -> Option<E> {
        match self {
            Self::NotExecuted => None,
            Self::Producer(e) => Some(e),
        }
    }
}

#[derive(Debug, Error)]
#[error("Couldn't execute within {} seconds. Last Error: {last_error}", .timeout.as_secs_f64())]
pub struct TimeoutError<E> {
    timeout: Duration,
    attempts: usize,
    #[source]
    last_error: LastError<E>,
}

impl<E> TimeoutError<E> {
    pub(crate) fn new(timeout: Duration, attempts: usize, last_error: LastError<E>) -> Self {
        Self {
            timeout,
            attempts,
            last_error,
        }
    }

    /// the configured timeout, not how long the session actually ran
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// how many times the producer was invoked before giving up
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn last_error(&self) -> &LastError<E> {
        &self.last_error
    }

    pub fn into_last_error(self) -> LastError<E> {
        self.last_error
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite number of seconds, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be a non-zero duration")]
    ZeroDuration { name: &'static str },
}
