//! when we have something that may fail or not have a result ready yet,
//! keep calling it at a fixed interval until
//!     - it succeeds
//!     - the deadline computed at the start of the session has passed
//!
//! the first attempt always waits one interval, and the deadline is only looked at
//! right before an attempt, so an attempt already running is never cut short

use crate::config::PollConfig;
use crate::error::{LastError, TimeoutError};
use std::{
    fmt::Display,
    future::{self, Future},
    time::Instant,
};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollState {
    Waiting,
    Attempting,
    Succeeded,
    TimedOut,
}

pub async fn poll_async<SuccessType, ProducerErr, ProducerFun, Fut>(
    mut producer: ProducerFun,
    config: PollConfig,
) -> Result<SuccessType, TimeoutError<ProducerErr>>
where
    ProducerFun: FnMut() -> Fut,
    Fut: Future<Output = Result<SuccessType, ProducerErr>>,
    ProducerErr: Display,
{
    //! every producer failure is swallowed and retried, the caller only ever sees
    //! the success value or a TimeoutError wrapping the most recent failure
    //! a timeout too large to represent as an Instant means there is no deadline at all
    let deadline = Instant::now().checked_add(config.timeout());
    let mut last_error = LastError::NotExecuted;
    let mut attempts = 0usize;

    trace!(state = ?PollState::Waiting, interval = ?config.interval());
    async_std::task::sleep(config.interval()).await;
    loop {
        if deadline.is_some_and(|d| Instant::now() > d) {
            warn!(
                state = ?PollState::TimedOut,
                timeout = ?config.timeout(),
                attempts,
                last_error = %last_error,
                "gave up polling"
            );
            return Err(TimeoutError::new(config.timeout(), attempts, last_error));
        }
        attempts += 1;
        trace!(state = ?PollState::Attempting, attempt = attempts);
        match producer().await {
            Ok(z) => {
                trace!(state = ?PollState::Succeeded, attempt = attempts);
                return Ok(z);
            }
            Err(e) => {
                debug!(attempt = attempts, error = %e, "attempt failed, retrying");
                last_error = LastError::Producer(e);
                trace!(state = ?PollState::Waiting, interval = ?config.interval());
                async_std::task::sleep(config.interval()).await;
            }
        }
    }
}

/// same session as [`poll_async`], for a producer whose result is available as soon as it returns
pub async fn poll_sync<SuccessType, ProducerErr, ProducerFun>(
    mut producer: ProducerFun,
    config: PollConfig,
) -> Result<SuccessType, TimeoutError<ProducerErr>>
where
    ProducerFun: FnMut() -> Result<SuccessType, ProducerErr>,
    ProducerErr: Display,
{
    poll_async(move || future::ready(producer()), config).await
}

/// [`poll_async`] with a 10 second timeout and 1 second interval
pub async fn poll_async_default<SuccessType, ProducerErr, ProducerFun, Fut>(
    producer: ProducerFun,
) -> Result<SuccessType, TimeoutError<ProducerErr>>
where
    ProducerFun: FnMut() -> Fut,
    Fut: Future<Output = Result<SuccessType, ProducerErr>>,
    ProducerErr: Display,
{
    poll_async(producer, PollConfig::default()).await
}

/// [`poll_sync`] with a 10 second timeout and 1 second interval
pub async fn poll_sync_default<SuccessType, ProducerErr, ProducerFun>(
    producer: ProducerFun,
) -> Result<SuccessType, TimeoutError<ProducerErr>>
where
    ProducerFun: FnMut() -> Result<SuccessType, ProducerErr>,
    ProducerErr: Display,
{
    poll_sync(producer, PollConfig::default()).await
}
