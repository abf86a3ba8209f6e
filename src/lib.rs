pub mod config;
pub mod error;
pub mod poll;

pub use config::PollConfig;
pub use error::{ConfigError, LastError, TimeoutError};
pub use poll::{poll_async, poll_async_default, poll_sync, poll_sync_default};
