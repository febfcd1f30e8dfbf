//! Bounded-wait polling.
//!
//! Every workflow step that depends on the application catching up goes
//! through here: poll at the configured interval, fail with a timeout
//! once the wait window closes. A timeout is a test failure, not a
//! recoverable condition.

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use std::thread;
use std::time::Instant;
use tracing::trace;

/// Poll `predicate` until it returns true or the wait window closes.
pub fn wait_until<F>(
    config: &HarnessConfig,
    what: &str,
    mut predicate: F,
) -> Result<(), HarnessError>
where
    F: FnMut() -> bool,
{
    let started = Instant::now();
    loop {
        if predicate() {
            trace!(what, elapsed = ?started.elapsed(), "condition held");
            return Ok(());
        }
        if started.elapsed() >= config.wait_timeout {
            return Err(HarnessError::WaitTimeout {
                what: what.to_string(),
                waited: started.elapsed(),
            });
        }
        thread::sleep(config.poll_interval);
    }
}

/// Poll `poll` until it yields a value or the wait window closes.
pub fn wait_for<T, F>(config: &HarnessConfig, what: &str, mut poll: F) -> Result<T, HarnessError>
where
    F: FnMut() -> Option<T>,
{
    let started = Instant::now();
    loop {
        if let Some(value) = poll() {
            trace!(what, elapsed = ?started.elapsed(), "value available");
            return Ok(value);
        }
        if started.elapsed() >= config.wait_timeout {
            return Err(HarnessError::WaitTimeout {
                what: what.to_string(),
                waited: started.elapsed(),
            });
        }
        thread::sleep(config.poll_interval);
    }
}
