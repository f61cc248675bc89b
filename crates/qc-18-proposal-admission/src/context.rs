//! Deadline-bound evaluation context
//!
//! Every step of one proposal evaluation observes the same `ProcessContext`.
//! Cancellation is cooperative: the service polls [`ProcessContext::ensure_active`]
//! between dispatch steps, and additionally races the whole evaluation against
//! [`ProcessContext::deadline`]. Handlers that already ran before the deadline
//! may have mutated state; discarding those effects is up to the caller.

use crate::domain::RejectCause;
use std::time::Duration;
use tokio::time::Instant;

/// Context handed to every step of one evaluation
#[derive(Clone, Debug)]
pub struct ProcessContext {
    height: u64,
    started_at: Instant,
    deadline: Instant,
    timeout: Duration,
}

impl ProcessContext {
    /// Derive a context for `height` that expires `timeout` from now
    pub fn bind(height: u64, timeout: Duration) -> Self {
        let started_at = Instant::now();
        Self {
            height,
            started_at,
            deadline: started_at + timeout,
            timeout,
        }
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Time left before the deadline (zero once expired)
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Fail with `DeadlineExceeded` once the deadline has passed
    pub fn ensure_active(&self) -> Result<(), RejectCause> {
        if self.is_expired() {
            return Err(self.deadline_exceeded());
        }
        Ok(())
    }

    pub(crate) fn deadline_exceeded(&self) -> RejectCause {
        RejectCause::DeadlineExceeded {
            timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
