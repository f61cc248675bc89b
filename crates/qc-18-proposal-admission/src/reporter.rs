//! Rejection reporting
//!
//! Turns a terminal pipeline result into a verdict. A rejected proposal is a
//! successful evaluation; only the log level tells a bad proposal apart from
//! a misconfigured node.

use crate::domain::{RejectCause, Verdict};
use crate::metrics;

/// Record the cause of a rejection and return the verdict
pub fn reject_proposal(height: u64, cause: RejectCause) -> Verdict {
    if cause.is_internal_bug() {
        tracing::error!(
            height,
            reason = cause.reason(),
            class = ?cause.class(),
            error = %cause.chain(),
            "Rejecting process proposal"
        );
    } else {
        tracing::warn!(
            height,
            reason = cause.reason(),
            class = ?cause.class(),
            error = %cause.chain(),
            "Rejecting process proposal"
        );
    }

    metrics::record_proposal_rejected(cause.reason());
    Verdict::Reject(cause)
}

/// Record an accepted proposal and return the verdict
pub fn accept_proposal(height: u64) -> Verdict {
    tracing::debug!(height, "Accepting process proposal");
    metrics::record_proposal_accepted();
    Verdict::Accept
}

/// Collapse a pipeline result into a verdict
pub fn into_verdict(height: u64, result: Result<(), RejectCause>) -> Verdict {
    match result {
        Ok(()) => accept_proposal(height),
        Err(cause) => reject_proposal(height, cause),
    }
}
