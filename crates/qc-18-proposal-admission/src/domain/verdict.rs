//! Verdict returned to consensus
//!
//! Rejection is a normal outcome of evaluation. It is carried entirely in the
//! verdict; there is no separate fault channel.

use super::{DecodeError, HandlerError};
use std::error::Error as _;

/// Who is at fault for a rejection
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RejectClass {
    /// The proposal itself is bad (or could not be checked in time)
    InvalidProposal,
    /// The local node is misconfigured; not attacker-controlled
    InternalBug,
}

/// Structured reason a proposal was rejected
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectCause {
    #[error("process proposal timeout exceeded ({timeout_ms}ms)")]
    DeadlineExceeded { timeout_ms: u64 },

    #[error("missing quorum vote extensions: voted power {voted_power} of total {total_power}")]
    MissingQuorum { voted_power: u128, total_power: u128 },

    #[error("decode transaction {index}")]
    DecodeTransaction {
        index: usize,
        #[source]
        source: DecodeError,
    },

    #[error("unexpected message type: {type_url}")]
    UnexpectedMessageType { type_url: String },

    #[error("message type included too many times: {type_url}")]
    MessageTypeOverQuota { type_url: String },

    #[error("msg handler not found [BUG]: {type_url}")]
    HandlerNotFound { type_url: String },

    #[error("execute message {type_url}")]
    ExecuteMessage {
        type_url: String,
        #[source]
        source: HandlerError,
    },
}

impl RejectCause {
    pub fn class(&self) -> RejectClass {
        match self {
            RejectCause::HandlerNotFound { .. } => RejectClass::InternalBug,
            _ => RejectClass::InvalidProposal,
        }
    }

    pub fn is_internal_bug(&self) -> bool {
        self.class() == RejectClass::InternalBug
    }

    /// Stable label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            RejectCause::DeadlineExceeded { .. } => "timeout",
            RejectCause::MissingQuorum { .. } => "missing_quorum",
            RejectCause::DecodeTransaction { .. } => "decode_transaction",
            RejectCause::UnexpectedMessageType { .. } => "unexpected_message_type",
            RejectCause::MessageTypeOverQuota { .. } => "message_type_over_quota",
            RejectCause::HandlerNotFound { .. } => "handler_not_found",
            RejectCause::ExecuteMessage { .. } => "execute_message",
        }
    }

    /// Display of the cause followed by its source chain
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            out.push_str(": ");
            out.push_str(&err.to_string());
            source = err.source();
        }
        out
    }
}

/// Outcome of one proposal evaluation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(RejectCause),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    pub fn is_reject(&self) -> bool {
        !self.is_accept()
    }

    /// Rejection cause, if any
    pub fn cause(&self) -> Option<&RejectCause> {
        match self {
            Verdict::Accept => None,
            Verdict::Reject(cause) => Some(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_handler_is_internal_bug() {
        let bug = RejectCause::HandlerNotFound {
            type_url: "/x".into(),
        };
        let bad = RejectCause::UnexpectedMessageType {
            type_url: "/x".into(),
        };

        assert!(bug.is_internal_bug());
        assert_eq!(bad.class(), RejectClass::InvalidProposal);
        assert_eq!(
            RejectCause::DeadlineExceeded { timeout_ms: 1 }.class(),
            RejectClass::InvalidProposal
        );
    }

    #[test]
    fn test_missing_quorum_message() {
        let cause = RejectCause::MissingQuorum {
            voted_power: 20,
            total_power: 30,
        };

        assert_eq!(
            cause.to_string(),
            "missing quorum vote extensions: voted power 20 of total 30"
        );
        assert_eq!(cause.reason(), "missing_quorum");
    }

    #[test]
    fn test_chain_includes_wrapped_error() {
        let cause = RejectCause::ExecuteMessage {
            type_url: "/qc.evmengine.v1.MsgExecutionPayload".into(),
            source: HandlerError::Rejected("unknown parent".into()),
        };

        assert_eq!(
            cause.chain(),
            "execute message /qc.evmengine.v1.MsgExecutionPayload: rejected: unknown parent"
        );
        assert_eq!(cause.reason(), "execute_message");
    }

    #[test]
    fn test_verdict_accessors() {
        assert!(Verdict::Accept.is_accept());
        assert!(Verdict::Accept.cause().is_none());

        let verdict = Verdict::Reject(RejectCause::MissingQuorum {
            voted_power: 1,
            total_power: 3,
        });
        assert!(verdict.is_reject());
        assert_eq!(verdict.cause().map(|c| c.reason()), Some("missing_quorum"));
    }
}
