//! Error types for the Proposal Admission subsystem
//!
//! None of these abort an evaluation. They are wrapped into a
//! [`RejectCause`](super::RejectCause) and end up in the verdict.

/// Transaction decoding failure
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty transaction bytes")]
    Empty,

    #[error("transaction too large: {size} bytes > {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    #[error("malformed transaction: {0}")]
    Malformed(String),
}

/// Message handler failure
///
/// State-transition rejections and malformed message payloads are not
/// distinguished by the gate; both fail the whole proposal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("rejected: {0}")]
    Rejected(String),

    #[error("execution engine error: {0}")]
    Engine(String),

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Handler router misconfiguration
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("handler already registered for message type: {0}")]
    DuplicateHandler(String),

    #[error("message type URL must not be empty")]
    EmptyTypeUrl,
}

/// Invalid configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("process timeout must be greater than zero")]
    ZeroTimeout,

    #[error("max transaction size must be greater than zero")]
    ZeroMaxTxBytes,

    #[error("allowed message type URL must not be empty")]
    EmptyTypeUrl,

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
