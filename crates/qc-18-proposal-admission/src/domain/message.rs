//! Transactions and messages
//!
//! A message is an `Any`-style envelope: the type URL selects the handler,
//! the value is only interpreted by that handler.

use serde::{Deserialize, Serialize};

/// Type URL of the execution payload message
pub const EXECUTION_PAYLOAD_TYPE_URL: &str = "/qc.evmengine.v1.MsgExecutionPayload";

/// Opaque message tagged with its type identifier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub type_url: String,
    pub value: Vec<u8>,
}

impl Message {
    pub fn new(type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }

    /// Identifier used for allow-list accounting and handler lookup
    pub fn type_url(&self) -> &str {
        &self.type_url
    }
}

/// Decoded transaction
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub messages: Vec<Message>,
}

impl Transaction {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Messages in execution order
    pub fn msgs(&self) -> &[Message] {
        &self.messages
    }
}

/// Response returned by a message handler
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MsgResponse {
    pub data: Vec<u8>,
}
