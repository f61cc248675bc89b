//! Driven ports (Outbound dependencies)

use crate::context::ProcessContext;
use crate::domain::{DecodeError, HandlerError, Hash, Message, MsgResponse, Transaction};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Turns raw transaction bytes into a typed transaction
pub trait TransactionDecoder: Send + Sync {
    fn decode(&self, raw: &[u8]) -> Result<Transaction, DecodeError>;
}

/// State-transition logic for one message type
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Execute `msg` within the evaluation bound by `ctx`
    async fn handle(&self, ctx: &ProcessContext, msg: &Message)
        -> Result<MsgResponse, HandlerError>;
}

/// Resolves the handler for a message type
pub trait HandlerRegistry: Send + Sync {
    fn handler(&self, type_url: &str) -> Option<Arc<dyn MessageHandler>>;
}

/// Execution payload carried by `MsgExecutionPayload`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPayload {
    pub number: u64,
    pub block_hash: Hash,
    pub parent_hash: Hash,
    pub timestamp: u64,
    pub transactions: Vec<Vec<u8>>,
}

/// Execution client's verdict on a payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PayloadStatus {
    Valid,
    Invalid { reason: String },
    Syncing,
}

/// Execution client (engine API)
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Hand a payload to the execution client for verification
    async fn new_payload(&self, payload: &ExecutionPayload) -> Result<PayloadStatus, String>;
}
