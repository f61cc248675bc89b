//! Execution payload message handler
//!
//! Verifies a proposed execution payload against the execution client.
//! The payload is bincode-encoded in the message value.

use crate::context::ProcessContext;
use crate::domain::{HandlerError, Message, MsgResponse};
use crate::ports::{ExecutionEngine, ExecutionPayload, MessageHandler, PayloadStatus};
use async_trait::async_trait;
use bincode::Options;
use std::sync::Arc;

fn codec() -> impl Options {
    bincode::DefaultOptions::new().reject_trailing_bytes()
}

/// Encode a payload as the value of `MsgExecutionPayload`
pub fn encode_execution_payload(payload: &ExecutionPayload) -> Result<Vec<u8>, bincode::Error> {
    codec().serialize(payload)
}

/// Handler for `MsgExecutionPayload`
pub struct ExecutionPayloadHandler<E: ExecutionEngine> {
    engine: Arc<E>,
}

impl<E: ExecutionEngine> ExecutionPayloadHandler<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl<E: ExecutionEngine> MessageHandler for ExecutionPayloadHandler<E> {
    async fn handle(
        &self,
        ctx: &ProcessContext,
        msg: &Message,
    ) -> Result<MsgResponse, HandlerError> {
        let payload: ExecutionPayload = codec()
            .deserialize(&msg.value)
            .map_err(|e| HandlerError::InvalidPayload(e.to_string()))?;

        if ctx.is_expired() {
            return Err(HandlerError::DeadlineExceeded);
        }

        // The engine call is the slow part; never let it outlive the proposal.
        let status = tokio::time::timeout(ctx.remaining(), self.engine.new_payload(&payload))
            .await
            .map_err(|_| HandlerError::DeadlineExceeded)?
            .map_err(HandlerError::Engine)?;

        match status {
            PayloadStatus::Valid => {
                tracing::debug!(
                    height = ctx.height(),
                    number = payload.number,
                    "Execution payload verified"
                );
                Ok(MsgResponse::default())
            }
            PayloadStatus::Invalid { reason } => Err(HandlerError::Rejected(format!(
                "invalid payload {}: {reason}",
                payload.number
            ))),
            PayloadStatus::Syncing => Err(HandlerError::Rejected(
                "execution engine syncing".to_string(),
            )),
        }
    }
}
