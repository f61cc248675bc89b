//! Message service router
//!
//! Implements the HandlerRegistry port. The process-proposal router only
//! registers the handlers a proposal is expected to need.

use crate::domain::{RouterError, EXECUTION_PAYLOAD_TYPE_URL};
use crate::ports::{ExecutionEngine, HandlerRegistry, MessageHandler};
use std::collections::HashMap;
use std::sync::Arc;

use super::ExecutionPayloadHandler;

/// Routes messages to handlers by type URL
#[derive(Default)]
pub struct MsgServiceRouter {
    handlers: HashMap<String, Arc<dyn MessageHandler>>,
}

impl MsgServiceRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `type_url`. Each type may be registered once.
    pub fn register(
        &mut self,
        type_url: impl Into<String>,
        handler: Arc<dyn MessageHandler>,
    ) -> Result<(), RouterError> {
        let type_url = type_url.into();
        if type_url.is_empty() {
            return Err(RouterError::EmptyTypeUrl);
        }
        if self.handlers.contains_key(&type_url) {
            return Err(RouterError::DuplicateHandler(type_url));
        }

        tracing::debug!(msg_type = %type_url, "Registered proposal message handler");
        self.handlers.insert(type_url, handler);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl HandlerRegistry for MsgServiceRouter {
    fn handler(&self, type_url: &str) -> Option<Arc<dyn MessageHandler>> {
        self.handlers.get(type_url).cloned()
    }
}

/// Build the router used while processing proposals.
///
/// Only the execution engine is registered: it verifies the proposed
/// execution payload by calling `new_payload`.
pub fn build_process_proposal_router<E>(engine: Arc<E>) -> Result<MsgServiceRouter, RouterError>
where
    E: ExecutionEngine + 'static,
{
    let mut router = MsgServiceRouter::new();
    router.register(
        EXECUTION_PAYLOAD_TYPE_URL,
        Arc::new(ExecutionPayloadHandler::new(engine)),
    )?;
    Ok(router)
}
