//! Proposal Admission Service - Core business logic
//!
//! # Pipeline
//! 1. Bind the evaluation to a deadline
//! 2. Check vote-extension quorum (above height 1)
//! 3. Decode each transaction in order
//! 4. Gate each message against the allow-list, then dispatch it
//!
//! Every stage yields `Result<(), RejectCause>`; the first `Err` is the
//! verdict. A rejection is reported, never raised.

use crate::config::ProposalAdmissionConfig;
use crate::context::ProcessContext;
use crate::domain::{
    check_vote_extension_quorum, AllowedMessageCounts, ConfigError, HandlerError, Message,
    Proposal, RejectCause, Verdict,
};
use crate::metrics;
use crate::ports::{HandlerRegistry, ProposalAdmissionApi, TransactionDecoder};
use crate::reporter;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;

/// Proposal Admission Service
pub struct ProposalAdmissionService<D, R>
where
    D: TransactionDecoder,
    R: HandlerRegistry,
{
    decoder: Arc<D>,
    registry: Arc<R>,
    config: ProposalAdmissionConfig,
}

/// Dependencies for ProposalAdmissionService
pub struct ProposalAdmissionDependencies<D, R> {
    pub decoder: Arc<D>,
    pub registry: Arc<R>,
    pub config: ProposalAdmissionConfig,
}

impl<D, R> ProposalAdmissionService<D, R>
where
    D: TransactionDecoder,
    R: HandlerRegistry,
{
    /// Create a new ProposalAdmissionService
    pub fn new(deps: ProposalAdmissionDependencies<D, R>) -> Result<Self, ConfigError> {
        deps.config.validate()?;

        // Not fatal: such proposals are rejected as [BUG] at evaluation time.
        for type_url in deps.config.allowed_messages.keys() {
            if deps.registry.handler(type_url).is_none() {
                tracing::warn!(msg_type = %type_url, "Allowed message type has no handler");
            }
        }

        Ok(Self {
            decoder: deps.decoder,
            registry: deps.registry,
            config: deps.config,
        })
    }

    pub fn config(&self) -> &ProposalAdmissionConfig {
        &self.config
    }

    /// Evaluate a proposal within the configured timeout
    pub async fn process(&self, proposal: &Proposal) -> Verdict {
        let ctx = ProcessContext::bind(proposal.height, self.config.process_timeout());
        let span = tracing::info_span!(
            "process_proposal",
            height = proposal.height,
            txs = proposal.txs.len()
        );

        async {
            let result = match tokio::time::timeout_at(ctx.deadline(), self.evaluate(&ctx, proposal))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(ctx.deadline_exceeded()),
            };

            metrics::record_evaluation_latency(ctx.elapsed().as_secs_f64());
            reporter::into_verdict(proposal.height, result)
        }
        .instrument(span)
        .await
    }

    async fn evaluate(&self, ctx: &ProcessContext, proposal: &Proposal) -> Result<(), RejectCause> {
        check_vote_extension_quorum(proposal.height, proposal.votes())?;

        let mut allowed = AllowedMessageCounts::new(&self.config.allowed_messages);

        for (index, raw) in proposal.txs.iter().enumerate() {
            ctx.ensure_active()?;

            let tx = self
                .decoder
                .decode(raw)
                .map_err(|source| RejectCause::DecodeTransaction { index, source })?;

            for msg in tx.msgs() {
                ctx.ensure_active()?;
                self.dispatch(ctx, &mut allowed, msg).await?;
            }
        }

        // A last handler may have blocked past the deadline without yielding.
        ctx.ensure_active()?;
        Ok(())
    }

    async fn dispatch(
        &self,
        ctx: &ProcessContext,
        allowed: &mut AllowedMessageCounts,
        msg: &Message,
    ) -> Result<(), RejectCause> {
        let type_url = msg.type_url();
        allowed.consume(type_url)?;

        let handler =
            self.registry
                .handler(type_url)
                .ok_or_else(|| RejectCause::HandlerNotFound {
                    type_url: type_url.to_string(),
                })?;

        handler
            .handle(ctx, msg)
            .await
            .map_err(|source| {
                if matches!(source, HandlerError::DeadlineExceeded) || ctx.is_expired() {
                    return ctx.deadline_exceeded();
                }
                RejectCause::ExecuteMessage {
                    type_url: type_url.to_string(),
                    source,
                }
            })?;

        tracing::trace!(msg_type = %type_url, "Proposal message executed");
        Ok(())
    }
}

#[async_trait]
impl<D, R> ProposalAdmissionApi for ProposalAdmissionService<D, R>
where
    D: TransactionDecoder,
    R: HandlerRegistry,
{
    async fn process_proposal(&self, proposal: Proposal) -> Verdict {
        self.process(&proposal).await
    }
}
