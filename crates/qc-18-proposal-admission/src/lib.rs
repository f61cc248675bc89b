//! # qc-18-proposal-admission
//!
//! Proposal Admission subsystem for Quantum-Chain.
//!
//! ## Architecture
//!
//! Before prevoting, every validator runs the leader's proposal through this
//! gate. It returns a deterministic [`Verdict`] within a bounded time, so that
//! honest nodes never diverge and a slow check never stalls the round.
//!
//! ```text
//! process_proposal(proposal)
//!   └─ ProcessContext::bind (deadline)
//!        ├─ vote-extension quorum (height > 1)
//!        └─ for each tx: decode
//!             └─ for each msg: allow-list → handler
//!                                   │
//!                          any failure → reject_proposal → Verdict::Reject
//! ```
//!
//! ### Quorum
//!
//! Above height 1 the proposal must carry the previous commit's vote
//! extensions, with `total_power * 2 / 3 < voted_power` over Commit votes.
//!
//! ### Allow-list
//!
//! Only configured message types may appear, each at most its configured
//! number of times per proposal (default: one execution payload). Counts are
//! rebuilt for every evaluation.
//!
//! ### Side effects
//!
//! Handlers may mutate state. Those effects are only meant to persist when the
//! verdict is `Accept`; rolling them back on `Reject` (including a timeout that
//! interrupted a handler) is the caller's job.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qc_18_proposal_admission::{
//!     build_process_proposal_router, BincodeTxDecoder, ProposalAdmissionConfig,
//!     ProposalAdmissionDependencies, ProposalAdmissionService,
//! };
//!
//! let config = ProposalAdmissionConfig::default();
//! let service = ProposalAdmissionService::new(ProposalAdmissionDependencies {
//!     decoder: Arc::new(BincodeTxDecoder::new(config.max_tx_bytes)),
//!     registry: Arc::new(build_process_proposal_router(engine)?),
//!     config,
//! })?;
//!
//! let verdict = service.process_proposal(proposal).await;
//! ```

pub mod adapters;
pub mod config;
pub mod context;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod reporter;
pub mod service;

// Re-export main types
pub use adapters::{
    build_process_proposal_router, encode_execution_payload, encode_transaction,
    BincodeTxDecoder, ExecutionPayloadHandler, MsgServiceRouter,
};
pub use config::ProposalAdmissionConfig;
pub use context::ProcessContext;
pub use domain::{
    CommitFlag, CommitInfo, ConfigError, DecodeError, HandlerError, Message, MsgResponse,
    Proposal, RejectCause, RejectClass, RouterError, Transaction, Verdict, Vote,
    EXECUTION_PAYLOAD_TYPE_URL,
};
pub use ports::{
    ExecutionEngine, ExecutionPayload, HandlerRegistry, MessageHandler, PayloadStatus,
    ProposalAdmissionApi, TransactionDecoder,
};
pub use service::{ProposalAdmissionDependencies, ProposalAdmissionService};
