//! Domain layer for Proposal Admission
//!
//! - proposal: proposal, commit info and votes
//! - message: transactions and typed messages
//! - quorum: vote-extension quorum check
//! - allowlist: per-proposal message ceilings
//! - verdict: accept/reject outcome and causes

mod allowlist;
mod error;
mod message;
mod proposal;
mod quorum;
mod verdict;

pub use allowlist::*;
pub use error::*;
pub use message::*;
pub use proposal::*;
pub use quorum::*;
pub use verdict::*;
