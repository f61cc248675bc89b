//! Driving ports (Inbound API)

use crate::domain::{Proposal, Verdict};
use async_trait::async_trait;

/// Process-proposal entry point called by consensus before prevoting
#[async_trait]
pub trait ProposalAdmissionApi: Send + Sync {
    /// Evaluate a leader's proposal.
    ///
    /// Always returns a verdict; a rejection is not an error. Invoked at most
    /// once per round.
    async fn process_proposal(&self, proposal: Proposal) -> Verdict;
}
