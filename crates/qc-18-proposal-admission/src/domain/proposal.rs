//! Proposal domain entities
//!
//! A proposal is the candidate block a round leader hands to every validator
//! before the prevote step. It is transient: built per round, never persisted.

use serde::{Deserialize, Serialize};

/// 32-byte hash
pub type Hash = [u8; 32];

/// Validator address (20 bytes, as carried in commit votes)
pub type ValidatorAddress = [u8; 20];

/// Candidate block submitted for approval
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Block height (starts at 1)
    pub height: u64,
    /// Raw transaction bytes, in block order
    pub txs: Vec<Vec<u8>>,
    /// Commit info of the previous height. Absent at height 1.
    pub last_commit: Option<CommitInfo>,
}

impl Proposal {
    /// Create a proposal for the bootstrap height (no prior commit)
    pub fn genesis(txs: Vec<Vec<u8>>) -> Self {
        Self {
            height: 1,
            txs,
            last_commit: None,
        }
    }

    /// Create a proposal carrying the previous height's commit
    pub fn new(height: u64, txs: Vec<Vec<u8>>, last_commit: CommitInfo) -> Self {
        Self {
            height,
            txs,
            last_commit: Some(last_commit),
        }
    }

    /// Votes of the previous commit, empty when none were provided
    pub fn votes(&self) -> &[Vote] {
        self.last_commit
            .as_ref()
            .map(|c| c.votes.as_slice())
            .unwrap_or(&[])
    }
}

/// Votes (with extensions) of the previous height's commit
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub round: u32,
    pub votes: Vec<Vote>,
}

impl CommitInfo {
    pub fn new(round: u32, votes: Vec<Vote>) -> Self {
        Self { round, votes }
    }
}

/// How a validator's vote counted in the previous commit
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommitFlag {
    /// Flag not set (malformed vote)
    Unknown,
    /// Validator did not vote
    Absent,
    /// Validator voted for the block
    Commit,
    /// Validator voted nil
    Nil,
}

/// A single validator vote from the previous commit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub validator: ValidatorAddress,
    pub power: u64,
    pub commit_flag: CommitFlag,
    /// Vote extension attached by the validator (opaque here)
    #[serde(default)]
    pub extension: Vec<u8>,
}

impl Vote {
    pub fn new(validator: ValidatorAddress, power: u64, commit_flag: CommitFlag) -> Self {
        Self {
            validator,
            power,
            commit_flag,
            extension: Vec::new(),
        }
    }

    /// Attach a vote extension
    pub fn with_extension(mut self, extension: Vec<u8>) -> Self {
        self.extension = extension;
        self
    }

    pub fn is_commit(&self) -> bool {
        self.commit_flag == CommitFlag::Commit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_has_no_votes() {
        let proposal = Proposal::genesis(vec![vec![1, 2, 3]]);
        assert_eq!(proposal.height, 1);
        assert!(proposal.last_commit.is_none());
        assert!(proposal.votes().is_empty());
    }

    #[test]
    fn test_votes_come_from_last_commit() {
        let votes = vec![
            Vote::new([1u8; 20], 10, CommitFlag::Commit),
            Vote::new([2u8; 20], 5, CommitFlag::Nil),
        ];
        let proposal = Proposal::new(7, vec![], CommitInfo::new(2, votes.clone()));

        assert_eq!(proposal.last_commit.as_ref().map(|c| c.round), Some(2));
        assert_eq!(proposal.votes(), votes.as_slice());
        assert!(proposal.votes()[0].is_commit());
        assert!(!proposal.votes()[1].is_commit());
    }
}
