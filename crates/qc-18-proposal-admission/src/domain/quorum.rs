//! Vote-extension quorum check
//!
//! A proposal above the bootstrap height must carry the previous commit's
//! vote extensions with more than 2/3 of the voting power behind them.

use super::{RejectCause, Vote};

/// Voting power seen in a commit
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PowerTally {
    /// Power of every listed validator
    pub total_power: u128,
    /// Power of validators whose vote counted as a commit
    pub voted_power: u128,
}

impl PowerTally {
    pub fn from_votes(votes: &[Vote]) -> Self {
        votes.iter().fold(Self::default(), |mut tally, vote| {
            tally.total_power += u128::from(vote.power);
            if vote.is_commit() {
                tally.voted_power += u128::from(vote.power);
            }
            tally
        })
    }

    /// Quorum holds unless `total * 2 / 3 >= voted` (truncating division).
    ///
    /// Every honest validator must draw the boundary in the same place, so
    /// this form is kept as-is rather than rewritten with other rounding.
    pub fn has_quorum(&self) -> bool {
        self.total_power * 2 / 3 < self.voted_power
    }
}

/// Check the previous commit's vote extensions.
///
/// Skipped at height 1 (no prior commit exists).
pub fn check_vote_extension_quorum(height: u64, votes: &[Vote]) -> Result<(), RejectCause> {
    if height <= 1 {
        return Ok(());
    }

    let tally = PowerTally::from_votes(votes);
    if !tally.has_quorum() {
        return Err(RejectCause::MissingQuorum {
            voted_power: tally.voted_power,
            total_power: tally.total_power,
        });
    }

    Ok(())
}
