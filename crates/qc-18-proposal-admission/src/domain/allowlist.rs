//! Per-proposal message allow-list
//!
//! Built fresh for every evaluation from the configured ceilings and never
//! shared between rounds.

use super::RejectCause;
use std::collections::{BTreeMap, HashMap};

/// Remaining permitted occurrences per message type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedMessageCounts {
    remaining: HashMap<String, u32>,
}

impl AllowedMessageCounts {
    pub fn new(ceilings: &BTreeMap<String, u32>) -> Self {
        Self {
            remaining: ceilings
                .iter()
                .map(|(type_url, max)| (type_url.clone(), *max))
                .collect(),
        }
    }

    /// Account for one occurrence of `type_url`.
    ///
    /// Types never declared are rejected outright; declared types fail once
    /// their allowance is used up.
    pub fn consume(&mut self, type_url: &str) -> Result<(), RejectCause> {
        let Some(remaining) = self.remaining.get_mut(type_url) else {
            return Err(RejectCause::UnexpectedMessageType {
                type_url: type_url.to_string(),
            });
        };

        if *remaining == 0 {
            return Err(RejectCause::MessageTypeOverQuota {
                type_url: type_url.to_string(),
            });
        }

        *remaining -= 1;
        Ok(())
    }

    pub fn remaining(&self, type_url: &str) -> Option<u32> {
        self.remaining.get(type_url).copied()
    }
}
