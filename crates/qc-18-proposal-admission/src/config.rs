//! Configuration for proposal admission

use crate::domain::{ConfigError, EXECUTION_PAYLOAD_TYPE_URL};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Maximum time to process a proposal (10 seconds).
///
/// Timing out rejects the proposal, which hurts liveness, but blocking
/// forever hurts it more.
pub const DEFAULT_PROCESS_TIMEOUT_MS: u64 = 10_000;

/// Maximum encoded transaction size accepted by the decoder (1 MiB)
pub const DEFAULT_MAX_TX_BYTES: usize = 1024 * 1024;

/// Runtime configuration for the proposal gate
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ProposalAdmissionConfig {
    /// Deadline for a whole evaluation, in milliseconds
    pub process_timeout_ms: u64,

    /// Message type URL -> maximum occurrences per proposal.
    /// Types missing here are never allowed.
    pub allowed_messages: BTreeMap<String, u32>,

    /// Upper bound on one encoded transaction
    pub max_tx_bytes: usize,
}

impl Default for ProposalAdmissionConfig {
    fn default() -> Self {
        Self {
            process_timeout_ms: DEFAULT_PROCESS_TIMEOUT_MS,
            // Only a single EVM execution payload is allowed.
            allowed_messages: BTreeMap::from([(EXECUTION_PAYLOAD_TYPE_URL.to_string(), 1)]),
            max_tx_bytes: DEFAULT_MAX_TX_BYTES,
        }
    }
}

impl ProposalAdmissionConfig {
    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.process_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.max_tx_bytes == 0 {
            return Err(ConfigError::ZeroMaxTxBytes);
        }
        if self.allowed_messages.keys().any(|t| t.is_empty()) {
            return Err(ConfigError::EmptyTypeUrl);
        }
        Ok(())
    }

    pub fn process_timeout(&self) -> Duration {
        Duration::from_millis(self.process_timeout_ms)
    }

    /// Allow exactly `max` occurrences of `type_url`
    pub fn with_allowed(mut self, type_url: impl Into<String>, max: u32) -> Self {
        self.allowed_messages.insert(type_url.into(), max);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.process_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }
}
