//! Acknowledgment polling
//!
//! A submitted transfer, entry commit or entry reveal is confirmed by asking
//! the ledger for its ack until the ledger stops answering "pending". All
//! three kinds share one loop and one budget; they differ only in which query
//! is issued and which status field is read from the reply.

use log::{debug, info, warn};
use std::thread;
use std::time::Duration;

use crate::error::{AckError, Result};
use crate::status::{EntryAck, FactoidAck, StatusService};

/// Attempts made before giving up on an ack
pub const MAX_ACK_ATTEMPTS: u32 = 120;

/// Pause between two ack queries
pub const ACK_POLL_INTERVAL: Duration = Duration::from_millis(500);

const STATUS_UNKNOWN: &str = "Unknown";
const STATUS_NOT_CONFIRMED: &str = "NotConfirmed";

/// Outcome of a single ack query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AckStatus {
    /// The ledger reported `Unknown` or `NotConfirmed`
    Pending,
    /// Any other reported status, passed through verbatim
    Confirmed(String),
    /// The status service did not answer
    TransientError(String),
}

impl AckStatus {
    /// Classify a status string reported by the ledger
    pub fn from_reported(status: &str) -> AckStatus {
        match status {
            STATUS_UNKNOWN | STATUS_NOT_CONFIRMED => AckStatus::Pending,
            other => AckStatus::Confirmed(other.to_string()),
        }
    }

    fn from_query(result: Result<String>) -> AckStatus {
        match result {
            Ok(status) => AckStatus::from_reported(&status),
            Err(e) => AckStatus::TransientError(e.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AckStatus::Confirmed(_))
    }
}

/// Which ack is being waited on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    AssetTransferAck,
    EntryCommitAck,
    EntryRevealAck,
}

impl StatusKind {
    /// Issue the query for this kind and classify the reply
    pub fn query<S: StatusService + ?Sized>(&self, service: &S, txid: &str) -> AckStatus {
        let reported = match self {
            StatusKind::AssetTransferAck => service.factoid_ack(txid).map(transfer_status),
            StatusKind::EntryCommitAck => service.entry_ack(txid).map(commit_status),
            StatusKind::EntryRevealAck => service.entry_ack(txid).map(reveal_status),
        };
        AckStatus::from_query(reported)
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::AssetTransferAck => write!(f, "transaction"),
            StatusKind::EntryCommitAck => write!(f, "entry commit"),
            StatusKind::EntryRevealAck => write!(f, "entry reveal"),
        }
    }
}

fn transfer_status(ack: FactoidAck) -> String {
    ack.status
}

fn commit_status(ack: EntryAck) -> String {
    ack.commit_data.status
}

fn reveal_status(ack: EntryAck) -> String {
    ack.entry_data.status
}

/// Retry budget for ack polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ACK_ATTEMPTS,
            interval: ACK_POLL_INTERVAL,
        }
    }
}

impl PollPolicy {
    /// Longest time a poll can block, ignoring query latency
    pub fn ceiling(&self) -> Duration {
        self.interval * self.max_attempts
    }
}

/// Run `query` until it reports a terminal status or the budget runs out.
///
/// Pending replies and transient errors are treated the same way: each one
/// uses up an attempt and is followed by a pause of `policy.interval`.
pub fn poll_until_acked<F>(policy: &PollPolicy, mut query: F) -> Result<String>
where
    F: FnMut() -> AckStatus,
{
    for attempt in 1..=policy.max_attempts {
        match query() {
            AckStatus::Confirmed(status) => {
                info!("Acknowledged with status {status} after {attempt} attempt(s)");
                return Ok(status);
            }
            AckStatus::Pending => debug!("Attempt {attempt}: still pending"),
            AckStatus::TransientError(e) => debug!("Attempt {attempt}: query failed: {e}"),
        }
        if attempt < policy.max_attempts {
            thread::sleep(policy.interval);
        }
    }
    warn!("No acknowledgement after {} attempts", policy.max_attempts);
    Err(AckError::AckTimeout)
}

/// Blocks the calling thread until the ledger acknowledges a submission
pub struct AckPoller<'a, S: StatusService + ?Sized> {
    service: &'a S,
    policy: PollPolicy,
}

impl<'a, S: StatusService + ?Sized> AckPoller<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self::with_policy(service, PollPolicy::default())
    }

    pub fn with_policy(service: &'a S, policy: PollPolicy) -> Self {
        Self { service, policy }
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Wait for the `kind` ack of `txid`, returning the ledger's status string
    pub fn wait_for_ack(&self, txid: &str, kind: StatusKind) -> Result<String> {
        debug!("Waiting for {kind} ack of {txid}");
        poll_until_acked(&self.policy, || kind.query(self.service, txid))
    }
}

/// Wait with the default policy
pub fn wait_for_ack<S: StatusService + ?Sized>(
    service: &S,
    txid: &str,
    kind: StatusKind,
) -> Result<String> {
    AckPoller::new(service).wait_for_ack(txid, kind)
}
