//! Core ledger helpers
//!
//! This module contains the two pieces the CLI is built around:
//! - Ack polling: block until a submission is acknowledged or the budget runs out
//! - Chain IDs: derive a chain's identifier from its ordered name components
//!
//! plus the amount formatting used when printing balances and fees.

pub mod ack;
pub mod chain_id;
pub mod monetary;

// Re-export main types for convenience
pub use ack::{
    poll_until_acked, wait_for_ack, AckPoller, AckStatus, PollPolicy, StatusKind,
    ACK_POLL_INTERVAL, MAX_ACK_ATTEMPTS,
};
pub use chain_id::{derive_chain_id, ChainId};
pub use monetary::conversions::{factoshi_str_to_factoid, factoshi_to_factoid};
