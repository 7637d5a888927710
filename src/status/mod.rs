//! Status service access
//!
//! The ledger answers ack queries with small JSON documents. This module
//! holds their wire shapes, the [`StatusService`] seam the poller queries
//! through, and a directory-backed implementation used by the CLI.

pub mod file_service;
pub mod response;

pub use file_service::FileStatusService;
pub use response::{AckPhase, EntryAck, FactoidAck};

use crate::error::Result;

/// Source of ack replies for submitted operations.
///
/// Any error returned here is treated as transient by the poller.
pub trait StatusService {
    /// Ack for an asset transfer (factoid transaction)
    fn factoid_ack(&self, txid: &str) -> Result<FactoidAck>;

    /// Ack for an entry; covers both the commit and the reveal phase
    fn entry_ack(&self, txid: &str) -> Result<EntryAck>;
}
