//! # Factom Ack - Submission Confirmation Helpers
//!
//! The pieces of my ledger command-line tool that carry real logic, kept out
//! of `main.rs` so they can be tested without a command line.
//!
//! ## What Is Here
//! - **Ack Polling**: block until the ledger acknowledges a transaction, an
//!   entry commit or an entry reveal, giving up after 120 tries 500ms apart
//! - **Chain IDs**: SHA-256 of the SHA-256 of each name component, in order
//! - **Byte Collectors**: ordered ASCII/hex inputs for external IDs and names
//! - **Amounts**: factoshi to factoid formatting
//!
//! ## How I Organized My Code
//! - `core/`: ack polling, chain ID derivation, monetary formatting
//! - `status/`: ack document types and the status services the poller queries
//! - `cli/`: clap commands and the ordered byte collectors
//! - `config/`: status directory and log level settings
//! - `utils/`: hashing and hex helpers
//!
//! ## Key Design Decisions I Made
//! - One polling loop for all three ack kinds; the kind only picks the query
//!   and the status field
//! - A failed query costs an attempt exactly like a pending one
//! - Collectors are owned by the caller rather than living in globals

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod status;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{AckKindArg, ByteCollector, Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use crate::core::{
    derive_chain_id, factoshi_str_to_factoid, factoshi_to_factoid, poll_until_acked,
    wait_for_ack, AckPoller, AckStatus, ChainId, PollPolicy, StatusKind,
};
pub use error::{AckError, Result, ACK_TIMEOUT_MESSAGE};
pub use status::{EntryAck, FactoidAck, FileStatusService, StatusService};
pub use utils::{hex_decode, hex_encode, sha256_digest};
