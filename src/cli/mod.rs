//! Command-line interface
//!
//! This module contains the CLI commands, argument parsing and the ordered
//! collectors behind the external ID and chain name flags.

pub mod collector;
pub mod commands;

pub use collector::ByteCollector;
pub use commands::{collect_ordered, AckKindArg, Command, Opt, EXTID_ARGS, NAME_ARGS};
