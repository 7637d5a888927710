//! Configuration management
//!
//! Where the CLI looks for ack documents and how verbosely it logs. Values
//! come from defaults, an optional TOML file and `FACTOM_ACK_*` environment
//! variables, in increasing order of precedence; command-line flags win over
//! all of them.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
