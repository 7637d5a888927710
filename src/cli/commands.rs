use clap::{ArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::ByteCollector;
use crate::core::StatusKind;
use crate::error::Result;
use crate::utils::hex_decode;

/// Which ack to wait for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckKindArg {
    Fct,
    Commit,
    Reveal,
}

impl FromStr for AckKindArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fct" | "tx" | "transaction" => Ok(AckKindArg::Fct),
            "commit" => Ok(AckKindArg::Commit),
            "reveal" => Ok(AckKindArg::Reveal),
            _ => Err(format!(
                "Invalid ack kind: {s}. Valid options: fct, commit, reveal"
            )),
        }
    }
}

impl std::fmt::Display for AckKindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AckKindArg::Fct => write!(f, "fct"),
            AckKindArg::Commit => write!(f, "commit"),
            AckKindArg::Reveal => write!(f, "reveal"),
        }
    }
}

impl From<AckKindArg> for StatusKind {
    fn from(kind: AckKindArg) -> Self {
        match kind {
            AckKindArg::Fct => StatusKind::AssetTransferAck,
            AckKindArg::Commit => StatusKind::EntryCommitAck,
            AckKindArg::Reveal => StatusKind::EntryRevealAck,
        }
    }
}

/// Reject malformed hex while the command line is parsed
fn parse_hex_arg(s: &str) -> std::result::Result<String, String> {
    hex_decode(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

#[derive(Debug, Parser)]
#[command(name = "factom-ack")]
pub struct Opt {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "chainid", about = "Compute a chain ID from its name components")]
    Chainid {
        #[arg(short = 'n', long = "name", value_name = "ASCII", help = "Chain name component")]
        name_ascii: Vec<String>,
        #[arg(
            short = 'N',
            long = "name-hex",
            value_name = "HEX",
            value_parser = parse_hex_arg,
            help = "Hex encoded chain name component"
        )]
        name_hex: Vec<String>,
    },
    #[command(name = "extids", about = "Print external IDs as hex in the order given")]
    Extids {
        #[arg(short = 'e', long = "extid", value_name = "ASCII", help = "External ID")]
        extid_ascii: Vec<String>,
        #[arg(
            short = 'E',
            long = "extid-hex",
            value_name = "HEX",
            value_parser = parse_hex_arg,
            help = "Hex encoded external ID"
        )]
        extid_hex: Vec<String>,
    },
    #[command(name = "ack", about = "Wait for the ledger to acknowledge a submission")]
    Ack {
        #[arg(help = "Transaction ID, commit transaction ID or entry hash")]
        txid: String,
        #[arg(
            short = 'k',
            long = "kind",
            default_value = "fct",
            help = "Ack to wait for (fct, commit, reveal)"
        )]
        kind: AckKindArg,
        #[arg(long = "status-dir", help = "Directory holding ack documents")]
        status_dir: Option<String>,
    },
    #[command(name = "factoids", about = "Convert a factoshi amount to factoids")]
    Factoids {
        #[arg(help = "Amount in factoshis")]
        factoshis: String,
    },
}

/// Arg ids of the name component flags
pub const NAME_ARGS: (&str, &str) = ("name_ascii", "name_hex");

/// Arg ids of the external ID flags
pub const EXTID_ARGS: (&str, &str) = ("extid_ascii", "extid_hex");

/// Gather a text flag and its hex twin into one collector, keeping the order
/// in which they appeared on the command line.
pub fn collect_ordered(matches: &ArgMatches, ids: (&str, &str)) -> Result<ByteCollector> {
    let (ascii_id, hex_id) = ids;
    let mut tagged: Vec<(usize, bool, &String)> = Vec::new();
    for (id, is_hex) in [(ascii_id, false), (hex_id, true)] {
        if let (Some(values), Some(indices)) =
            (matches.get_many::<String>(id), matches.indices_of(id))
        {
            tagged.extend(indices.zip(values).map(|(idx, value)| (idx, is_hex, value)));
        }
    }
    tagged.sort_by_key(|(idx, _, _)| *idx);

    let mut collector = ByteCollector::new();
    for (_, is_hex, value) in tagged {
        if is_hex {
            collector.push_hex(value)?;
        } else {
            collector.push_ascii(value);
        }
    }
    Ok(collector)
}
