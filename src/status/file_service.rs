use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AckError, Result};
use crate::status::{EntryAck, FactoidAck, StatusService};

const ACK_FILE_EXTENSION: &str = "json";

/// Status service backed by a directory of ack documents.
///
/// The ack for a reference lives in `<dir>/<reference>.json` and is re-read
/// on every query, so a relay can drop or rewrite the file while a poll is
/// in progress. A missing or unreadable document is a transient failure.
#[derive(Debug, Clone)]
pub struct FileStatusService {
    dir: PathBuf,
}

impl FileStatusService {
    pub fn new<P: AsRef<Path>>(dir: P) -> FileStatusService {
        FileStatusService {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the ack document for `txid`
    pub fn ack_path(&self, txid: &str) -> Result<PathBuf> {
        // References are hex hashes; anything that could leave the directory is refused
        if txid.is_empty() || !txid.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AckError::TransientQuery(format!(
                "Invalid transaction reference: {txid:?}"
            )));
        }
        Ok(self.dir.join(format!("{txid}.{ACK_FILE_EXTENSION}")))
    }

    fn read_ack<T: DeserializeOwned>(&self, txid: &str) -> Result<T> {
        let path = self.ack_path(txid)?;
        let contents = fs::read_to_string(&path).map_err(|e| {
            AckError::TransientQuery(format!("Failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            AckError::TransientQuery(format!("Failed to parse {}: {e}", path.display()))
        })
    }
}

impl StatusService for FileStatusService {
    fn factoid_ack(&self, txid: &str) -> Result<FactoidAck> {
        self.read_ack(txid)
    }

    fn entry_ack(&self, txid: &str) -> Result<EntryAck> {
        self.read_ack(txid)
    }
}
