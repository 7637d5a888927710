use serde::{Deserialize, Serialize};

/// Reply to an asset-transfer (factoid transaction) ack query
///
/// Absent fields decode as empty, so a reply without a status reports `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoidAck {
    #[serde(default)]
    pub txid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactiondate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactiondatestring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockdate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockdatestring: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Per-phase detail of an entry ack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckPhase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactiondate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactiondatestring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockdate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockdatestring: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Reply to an entry ack query; carries both the commit and the reveal phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAck {
    #[serde(default)]
    pub committxid: String,
    #[serde(default)]
    pub entryhash: String,
    #[serde(default, rename = "commitdata")]
    pub commit_data: AckPhase,
    #[serde(default, rename = "entrydata")]
    pub entry_data: AckPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_factoid_ack() {
        let json = r#"{
            "txid": "f1d9919829fa71ce18caf1bd8659cce8a06c0026d3f3fffc61054ebb25ebeaa0",
            "transactiondate": 1441138021975,
            "transactiondatestring": "2015-09-01 15:07:01",
            "blockdate": 1441137600000,
            "blockdatestring": "2015-09-01 15:00:00",
            "status": "DBlockConfirmed"
        }"#;
        let ack: FactoidAck = serde_json::from_str(json).unwrap();
        assert_eq!(ack.status, "DBlockConfirmed");
        assert_eq!(ack.blockdate, Some(1441137600000));
    }

    #[test]
    fn test_decode_entry_ack_with_missing_dates() {
        let json = r#"{
            "committxid": "e5b5be39a41df43a3c46beaa238dc5e6f7bb11115a8da1a9b45cd694e257935a",
            "entryhash": "9228b4b080b3cf94cceea866b74c48319f2093f56bd5a63465288e9a71437ee8",
            "commitdata": {"status": "TransactionACK"},
            "entrydata": {"status": "NotConfirmed"}
        }"#;
        let ack: EntryAck = serde_json::from_str(json).unwrap();
        assert_eq!(ack.commit_data.status, "TransactionACK");
        assert_eq!(ack.entry_data.status, "NotConfirmed");
        assert_eq!(ack.commit_data.transactiondate, None);
    }

    #[test]
    fn test_missing_status_decodes_empty() {
        let ack: FactoidAck = serde_json::from_str(r#"{"txid": "ab"}"#).unwrap();
        assert_eq!(ack.txid, "ab");
        assert_eq!(ack.status, "");

        let ack: EntryAck = serde_json::from_str(r#"{"commitdata": {}}"#).unwrap();
        assert_eq!(ack.commit_data.status, "");
    }

    #[test]
    fn test_missing_phase_decodes_empty() {
        let ack: EntryAck =
            serde_json::from_str(r#"{"commitdata": {"status": "TransactionACK"}}"#).unwrap();
        assert_eq!(ack.commit_data.status, "TransactionACK");
        assert_eq!(ack.entry_data, AckPhase::default());

        let ack: EntryAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack, EntryAck::default());
    }
}
