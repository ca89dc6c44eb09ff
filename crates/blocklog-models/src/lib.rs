#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Wire DTOs for the block log API.
//!
//! Both log endpoints (`/api/testing` and `/api/logs/{id}`) answer with the
//! same [`FetchResult`] document. Field names follow the camelCase JSON
//! emitted by the server; entry order is preserved as received.

use serde::{Deserialize, Serialize};

/// Player the log set belongs to (`pi` on the wire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerIdentity {
    /// Display name.
    pub name: String,
    /// Stable unique identifier as sent by the server.
    pub uuid: String,
}

/// Kind of block event recorded by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogKind {
    /// A block was placed.
    Place,
    /// A block was broken.
    Break,
    /// Any other kind the server reports, kept verbatim.
    Other(String),
}

impl LogKind {
    /// Wire string for the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Place => "place",
            Self::Break => "break",
            Self::Other(value) => value,
        }
    }

    /// Whether the event added a block to the world.
    #[must_use]
    pub const fn is_place(&self) -> bool {
        matches!(self, Self::Place)
    }
}

impl From<String> for LogKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "place" => Self::Place,
            "break" => Self::Break,
            _ => Self::Other(value),
        }
    }
}

impl From<LogKind> for String {
    fn from(kind: LogKind) -> Self {
        match kind {
            LogKind::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Single block place/break event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(rename = "type")]
    /// Event kind.
    pub kind: LogKind,
    /// Server the event happened on.
    pub server_name: String,
    /// Event time in epoch milliseconds.
    pub date: i64,
    /// World name.
    pub world: String,
    /// Player that performed the action.
    pub player_name: String,
    /// Raw block type identifier (e.g. `oak_planks`).
    pub block: String,
    /// Block X coordinate.
    pub x: i64,
    /// Block Y coordinate.
    pub y: i64,
    /// Block Z coordinate.
    pub z: i64,
    /// Set when a staff member performed the action.
    pub staff: bool,
}

/// Payload returned by both log endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchResult {
    #[serde(rename = "pi")]
    /// Player the log set belongs to.
    pub player: PlayerIdentity,
    /// Entries in server order.
    pub logs: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "pi": { "name": "Steve", "uuid": "069a79f4-44e9-4726-a5be-fca90e38aaf5" },
        "logs": [
            { "type": "place", "serverName": "survival", "date": 1700000000000,
              "world": "world", "playerName": "Steve", "block": "OAK_PLANKS",
              "x": 10, "y": 64, "z": -20, "staff": false },
            { "type": "break", "serverName": "survival", "date": 1700000001000,
              "world": "world_nether", "playerName": "Alex", "block": "stone",
              "x": -1, "y": 12, "z": 3, "staff": true },
            { "type": "explode", "serverName": "creative", "date": 1700000002000,
              "world": "world", "playerName": "Steve", "block": "tnt",
              "x": 0, "y": 0, "z": 0, "staff": false }
        ]
    }"#;

    #[test]
    fn fetch_result_decodes_camel_case_payload() {
        let parsed: FetchResult = serde_json::from_str(PAYLOAD).expect("payload decodes");
        assert_eq!(parsed.player.name, "Steve");
        assert_eq!(parsed.logs.len(), 3);
        let first = &parsed.logs[0];
        assert_eq!(first.kind, LogKind::Place);
        assert_eq!(first.server_name, "survival");
        assert_eq!(first.player_name, "Steve");
        assert_eq!((first.x, first.y, first.z), (10, 64, -20));
        assert!(parsed.logs[1].staff);
    }

    #[test]
    fn entries_keep_server_order() {
        let parsed: FetchResult = serde_json::from_str(PAYLOAD).expect("payload decodes");
        let dates: Vec<i64> = parsed.logs.iter().map(|log| log.date).collect();
        assert_eq!(dates, vec![1_700_000_000_000, 1_700_000_001_000, 1_700_000_002_000]);
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let parsed: FetchResult = serde_json::from_str(PAYLOAD).expect("payload decodes");
        assert_eq!(parsed.logs[2].kind, LogKind::Other("explode".into()));
        assert_eq!(parsed.logs[2].kind.as_str(), "explode");
        assert!(!parsed.logs[2].kind.is_place());

        let encoded = serde_json::to_value(&parsed.logs[2]).expect("entry encodes");
        assert_eq!(encoded["type"], "explode");
        assert_eq!(encoded["serverName"], "creative");
    }

    #[test]
    fn missing_fields_are_rejected() {
        let result = serde_json::from_str::<FetchResult>(r#"{ "logs": [] }"#);
        assert!(result.is_err());
    }
}
