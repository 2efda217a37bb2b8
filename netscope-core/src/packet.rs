//! Captured packet record

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::time::SystemTime;

/// A decoded, captured network packet.
///
/// Produced by the frame decoder from raw capture bytes; immutable once
/// built. Serializes with camelCase keys and an RFC 3339 timestamp for
/// host applications that forward records as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedPacket {
    /// Capture-source timestamp, monotone within a session
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: SystemTime,
    /// Network-layer source address, empty if no network layer was found
    pub source: String,
    /// Network-layer destination address, empty if no network layer was found
    pub destination: String,
    /// Transport protocol label ("TCP", "UDP", "ICMPv4", "ICMPv6"), empty if none
    pub protocol: String,
    /// Original wire length of the frame in bytes
    pub length: usize,
    /// Raw frame bytes as captured
    pub payload: Vec<u8>,
    /// Human-readable one-line summary
    pub summary: String,
}

fn serialize_timestamp<S: Serializer>(ts: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    let dt: DateTime<Utc> = (*ts).into();
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Nanos, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_serializes_camel_case_with_rfc3339_timestamp() {
        let packet = CapturedPacket {
            timestamp: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
            source: "10.0.0.1".to_string(),
            destination: "10.0.0.2".to_string(),
            protocol: "TCP".to_string(),
            length: 60,
            payload: vec![0x01],
            summary: "TCP 443->51000 Flags:[SYN,ACK]".to_string(),
        };

        let json = serde_json::to_value(&packet).unwrap();
        assert_eq!(json["source"], "10.0.0.1");
        assert_eq!(json["protocol"], "TCP");
        assert_eq!(json["length"], 60);
        assert!(json["timestamp"]
            .as_str()
            .unwrap()
            .starts_with("2023-11-14T22:13:20"));
    }
}
