use crate::core::payload::{
    IndexationPayload, MilestonePayload, Payload, TransactionPayload, PAYLOAD_TYPE_INDEXATION,
    PAYLOAD_TYPE_MILESTONE, PAYLOAD_TYPE_TRANSACTION,
};
use crate::core::MESSAGE_ID_HEX_LEN;
use crate::error::Result;
use crate::utils::json::{get_hex_string_array, get_numeric_string, get_optional, get_u32};
use log::debug;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PayloadType {
    Transaction,
    Milestone,
    Indexation,
    Unknown,
}

/// A node of the message graph.
///
/// `network_id` and `nonce` are decimal 64-bit strings. When building a
/// message to send they may be left empty, and `parent_message_ids` may be
/// left empty too: the node fills all three in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub network_id: String,
    pub parent_message_ids: Vec<String>,
    pub payload: Payload,
    pub nonce: String,
}

impl Message {
    /// An unsent message around `payload`.
    pub fn new(payload: Payload) -> Message {
        Message {
            network_id: String::new(),
            parent_message_ids: vec![],
            payload,
            nonce: String::new(),
        }
    }

    /// Decodes the `data` object of a get-message response.
    pub fn from_json(obj: &Value) -> Result<Message> {
        let network_id = get_numeric_string(obj, "networkId")?;
        let parent_message_ids = get_hex_string_array(obj, "parentMessageIds", MESSAGE_ID_HEX_LEN)?;
        let payload = match get_optional(obj, "payload") {
            Some(payload_obj) => decode_payload(payload_obj)?,
            None => Payload::Unknown,
        };
        let nonce = get_numeric_string(obj, "nonce")?;

        Ok(Message {
            network_id,
            parent_message_ids,
            payload,
            nonce,
        })
    }

    pub fn to_json(&self) -> Value {
        let payload = match &self.payload {
            Payload::Transaction(tx) => tx.to_json(),
            Payload::Milestone(ms) => ms.to_json(),
            Payload::Indexation(idx) => idx.to_json(),
            Payload::Unknown => Value::Null,
        };
        json!({
            "networkId": non_empty(&self.network_id),
            "parentMessageIds": if self.parent_message_ids.is_empty() {
                Value::Null
            } else {
                json!(self.parent_message_ids)
            },
            "payload": payload,
            "nonce": non_empty(&self.nonce),
        })
    }

    pub fn payload_type(&self) -> PayloadType {
        match self.payload {
            Payload::Transaction(_) => PayloadType::Transaction,
            Payload::Milestone(_) => PayloadType::Milestone,
            Payload::Indexation(_) => PayloadType::Indexation,
            Payload::Unknown => PayloadType::Unknown,
        }
    }

    pub fn parent_count(&self) -> usize {
        self.parent_message_ids.len()
    }

    pub fn parent_id(&self, index: usize) -> Option<&str> {
        self.parent_message_ids.get(index).map(String::as_str)
    }

    pub fn as_transaction(&self) -> Option<&TransactionPayload> {
        match &self.payload {
            Payload::Transaction(tx) => Some(&**tx),
            _ => None,
        }
    }

    pub fn as_milestone(&self) -> Option<&MilestonePayload> {
        match &self.payload {
            Payload::Milestone(ms) => Some(&**ms),
            _ => None,
        }
    }

    pub fn as_indexation(&self) -> Option<&IndexationPayload> {
        match &self.payload {
            Payload::Indexation(idx) => Some(idx),
            _ => None,
        }
    }
}

fn non_empty(value: &str) -> Value {
    if value.is_empty() {
        Value::Null
    } else {
        Value::String(value.to_string())
    }
}

fn decode_payload(obj: &Value) -> Result<Payload> {
    let payload_type = get_u32(obj, "type")?;
    let payload = match payload_type {
        PAYLOAD_TYPE_TRANSACTION => {
            Payload::Transaction(Box::new(TransactionPayload::from_json(obj)?))
        }
        PAYLOAD_TYPE_MILESTONE => Payload::Milestone(Box::new(MilestonePayload::from_json(obj)?)),
        PAYLOAD_TYPE_INDEXATION => Payload::Indexation(IndexationPayload::from_json(obj)?),
        other => {
            debug!("Message carries unknown payload type {other}");
            Payload::Unknown
        }
    };
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_unknown_payload_type() {
        let obj = json!({
            "networkId": "1",
            "parentMessageIds": [],
            "payload": {"type": 9},
            "nonce": "2"
        });
        let msg = Message::from_json(&obj).unwrap();
        assert_eq!(msg.payload_type(), PayloadType::Unknown);
        assert!(msg.as_indexation().is_none());
    }

    #[test]
    fn test_null_payload_is_unknown() {
        let obj = json!({"networkId": "1", "parentMessageIds": [], "payload": null, "nonce": "2"});
        assert_eq!(Message::from_json(&obj).unwrap().payload, Payload::Unknown);
    }

    #[test]
    fn test_parent_count_is_not_fixed() {
        let parents: Vec<String> = (0..7).map(|i| format!("{i:02x}").repeat(32)).collect();
        let obj = json!({"networkId": "1", "parentMessageIds": parents, "payload": null, "nonce": "2"});
        let msg = Message::from_json(&obj).unwrap();
        assert_eq!(msg.parent_count(), 7);
        assert_eq!(msg.parent_id(6), Some("06".repeat(32).as_str()));
        assert_eq!(msg.parent_id(7), None);
    }

    #[test]
    fn test_missing_nonce() {
        let obj = json!({"networkId": "1", "parentMessageIds": [], "payload": null});
        assert_eq!(Message::from_json(&obj), Err(ClientError::missing("nonce")));
    }

    #[test]
    fn test_unsent_message_serializes_nulls() {
        let payload = IndexationPayload::new("iota.c", b"Hello World").unwrap();
        let msg = Message::new(Payload::Indexation(payload));
        let value = msg.to_json();
        assert!(value["networkId"].is_null());
        assert!(value["parentMessageIds"].is_null());
        assert!(value["nonce"].is_null());
        assert_eq!(value["payload"]["type"], 2);
        assert_eq!(value["payload"]["index"], "696f74612e63");
        assert_eq!(value["payload"]["data"], "48656c6c6f20576f726c64");
    }
}
