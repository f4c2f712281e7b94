use crate::domain::a003_message::Message;
use serde::{Deserialize, Serialize};

/// Payload of one Server-Sent-Events `data:` line on the live channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiveEvent {
    NewMessage { message: Message },
    Heartbeat,
}

impl LiveEvent {
    pub fn parse(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_heartbeat() {
        assert_eq!(LiveEvent::parse(r#"{"kind":"heartbeat"}"#).unwrap(), LiveEvent::Heartbeat);
    }

    #[test]
    fn test_parse_new_message() {
        let data = r#"{
            "kind": "new_message",
            "message": {
                "id": "msg-live-1",
                "sender": "Secretaría",
                "title": "Cambio de horario",
                "body": "Mañana la salida será a las 13:00.",
                "category": "administration",
                "status": "unread",
                "received_at": "2025-11-20T09:15:00",
                "has_attachment": false
            }
        }"#;
        match LiveEvent::parse(data).unwrap() {
            LiveEvent::NewMessage { message } => {
                assert_eq!(message.id, "msg-live-1");
                assert!(message.is_unread());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_parse_garbage() {
        assert!(LiveEvent::parse("ping").is_err());
        assert!(LiveEvent::parse(r#"{"kind":"unknown"}"#).is_err());
    }
}
