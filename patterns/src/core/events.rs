use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// DomainEventType defines the kind of side effect an event reports
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Deleted,
    Listed,
    Started,
    Rejected,
}

impl Display for DomainEventType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DomainEventType::Added => write!(f, "Added"),
            DomainEventType::Deleted => write!(f, "Deleted"),
            DomainEventType::Listed => write!(f, "Listed"),
            DomainEventType::Started => write!(f, "Started"),
            DomainEventType::Rejected => write!(f, "Rejected"),
        }
    }
}

// DomainEvent is one informational line emitted by a side-effecting operation.
// `message` is the human readable text; `data` carries the same facts as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub message: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn added(name: &str, key: &str, message: String, data: Value) -> Self {
        Self::build(name, key, DomainEventType::Added, message, data)
    }

    pub fn deleted(name: &str, key: &str, message: String, data: Value) -> Self {
        Self::build(name, key, DomainEventType::Deleted, message, data)
    }

    pub fn listed(name: &str, key: &str, message: String, data: Value) -> Self {
        Self::build(name, key, DomainEventType::Listed, message, data)
    }

    pub fn started(name: &str, key: &str, message: String, data: Value) -> Self {
        Self::build(name, key, DomainEventType::Started, message, data)
    }

    pub fn rejected(name: &str, key: &str, message: String, data: Value) -> Self {
        Self::build(name, key, DomainEventType::Rejected, message, data)
    }

    fn build(name: &str, key: &str, kind: DomainEventType, message: String, data: Value) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: key.to_string(),
            kind,
            message,
            data,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[test]
    fn test_should_build_added() {
        let event = DomainEvent::added("books", "Dune", "Book added".to_string(), json!({"title": "Dune"}));
        assert_eq!("books", event.name.as_str());
        assert_eq!("Dune", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!("Dune", event.data["title"]);
    }

    #[test]
    fn test_should_build_deleted() {
        let event = DomainEvent::deleted("books", "Dune", "Book removed".to_string(), json!({}));
        assert_eq!(DomainEventType::Deleted, event.kind);
    }

    #[test]
    fn test_should_assign_unique_event_ids() {
        let first = DomainEvent::started("vehicles", "Ford Mustang", "started".to_string(), json!({}));
        let second = DomainEvent::started("vehicles", "Ford Mustang", "started".to_string(), json!({}));
        assert_ne!(first.event_id, second.event_id);
    }

    #[test]
    fn test_should_serialize_event() {
        let event = DomainEvent::rejected("console", "bogus", "Invalid command".to_string(), json!({"input": "bogus"}));
        let json = serde_json::to_value(&event).expect("should serialize event");
        assert_eq!("Rejected", json["kind"]);
        assert_eq!("bogus", json["data"]["input"]);
    }
}
