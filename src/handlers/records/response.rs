//! Response bodies shared by every resource
//!
//! The wrapper key depends on the record type (`{ "users": [...] }`,
//! `{ "user": {...} }`), so these serialize through a map instead of a derive.

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::models::Record;

/// All documents of a collection, keyed by the collection name
#[derive(Debug)]
pub struct Listing<R>(pub Vec<R>);

impl<R: Record> Serialize for Listing<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(R::COLLECTION, &self.0)?;
        map.end()
    }
}

/// One document keyed by the singular resource name
#[derive(Debug)]
pub struct Single<R>(pub R);

impl<R: Record> Serialize for Single<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(R::SINGULAR, &self.0)?;
        map.end()
    }
}

/// Result of a create or update
#[derive(Debug)]
pub struct Saved<R> {
    pub message: String,
    pub record: R,
}

impl<R: Record> Saved<R> {
    pub fn created(record: R) -> Self {
        Self {
            message: format!("{} created successfully", R::TITLE),
            record,
        }
    }

    pub fn updated(record: R) -> Self {
        Self {
            message: format!("{} updated", R::TITLE),
            record,
        }
    }
}

impl<R: Record> Serialize for Saved<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry(R::SINGULAR, &self.record)?;
        map.end()
    }
}

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::{NewTicket, Ticket};

    fn ticket() -> Ticket {
        Ticket::from_draft(
            Uuid::new_v4(),
            NewTicket {
                subject: "Refund".into(),
                description: "Charged twice".into(),
                status: Default::default(),
                priority: Default::default(),
                assigned_user: Default::default(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_wrapper_keys_follow_record_type() {
        let listing = serde_json::to_value(Listing(vec![ticket()])).unwrap();
        assert_eq!(listing["tickets"].as_array().unwrap().len(), 1);

        let single = serde_json::to_value(Single(ticket())).unwrap();
        assert_eq!(single["ticket"]["subject"], "Refund");

        let saved = serde_json::to_value(Saved::created(ticket())).unwrap();
        assert_eq!(saved["message"], "Ticket created successfully");
        assert_eq!(saved["ticket"]["assignedUser"], "none");
    }
}
