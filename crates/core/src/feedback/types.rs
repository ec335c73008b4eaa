use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted feedback submission.
///
/// Records are immutable once written: there is no update path anywhere in
/// the system. The `ts` field is the server clock at write time, so ordering
/// across concurrent writers is best-effort only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Server-generated random v4 UUID.
    pub id: Uuid,
    /// Seconds since epoch at write time.
    pub ts: i64,
    /// Caller-supplied payload, stored opaquely. No schema is enforced.
    pub data: serde_json::Value,
}

impl FeedbackRecord {
    /// Creates a record for a freshly submitted payload, stamping a new id
    /// and the current server time.
    pub fn new(data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            ts: Utc::now().timestamp(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_records_get_distinct_ids() {
        let a = FeedbackRecord::new(serde_json::json!({"msg": "a"}));
        let b = FeedbackRecord::new(serde_json::json!({"msg": "a"}));

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_record_keeps_payload() {
        let payload = serde_json::json!({"msg": "hello", "rating": 5});
        let record = FeedbackRecord::new(payload.clone());

        assert_eq!(record.data, payload);
        assert!(record.ts > 0);
    }

    #[test]
    fn test_serde_field_names() {
        let record = FeedbackRecord {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap(),
            ts: 1_700_000_000,
            data: serde_json::json!({"msg": "a"}),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value["id"],
            serde_json::json!("550e8400-e29b-41d4-a716-446655440001")
        );
        assert_eq!(value["ts"], serde_json::json!(1_700_000_000));
        assert_eq!(value["data"], serde_json::json!({"msg": "a"}));
    }
}
