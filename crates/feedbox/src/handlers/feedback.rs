//! Persist and List operations for feedback submissions.

use axum::{body::Bytes, Json};
use chrono::Utc;
use serde_json::{json, Value};

use feedbox_core::feedback::{format_age, FeedbackRecord};

use crate::{handlers::AppError, state::AppState};

/// Persist a submission (POST, any path).
///
/// The body is stored unconditionally: no shape validation, no uniqueness
/// check beyond the freshly generated UUID. Every successful write answers
/// with the same fixed body.
pub async fn persist_feedback(state: &AppState, body: Bytes) -> Result<Json<Value>, AppError> {
    let record = FeedbackRecord::new(parse_payload(&body));

    let repository = state.repository().await?;
    repository.put_record(&record).await?;

    tracing::info!(record_id = %record.id, ts = record.ts, "Saved feedback record");

    Ok(Json(json!({ "Output": "Data Saved" })))
}

/// List every stored submission (GET, path containing "feedback").
///
/// Loads the full table per request, sorts ascending by write time, and
/// annotates each record with its age relative to the server clock at this
/// call. The age is recomputed on every call and never cached.
pub async fn list_feedback(state: &AppState) -> Result<Json<Vec<Value>>, AppError> {
    let repository = state.repository().await?;
    let mut records = repository.scan_all().await?;

    // Stable sort: records written within the same second keep scan order.
    records.sort_by_key(|record| record.ts);

    tracing::debug!(count = records.len(), "Listing feedback records");

    let now = Utc::now().timestamp();
    let listing = records
        .into_iter()
        .map(|record| annotate(record, now))
        .collect();

    Ok(Json(listing))
}

/// Interprets the raw body: parsed JSON when the body parses, otherwise the
/// raw bytes as a JSON string (lossy UTF-8). Either way the payload is
/// stored opaquely.
fn parse_payload(body: &Bytes) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Shapes one record for the listing, adding the derived `tsdiff` field.
/// Clock skew between write and read clamps to zero rather than going
/// negative.
fn annotate(record: FeedbackRecord, now: i64) -> Value {
    let elapsed = (now - record.ts).max(0) as u64;
    json!({
        "id": record.id,
        "ts": record.ts,
        "data": record.data,
        "tsdiff": format_age(elapsed),
    })
}
