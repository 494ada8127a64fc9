//! Response reconciliation — repairs the model's JSON output and merges the
//! parsed records back onto the original posts by exact title match.
//!
//! The model is asked for a JSON array but may hit its token limit mid-array,
//! leaving the text unterminated or with a dangling partial object. Recovery
//! policy: prefer a parseable prefix over failing the whole batch.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::llm_client::strip_json_fences;
use crate::models::Post;

/// One classification object parsed from the model's JSON array. Transient:
/// consumed during the merge and discarded.
///
/// Every field defaults when absent, so a structurally valid but sparse
/// object still yields a record (an empty `title` only matches an
/// empty-titled post).
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub persons: Vec<String>,
}

/// Parses raw model output into classification records, repairing truncated
/// text.
///
/// Per iteration: try the buffer as-is, then with a single `]` appended
/// (the unterminated-array case), then drop the last character and repeat.
/// A dangling partial object is never closed — trimming falls back to the
/// longest parseable prefix, dropping the partial trailing element. Bounded
/// by the buffer length, so termination is guaranteed.
///
/// Total parse failure is not an error: the batch degrades to zero records.
pub fn parse_records(raw: &str) -> Vec<ClassificationRecord> {
    let mut buf = strip_json_fences(raw).to_string();

    while !buf.is_empty() {
        if let Ok(records) = serde_json::from_str::<Vec<ClassificationRecord>>(&buf) {
            return records;
        }

        let closed = format!("{buf}]");
        if let Ok(records) = serde_json::from_str::<Vec<ClassificationRecord>>(&closed) {
            debug!("recovered truncated model output by closing the array");
            return records;
        }

        buf.pop();
    }

    if !raw.is_empty() {
        warn!("model output never parsed as a JSON array, even after trimming; no records recovered");
    }
    Vec::new()
}

/// Merges parsed records onto the posts they classify.
///
/// For each record, the FIRST remaining post with an exactly equal title is
/// annotated, appended to the result, and removed from further matching, so
/// at most one record pairs with a given post instance. Records with no
/// remaining match and posts never matched are dropped silently — they are
/// unclassified, not errors.
pub fn reconcile(raw: &str, posts: Vec<Post>) -> Vec<Post> {
    let records = parse_records(raw);

    let mut remaining = posts;
    let mut grouped = Vec::with_capacity(records.len());

    for record in records {
        let Some(idx) = remaining.iter().position(|p| p.title == record.title) else {
            continue;
        };

        let mut post = remaining.remove(idx);
        post.categories = record.category;
        post.event = record.event;
        post.persons = record.persons;
        grouped.push(post);
    }

    grouped
}
