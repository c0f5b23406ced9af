use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One header-keyed row of the raw feed, as delivered by the loader.
pub type RawRow = BTreeMap<String, String>;

/// A question/answer pair retained from the feed. Immutable once loaded;
/// the whole set is replaced on reload, never patched row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QARecord {
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
}

/// Maps feed column names to record fields. The feed is externally authored,
/// so the column names are caller configuration, not a record-store concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMap {
    pub question: String,
    pub answer: String,
    pub id: Option<String>,
}

impl Default for FieldMap {
    /// Column names of the original published sheet.
    fn default() -> Self {
        Self {
            question: "Questions".to_string(),
            answer: "Answer".to_string(),
            id: Some("ID".to_string()),
        }
    }
}

/// Filters raw feed rows into the record snapshot.
///
/// Rows missing a question or an answer (after trimming) are dropped, not
/// rejected: the feed may contain blank or half-filled rows and the store
/// must stay usable. Output order matches input order.
pub fn load_records(rows: &[RawRow], fields: &FieldMap) -> Vec<QARecord> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let question = row.get(&fields.question).map(|v| v.trim()).unwrap_or("");
        let answer = row.get(&fields.answer).map(|v| v.trim()).unwrap_or("");
        if question.is_empty() || answer.is_empty() {
            continue;
        }

        let id = fields
            .id
            .as_ref()
            .and_then(|key| row.get(key))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(ToString::to_string);

        records.push(QARecord {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }

    log::debug!(
        "loaded {} records from {} feed rows",
        records.len(),
        rows.len()
    );
    records
}
