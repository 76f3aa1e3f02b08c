//! List columns are stored as a JSON array in a single TEXT column.
//!
//! Reads are fail-soft: anything that is not a JSON array of strings decodes to an
//! empty list so a corrupted row never breaks a read path.

use tracing::warn;

/// `None` stays `None` (NULL column); an empty list is stored as `[]`.
pub fn encode(list: Option<&[String]>) -> Option<String> {
    // Serializing a slice of strings cannot fail.
    list.map(|l| serde_json::to_string(l).unwrap_or_else(|_| "[]".to_string()))
}

pub fn decode(text: Option<&str>) -> Vec<String> {
    let Some(raw) = text.filter(|t| !t.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => list,
        Err(e) => {
            warn!(error = %e, "corrupted list column, reading as empty");
            Vec::new()
        }
    }
}
