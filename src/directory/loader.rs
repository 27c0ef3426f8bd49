use crate::directory::record::PersonRecord;
use crate::error::DirectoryError;
use anyhow::{Context, Result};
use std::path::Path;

/// Reads a JSON array of person records and validates every entry.
///
/// Any unreadable file, malformed JSON, or invalid record rejects the whole
/// load; the caller decides what to keep serving.
pub fn load_records(path: &Path) -> Result<Vec<PersonRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record file {}", path.display()))?;

    let records: Vec<PersonRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse record file {}", path.display()))?;

    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|reason| DirectoryError::InvalidRecord {
                index,
                reason: reason.to_string(),
            })?;
    }

    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
