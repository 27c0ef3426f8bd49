use crate::error::QueryError;

/// Normalizes a raw query into ordered, lowercased terms.
///
/// Order and duplicates are preserved; matching itself is order-independent
/// but display stability depends on the original term order. An input that
/// trims to nothing is the one rejected case.
pub fn tokenize(raw_query: &str) -> Result<Vec<String>, QueryError> {
    let trimmed = raw_query.trim();
    if trimmed.is_empty() {
        return Err(QueryError::BadQuery);
    }
    Ok(trimmed
        .split_whitespace()
        .map(|term| term.to_lowercase())
        .filter(|term| !term.is_empty())
        .collect())
}
