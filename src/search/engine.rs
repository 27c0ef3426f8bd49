use super::{ranker, tokenizer::tokenize};
use crate::directory::record::{Field, PersonRecord};
use crate::directory::snapshot::{IndexedRecord, Snapshot};
use crate::error::QueryError;
use std::collections::HashSet;

/// Runs an autocomplete query against one snapshot.
///
/// Pipeline: tokenize, prune candidates through the per-field prefix
/// indexes, score the survivors, sort, truncate to `limit`. A record is a
/// candidate only if every token reaches it through at least one field
/// index, so non-qualifying records are dropped before scoring.
pub fn search(
    snapshot: &Snapshot,
    raw_query: &str,
    limit: usize,
) -> Result<Vec<PersonRecord>, QueryError> {
    let tokens = tokenize(raw_query)?;

    let mut candidates: Option<HashSet<u32>> = None;
    for token in &tokens {
        let mut reachable: HashSet<u32> = HashSet::new();
        for field in Field::ALL {
            reachable.extend(snapshot.candidates_for_token(field, token).all);
        }
        candidates = Some(match candidates.take() {
            Some(previous) => previous.intersection(&reachable).copied().collect(),
            None => reachable,
        });
        if candidates.as_ref().is_some_and(|set| set.is_empty()) {
            // No record is reachable by every token; valid empty result.
            return Ok(Vec::new());
        }
    }

    let mut hits: Vec<(&IndexedRecord, u32)> = Vec::new();
    for position in candidates.unwrap_or_default() {
        let record = snapshot.indexed(position);
        if let Some(score) = ranker::score_record(record, &tokens) {
            hits.push((record, score));
        }
    }

    ranker::rank(&mut hits);
    hits.truncate(limit);
    Ok(hits
        .into_iter()
        .map(|(record, _)| record.record().clone())
        .collect())
}
