use super::matcher::{self, MatchStrength};
use crate::directory::snapshot::IndexedRecord;

/// An exact hit must strictly outrank a prefix hit per token; the absolute
/// values are otherwise free.
pub const EXACT_WEIGHT: u32 = 2;
pub const PREFIX_WEIGHT: u32 = 1;

pub fn weight(strength: MatchStrength) -> u32 {
    match strength {
        MatchStrength::Exact => EXACT_WEIGHT,
        MatchStrength::Prefix => PREFIX_WEIGHT,
        MatchStrength::None => 0,
    }
}

/// Sums the best per-token weight for one record. Any token that matches no
/// field disqualifies the record outright (AND across tokens), regardless of
/// what the other tokens accumulated.
pub fn score_record(record: &IndexedRecord, tokens: &[String]) -> Option<u32> {
    let mut score = 0;
    for token in tokens {
        let token_match = matcher::best_match(record, token);
        if token_match.strength == MatchStrength::None {
            return None;
        }
        tracing::trace!(
            login = %record.record().login,
            token = %token,
            strength = ?token_match.strength,
            fields = ?token_match.fields.iter().map(|f| f.name()).collect::<Vec<_>>(),
            "token matched"
        );
        score += weight(token_match.strength);
    }
    Some(score)
}

/// Deterministic ordering: score descending, then normalized login ascending.
/// The login tie-break makes equal-score orderings byte-identical across
/// repeated calls.
pub fn rank(hits: &mut [(&IndexedRecord, u32)]) {
    hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.key().cmp(b.0.key())));
}
