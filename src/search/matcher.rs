use crate::directory::record::Field;
use crate::directory::snapshot::IndexedRecord;

/// Strength of one (token, field) match. Derived ordering gives
/// `Exact > Prefix > None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchStrength {
    None,
    Prefix,
    Exact,
}

/// Best strength one token achieved on a record, with the fields that
/// achieved it. The fields matter only for diagnostics, never for ranking.
#[derive(Debug)]
pub struct TokenMatch {
    pub strength: MatchStrength,
    pub fields: Vec<Field>,
}

/// Strength of `token` against one normalized field value.
pub fn field_match(field: Field, value: &str, token: &str) -> MatchStrength {
    // Only digit tokens can touch the year field; "201" prefix-matches 2015
    // but "20a" matches nothing.
    if field == Field::Year && !token.bytes().all(|b| b.is_ascii_digit()) {
        return MatchStrength::None;
    }
    if value == token {
        MatchStrength::Exact
    } else if value.starts_with(token) {
        MatchStrength::Prefix
    } else {
        MatchStrength::None
    }
}

/// Best match of one token across all fields of a record (OR across fields).
pub fn best_match(record: &IndexedRecord, token: &str) -> TokenMatch {
    let mut strength = MatchStrength::None;
    let mut fields = Vec::new();

    for field in Field::ALL {
        let candidate = field_match(field, record.normalized(field), token);
        if candidate == MatchStrength::None {
            continue;
        }
        if candidate > strength {
            strength = candidate;
            fields.clear();
            fields.push(field);
        } else if candidate == strength {
            fields.push(field);
        }
    }

    TokenMatch { strength, fields }
}
