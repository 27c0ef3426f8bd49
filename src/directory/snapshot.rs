use super::record::{Field, PersonRecord};
use crate::error::DirectoryError;
use std::collections::{BTreeMap, HashMap};

/// Normalization applied to every indexed value, query token, and lookup key.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A record plus its precomputed normalized field values, so matching never
/// re-lowercases per comparison.
#[derive(Debug)]
pub struct IndexedRecord {
    record: PersonRecord,
    normalized: [String; Field::COUNT],
}

impl IndexedRecord {
    fn new(record: PersonRecord) -> Self {
        let normalized = Field::ALL.map(|field| normalize(&record.raw_field(field)));
        Self { record, normalized }
    }

    pub fn record(&self) -> &PersonRecord {
        &self.record
    }

    pub fn normalized(&self, field: Field) -> &str {
        &self.normalized[field as usize]
    }

    /// Normalized login; the unique key and the deterministic tie-breaker.
    pub fn key(&self) -> &str {
        self.normalized(Field::Login)
    }
}

/// Candidate record positions for one (field, token) pair.
///
/// `all` holds every record whose normalized field value has the token as a
/// prefix; `exact` is the subset with full equality.
#[derive(Debug, Default)]
pub struct TokenCandidates {
    pub all: Vec<u32>,
    pub exact: Vec<u32>,
}

/// Immutable, fully indexed view of the directory at one point in time.
///
/// Built once by [`Snapshot::build`] and never mutated; every read operation
/// is a pure function, so arbitrarily many searches may run against the same
/// snapshot without coordination.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    records: Vec<IndexedRecord>,
    by_login: HashMap<String, u32>,
    prefix: [BTreeMap<String, Vec<u32>>; Field::COUNT],
}

impl Snapshot {
    /// Indexes a validated record set. Two records sharing a normalized login
    /// fail the whole build; no partially built snapshot is ever returned.
    pub fn build(records: Vec<PersonRecord>, version: u64) -> Result<Self, DirectoryError> {
        let records: Vec<IndexedRecord> = records.into_iter().map(IndexedRecord::new).collect();

        let mut by_login: HashMap<String, u32> = HashMap::with_capacity(records.len());
        let mut prefix: [BTreeMap<String, Vec<u32>>; Field::COUNT] =
            std::array::from_fn(|_| BTreeMap::new());

        for (position, record) in records.iter().enumerate() {
            let position = position as u32;
            if by_login.insert(record.key().to_string(), position).is_some() {
                return Err(DirectoryError::DuplicateIdentifier(
                    record.record().login.clone(),
                ));
            }
            for field in Field::ALL {
                prefix[field as usize]
                    .entry(record.normalized(field).to_string())
                    .or_default()
                    .push(position);
            }
        }

        Ok(Self {
            version,
            records,
            by_login,
            prefix,
        })
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive exact lookup. Blank input is just another unmatched
    /// key, never a distinct error.
    pub fn lookup_by_login(&self, login: &str) -> Option<&PersonRecord> {
        let key = normalize(login);
        self.by_login
            .get(&key)
            .map(|&position| self.records[position as usize].record())
    }

    pub fn indexed(&self, position: u32) -> &IndexedRecord {
        &self.records[position as usize]
    }

    /// Range scan over the field's ordered index: every stored value that
    /// keeps `token` as a prefix sits in one contiguous key range.
    pub fn candidates_for_token(&self, field: Field, token: &str) -> TokenCandidates {
        let mut out = TokenCandidates::default();
        if token.is_empty() {
            return out;
        }
        for (value, positions) in self.prefix[field as usize].range(token.to_string()..) {
            if !value.starts_with(token) {
                break;
            }
            out.all.extend_from_slice(positions);
            if value == token {
                out.exact.extend_from_slice(positions);
            }
        }
        out
    }
}
