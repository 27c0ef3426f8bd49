use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One person in the directory. Field names on the wire are camelCase, both
/// in the record file and in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub year: u16,
}

impl PersonRecord {
    /// Load-time validation. Malformed entries reject the whole load rather
    /// than surfacing as unmatchable fields at query time.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.login.trim().is_empty() {
            return Err("login is empty");
        }
        if self.first_name.trim().is_empty() {
            return Err("firstName is empty");
        }
        if self.last_name.trim().is_empty() {
            return Err("lastName is empty");
        }
        Ok(())
    }

    /// Raw value of one searchable field. Year is matched as its decimal
    /// string representation.
    pub fn raw_field(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Login => Cow::Borrowed(&self.login),
            Field::FirstName => Cow::Borrowed(&self.first_name),
            Field::LastName => Cow::Borrowed(&self.last_name),
            Field::Location => Cow::Borrowed(&self.location),
            Field::Year => Cow::Owned(self.year.to_string()),
        }
    }
}

/// The fixed set of fields a query token may match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Login = 0,
    FirstName = 1,
    LastName = 2,
    Location = 3,
    Year = 4,
}

impl Field {
    pub const COUNT: usize = 5;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Login,
        Field::FirstName,
        Field::LastName,
        Field::Location,
        Field::Year,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Login => "login",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Location => "location",
            Field::Year => "year",
        }
    }
}
