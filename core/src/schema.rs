//! Ordered field schema shared by query construction and output decoding.
//!
//! The order of entries decides both the `-f` template sent to the contacts
//! program and the column each token is read from, so the two never drift.

use std::collections::HashSet;
use std::fmt;

use crate::error::SchemaError;

pub const DEFAULT_DELIMITER: char = '\t';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Company,
    Nickname,
    HomeEmail,
    WorkEmail,
    OtherEmail,
    HomePhone,
    MobilePhone,
    MainPhone,
    WorkPhone,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Company,
        Field::Nickname,
        Field::HomeEmail,
        Field::WorkEmail,
        Field::OtherEmail,
        Field::HomePhone,
        Field::MobilePhone,
        Field::MainPhone,
        Field::WorkPhone,
    ];

    /// Field name as used in records. Phone fields carry their BBDB label.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Company => "company",
            Field::Nickname => "nickName",
            Field::HomeEmail => "homeEmail",
            Field::WorkEmail => "workEmail",
            Field::OtherEmail => "otherEmail",
            Field::HomePhone => "Home",
            Field::MobilePhone => "Mobile",
            Field::MainPhone => "Main",
            Field::WorkPhone => "Work",
        }
    }

    /// Format token understood by the contacts program (`%fn`, `%ln`, ...).
    pub fn default_short_key(self) -> &'static str {
        match self {
            Field::FirstName => "fn",
            Field::LastName => "ln",
            Field::Company => "c",
            Field::Nickname => "nn",
            Field::HomeEmail => "he",
            Field::WorkEmail => "we",
            Field::OtherEmail => "oe",
            Field::HomePhone => "hp",
            Field::MobilePhone => "mp",
            Field::MainPhone => "Mp",
            Field::WorkPhone => "wp",
        }
    }

    pub fn from_short_key(key: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.default_short_key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub short_key: String,
    pub field: Field,
}

impl SchemaEntry {
    pub fn new(short_key: impl Into<String>, field: Field) -> Self {
        Self {
            short_key: short_key.into(),
            field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    entries: Vec<SchemaEntry>,
}

impl FieldSchema {
    pub fn new(entries: Vec<SchemaEntry>) -> Result<Self, SchemaError> {
        if entries.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut keys = HashSet::new();
        let mut fields = HashSet::new();
        for entry in &entries {
            if !keys.insert(entry.short_key.as_str()) {
                return Err(SchemaError::DuplicateKey(entry.short_key.clone()));
            }
            if !fields.insert(entry.field) {
                return Err(SchemaError::DuplicateField(entry.field.name()));
            }
        }

        Ok(Self { entries })
    }

    /// fn ln c nn he we oe hp mp Mp wp
    pub fn standard() -> Self {
        Self {
            entries: Field::ALL
                .into_iter()
                .map(|f| SchemaEntry::new(f.default_short_key(), f))
                .collect(),
        }
    }

    pub fn from_short_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self, SchemaError> {
        let entries = keys
            .iter()
            .map(|k| {
                let k = k.as_ref().trim();
                Field::from_short_key(k)
                    .map(|f| SchemaEntry::new(k, f))
                    .ok_or_else(|| SchemaError::UnknownKey(k.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn field_for(&self, short_key: &str) -> Option<Field> {
        self.entries
            .iter()
            .find(|e| e.short_key == short_key)
            .map(|e| e.field)
    }

    pub fn format_template(&self, delimiter: char) -> String {
        let mut out = String::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                out.push(delimiter);
            }
            out.push('%');
            out.push_str(&entry.short_key);
        }
        out
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn validate_delimiter(delimiter: char) -> Result<char, SchemaError> {
    if delimiter == '\n' || delimiter == '\r' {
        return Err(SchemaError::InvalidDelimiter(delimiter));
    }
    Ok(delimiter)
}
