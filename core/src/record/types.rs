use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::Field;

/// Present, trimmed, non-blank values of one contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    fields: BTreeMap<Field, String>,
}

impl ContactRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the trimmed value; blank values leave the field absent.
    pub fn set(&mut self, field: Field, raw: &str) {
        let value = raw.trim();
        if value.is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, value.to_string());
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.fields.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// What to do with a line whose token count differs from the schema length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// Pair tokens with schema entries up to the shorter of the two.
    #[default]
    Lenient,
    /// Drop the line.
    Skip,
    /// Abort the run.
    Strict,
}

impl LinePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            LinePolicy::Lenient => "lenient",
            LinePolicy::Skip => "skip",
            LinePolicy::Strict => "strict",
        }
    }
}

impl std::str::FromStr for LinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(LinePolicy::Lenient),
            "skip" => Ok(LinePolicy::Skip),
            "strict" => Ok(LinePolicy::Strict),
            other => Err(format!(
                "unknown line policy '{other}' (expected lenient, skip or strict)"
            )),
        }
    }
}
