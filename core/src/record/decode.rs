use crate::error::ConvertError;
use crate::schema::{Field, FieldSchema};
use crate::source::RawLine;

use super::{ContactRecord, LinePolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Record(ContactRecord),
    /// Blank line, or a mismatched line dropped by [`LinePolicy::Skip`].
    Skipped,
}

/// Decodes one line by zipping schema order against delimiter-split tokens.
///
/// Nicknames are always cleared: they are never exported.
pub fn decode_line(
    line: &RawLine,
    schema: &FieldSchema,
    delimiter: char,
    policy: LinePolicy,
) -> Result<Decoded, ConvertError> {
    let text = line.text.trim_end_matches(['\r', '\n']);
    // A row of bare delimiters is a contact with every field blank.
    if text.is_empty() || (!text.contains(delimiter) && text.trim().is_empty()) {
        tracing::debug!(line = line.number, "blank line skipped");
        return Ok(Decoded::Skipped);
    }

    let tokens: Vec<&str> = text.split(delimiter).collect();
    if tokens.len() != schema.len() {
        match policy {
            LinePolicy::Lenient => {
                tracing::warn!(
                    line = line.number,
                    expected = schema.len(),
                    found = tokens.len(),
                    "field count mismatch, pairing positionally"
                );
            }
            LinePolicy::Skip => {
                tracing::warn!(
                    line = line.number,
                    expected = schema.len(),
                    found = tokens.len(),
                    "field count mismatch, line skipped"
                );
                return Ok(Decoded::Skipped);
            }
            LinePolicy::Strict => {
                return Err(ConvertError::MalformedLine {
                    line: line.number,
                    expected: schema.len(),
                    found: tokens.len(),
                });
            }
        }
    }

    let mut record = ContactRecord::new();
    for (entry, token) in schema.iter().zip(tokens) {
        record.set(entry.field, token);
    }
    record.clear(Field::Nickname);

    Ok(Decoded::Record(record))
}

/// Line decoder bound to one schema, delimiter and policy.
#[derive(Debug, Clone)]
pub struct LineDecoder<'a> {
    schema: &'a FieldSchema,
    delimiter: char,
    policy: LinePolicy,
}

impl<'a> LineDecoder<'a> {
    pub fn new(schema: &'a FieldSchema, delimiter: char, policy: LinePolicy) -> Self {
        Self {
            schema,
            delimiter,
            policy,
        }
    }

    pub fn decode(&self, line: &RawLine) -> Result<Decoded, ConvertError> {
        decode_line(line, self.schema, self.delimiter, self.policy)
    }
}
