//! Source → decode → render pipeline.

use std::io::Write;

use crate::bbdb::{render_record, BbdbRecord, RecordStamp, HEADER_LINES};
use crate::error::ConvertError;
use crate::record::{Decoded, LineDecoder, LinePolicy};
use crate::schema::{FieldSchema, DEFAULT_DELIMITER};
use crate::source::ContactSource;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub delimiter: char,
    pub line_policy: LinePolicy,
    pub stamp: RecordStamp,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            line_policy: LinePolicy::default(),
            stamp: RecordStamp::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub lines: usize,
    pub records: usize,
    pub skipped: usize,
}

/// Fetches every line from `source`, then writes the header and one BBDB
/// record per decoded contact to `out`.
///
/// Nothing is written until the source has been read and every line decoded,
/// so a failing source or a strict-mode rejection leaves `out` untouched.
#[tracing::instrument(name = "core.convert", skip_all, fields(source = source.name()))]
pub async fn convert<W: Write>(
    source: &dyn ContactSource,
    schema: &FieldSchema,
    opts: &ConvertOptions,
    out: &mut W,
) -> Result<ConvertOutcome, ConvertError> {
    let lines = source.fetch().await?;
    tracing::debug!(lines = lines.len(), "source fetched");

    let decoder = LineDecoder::new(schema, opts.delimiter, opts.line_policy);
    let mut outcome = ConvertOutcome {
        lines: lines.len(),
        ..ConvertOutcome::default()
    };

    let mut records = Vec::with_capacity(lines.len());
    for line in &lines {
        match decoder.decode(line)? {
            Decoded::Record(contact) => records.push(BbdbRecord::from_contact(&contact, &opts.stamp)),
            Decoded::Skipped => outcome.skipped += 1,
        }
    }

    write_bbdb(&records, out).map_err(ConvertError::Output)?;
    outcome.records = records.len();

    tracing::info!(
        records = outcome.records,
        skipped = outcome.skipped,
        "conversion finished"
    );
    Ok(outcome)
}

pub fn write_bbdb<W: Write>(records: &[BbdbRecord], out: &mut W) -> std::io::Result<()> {
    for line in HEADER_LINES {
        writeln!(out, "{line}")?;
    }
    for record in records {
        writeln!(out, "{}", render_record(record))?;
    }
    out.flush()
}
