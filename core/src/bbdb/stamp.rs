use chrono::{Local, NaiveDate};

pub const DEFAULT_STAMP_DATE: &str = "2009-02-08";

const TODAY: &str = "today";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// creation-date / timestamp pair written identically on every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStamp {
    pub creation_date: String,
    pub timestamp: String,
}

impl RecordStamp {
    pub fn fixed(date: &str) -> Self {
        Self {
            creation_date: date.to_string(),
            timestamp: date.to_string(),
        }
    }

    /// Accepts `YYYY-MM-DD` or `today` for each value.
    pub fn resolve(creation_date: &str, timestamp: &str) -> Result<Self, String> {
        Ok(Self {
            creation_date: resolve_date(creation_date)?,
            timestamp: resolve_date(timestamp)?,
        })
    }
}

impl Default for RecordStamp {
    fn default() -> Self {
        Self::fixed(DEFAULT_STAMP_DATE)
    }
}

fn resolve_date(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(TODAY) {
        return Ok(Local::now().date_naive().format(DATE_FORMAT).to_string());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|e| format!("invalid stamp date '{value}' (expected YYYY-MM-DD or today): {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_fixed_import_date() {
        let s = RecordStamp::default();
        assert_eq!(s.creation_date, "2009-02-08");
        assert_eq!(s.timestamp, "2009-02-08");
    }

    #[test]
    fn resolves_explicit_dates() {
        let s = RecordStamp::resolve("2024-01-31", " 2024-02-01 ").unwrap();
        assert_eq!(s.creation_date, "2024-01-31");
        assert_eq!(s.timestamp, "2024-02-01");
    }

    #[test]
    fn today_resolves_to_an_iso_date() {
        let s = RecordStamp::resolve("today", "TODAY").unwrap();
        assert!(NaiveDate::parse_from_str(&s.creation_date, DATE_FORMAT).is_ok());
        assert_eq!(s.creation_date.len(), 10);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(RecordStamp::resolve("08/02/2009", "2009-02-08").is_err());
        assert!(RecordStamp::resolve("2009-02-30", "2009-02-08").is_err());
    }
}
