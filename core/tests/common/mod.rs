use async_trait::async_trait;
use contacts2bbdb_core::api::{split_lines, ContactSource, RawLine, SourceError};

/// Canned contacts output standing in for the external program.
pub struct FakeSource {
    output: String,
}

impl FakeSource {
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        let mut output = String::new();
        for row in rows {
            output.push_str(&row.join("\t"));
            output.push('\n');
        }
        Self { output }
    }

    pub fn raw(output: &str) -> Self {
        Self {
            output: output.to_string(),
        }
    }
}

#[async_trait]
impl ContactSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch(&self) -> Result<Vec<RawLine>, SourceError> {
        Ok(split_lines(&self.output))
    }
}

/// A source whose program exited non-zero.
pub struct FailingSource;

#[async_trait]
impl ContactSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<Vec<RawLine>, SourceError> {
        Err(SourceError::Exit {
            program: "contacts".to_string(),
            status: "exit status: 1".to_string(),
            code: Some(1),
            stderr: "address book locked".to_string(),
        })
    }
}

/// One standard-schema row: fn ln c nn he we oe hp mp Mp wp.
pub fn row<'a>(values: [&'a str; 11]) -> [&'a str; 11] {
    values
}
