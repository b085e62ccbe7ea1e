use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use contacts2bbdb_core::api::{split_lines, ContactSource, ContactsCommand, RawLine, SourceError};

use super::output::{decode_utf8, stderr_tail};

const STDERR_TAIL_CHARS: usize = 512;

/// Runs the contacts program once and captures its output.
pub struct ContactsCliSource {
    command: ContactsCommand,
}

impl ContactsCliSource {
    pub fn new(command: ContactsCommand) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ContactSource for ContactsCliSource {
    fn name(&self) -> &str {
        "contacts"
    }

    async fn fetch(&self) -> Result<Vec<RawLine>, SourceError> {
        let program = &self.command.program;
        tracing::info!(command = %self.command.display(), "invoking contacts program");

        let output = Command::new(program)
            .args(&self.command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SourceError::NotFound {
                    program: program.clone(),
                },
                _ => SourceError::Spawn {
                    program: program.clone(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            return Err(SourceError::Exit {
                program: program.clone(),
                status: output.status.to_string(),
                code: output.status.code(),
                stderr: stderr_tail(&output.stderr, STDERR_TAIL_CHARS),
            });
        }

        if !output.stderr.is_empty() {
            tracing::warn!(
                stderr = %stderr_tail(&output.stderr, STDERR_TAIL_CHARS),
                "contacts program wrote to stderr"
            );
        }

        let text = decode_utf8(output.stdout, program);
        let lines = split_lines(&text);
        tracing::debug!(lines = lines.len(), "contacts output captured");
        Ok(lines)
    }
}
