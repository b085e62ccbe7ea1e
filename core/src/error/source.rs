use thiserror::Error;

/// Failures of the external contact source. All of them abort the run.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("contacts program not found: {program}")]
    NotFound { program: String },

    #[error("spawn failed for {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("io error reading {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
}
