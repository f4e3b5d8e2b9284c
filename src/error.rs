use thiserror::Error;

/// Bad or unknown command-line token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unrecognized option '{0}'")]
    UnknownOption(String),
    #[error("option '--user' expects a value")]
    MissingUserValue,
}

/// External command failure. A non-zero exit status is the only
/// success/failure signal the driver gets from a processor.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("'{program}' is not installed or not on PATH")]
    ToolMissing { program: String },
    #[error("failed to spawn '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' exited with status {code}")]
    NonZero { program: String, code: i32 },
    #[error("'{program}' was killed by a signal")]
    Signalled { program: String },
}

/// Hub credential gate failure.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no Hub CLI found (tried: {tried}); install one with 'pip install -U huggingface_hub'")]
    CliMissing { tried: String },
    #[error("'{tool}' reports no logged-in identity; run '{tool} login' and retry")]
    NotLoggedIn { tool: String },
    #[error("failed to probe '{tool}' for a logged-in identity")]
    Probe {
        tool: String,
        #[source]
        source: RunError,
    },
}
