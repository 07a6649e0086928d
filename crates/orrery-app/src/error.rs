//! Errors surfaced by the session and the headless runner.

use orrery_config::ConfigError;

/// Failures of the session and the headless runner.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to read an input script.
    #[error("failed to read script {path}: {source}")]
    ScriptRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input script is not valid RON.
    #[error("failed to parse script: {0}")]
    ScriptParse(#[source] ron::error::SpannedError),

    /// Failed to encode or write a snapshot.
    #[error("failed to write snapshot: {0}")]
    Output(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
