//! Errors from the config layer.

/// Anything that can go wrong between `config.ron` and a usable [`Config`](crate::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read orrery config: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("cannot write orrery config: {0}")]
    WriteError(#[source] std::io::Error),

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("malformed orrery config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("cannot encode orrery config: {0}")]
    SerializeError(#[source] ron::Error),

    /// A value parsed fine but cannot drive a session.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        reason: String,
    },
}
