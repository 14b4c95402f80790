use miette::Diagnostic;
use thiserror::Error;

/// Main error type for identicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IdenticonError {
    #[error("Invalid colour: {message}")]
    #[diagnostic(code(identicon::color))]
    InvalidColor {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid dimension: {message}")]
    #[diagnostic(code(identicon::dimension))]
    InvalidDimension {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid filename: {message}")]
    #[diagnostic(code(identicon::filename))]
    InvalidFilename {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid fingerprint: {message}")]
    #[diagnostic(code(identicon::fingerprint))]
    InvalidFingerprint {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(identicon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(identicon::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl IdenticonError {
    pub(crate) fn dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdenticonError>;
