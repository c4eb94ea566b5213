use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for bija-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(bija::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(
        code(bija::config::parse_error),
        help("see `bija init` for a configuration with every recognized option")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yml::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(bija::config::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to serialize configuration")]
    Serialize {
        #[source]
        source: serde_yml::Error,
    },
}

impl Error {
    /// Create a parse error from a YAML error with source context
    pub fn parse(source: serde_yml::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from((loc.index(), 1)));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error pointing at the first occurrence of `key` in the source
    pub fn validation_at_key(
        message: impl Into<String>,
        key: &str,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = src
            .find(key)
            .map(|offset| SourceSpan::from((offset, key.len())));
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}
