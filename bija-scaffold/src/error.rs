use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for bija-scaffold operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid name '{name}': {reason}")]
    #[diagnostic(
        code(bija::invalid_name),
        help("names take the form moduleName:entityName, e.g. core:commentList")
    )]
    InvalidName { name: String, reason: String },

    #[error("invalid name '{name}': a module name is required")]
    #[diagnostic(
        code(bija::missing_module),
        help("format the name as moduleName:entityName, e.g. core:{name}")
    )]
    MissingModule { name: String },

    #[error("a module named '{module}' does not exist at '{}'", path.display())]
    #[diagnostic(
        code(bija::module_not_found),
        help("generate it first with `bija generate module {module}`")
    )]
    ModuleNotFound { module: String, path: PathBuf },

    #[error("cannot locate the export block '{marker}' in '{}'", path.display())]
    #[diagnostic(
        code(bija::unlocatable_marker),
        help("the file was left untouched; the export block must span several lines, e.g. `export {{` ... `}};`")
    )]
    UnlocatableMarker { path: PathBuf, marker: String },

    #[error("template '{template}' uses unknown variable '{variable}'")]
    #[diagnostic(code(bija::template))]
    UnknownTemplateVariable { template: String, variable: String },

    #[error("no {} template for '{kind}'", if *test { "test" } else { "entity" })]
    #[diagnostic(code(bija::template))]
    MissingTemplate { kind: String, test: bool },

    #[error("invalid pattern '{pattern}'")]
    #[diagnostic(code(bija::pattern))]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to access '{}'", path.display())]
    #[diagnostic(code(bija::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        })
    }
}
