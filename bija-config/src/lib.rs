// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for the bija scaffolding CLI.
//!
//! A project may carry a `.bija.yaml` at its root. Every key is optional;
//! anything left out falls back to [`Config::default`].

mod config;
mod error;

use std::path::Path;

pub use config::{Config, ConfigOverrides, CustomTemplate, TEMPLATE_NAMES};
pub use error::{Error, Result};

/// Project-relative path of the user configuration file.
pub const CONFIG_FILE: &str = ".bija.yaml";

/// Load the configuration at `path`, falling back to defaults if the file is absent.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_str_with_filename(&content, &path.display().to_string())
}

/// Parse configuration overrides from a string (uses ".bija.yaml" as filename)
pub fn parse_str(content: &str) -> Result<Config> {
    parse_str_with_filename(content, CONFIG_FILE)
}

/// Parse configuration overrides from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let overrides: ConfigOverrides =
        serde_yml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    let config = Config::default().merge(overrides);

    config.validate(content, filename)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reads_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "storybook: true\nmodulesPath: app/modules\n").unwrap();

        let config = load(&path).unwrap();
        assert!(config.storybook);
        assert_eq!(config.modules_path, "app/modules");
        assert_eq!(config.tab_size, 2);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse_str("").unwrap(), Config::default());
        assert_eq!(parse_str("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = parse_str("tabSize: 4\nsomethingElse: 1\n").unwrap();
        assert_eq!(config.tab_size, 4);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_str("tabSize: [not a number\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = parse_str("storybook: sometimes\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_zero_tab_size_is_rejected() {
        let err = parse_str("tabSize: 0\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_template_name_is_rejected() {
        let err = parse_str("templates:\n  - name: action\n    text: hello\n").unwrap_err();
        match *err {
            Error::Validation { message, .. } => assert!(message.contains("action")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
