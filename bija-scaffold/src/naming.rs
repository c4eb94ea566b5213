//! Name resolution: `module:entity` parsing and naming conventions.

use std::path::PathBuf;

use bija_config::Config;
use bija_core::{Casing, FileSystem, cased};

use crate::{Error, Result, paths};

/// A parsed `moduleName:entityName` (or bare `entityName`) string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName {
    raw: String,
    module: Option<String>,
    entity: String,
}

impl EntityName {
    /// Parse a raw name, rejecting extra `:` separators, empty parts and dots in the entity name.
    ///
    /// Neither part may contain path separators or whitespace, so a name never
    /// resolves outside the modules root.
    pub fn parse(raw: &str) -> Result<Self> {
        let (module, entity) = match raw.split_once(':') {
            Some((module, entity)) => {
                if entity.contains(':') {
                    return Err(Error::invalid_name(raw, "only one ':' separator is allowed"));
                }
                if module.is_empty() {
                    return Err(Error::invalid_name(raw, "the module name is empty"));
                }
                check_part(raw, module)?;
                (Some(module.to_string()), entity)
            }
            None => (None, raw),
        };

        if entity.is_empty() {
            return Err(Error::invalid_name(raw, "the entity name is empty"));
        }
        check_part(raw, entity)?;

        Ok(Self {
            raw: raw.to_string(),
            module,
            entity: entity.to_string(),
        })
    }

    /// The name as given on the command line
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The module qualifier, if one was given
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// The entity part of the name
    pub fn entity(&self) -> &str {
        &self.entity
    }
}

/// Naming conventions selected by `snakeCaseFileNames`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingPolicy {
    snake_case: bool,
}

impl NamingPolicy {
    pub fn new(snake_case: bool) -> Self {
        Self { snake_case }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.snake_case_file_names)
    }

    /// Casing used for generated file names.
    pub fn file_casing(&self) -> Casing {
        if self.snake_case {
            Casing::Snake
        } else {
            Casing::UpperCamel
        }
    }

    /// File stem for an entity (e.g., "commentList" -> "CommentList" or "comment_list")
    pub fn file_name(&self, entity: &str) -> String {
        cased(entity, self.file_casing())
    }

    /// Exported identifier for an entity; always UpperCamelCase.
    pub fn identifier(&self, entity: &str) -> String {
        cased(entity, Casing::UpperCamel)
    }

    /// Directory name of a module. Snake-cased under the snake policy, otherwise used as given.
    pub fn module_dir(&self, module: &str) -> String {
        if self.snake_case {
            cased(module, Casing::Snake)
        } else {
            module.to_string()
        }
    }

    /// Like [`NamingPolicy::module_dir`], but fails if casing leaves nothing of the name.
    pub fn checked_module_dir(&self, raw: &str, module: &str) -> Result<String> {
        let dir = self.module_dir(module);
        if dir.is_empty() {
            return Err(Error::invalid_name(raw, "the module name has no letters or digits"));
        }
        Ok(dir)
    }

    /// Fail if casing leaves nothing of the entity name.
    pub fn check_entity(&self, raw: &str, entity: &str) -> Result<()> {
        if self.identifier(entity).is_empty() || self.file_name(entity).is_empty() {
            return Err(Error::invalid_name(raw, "the entity name has no letters or digits"));
        }
        Ok(())
    }

    /// Module name as exposed to templates.
    pub fn module_variable(&self, module: &str) -> String {
        if self.snake_case {
            cased(module, Casing::Snake)
        } else {
            cased(module, Casing::Camel)
        }
    }
}

fn check_part(raw: &str, part: &str) -> Result<()> {
    if part.contains(['/', '\\']) {
        return Err(Error::invalid_name(raw, "names cannot contain path separators"));
    }
    if part.contains(char::is_whitespace) {
        return Err(Error::invalid_name(raw, "names cannot contain whitespace"));
    }
    if part.contains('.') {
        return Err(Error::invalid_name(raw, "names cannot contain dots"));
    }
    Ok(())
}

/// Return the module qualifier of `name`, failing if there is none.
pub fn ensure_module_provided(name: &EntityName) -> Result<&str> {
    name.module().ok_or_else(|| {
        Box::new(Error::MissingModule {
            name: name.raw().to_string(),
        })
    })
}

/// Check that the directory of `module` exists under the modules root, returning its path.
pub fn ensure_module_exists(fs: &dyn FileSystem, module: &str, config: &Config) -> Result<PathBuf> {
    let dir = NamingPolicy::from_config(config).checked_module_dir(module, module)?;
    let path = paths::module_path(&dir, config);
    if !fs.exists(&path) {
        return Err(Box::new(Error::ModuleNotFound {
            module: module.to_string(),
            path,
        }));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use bija_core::LocalFs;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_qualified_name() {
        let name = EntityName::parse("core:commentList").unwrap();
        assert_eq!(name.module(), Some("core"));
        assert_eq!(name.entity(), "commentList");
        assert_eq!(name.raw(), "core:commentList");
    }

    #[test]
    fn test_parse_bare_name() {
        let name = EntityName::parse("comments").unwrap();
        assert_eq!(name.module(), None);
        assert_eq!(name.entity(), "comments");
    }

    #[test]
    fn test_parse_rejects_dots() {
        assert!(matches!(
            *EntityName::parse("core:header.menu").unwrap_err(),
            Error::InvalidName { .. }
        ));
        assert!(matches!(
            *EntityName::parse("group.notes").unwrap_err(),
            Error::InvalidName { .. }
        ));
    }

    #[test]
    fn test_parse_rejects_paths() {
        for raw in [
            "/var/tmp/foo",
            "../core",
            "core/sub",
            "core\\sub",
            "/abs:post",
            "core:../post",
            "core:sub/post",
            "my module",
            "core:post list",
            "..:post",
        ] {
            assert!(
                matches!(*EntityName::parse(raw).unwrap_err(), Error::InvalidName { .. }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_casing_must_leave_a_name() {
        let snake = NamingPolicy::new(true);
        let camel = NamingPolicy::new(false);

        assert!(snake.checked_module_dir("___", "___").is_err());
        assert_eq!(camel.checked_module_dir("___", "___").unwrap(), "___");
        assert_eq!(snake.checked_module_dir("userManagement", "userManagement").unwrap(), "user_management");

        assert!(camel.check_entity("core:___", "___").is_err());
        assert!(snake.check_entity("core:--", "--").is_err());
        assert!(camel.check_entity("core:post", "post").is_ok());
    }

    #[test]
    fn test_parse_rejects_extra_separators() {
        assert!(EntityName::parse("core::header").is_err());
        assert!(EntityName::parse("a:b:c").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_parts() {
        assert!(EntityName::parse(":post").is_err());
        assert!(EntityName::parse("core:").is_err());
        assert!(EntityName::parse("").is_err());
    }

    #[test]
    fn test_policy_casing() {
        let snake = NamingPolicy::new(true);
        let camel = NamingPolicy::new(false);

        assert_eq!(snake.file_name("commentList"), "comment_list");
        assert_eq!(camel.file_name("commentList"), "CommentList");
        assert_eq!(snake.identifier("comment_list"), "CommentList");
        assert_eq!(camel.identifier("commentList"), "CommentList");
    }

    #[test]
    fn test_policy_module_names() {
        let snake = NamingPolicy::new(true);
        let camel = NamingPolicy::new(false);

        assert_eq!(snake.module_dir("userManagement"), "user_management");
        assert_eq!(camel.module_dir("userManagement"), "userManagement");
        assert_eq!(snake.module_variable("UserManagement"), "user_management");
        assert_eq!(camel.module_variable("user_management"), "userManagement");
    }

    #[test]
    fn test_ensure_module_provided() {
        let name = EntityName::parse("core:post").unwrap();
        assert_eq!(ensure_module_provided(&name).unwrap(), "core");

        let bare = EntityName::parse("post").unwrap();
        assert!(matches!(
            *ensure_module_provided(&bare).unwrap_err(),
            Error::MissingModule { .. }
        ));
    }

    #[test]
    fn test_ensure_module_exists() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFs::new(temp.path());
        let config = Config::default();

        let err = ensure_module_exists(&fs, "core", &config).unwrap_err();
        assert!(matches!(*err, Error::ModuleNotFound { .. }));

        std::fs::create_dir_all(temp.path().join("src/modules/core")).unwrap();
        let path = ensure_module_exists(&fs, "core", &config).unwrap();
        assert_eq!(path, PathBuf::from("./src/modules/core"));
    }
}
