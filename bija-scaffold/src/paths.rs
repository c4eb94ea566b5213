//! Output path derivation.
//!
//! Generate and destroy both go through these functions, so a file is always
//! looked for where it was written.

use std::path::{Path, PathBuf};

use bija_config::Config;

use crate::{EntityKind, naming::NamingPolicy};

/// Name of a module's index file.
pub const INDEX_FILE: &str = "index.js";

/// Directory of a module (e.g., `./src/modules/core`).
pub fn module_path(module: &str, config: &Config) -> PathBuf {
    Path::new(".").join(&config.modules_path).join(module)
}

/// Directory holding entities of `kind` inside a module.
fn entity_dir(kind: EntityKind, module: &str, config: &Config) -> PathBuf {
    let module_path = module_path(module, config);
    match kind {
        EntityKind::Module => module_path,
        _ => module_path.join(kind.dir_segment()),
    }
}

/// File stem of a container (e.g., "CommentList" -> "CommentListContainer").
pub fn container_stem(cased_entity: &str, config: &Config) -> String {
    if config.snake_case_file_names {
        format!("{cased_entity}_container")
    } else {
        format!("{cased_entity}Container")
    }
}

/// Path of the file generated for an entity whose name is already cased.
pub fn output_path(kind: EntityKind, cased_entity: &str, module: &str, config: &Config) -> PathBuf {
    let stem = match kind {
        EntityKind::Component => cased_entity.to_string(),
        EntityKind::Container => container_stem(cased_entity, config),
        EntityKind::Storybook => format!("{cased_entity}.stories"),
        EntityKind::Module => return module_path(module, config),
    };
    entity_dir(kind, module, config).join(format!("{stem}.{}", kind.extension()))
}

/// Path of the test file generated alongside an entity.
///
/// Uses the same cased name as [`output_path`], so tests always sit next to
/// the file they cover regardless of naming policy.
pub fn test_output_path(
    kind: EntityKind,
    cased_entity: &str,
    module: &str,
    config: &Config,
) -> PathBuf {
    entity_dir(kind, module, config)
        .join("tests")
        .join(format!("{cased_entity}.{}", kind.extension()))
}

/// Path of a module's index file.
pub fn index_path(module: &str, config: &Config) -> PathBuf {
    module_path(module, config).join(INDEX_FILE)
}

/// Path of the index file listing a module's stories.
pub fn stories_index_path(module: &str, config: &Config) -> PathBuf {
    entity_dir(EntityKind::Storybook, module, config).join(INDEX_FILE)
}

/// Cased file stem for an entity under the configured policy.
pub fn cased_file_name(entity: &str, config: &Config) -> String {
    NamingPolicy::from_config(config).file_name(entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_config() -> Config {
        Config {
            snake_case_file_names: true,
            ..Config::default()
        }
    }

    #[test]
    fn test_output_path_container() {
        let path = output_path(EntityKind::Container, "UserList", "core", &Config::default());
        assert_eq!(
            path,
            PathBuf::from("./src/modules/core/containers/UserListContainer.js")
        );
    }

    #[test]
    fn test_output_path_component() {
        let path = output_path(EntityKind::Component, "UserList", "core", &Config::default());
        assert_eq!(path, PathBuf::from("./src/modules/core/components/UserList.js"));
    }

    #[test]
    fn test_output_path_storybook() {
        let path = output_path(EntityKind::Storybook, "UserList", "core", &Config::default());
        assert_eq!(
            path,
            PathBuf::from("./src/modules/core/components/stories/UserList.stories.js")
        );
    }

    #[test]
    fn test_output_path_snake_case() {
        let config = snake_config();
        assert_eq!(
            output_path(EntityKind::Container, "user_list", "core", &config),
            PathBuf::from("./src/modules/core/containers/user_list_container.js")
        );
        assert_eq!(
            output_path(EntityKind::Component, "user_list", "core", &config),
            PathBuf::from("./src/modules/core/components/user_list.js")
        );
    }

    #[test]
    fn test_output_path_custom_modules_path() {
        let config = Config {
            modules_path: "foo/bar/modules".to_string(),
            ..Config::default()
        };
        assert_eq!(
            output_path(EntityKind::Component, "UserList", "core", &config),
            PathBuf::from("./foo/bar/modules/core/components/UserList.js")
        );
        assert_eq!(
            output_path(EntityKind::Module, "", "core", &config),
            PathBuf::from("./foo/bar/modules/core")
        );
    }

    #[test]
    fn test_test_output_path() {
        let config = Config::default();
        assert_eq!(
            test_output_path(EntityKind::Component, "CommentList", "core", &config),
            PathBuf::from("./src/modules/core/components/tests/CommentList.js")
        );
        assert_eq!(
            test_output_path(EntityKind::Container, "CommentList", "core", &config),
            PathBuf::from("./src/modules/core/containers/tests/CommentList.js")
        );
    }

    #[test]
    fn test_resolved_name_feeds_output_path() {
        let config = snake_config();
        let cased = cased_file_name("commentList", &config);
        assert_eq!(cased, "comment_list");
        assert_eq!(
            test_output_path(EntityKind::Component, &cased, "core", &config),
            PathBuf::from("./src/modules/core/components/tests/comment_list.js")
        );
        assert_eq!(
            cased_file_name("commentList", &Config::default()),
            "CommentList"
        );
    }

    #[test]
    fn test_index_paths() {
        let config = Config::default();
        assert_eq!(
            index_path("core", &config),
            PathBuf::from("./src/modules/core/index.js")
        );
        assert_eq!(
            stories_index_path("core", &config),
            PathBuf::from("./src/modules/core/components/stories/index.js")
        );
    }
}
