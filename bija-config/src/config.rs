use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Entity kinds a custom template may override.
pub const TEMPLATE_NAMES: &[&str] = &["component", "container", "storybook"];

/// Merged configuration for one invocation. Never mutated after [`Config::merge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Spaces per indentation level when re-flowing rendered templates
    pub tab_size: usize,
    /// Whether component generation cascades into a storybook entry
    pub storybook: bool,
    pub generate_component_tests: bool,
    pub generate_container_tests: bool,
    /// Root directory under which modules live
    pub modules_path: String,
    /// Whether module index files are patched on generate/destroy
    pub use_index_file: bool,
    /// Use snake_case file names instead of UpperCamelCase
    pub snake_case_file_names: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<CustomTemplate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: 2,
            storybook: false,
            generate_component_tests: false,
            generate_container_tests: false,
            modules_path: "src/modules".to_string(),
            use_index_file: false,
            snake_case_file_names: false,
            templates: Vec::new(),
        }
    }
}

/// A user-supplied template replacing a built-in one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomTemplate {
    /// Entity kind the template applies to
    pub name: String,
    /// Whether this is the template for the companion test file
    #[serde(default)]
    pub test: bool,
    pub text: String,
}

/// Overrides read from `.bija.yaml`. Absent keys keep their default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub tab_size: Option<usize>,
    pub storybook: Option<bool>,
    pub generate_component_tests: Option<bool>,
    pub generate_container_tests: Option<bool>,
    pub modules_path: Option<String>,
    pub use_index_file: Option<bool>,
    pub snake_case_file_names: Option<bool>,
    pub templates: Option<Vec<CustomTemplate>>,
}

impl Config {
    /// Apply overrides on top of this configuration.
    pub fn merge(self, overrides: ConfigOverrides) -> Self {
        Self {
            tab_size: overrides.tab_size.unwrap_or(self.tab_size),
            storybook: overrides.storybook.unwrap_or(self.storybook),
            generate_component_tests: overrides
                .generate_component_tests
                .unwrap_or(self.generate_component_tests),
            generate_container_tests: overrides
                .generate_container_tests
                .unwrap_or(self.generate_container_tests),
            modules_path: overrides.modules_path.unwrap_or(self.modules_path),
            use_index_file: overrides.use_index_file.unwrap_or(self.use_index_file),
            snake_case_file_names: overrides
                .snake_case_file_names
                .unwrap_or(self.snake_case_file_names),
            templates: overrides.templates.unwrap_or(self.templates),
        }
    }

    /// Find the custom template for an entity kind, if one is configured.
    pub fn custom_template(&self, name: &str, test: bool) -> Option<&CustomTemplate> {
        self.templates
            .iter()
            .find(|t| t.name == name && t.test == test)
    }

    /// Render this configuration as YAML, e.g. for `bija init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yml::to_string(self).map_err(|e| Box::new(Error::Serialize { source: e }))
    }

    /// Validate the merged configuration against the source it was read from
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.tab_size == 0 {
            return Err(Error::validation_at_key(
                "tabSize must be at least 1",
                "tabSize",
                src,
                filename,
            ));
        }

        for template in &self.templates {
            if !TEMPLATE_NAMES.contains(&template.name.as_str()) {
                return Err(Error::validation_at_key(
                    format!(
                        "unknown template name '{}', expected one of: {}",
                        template.name,
                        TEMPLATE_NAMES.join(", ")
                    ),
                    &template.name,
                    src,
                    filename,
                ));
            }
        }

        Ok(())
    }
}
