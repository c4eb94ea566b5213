//! Entity generators.
//!
//! A [`Scaffolder`] runs one generate or destroy pipeline against a
//! [`FileSystem`] and records every touched path in its change log. Name and
//! module checks run before anything is written.

mod component;
mod container;
mod module;
mod storybook;

use std::path::{Path, PathBuf};

use bija_config::Config;
use bija_core::{File, FileSystem, WriteResult};

use crate::{
    EntityKind, Error, Result,
    changes::{Action, Change},
    index::{ExportEntry, IndexPatch, PatchOutcome, remove_from_index_file, update_index_file},
    naming::{EntityName, NamingPolicy, ensure_module_exists, ensure_module_provided},
    paths,
    template::{TemplateVariables, reflow_indent, render},
    templates::{TemplateFlavor, template_text},
};

/// Line opening the export zone of a module index file.
pub const EXPORT_MARKER: &str = "export {";

/// Content of a freshly generated module index file.
pub const MODULE_INDEX: &str = "export {\n};\n";

/// Options accepted by `generate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Generate class components instead of stateless ones
    pub use_class: bool,
}

/// Every name derived from a `module:entity` pair.
#[derive(Debug, Clone)]
struct Names {
    /// Module directory name
    module: String,
    module_variable: String,
    component_name: String,
    component_file: String,
    container_name: String,
    container_file: String,
}

impl Names {
    fn new(module: &str, entity: &str, policy: NamingPolicy, config: &Config) -> Self {
        let component_name = policy.identifier(entity);
        let component_file = policy.file_name(entity);
        Self {
            module: policy.module_dir(module),
            module_variable: policy.module_variable(module),
            container_name: format!("{component_name}Container"),
            container_file: paths::container_stem(&component_file, config),
            component_name,
            component_file,
        }
    }

    fn variables(&self) -> TemplateVariables {
        let mut vars = TemplateVariables::new();
        vars.insert("moduleName", self.module_variable.clone());
        vars.insert("componentName", self.component_name.clone());
        vars.insert("componentFileName", self.component_file.clone());
        vars.insert("containerName", self.container_name.clone());
        vars.insert("containerFileName", self.container_file.clone());
        vars
    }
}

/// Runs generate and destroy pipelines against a project tree.
pub struct Scaffolder<'a> {
    fs: &'a dyn FileSystem,
    config: &'a Config,
    policy: NamingPolicy,
    changes: Vec<Change>,
}

impl<'a> Scaffolder<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: &'a Config) -> Self {
        Self {
            fs,
            config,
            policy: NamingPolicy::from_config(config),
            changes: Vec::new(),
        }
    }

    /// Changes recorded so far, in the order they happened
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }

    /// Generate an entity of `kind` named `raw` (`module:entity`, or a bare module name).
    pub fn generate(
        &mut self,
        kind: EntityKind,
        raw: &str,
        options: &GenerateOptions,
    ) -> Result<()> {
        match kind {
            EntityKind::Module => {
                let module = self.resolve_module(raw)?;
                self.generate_module(&module)
            }
            EntityKind::Component => {
                let names = self.resolve_entity(raw)?;
                self.generate_component(&names, options)
            }
            EntityKind::Container => {
                let names = self.resolve_entity(raw)?;
                self.generate_container(&names, options)
            }
            EntityKind::Storybook => {
                let names = self.resolve_entity(raw)?;
                self.generate_storybook(&names)
            }
        }
    }

    /// Destroy an entity of `kind` named `raw`, mirroring [`Scaffolder::generate`].
    pub fn destroy(&mut self, kind: EntityKind, raw: &str) -> Result<()> {
        match kind {
            EntityKind::Module => {
                let module = self.resolve_module(raw)?;
                self.destroy_module(&module)
            }
            EntityKind::Component => {
                let names = self.resolve_entity(raw)?;
                self.destroy_component(&names)
            }
            EntityKind::Container => {
                let names = self.resolve_entity(raw)?;
                self.destroy_container(&names)
            }
            EntityKind::Storybook => {
                let names = self.resolve_entity(raw)?;
                self.destroy_storybook(&names)
            }
        }
    }

    /// Parse a `module:entity` name and check that its module exists.
    fn resolve_entity(&self, raw: &str) -> Result<Names> {
        let name = EntityName::parse(raw)?;
        let module = ensure_module_provided(&name)?;
        self.policy.checked_module_dir(raw, module)?;
        self.policy.check_entity(raw, name.entity())?;
        ensure_module_exists(self.fs, module, self.config)?;
        Ok(Names::new(module, name.entity(), self.policy, self.config))
    }

    /// Parse a module name, returning its directory name.
    fn resolve_module(&self, raw: &str) -> Result<String> {
        let name = EntityName::parse(raw)?;
        if name.module().is_some() {
            return Err(Error::invalid_name(
                raw,
                "a module name cannot be qualified with another module",
            ));
        }
        self.policy.checked_module_dir(raw, name.entity())
    }

    fn record(&mut self, action: Action, path: impl Into<PathBuf>) {
        self.changes.push(Change::new(action, path));
    }

    /// Render the template for `kind` and write it to `path` unless something is already there.
    fn write_from_template(
        &mut self,
        kind: EntityKind,
        flavor: TemplateFlavor,
        path: PathBuf,
        names: &Names,
    ) -> Result<()> {
        let text = template_text(self.config, kind, flavor)?;
        let rendered = render(kind.as_str(), text, &names.variables())?;
        let content = match flavor {
            TemplateFlavor::Entity { .. } => reflow_indent(&rendered, self.config.tab_size),
            TemplateFlavor::Test => rendered,
        };

        self.write_once(File::create_once(path, content))
    }

    fn write_once(&mut self, file: File) -> Result<()> {
        let result = file
            .write(self.fs)
            .map_err(|e| Error::io(file.path(), e))?;
        let action = match result {
            WriteResult::Written => Action::Create,
            WriteResult::Skipped => Action::Exists,
        };
        self.record(action, file.path());
        Ok(())
    }

    fn create_dir(&mut self, path: PathBuf) -> Result<()> {
        if self.fs.exists(&path) {
            self.record(Action::Exists, path);
            return Ok(());
        }
        self.fs.create_dir(&path).map_err(|e| Error::io(&path, e))?;
        self.record(Action::Create, path);
        Ok(())
    }

    /// Remove a file or directory tree; nothing is recorded if it was already gone.
    fn remove(&mut self, path: PathBuf) -> Result<()> {
        if self.fs.remove(&path).map_err(|e| Error::io(&path, e))? {
            self.record(Action::Remove, path);
        }
        Ok(())
    }

    fn patch_index(&mut self, path: PathBuf, patch: &IndexPatch) -> Result<()> {
        if !self.config.use_index_file {
            return Ok(());
        }
        let outcome = update_index_file(self.fs, &path, patch)?;
        self.record_patch(outcome, path);
        Ok(())
    }

    fn unpatch_index(&mut self, path: PathBuf, patch: &IndexPatch) -> Result<()> {
        if !self.config.use_index_file {
            return Ok(());
        }
        let outcome = remove_from_index_file(self.fs, &path, patch)?;
        self.record_patch(outcome, path);
        Ok(())
    }

    fn record_patch(&mut self, outcome: PatchOutcome, path: PathBuf) {
        match outcome {
            PatchOutcome::Updated => self.record(Action::Update, path),
            PatchOutcome::Missing => self.record(Action::Missing, path),
            PatchOutcome::Unchanged => {}
        }
    }

    fn entity_path(&self, kind: EntityKind, names: &Names) -> PathBuf {
        paths::output_path(kind, &names.component_file, &names.module, self.config)
    }

    fn test_path(&self, kind: EntityKind, names: &Names) -> PathBuf {
        paths::test_output_path(kind, &names.component_file, &names.module, self.config)
    }

    fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }
}

fn export_entry(identifier: &str) -> Option<ExportEntry> {
    Some(ExportEntry {
        marker: EXPORT_MARKER.to_string(),
        identifier: identifier.to_string(),
        comma_delimited: true,
    })
}
