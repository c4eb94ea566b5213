use bija_core::File;

use crate::{EntityKind, Result, paths};

use super::{MODULE_INDEX, Scaffolder};

impl Scaffolder<'_> {
    /// Create the directory skeleton of a module, plus its index files when enabled.
    pub(super) fn generate_module(&mut self, module: &str) -> Result<()> {
        let module_path = paths::module_path(module, self.config);

        self.create_dir(module_path.clone())?;
        self.create_dir(module_path.join(EntityKind::Component.dir_segment()))?;
        self.create_dir(module_path.join(EntityKind::Container.dir_segment()))?;

        if self.config.use_index_file {
            self.write_once(File::create_once(
                paths::index_path(module, self.config),
                MODULE_INDEX,
            ))?;
        }

        if self.config.storybook {
            self.create_dir(module_path.join(EntityKind::Storybook.dir_segment()))?;
            if self.config.use_index_file {
                self.write_once(File::create_once(
                    paths::stories_index_path(module, self.config),
                    "",
                ))?;
            }
        }
        Ok(())
    }

    /// Remove the module directory and everything in it.
    pub(super) fn destroy_module(&mut self, module: &str) -> Result<()> {
        self.remove(paths::module_path(module, self.config))
    }
}
