use crate::{
    EntityKind, Result,
    index::IndexPatch,
    paths,
    templates::TemplateFlavor,
};

use super::{GenerateOptions, Names, Scaffolder, export_entry};

fn index_patch(names: &Names) -> IndexPatch {
    IndexPatch {
        import: format!(
            "import {} from './components/{}';",
            names.component_name, names.component_file
        ),
        export: export_entry(&names.component_name),
    }
}

impl Scaffolder<'_> {
    pub(super) fn generate_component(
        &mut self,
        names: &Names,
        options: &GenerateOptions,
    ) -> Result<()> {
        let flavor = TemplateFlavor::Entity {
            use_class: options.use_class,
        };
        let path = self.entity_path(EntityKind::Component, names);
        self.write_from_template(EntityKind::Component, flavor, path, names)?;

        let index = paths::index_path(&names.module, self.config);
        self.patch_index(index, &index_patch(names))?;

        if self.config.generate_component_tests {
            let path = self.test_path(EntityKind::Component, names);
            self.write_from_template(EntityKind::Component, TemplateFlavor::Test, path, names)?;
        }

        if self.config.storybook {
            self.generate_storybook(names)?;
        }
        Ok(())
    }

    pub(super) fn destroy_component(&mut self, names: &Names) -> Result<()> {
        self.remove(self.entity_path(EntityKind::Component, names))?;
        self.remove(self.test_path(EntityKind::Component, names))?;

        let index = paths::index_path(&names.module, self.config);
        self.unpatch_index(index, &index_patch(names))?;

        let story = self.entity_path(EntityKind::Storybook, names);
        if self.config.storybook || self.exists(&story) {
            self.destroy_storybook(names)?;
        }
        Ok(())
    }
}
