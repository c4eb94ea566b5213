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
            "import {} from './containers/{}';",
            names.container_name, names.container_file
        ),
        export: export_entry(&names.container_name),
    }
}

impl Scaffolder<'_> {
    /// Generate a container and the component it wraps.
    pub(super) fn generate_container(
        &mut self,
        names: &Names,
        options: &GenerateOptions,
    ) -> Result<()> {
        let flavor = TemplateFlavor::Entity {
            use_class: options.use_class,
        };
        let path = self.entity_path(EntityKind::Container, names);
        self.write_from_template(EntityKind::Container, flavor, path, names)?;

        let index = paths::index_path(&names.module, self.config);
        self.patch_index(index, &index_patch(names))?;

        if self.config.generate_container_tests {
            let path = self.test_path(EntityKind::Container, names);
            self.write_from_template(EntityKind::Container, TemplateFlavor::Test, path, names)?;
        }

        self.generate_component(names, options)
    }

    pub(super) fn destroy_container(&mut self, names: &Names) -> Result<()> {
        self.remove(self.entity_path(EntityKind::Container, names))?;
        self.remove(self.test_path(EntityKind::Container, names))?;

        let index = paths::index_path(&names.module, self.config);
        self.unpatch_index(index, &index_patch(names))?;

        self.destroy_component(names)
    }
}
