use crate::{EntityKind, Result, index::IndexPatch, paths, templates::TemplateFlavor};

use super::{Names, Scaffolder};

// Stories are only imported for their side effects, so there is no export entry
fn index_patch(names: &Names) -> IndexPatch {
    IndexPatch {
        import: format!("import './{}.stories';", names.component_file),
        export: None,
    }
}

impl Scaffolder<'_> {
    pub(super) fn generate_storybook(&mut self, names: &Names) -> Result<()> {
        let path = self.entity_path(EntityKind::Storybook, names);
        let flavor = TemplateFlavor::Entity { use_class: false };
        self.write_from_template(EntityKind::Storybook, flavor, path, names)?;

        let index = paths::stories_index_path(&names.module, self.config);
        self.patch_index(index, &index_patch(names))
    }

    pub(super) fn destroy_storybook(&mut self, names: &Names) -> Result<()> {
        self.remove(self.entity_path(EntityKind::Storybook, names))?;

        let index = paths::stories_index_path(&names.module, self.config);
        self.unpatch_index(index, &index_patch(names))
    }
}
