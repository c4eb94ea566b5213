use bija_core::LocalFs;
use bija_scaffold::{EntityKind, GenerateOptions, Scaffolder};
use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::reports::{Report, ScaffoldReport, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// What to generate: component, container, module or storybook
    #[arg(value_name = "TYPE")]
    pub kind: EntityKind,

    /// Name of the entity, as moduleName:entityName (or moduleName for modules)
    pub name: String,

    /// Generate class components instead of stateless ones
    #[arg(short = 'c', long)]
    pub use_class: bool,
}

impl GenerateCommand {
    pub fn run(&self, project: &ProjectArgs) -> Result<()> {
        let config = project.load_config();
        let fs = LocalFs::new(project.root());
        let options = GenerateOptions {
            use_class: self.use_class,
        };

        let mut scaffolder = Scaffolder::new(&fs, &config);
        let result = scaffolder.generate(self.kind, &self.name, &options);

        // Whatever was written before a failure is still reported
        ScaffoldReport::new(scaffolder.into_changes()).render(&mut TerminalOutput::new());
        result.unwrap_or_exit();
        Ok(())
    }
}
