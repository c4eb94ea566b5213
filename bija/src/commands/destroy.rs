use bija_core::LocalFs;
use bija_scaffold::{EntityKind, Scaffolder};
use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

use super::{ProjectArgs, UnwrapOrExit};
use crate::reports::{Report, ScaffoldReport, TerminalOutput};

#[derive(Args)]
pub struct DestroyCommand {
    /// What to destroy: component, container, module or storybook
    #[arg(value_name = "TYPE")]
    pub kind: EntityKind,

    /// Name of the entity, as moduleName:entityName (or moduleName for modules)
    pub name: String,

    /// Do not ask before removing a whole module
    #[arg(short, long)]
    pub yes: bool,
}

impl DestroyCommand {
    pub fn run(&self, project: &ProjectArgs) -> Result<()> {
        let config = project.load_config();

        if self.kind == EntityKind::Module && !self.yes && !Self::confirm_module(&self.name)? {
            println!("Aborted");
            return Ok(());
        }

        let fs = LocalFs::new(project.root());
        let mut scaffolder = Scaffolder::new(&fs, &config);
        let result = scaffolder.destroy(self.kind, &self.name);

        ScaffoldReport::new(scaffolder.into_changes()).render(&mut TerminalOutput::new());
        result.unwrap_or_exit();
        Ok(())
    }

    fn confirm_module(name: &str) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove module '{name}' and everything in it?"))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}
