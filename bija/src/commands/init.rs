use std::path::Path;

use bija_config::Config;
use bija_core::{File, LocalFs};
use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

use super::{ProjectArgs, UnwrapOrExit};

#[derive(Args)]
pub struct InitCommand {
    /// Overwrite an existing config file without asking
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self, project: &ProjectArgs) -> Result<()> {
        let path = project.config_path();

        if path.exists() && !self.force && !Self::confirm_overwrite(&path)? {
            println!("Kept existing {}", path.display());
            return Ok(());
        }

        let content = Config::default().to_yaml().unwrap_or_exit();
        File::new(&path, content)
            .write(&LocalFs::new("."))
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        println!("Created {}", path.display());
        Ok(())
    }

    fn confirm_overwrite(path: &Path) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let temp = TempDir::new().unwrap();
        let project = ProjectArgs {
            root: temp.path().to_path_buf(),
            config: PathBuf::from(bija_config::CONFIG_FILE),
        };

        InitCommand { force: true }.run(&project).unwrap();

        let config = bija_config::load(temp.path().join(".bija.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
