mod completions;
mod destroy;
mod generate;
mod init;

use std::path::{Path, PathBuf};

use bija_config::Config;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use destroy::DestroyCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for bija_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for bija_scaffold::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "bija")]
#[command(version)]
#[command(about = "Generate and destroy components, containers, modules and stories")]
pub(crate) struct Cli {
    #[command(flatten)]
    project: ProjectArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Where the project lives and how it is configured.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Project root that module paths are relative to
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Path to the config file, relative to the project root
    #[arg(long, global = true, default_value = bija_config::CONFIG_FILE)]
    pub config: PathBuf,
}

impl ProjectArgs {
    /// Resolved path of the config file
    pub fn config_path(&self) -> PathBuf {
        if self.config.is_absolute() {
            self.config.clone()
        } else {
            self.root.join(&self.config)
        }
    }

    /// Load the project configuration, exiting with a diagnostic if it is invalid.
    pub fn load_config(&self) -> Config {
        bija_config::load(self.config_path()).unwrap_or_exit()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.project),
            Commands::Destroy(cmd) => cmd.run(&self.project),
            Commands::Init(cmd) => cmd.run(&self.project),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an entity from its template
    #[command(visible_alias = "g")]
    Generate(GenerateCommand),

    /// Remove a generated entity
    #[command(visible_alias = "d")]
    Destroy(DestroyCommand),

    /// Write a config file with the default settings
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases_parse() {
        let cli = Cli::try_parse_from(["bija", "g", "component", "core:post", "-c"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));

        let cli = Cli::try_parse_from(["bija", "d", "container", "core:post"]).unwrap();
        assert!(matches!(cli.command, Commands::Destroy(_)));
    }

    #[test]
    fn test_config_path_resolves_against_root() {
        let cli = Cli::try_parse_from(["bija", "--root", "app", "init"]).unwrap();
        assert_eq!(cli.project.config_path(), PathBuf::from("app/.bija.yaml"));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(Cli::try_parse_from(["bija", "generate", "action", "core:post"]).is_err());
    }
}
