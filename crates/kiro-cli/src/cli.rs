//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Find Kiro installations, open files in them, and scaffold project config
#[derive(Parser, Debug)]
#[command(name = "kiro")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Discovery config file (defaults to <config dir>/kiro-bridge/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every installation found
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Inspect a single installation root
    ///
    /// Exits with an error if nothing is installed at PATH.
    Probe {
        /// Executable, bundle, or directory to inspect
        path: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Open a solution, optionally at a file position
    ///
    /// Examples:
    ///   kiro open Game.sln
    ///   kiro open Game.sln --file Assets/Player.cs --line 42 --column 8
    ///   kiro open Game.sln --install /opt/Kiro/kiro
    Open {
        /// Solution whose directory is opened as the workspace
        solution: PathBuf,

        /// File to jump to
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Line number (values below 1 are treated as 1)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        line: i32,

        /// Column number (values below 0 are treated as 0)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        column: i32,

        /// Installation to use instead of the first one found
        #[arg(short, long, env = "KIRO_INSTALL_PATH")]
        install: Option<PathBuf>,
    },

    /// Write default .vscode configuration into a project
    ///
    /// Existing files are left untouched.
    Scaffold {
        /// Project directory
        #[arg(default_value = ".")]
        project_dir: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_open_with_negative_position() {
        let cli = Cli::try_parse_from([
            "kiro", "open", "Game.sln", "--file", "a.cs", "--line", "-5", "--column", "-1",
        ])
        .unwrap();

        match cli.command {
            Commands::Open {
                line, column, file, ..
            } => {
                assert_eq!(line, -5);
                assert_eq!(column, -1);
                assert_eq!(file, Some(PathBuf::from("a.cs")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_scaffold_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["kiro", "scaffold"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Scaffold {
                project_dir: PathBuf::from("."),
                json: false
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["kiro", "list", "--json", "-v", "--config", "c.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.command, Commands::List { json: true });
    }
}
