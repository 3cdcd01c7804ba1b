//! groom-db CLI - inspect and update groom's install database

mod commands;

use clap::{Parser, Subcommand};
use groom_db::ui::OutputMode;
use groom_db::Database;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "groom-db")]
#[command(version)]
#[command(about = "Inspect and update the database of packages and plugins installed by groom")]
#[command(long_about = r#"
groom-db reads and writes groom's install database.

The database lives at $XDG_DATA_HOME/groom/db, or ~/.local/share/groom/db
when XDG_DATA_HOME is not set.

Example usage:
  groom-db list
  groom-db add-package --name foo --version 1.0.0 --path /opt/foo/foo
  groom-db add-plugin --name lint --description "Run linters" --path /opt/plugins/lint
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides XDG_DATA_HOME / HOME resolution)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the database location
    Path,

    /// List installed packages and plugins
    List {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record an installed package (replaces a package with the same name)
    AddPackage {
        /// Package name
        #[arg(short, long)]
        name: String,

        /// Installed version
        #[arg(long)]
        version: String,

        /// Install location
        #[arg(short, long)]
        path: PathBuf,

        /// Checksum of the installed file (BLAKE3 of --path when omitted)
        #[arg(short, long)]
        checksum: Option<String>,
    },

    /// Record an installed plugin (replaces a plugin with the same name)
    AddPlugin {
        /// Plugin name
        #[arg(short, long)]
        name: String,

        /// Short description
        #[arg(short = 'D', long)]
        description: String,

        /// Install location
        #[arg(short, long)]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so --json output stays clean)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let db = match cli.database {
        Some(path) => Database::at(path),
        None => Database::locate()?,
    };

    let result = match cli.command {
        Commands::Path => commands::run_path(&db),
        Commands::List { json } => commands::run_list(&db, OutputMode::detect(json)),
        Commands::AddPackage { name, version, path, checksum } => {
            commands::run_add_package(&db, OutputMode::detect(false), name, version, path, checksum)
        }
        Commands::AddPlugin { name, description, path } => {
            commands::run_add_plugin(&db, OutputMode::detect(false), name, description, path)
        }
    };

    if let Err(e) = result {
        groom_db::ui::error(&format!("{e:#}"));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_package() {
        let cli = Cli::try_parse_from([
            "groom-db", "--database", "/tmp/db", "add-package",
            "--name", "foo", "--version", "1.0.0", "--path", "/opt/foo",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("/tmp/db")));
        match cli.command {
            Commands::AddPackage { name, version, checksum, .. } => {
                assert_eq!(name, "foo");
                assert_eq!(version, "1.0.0");
                assert!(checksum.is_none());
            }
            _ => panic!("expected add-package"),
        }
    }
}
