use anyhow::Context;
use groom_db::ui::{self, Icons, OutputMode, Theme};
use groom_db::{Database, GroomDatabase, Package, Plugin};
use std::path::{Path, PathBuf};

pub fn run_path(db: &Database) -> anyhow::Result<()> {
    println!("{}", db.path().display());
    Ok(())
}

pub fn run_list(db: &Database, mode: OutputMode) -> anyhow::Result<()> {
    let snapshot = db.parse()?;
    let rendered = render_list(db.path(), &snapshot, mode, ui::theme())?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

fn render_list(
    path: &Path,
    snapshot: &GroomDatabase,
    mode: OutputMode,
    theme: &Theme,
) -> anyhow::Result<String> {
    if mode == OutputMode::Json {
        return Ok(serde_json::to_string_pretty(snapshot)?);
    }

    let human = mode.is_human();
    let mut lines = Vec::new();

    if human {
        lines.push(ui::header(theme, Icons::DATABASE, &path.display().to_string()));
        lines.push(ui::section(theme, Icons::PACKAGE, "Packages"));
    }
    if !snapshot.packages.is_empty() {
        lines.push(ui::packages_table(theme, &snapshot.packages));
    } else if human {
        lines.push(ui::empty(theme, "No packages installed."));
    }

    if human {
        lines.push(ui::section(theme, Icons::PLUGIN, "Plugins"));
    }
    if !snapshot.plugins.is_empty() {
        lines.push(ui::plugins_table(theme, &snapshot.plugins));
    } else if human {
        lines.push(ui::empty(theme, "No plugins installed."));
    }

    if human {
        lines.push(String::new());
        lines.push(ui::summary_row(theme, "Packages:", &snapshot.packages.len().to_string()));
        lines.push(ui::summary_row(theme, "Plugins:", &snapshot.plugins.len().to_string()));
    }

    Ok(lines.join("\n"))
}

pub fn run_add_package(
    db: &Database,
    mode: OutputMode,
    name: String,
    version: String,
    path: PathBuf,
    checksum: Option<String>,
) -> anyhow::Result<()> {
    let checksum = match checksum {
        Some(checksum) => checksum,
        None => file_checksum(&path)?,
    };

    let package = Package::new(name, checksum, version, path.display().to_string());
    db.add_package(&package)?;

    if mode.is_human() {
        let theme = ui::theme();
        println!(
            "{}",
            ui::success(theme, &format!("Recorded package {} {}", package.name, package.version))
        );
        println!("{}", ui::summary_row(theme, "Checksum:", &package.checksum));
    }
    Ok(())
}

pub fn run_add_plugin(
    db: &Database,
    mode: OutputMode,
    name: String,
    description: String,
    path: PathBuf,
) -> anyhow::Result<()> {
    let plugin = Plugin::new(name, description, path.display().to_string());
    db.add_plugin(&plugin)?;

    if mode.is_human() {
        println!("{}", ui::success(ui::theme(), &format!("Recorded plugin {}", plugin.name)));
    }
    Ok(())
}

/// BLAKE3 hex digest of a file's contents
fn file_checksum(path: &Path) -> anyhow::Result<String> {
    if !path.is_file() {
        anyhow::bail!(
            "no --checksum given and {} is not a file to hash",
            path.display()
        );
    }

    let mut file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut hasher = blake3::Hasher::new();
    std::io::copy(&mut file, &mut hasher)
        .with_context(|| format!("failed to hash {}", path.display()))?;

    Ok(hasher.finalize().to_hex().to_string())
}
