use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable that overrides the data directory root
pub const DATA_HOME_ENV: &str = "XDG_DATA_HOME";

const APP_DIR: &str = "groom";
const DB_FILE: &str = "db";

/// Resolve the database location from the process environment.
pub fn database_path() -> Result<PathBuf> {
    resolve_database_path(std::env::var_os(DATA_HOME_ENV), dirs::home_dir())
}

/// Resolve the database location from an explicit `$XDG_DATA_HOME` value and
/// home directory. `home` is only consulted when `xdg_data_home` is `None`.
pub fn resolve_database_path(
    xdg_data_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    let path = match xdg_data_home {
        Some(location) => default_database_path_in(Path::new(&location)),
        None => {
            tracing::info!("Not using ${DATA_HOME_ENV}, env variable not present");
            let home = home.ok_or_else(|| {
                tracing::error!("Error while getting $HOME directory");
                Error::HomeDirUnavailable
            })?;
            default_database_path_in(&home.join(".local").join("share"))
        }
    };

    tracing::info!("Using {} for database", path.display());
    Ok(path)
}

/// Database file under a data directory root
pub fn default_database_path_in(data_home: &Path) -> PathBuf {
    data_home.join(APP_DIR).join(DB_FILE)
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
