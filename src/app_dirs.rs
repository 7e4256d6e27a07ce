//! Where churnboard keeps its read-only settings file and its logs.
//!
//! Everything lives under one `.churnboard` folder inside the OS config
//! directory. `CHURNBOARD_CONFIG_HOME` replaces the OS config directory, which
//! keeps tests and portable setups away from the real profile.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use thiserror::Error;

/// Folder name created under the config root.
pub const APP_DIR_NAME: &str = ".churnboard";
/// Environment variable that overrides the config root.
pub const CONFIG_HOME_ENV: &str = "CHURNBOARD_CONFIG_HOME";
const LOGS_DIR_NAME: &str = "logs";

/// Errors raised while resolving the application folders.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// Neither the override nor the OS provided a config root.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// The folder could not be created.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the `.churnboard` root, creating it when absent.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base =
        config_base_dir(std::env::var_os(CONFIG_HOME_ENV)).ok_or(AppDirError::NoBaseDir)?;
    app_root_in(&base)
}

/// Return the `logs` folder inside the app root, creating it when absent.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    logs_dir_in(&app_root_dir()?)
}

fn app_root_in(base: &Path) -> Result<PathBuf, AppDirError> {
    create(base.join(APP_DIR_NAME))
}

fn logs_dir_in(root: &Path) -> Result<PathBuf, AppDirError> {
    create(root.join(LOGS_DIR_NAME))
}

fn create(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// An empty override counts as unset.
fn config_base_dir(override_dir: Option<OsString>) -> Option<PathBuf> {
    override_dir
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
}
