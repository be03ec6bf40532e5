//! Workspace layout and per-install configuration.
//!
//! The workspace root resolves in order:
//! 1. `FOOTPRINTBASE_HOME` environment variable.
//! 2. OS-specific data directory via `directories::BaseDirs`.
//!
//! Config lives in a TOML file under `<root>/config/`; durable storage
//! records live under `<root>/data/`.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Identifier of the user that was active when the CLI last ran.
    pub last_active_user_id: Option<String>,
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("FOOTPRINTBASE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("FootprintBase"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Reads the per-install config, falling back to defaults when nothing has
/// been written yet.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&data).with_context(|| format!("Invalid config at {}", path.display()))
}

/// Writes the config back under the workspace config directory.
pub fn save(config: &AppConfig) -> Result<()> {
    let path = config_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Ensures the workspace structure exists (data/ and config/ directories).
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let root = workspace_root()?;
    let data_dir = root.join("data");
    let config_dir = root.join("config");
    fs::create_dir_all(&data_dir)?;
    fs::create_dir_all(&config_dir)?;
    Ok(WorkspacePaths {
        root,
        data_dir,
        config_dir,
    })
}
