//! Configuration loading and database location resolution

use std::path::PathBuf;

/// Environment variable naming the database file
pub const DB_ENV_VAR: &str = "ENCORE_DB";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Resolve the database file location in priority order:
/// 1. Command-line argument (highest priority)
/// 2. `ENCORE_DB` environment variable
/// 3. TOML config file (`database` key)
/// 4. OS-dependent default data path (fallback)
pub fn resolve_database_path(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DB_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = database_path_from_config_file() {
        return path;
    }

    // Priority 4: OS-dependent default
    default_database_path()
}

/// Read the `database` key from the platform config file, if present
fn database_path_from_config_file() -> Option<PathBuf> {
    let config_path = config_file_path()?;
    let contents = std::fs::read_to_string(&config_path).ok()?;
    let config = toml::from_str::<toml::Value>(&contents).ok()?;
    let database = config.get("database").and_then(|v| v.as_str())?;
    tracing::debug!("Database path from {}: {}", config_path.display(), database);
    Some(PathBuf::from(database))
}

/// Platform config file location (`~/.config/encore/config.toml` on Linux)
fn config_file_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("encore").join("config.toml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// OS-dependent default database path
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("encore"))
        .unwrap_or_else(|| PathBuf::from("./encore_data"))
        .join("encore.db")
}
