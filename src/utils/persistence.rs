//! JSON file helpers for the data directory (`~/.skyglider/` by default).

use crate::core::constants::{DATA_DIR_ENV, DATA_DIR_NAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolve the data directory, creating it if needed.
///
/// `$SKYGLIDER_HOME` wins over `~/.skyglider`.
pub fn data_dir() -> io::Result<PathBuf> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let home_dir = dirs::home_dir().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Could not determine home directory",
                )
            })?;
            home_dir.join(DATA_DIR_NAME)
        }
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file inside the data directory.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load JSON from `path`, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Write pretty-printed JSON via a temp file and rename, so a crash mid-write
/// never leaves a truncated file behind.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
