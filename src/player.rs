//! Player identity: a display name that namespaces the personal best.

use crate::core::constants::{DEFAULT_PLAYER_NAME, MAX_PLAYER_NAME_LEN, PLAYER_NAME_KEY};
use crate::scores::KeyValueStore;
use std::io;

/// Names become part of the `bestscore:<name>` key, so `:` is never allowed.
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(format!(
            "Name must be {} characters or less",
            MAX_PLAYER_NAME_LEN
        ));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}

/// Read the stored name, falling back to the default when absent or invalid.
pub fn load_player_name<S: KeyValueStore + ?Sized>(store: &S) -> String {
    store
        .get(PLAYER_NAME_KEY)
        .map(|name| name.trim().to_string())
        .filter(|name| validate_name(name).is_ok())
        .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string())
}

/// Validate and store a new name. Returns the trimmed name that was saved.
pub fn save_player_name<S: KeyValueStore + ?Sized>(store: &mut S, name: &str) -> io::Result<String> {
    validate_name(name).map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
    let trimmed = name.trim().to_string();
    store.set(PLAYER_NAME_KEY, &trimmed)?;
    Ok(trimmed)
}
