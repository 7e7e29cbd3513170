//! Optional persistence for column layout profiles.
//!
//! Off by default: a table only reads or writes here when the caller opts in
//! with a profile key. Profiles are small JSON files, one per key, under the
//! platform data directory (or a caller-supplied directory).

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::{eyre::eyre, eyre::WrapErr, Result};

use crate::view_state::LayoutProfile;

/// Environment override for the profile directory, mainly for tests.
pub const DATA_DIR_ENV: &str = "DATADECK_DATA_DIR";

/// Resolve the default profile directory, creating it if needed.
pub fn default_profile_dir() -> Result<PathBuf> {
    let base = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .ok_or_else(|| eyre!("no platform data directory available"))?
            .join("datadeck"),
    };
    let profiles = base.join("profiles");
    if !profiles.exists() {
        fs::create_dir_all(&profiles).wrap_err("Failed to create profile directory")?;
    }
    Ok(profiles)
}

/// Keys are opaque caller strings; flatten anything path-hostile.
fn profile_file_name(profile: &str) -> String {
    let safe: String = profile
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}.json", safe)
}

fn profile_path(dir: Option<&Path>, profile: &str) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => {
            if !dir.exists() {
                fs::create_dir_all(dir).wrap_err("Failed to create profile directory")?;
            }
            dir.to_path_buf()
        }
        None => default_profile_dir()?,
    };
    Ok(dir.join(profile_file_name(profile)))
}

/// Save a layout profile under a key.
pub fn save_layout(dir: Option<&Path>, profile: &str, layout: &LayoutProfile) -> Result<()> {
    let path = profile_path(dir, profile)?;
    let json = serde_json::to_string_pretty(layout).wrap_err("Failed to serialize layout")?;
    fs::write(&path, json).wrap_err(format!("Failed to write layout to {:?}", path))?;
    tracing::debug!(profile, path = %path.display(), "layout profile saved");
    Ok(())
}

/// Load a layout profile by key. A missing profile is `Ok(None)`.
pub fn load_layout(dir: Option<&Path>, profile: &str) -> Result<Option<LayoutProfile>> {
    let path = profile_path(dir, profile)?;
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(&path)
        .wrap_err(format!("Failed to read layout from {:?}", path))?;
    let layout = serde_json::from_str(&json).wrap_err("Failed to deserialize layout")?;
    Ok(Some(layout))
}

/// Remove a stored profile, if present.
pub fn delete_layout(dir: Option<&Path>, profile: &str) -> Result<()> {
    let path = profile_path(dir, profile)?;
    if path.exists() {
        fs::remove_file(&path).wrap_err(format!("Failed to delete layout at {:?}", path))?;
    }
    Ok(())
}
