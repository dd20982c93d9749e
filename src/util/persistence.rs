use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use dioxus_logger::tracing::{info, warn};
use serde_json::Error as SerdeError;

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "CropPlanner";
const APP_NAME: &str = "CropPlanner";

pub fn preferences_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("preferences.json"))
}

/// Missing or unreadable preferences start a fresh session.
pub fn load_persisted_state() -> Option<PersistedState> {
    let path = preferences_path()?;
    let data = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => {
            info!("[persist] Loaded preferences from {}", path.display());
            Some(state)
        }
        Err(err) => {
            warn!("[persist] Ignoring unreadable preferences at {}: {err}", path.display());
            None
        }
    }
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = preferences_path().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
