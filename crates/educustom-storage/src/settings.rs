//! The teacher-settings slot: a single record.

use std::path::Path;

use tracing::info;

use educustom_core::models::settings::TeacherSettings;

use crate::error::StorageError;
use crate::store;

const SETTINGS_FILE: &str = "teacher_settings.json";

/// Load settings. A missing slot yields the all-empty default.
pub fn load_settings(dir: &Path) -> Result<TeacherSettings, StorageError> {
    Ok(store::read_json(&dir.join(SETTINGS_FILE))?.unwrap_or_default())
}

pub fn save_settings(dir: &Path, settings: &TeacherSettings) -> Result<(), StorageError> {
    store::write_json(&dir.join(SETTINGS_FILE), settings)?;
    info!(school = %settings.school, "settings saved");
    Ok(())
}
