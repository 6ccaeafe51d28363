//! The class-profiles slot: an ordered list, seeded with starter
//! profiles on first read.

use std::path::Path;

use tracing::info;

use educustom_core::models::profile::ClassProfile;

use crate::error::StorageError;
use crate::store;

const PROFILES_FILE: &str = "class_profiles.json";

/// List class profiles. A missing slot materializes the starter set
/// (not persisted until the first save).
pub fn list_profiles(dir: &Path) -> Result<Vec<ClassProfile>, StorageError> {
    Ok(store::read_json(&dir.join(PROFILES_FILE))?
        .unwrap_or_else(ClassProfile::starter_profiles))
}

pub fn save_profiles(dir: &Path, profiles: &[ClassProfile]) -> Result<(), StorageError> {
    store::write_json(&dir.join(PROFILES_FILE), &profiles)?;
    info!(count = profiles.len(), "class profiles saved");
    Ok(())
}
