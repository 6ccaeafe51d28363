//! The saved-plans slot: an ordered, newest-first library of generated
//! lesson plans, deduplicated by id.

use std::path::Path;

use tracing::info;
use uuid::Uuid;

use educustom_core::models::plan::GeneratedPlan;

use crate::error::StorageError;
use crate::store;

const PLANS_FILE: &str = "saved_plans.json";

/// List saved plans, newest first. A missing slot is an empty library.
pub fn list_plans(dir: &Path) -> Result<Vec<GeneratedPlan>, StorageError> {
    Ok(store::read_json(&dir.join(PLANS_FILE))?.unwrap_or_default())
}

/// Save a plan at the front of the library. Saving an id that is already
/// present is a no-op. Returns the updated library.
pub fn save_plan(dir: &Path, plan: &GeneratedPlan) -> Result<Vec<GeneratedPlan>, StorageError> {
    let mut plans = list_plans(dir)?;
    if plans.iter().any(|p| p.id == plan.id) {
        return Ok(plans);
    }
    plans.insert(0, plan.clone());
    store::write_json(&dir.join(PLANS_FILE), &plans)?;
    info!(id = %plan.id, title = %plan.title, "plan saved");
    Ok(plans)
}

/// Delete a plan by id. Returns the updated library.
pub fn delete_plan(dir: &Path, id: Uuid) -> Result<Vec<GeneratedPlan>, StorageError> {
    let mut plans = list_plans(dir)?;
    plans.retain(|p| p.id != id);
    store::write_json(&dir.join(PLANS_FILE), &plans)?;
    info!(%id, "plan deleted");
    Ok(plans)
}
