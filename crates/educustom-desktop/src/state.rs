use std::sync::Arc;

use serde::{Deserialize, Serialize};
use specta::Type;
use tokio::sync::Mutex;

/// Generation settings established by the `configure` command.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct GenerationSettings {
    pub region: String,
    pub model_id: String,
}

pub struct AppState {
    pub generation: Arc<Mutex<Option<GenerationSettings>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            generation: Arc::new(Mutex::new(None)),
        }
    }
}
