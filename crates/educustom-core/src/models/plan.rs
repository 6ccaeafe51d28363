use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A generated lesson plan (RPP) document.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedPlan {
    pub id: Uuid,
    pub title: String,
    /// Markdown-flavored text exactly as the model returned it.
    pub content: String,
    pub topic: String,
    pub created_at: jiff::Timestamp,
}
