use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Teacher and institution identity printed on exported documents.
///
/// Every field may be empty; the export layer falls back to dotted
/// signature placeholders where it matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TeacherSettings {
    pub name: String,
    pub school: String,
    pub nip: String,
    pub city: String,
    pub headmaster_name: String,
    pub headmaster_nip: String,
}
