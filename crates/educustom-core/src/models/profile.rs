use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A class and the dominant interests of its students.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassProfile {
    pub id: Uuid,
    pub name: String,
    pub interests: Vec<String>,
    pub student_count: u32,
}

/// Interest vocabulary offered by the form's interest cloud.
pub const PREDEFINED_INTERESTS: [&str; 14] = [
    "Main Game (Gaming)",
    "Memasak",
    "Sepak Bola",
    "K-Pop / Musik",
    "Coding",
    "Anime / Gambar",
    "Traveling",
    "Fashion",
    "Tiktok / Social Media",
    "Astronomi",
    "Sains Eksperimen",
    "Menulis Cerita",
    "Catur",
    "Otomotif",
];

impl ClassProfile {
    /// Starter profiles materialized when no profile slot exists yet.
    /// Ids are minted fresh here and become stable once the slot is
    /// first written.
    pub fn starter_profiles() -> Vec<ClassProfile> {
        vec![
            ClassProfile {
                id: Uuid::new_v4(),
                name: "Kelas 7A".to_string(),
                interests: vec![
                    "Main Game (Gaming)".to_string(),
                    "Sepak Bola".to_string(),
                ],
                student_count: 32,
            },
            ClassProfile {
                id: Uuid::new_v4(),
                name: "Kelas 8B".to_string(),
                interests: vec![
                    "K-Pop / Musik".to_string(),
                    "Anime / Gambar".to_string(),
                ],
                student_count: 28,
            },
            ClassProfile {
                id: Uuid::new_v4(),
                name: "Kelas 9C".to_string(),
                interests: vec![
                    "Coding".to_string(),
                    "Sains Eksperimen".to_string(),
                ],
                student_count: 30,
            },
        ]
    }
}
