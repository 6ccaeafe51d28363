use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use specta::Type;
use tauri::State;
use tracing::{info, warn};
use uuid::Uuid;

use educustom_core::models::plan::GeneratedPlan;
use educustom_core::models::profile::{ClassProfile, PREDEFINED_INTERESTS};
use educustom_core::models::request::PlanRequest;
use educustom_core::models::settings::TeacherSettings;
use educustom_core::render::{render, Block};
use educustom_export::filename::pdf_file_name;
use educustom_export::render::render_document;
use educustom_export::styles::DocumentStyles;

use crate::state::{AppState, GenerationSettings};

/// Pedagogy one-liners shown on the dashboard insight card.
const TIPS: [&str; 8] = [
    "Gunakan analogi hobi murid untuk menjelaskan konsep abstrak agar lebih mudah dicerna.",
    "Berikan apresiasi pada hobi murid untuk membangun hubungan emosional yang kuat.",
    "Jadikan hobi sebagai pintu masuk untuk mengenalkan istilah teknis yang baru.",
    "Materi yang relevan dengan minat akan meningkatkan daya ingat jangka panjang murid.",
    "Libatkan murid dalam memilih contoh soal yang berkaitan dengan kegemaran mereka.",
    "Sesuaikan metode evaluasi agar selaras dengan hobi murid (misal: proyek video untuk hobi TikTok).",
    "Dunia murid adalah dunia hobi; masuklah ke sana untuk menjadi guru inspiratif.",
    "Personalisasi bukan sekadar tren, tapi kebutuhan untuk pembelajaran yang bermakna.",
];

/// Outcome of a PDF export attempt.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// PDF written to the chosen path.
    Saved { path: String },
    /// The save dialog was dismissed.
    Cancelled,
    /// Export failed; the frontend opens the print dialog instead.
    PrintFallback { reason: String },
}

async fn require_settings(state: &AppState) -> Result<GenerationSettings, String> {
    state
        .generation
        .lock()
        .await
        .clone()
        .ok_or_else(|| "not configured: call configure() first".to_string())
}

fn data_dir() -> Result<PathBuf, String> {
    educustom_storage::store::default_data_dir().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn configure(
    state: State<'_, AppState>,
    region: String,
    model_id: Option<String>,
) -> Result<(), String> {
    let mut generation = state.generation.lock().await;
    *generation = Some(GenerationSettings {
        region,
        model_id: model_id
            .unwrap_or_else(|| educustom_bedrock::generate::DEFAULT_MODEL_ID.to_string()),
    });
    Ok(())
}

#[tauri::command]
pub async fn generate_plan(
    state: State<'_, AppState>,
    request: PlanRequest,
) -> Result<GeneratedPlan, String> {
    request.validate().map_err(|e| e.to_string())?;
    let settings = require_settings(&state).await?;

    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(settings.region.clone()))
        .load()
        .await;

    let content =
        educustom_bedrock::generate::generate_plan(&config, &settings.model_id, &request)
            .await
            .map_err(|e| e.to_string())?;

    Ok(GeneratedPlan {
        id: Uuid::new_v4(),
        title: format!("RPP {} {}", request.institution, request.curriculum_topic),
        content,
        topic: request.curriculum_topic,
        created_at: jiff::Timestamp::now(),
    })
}

#[tauri::command]
pub fn render_plan(content: String) -> Vec<Block> {
    render(&content)
}

#[tauri::command]
pub fn list_plans() -> Result<Vec<GeneratedPlan>, String> {
    educustom_storage::plans::list_plans(&data_dir()?).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn save_plan(plan: GeneratedPlan) -> Result<Vec<GeneratedPlan>, String> {
    educustom_storage::plans::save_plan(&data_dir()?, &plan).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_plan(id: Uuid) -> Result<Vec<GeneratedPlan>, String> {
    educustom_storage::plans::delete_plan(&data_dir()?, id).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn load_settings() -> Result<TeacherSettings, String> {
    educustom_storage::settings::load_settings(&data_dir()?).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn save_settings(settings: TeacherSettings) -> Result<(), String> {
    educustom_storage::settings::save_settings(&data_dir()?, &settings).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_class_profiles() -> Result<Vec<ClassProfile>, String> {
    educustom_storage::profiles::list_profiles(&data_dir()?).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn save_class_profiles(profiles: Vec<ClassProfile>) -> Result<(), String> {
    educustom_storage::profiles::save_profiles(&data_dir()?, &profiles).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn predefined_interests() -> Vec<String> {
    PREDEFINED_INTERESTS.iter().map(|s| s.to_string()).collect()
}

#[tauri::command]
pub fn pedagogical_tip() -> String {
    let millis = jiff::Timestamp::now().as_millisecond();
    let index = millis.unsigned_abs() as usize % TIPS.len();
    TIPS[index].to_string()
}

/// Export the currently previewed plan. Assembly or PDF failures fall
/// back to the print dialog; only I/O on a user-chosen path surfaces as
/// a fallback too, never as a hard error.
#[tauri::command]
pub async fn export_plan(
    plan: GeneratedPlan,
    request: PlanRequest,
) -> Result<ExportOutcome, String> {
    let teacher = educustom_storage::settings::load_settings(&data_dir()?)
        .map_err(|e| e.to_string())?;

    let pdf = match render_document(&plan, &teacher, &request, &DocumentStyles::default())
        .and_then(|html| educustom_export::pdf::generate_pdf(&html))
    {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "pdf export failed, falling back to print");
            return Ok(ExportOutcome::PrintFallback {
                reason: e.to_string(),
            });
        }
    };

    let file_name = pdf_file_name(request.institution, &plan.topic, plan.created_at);
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_file_name(&file_name)
        .save_file()
        .await
    else {
        return Ok(ExportOutcome::Cancelled);
    };

    let path = handle.path().to_path_buf();
    if let Err(e) = std::fs::write(&path, &pdf) {
        warn!(error = %e, path = %path.display(), "could not write pdf, falling back to print");
        return Ok(ExportOutcome::PrintFallback {
            reason: e.to_string(),
        });
    }

    info!(path = %path.display(), "pdf exported");
    Ok(ExportOutcome::Saved {
        path: path.display().to_string(),
    })
}
