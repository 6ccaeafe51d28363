#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

mod commands;
mod state;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .manage(state::AppState::default())
        .invoke_handler(tauri::generate_handler![
            commands::configure,
            commands::generate_plan,
            commands::render_plan,
            commands::list_plans,
            commands::save_plan,
            commands::delete_plan,
            commands::load_settings,
            commands::save_settings,
            commands::list_class_profiles,
            commands::save_class_profiles,
            commands::predefined_interests,
            commands::pedagogical_tip,
            commands::export_plan,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}
