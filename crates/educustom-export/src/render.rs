//! Printable document assembly.
//!
//! Wraps the rendered block body in the printed RPP chrome — title
//! header with institution subtitle, metadata grid, and the two-column
//! signature block — via a Tera template.

use serde::Serialize;
use tera::{Context, Tera};

use educustom_core::models::plan::GeneratedPlan;
use educustom_core::models::request::{Institution, PlanRequest};
use educustom_core::models::settings::TeacherSettings;
use educustom_core::render::{render, strip_formatting};

use crate::error::ExportError;
use crate::html::blocks_to_html;
use crate::styles::DocumentStyles;

const PLAN_TEMPLATE: &str = include_str!("../templates/plan.html");
const TEMPLATE_NAME: &str = "plan.html";

const SIGNATURE_NAME_PLACEHOLDER: &str = "( ............................................ )";
const SIGNATURE_NIP_PLACEHOLDER: &str = "........................................";

const INDONESIAN_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

#[derive(Serialize)]
struct DocumentContext {
    title: String,
    subtitle: String,
    institution: String,
    topic: String,
    school: String,
    teacher_name: String,
    teacher_nip: String,
    interests: String,
    grade: String,
    issued_on: String,
    city: String,
    headmaster_name: String,
    headmaster_nip: String,
    body: String,
    styles: DocumentStyles,
}

/// Assemble the full document HTML for a plan.
pub fn render_document(
    plan: &GeneratedPlan,
    settings: &TeacherSettings,
    request: &PlanRequest,
    styles: &DocumentStyles,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, PLAN_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let subtitle = match request.institution {
        Institution::Madrasah => "Berbasis KMA 1503/2025 & Diferensiasi Minat",
        Institution::Sekolah => "Berbasis Kurikulum Nasional & Diferensiasi Minat",
    };

    let issued_on = format_date_id(plan.created_at);

    let document = DocumentContext {
        title: strip_formatting(&plan.title),
        subtitle: subtitle.to_string(),
        institution: request.institution.label().to_string(),
        topic: plan.topic.clone(),
        school: settings.school.clone(),
        teacher_name: settings.name.clone(),
        teacher_nip: settings.nip.clone(),
        interests: request.student_interests.join(", "),
        grade: request.target_grade.clone(),
        issued_on,
        city: settings.city.clone(),
        headmaster_name: or_placeholder(&settings.headmaster_name, SIGNATURE_NAME_PLACEHOLDER),
        headmaster_nip: or_placeholder(&settings.headmaster_nip, SIGNATURE_NIP_PLACEHOLDER),
        body: blocks_to_html(&render(&plan.content)),
        styles: styles.clone(),
    };

    // Convert to a Tera context via serde_json.
    let value = serde_json::to_value(&document)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Indonesian long-date form, e.g. `5 Agustus 2026`.
fn format_date_id(timestamp: jiff::Timestamp) -> String {
    let date = timestamp.to_zoned(jiff::tz::TimeZone::UTC).date();
    let month = INDONESIAN_MONTHS[date.month() as usize - 1];
    format!("{} {} {}", date.day(), month, date.year())
}
