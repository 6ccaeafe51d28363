//! Export filename convention.

use educustom_core::models::request::Institution;

/// `RPP_<Institution>_<topic>_<millis>.pdf`, topic whitespace collapsed
/// to underscores.
pub fn pdf_file_name(
    institution: Institution,
    topic: &str,
    generated_at: jiff::Timestamp,
) -> String {
    let topic_part = topic.split_whitespace().collect::<Vec<_>>().join("_");
    format!(
        "RPP_{}_{}_{}.pdf",
        institution,
        topic_part,
        generated_at.as_millisecond()
    )
}
