//! PDF generation from the assembled document HTML.

use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument};

use crate::error::ExportError;

/// Render the document HTML into paginated PDF bytes.
///
/// No images or extra fonts are embedded; the template sticks to simple
/// markup the HTML renderer supports. Layout warnings are logged, not
/// surfaced.
pub fn generate_pdf(html: &str) -> Result<Vec<u8>, ExportError> {
    let mut warnings = Vec::new();

    let doc = PdfDocument::from_html(
        html,
        &BTreeMap::new(),
        &BTreeMap::new(),
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| ExportError::Pdf(e.to_string()))?;

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "pdf generation produced warnings");
    }

    Ok(doc.save(&Default::default(), &mut warnings))
}
