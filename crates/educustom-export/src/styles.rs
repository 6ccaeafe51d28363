use serde::{Deserialize, Serialize};

/// Styling for the printed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font stack for body text.
    pub body_font: String,

    /// Font stack for the header, metadata grid, and signature block.
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,

    /// Heading 1 size in points.
    pub heading1_size: usize,

    /// Heading 2 size in points.
    pub heading2_size: usize,

    /// Heading 3 size in points.
    pub heading3_size: usize,

    /// Page margin in millimeters (applied uniformly).
    pub margin_mm: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Georgia, serif".to_string(),
            heading_font: "Arial, sans-serif".to_string(),
            body_size: 12,
            heading1_size: 18,
            heading2_size: 15,
            heading3_size: 13,
            margin_mm: 10.0,
        }
    }
}
