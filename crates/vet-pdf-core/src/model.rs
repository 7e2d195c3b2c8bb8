use serde::{Deserialize, Serialize};

/// One analysis record returned by the scanning service for an uploaded file.
///
/// Every field except `filename` is optional: the service omits fields it
/// could not compute, and absent fields simply produce no display row.
/// Unknown fields in the response (the service also emits document metadata
/// such as `title` and `keywords`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub filename: String,
    pub suspicious_blocks: Option<u64>,
    pub suspicious_objects: Option<u64>,
    pub suspicious_streams: Option<u64>,
    pub suspicious_fonts: Option<u64>,
    pub suspicious_images: Option<u64>,
    pub suspicious_metadata: Option<u64>,
    pub total_blocks: Option<u64>,
    pub file_size_bytes: Option<u64>,
    pub file_size_kb: Option<f64>,
    pub page_count: Option<u64>,
    pub encrypted: Option<bool>,
    /// Creation timestamp in PDF date format (`D:YYYYMMDDHHmmss...`).
    pub created: Option<String>,
    /// Modification timestamp in PDF date format.
    pub modified: Option<String>,
    /// Free-text note. The service emits either a boolean or a string here.
    #[serde(rename = "Note")]
    pub note: Option<Note>,
    pub is_modified: Option<bool>,
    /// Free-text dump of the document's internal object structure.
    pub structure_analysis: Option<String>,
    pub suspicious_hex_count: Option<u64>,
    pub suspicious_font_count: Option<u64>,
    pub is_obfuscated: Option<bool>,
    pub is_suspicious: Option<bool>,
}

/// The `Note` field as emitted by the service: `false` when there is nothing
/// to report, a short message otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Note {
    Flag(bool),
    Text(String),
}

impl Note {
    /// Whether the note carries an actual message worth emphasising.
    pub fn is_set(&self) -> bool {
        match self {
            Note::Flag(flag) => *flag,
            Note::Text(text) => !text.is_empty(),
        }
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Note::Flag(flag) => write!(f, "{}", flag),
            Note::Text(text) => write!(f, "{}", text),
        }
    }
}
