use crate::date::format_pdf_date;
use crate::model::ScanResult;

/// Literal the service sends when it has no structural dump for a file.
pub const NO_ANALYSIS_PLACEHOLDER: &str = "No structure analysis available";

/// PDF features whose presence in the structural dump marks it suspicious.
pub const HIGH_RISK_MARKERS: [&str; 6] =
    ["/JavaScript", "/Launch", "/OpenAction", "/AA", "/URI", "/SubmitForm"];

/// Maximum number of characters shown before the analysis text is truncated
/// behind an expand control.
pub const ANALYSIS_PREVIEW_CHARS: usize = 1000;

/// One renderable key/value row of a scan result.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayField {
    pub label: String,
    pub value: String,
    /// Render emphasised (the note row, when it carries a message).
    pub emphasis: bool,
}

/// Overall per-file status, in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Encrypted,
    Suspicious,
    Safe,
}

impl FileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Encrypted => "Encrypted File",
            FileStatus::Suspicious => "Suspicious File",
            FileStatus::Safe => "Safe File",
        }
    }
}

/// Build the fixed-order display rows for a result.
///
/// Fields absent from the record produce no row, whatever the service sent
/// for the rest. `created`/`modified` pass through the date formatter.
pub fn display_fields(result: &ScanResult) -> Vec<DisplayField> {
    let mut rows = Vec::new();

    push_count(&mut rows, "suspicious blocks", result.suspicious_blocks);
    push_count(&mut rows, "suspicious objects", result.suspicious_objects);
    push_count(&mut rows, "suspicious streams", result.suspicious_streams);
    push_count(&mut rows, "suspicious fonts", result.suspicious_fonts);
    push_count(&mut rows, "suspicious images", result.suspicious_images);
    push_count(&mut rows, "suspicious metadata", result.suspicious_metadata);
    push_count(&mut rows, "total blocks", result.total_blocks);
    push_count(&mut rows, "file size bytes", result.file_size_bytes);
    if let Some(kb) = result.file_size_kb {
        rows.push(row("file size kb", kb.to_string()));
    }
    push_count(&mut rows, "page count", result.page_count);
    if let Some(encrypted) = result.encrypted {
        rows.push(row("encrypted", encrypted.to_string()));
    }
    if let Some(ref created) = result.created {
        rows.push(row("created", format_pdf_date(created)));
    }
    if let Some(ref modified) = result.modified {
        rows.push(row("modified", format_pdf_date(modified)));
    }
    if let Some(ref note) = result.note {
        rows.push(DisplayField {
            label: "Note".to_string(),
            value: note.to_string(),
            emphasis: note.is_set(),
        });
    }
    if let Some(is_modified) = result.is_modified {
        rows.push(row("is modified", is_modified.to_string()));
    }

    rows
}

/// Classify a result as encrypted, suspicious or safe.
///
/// Returns `None` for the one combination that carries no status
/// indicator: a file flagged suspicious that is neither encrypted nor over
/// the suspicious-block threshold. Absent fields count as zero/false.
pub fn classify(result: &ScanResult) -> Option<FileStatus> {
    if result.encrypted.unwrap_or(false) {
        return Some(FileStatus::Encrypted);
    }
    if result.suspicious_blocks.unwrap_or(0) > 10 {
        return Some(FileStatus::Suspicious);
    }
    if !result.is_suspicious.unwrap_or(false) {
        return Some(FileStatus::Safe);
    }
    None
}

/// The structural dump, unless it is absent or the service placeholder.
pub fn structure_analysis(result: &ScanResult) -> Option<&str> {
    match result.structure_analysis.as_deref() {
        Some(text) if text != NO_ANALYSIS_PLACEHOLDER => Some(text),
        _ => None,
    }
}

/// Whether the structural dump mentions any high-risk PDF feature.
pub fn has_high_risk_markers(text: &str) -> bool {
    HIGH_RISK_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Truncated preview of an over-long analysis text, or `None` when the full
/// text fits within the preview limit.
pub fn analysis_preview(text: &str) -> Option<String> {
    if text.chars().count() <= ANALYSIS_PREVIEW_CHARS {
        return None;
    }
    let mut preview: String = text.chars().take(ANALYSIS_PREVIEW_CHARS).collect();
    preview.push_str("...");
    Some(preview)
}

/// Whether the result carries any obfuscation indicator fields.
pub fn has_obfuscation_fields(result: &ScanResult) -> bool {
    result.suspicious_hex_count.is_some()
        || result.suspicious_font_count.is_some()
        || result.is_obfuscated.is_some()
}

fn row(label: &str, value: String) -> DisplayField {
    DisplayField { label: label.to_string(), value, emphasis: false }
}

fn push_count(rows: &mut Vec<DisplayField>, label: &str, value: Option<u64>) {
    if let Some(count) = value {
        rows.push(row(label, count.to_string()));
    }
}
