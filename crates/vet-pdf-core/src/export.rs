use crate::model::ScanResult;
use crate::view::display_fields;

/// Default file name offered for the structure-analysis export.
pub const ANALYSIS_EXPORT_NAME: &str = "structure_analysis.txt";

/// Default file name offered for the full results export.
pub const RESULTS_EXPORT_NAME: &str = "results.txt";

/// Fallback block written when a result has no structural dump to export.
const NO_ANALYSIS_FALLBACK: &str = "No structure analysis available.";

/// Error returned when an export is requested with nothing to write.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportError {
    Empty,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Empty => write!(f, "no results to export"),
        }
    }
}

/// Render the structure-analysis export: one numbered section per result
/// with its raw structural dump, double-newline separated.
pub fn render_analysis_export(results: &[ScanResult]) -> Result<String, ExportError> {
    if results.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut content = String::from("PDF Structure Analysis\n\n");
    for (index, result) in results.iter().enumerate() {
        content.push_str(&format!("File {}: {}\n", index + 1, result.filename));
        let analysis = result.structure_analysis.as_deref().unwrap_or(NO_ANALYSIS_FALLBACK);
        content.push_str(&format!("Structure Analysis:\n{}\n\n", analysis));
    }
    Ok(content)
}

/// Render the full results export: one numbered section per result with one
/// indented line per present display field, blank-line separated.
pub fn render_results_export(results: &[ScanResult]) -> Result<String, ExportError> {
    if results.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut content = String::from("PDF Forensics Scanner Results\n\n");
    for (index, result) in results.iter().enumerate() {
        content.push_str(&format!("File {}: {}\n", index + 1, result.filename));
        for field in display_fields(result) {
            content.push_str(&format!("  {}: {}\n", field.label, field.value));
        }
        content.push('\n');
    }
    Ok(content)
}
