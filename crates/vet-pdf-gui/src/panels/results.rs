use crate::app::{EntryUi, VetApp};
use vet_pdf_core::model::ScanResult;
use vet_pdf_core::view::{self, FileStatus};

const SUSPICIOUS_RED: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
const SAFE_GREEN: egui::Color32 = egui::Color32::from_rgb(60, 170, 80);
const ENCRYPTED_ORANGE: egui::Color32 = egui::Color32::from_rgb(255, 140, 0);

pub fn show(ui: &mut egui::Ui, app: &mut VetApp) {
    // Compact drop strip; files can also be dropped anywhere in the window.
    ui.horizontal(|ui| {
        if ui.button("Add PDF files...").clicked() {
            app.request_file_picker();
        }
        ui.label(
            egui::RichText::new("or drop files anywhere in this window")
                .color(egui::Color32::GRAY),
        );
        if app.activity.active() {
            ui.spinner();
            ui.label(format!("Scanning {}", app.activity.current().unwrap_or("...")));
        }
    });
    ui.separator();

    let session = &app.session;
    let entries = &mut app.entries;
    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for (index, (result, entry)) in session.all().iter().zip(entries.iter_mut()).enumerate() {
            entry_card(ui, index, result, entry);
            ui.add_space(8.0);
        }
    });
}

/// Render one result as a card: status line, filename header, field rows,
/// structure-analysis section and suspicious warning.
fn entry_card(ui: &mut egui::Ui, index: usize, result: &ScanResult, entry: &mut EntryUi) {
    ui.group(|ui| {
        if let Some(status) = view::classify(result) {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("\u{25CF}").color(status_colour(status)));
                ui.label(status.label());
            });
        }

        ui.heading(format!("File: {}", result.filename));

        let rows = view::display_fields(result);
        if !rows.is_empty() {
            egui::Grid::new(("result_fields", index)).num_columns(2).spacing([8.0, 2.0]).show(
                ui,
                |ui| {
                    for field in &rows {
                        if field.emphasis {
                            ui.strong(format!("{}:", field.label));
                            ui.strong(field.value.as_str());
                        } else {
                            ui.label(format!("{}:", field.label));
                            ui.label(field.value.as_str());
                        }
                        ui.end_row();
                    }
                },
            );
        }

        show_structure_analysis(ui, index, result, entry);

        if result.is_suspicious.unwrap_or(false) {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Warning: Suspicious content detected!")
                    .color(SUSPICIOUS_RED)
                    .strong(),
            );
        }
    });
}

fn show_structure_analysis(
    ui: &mut egui::Ui,
    index: usize,
    result: &ScanResult,
    entry: &mut EntryUi,
) {
    let Some(text) = view::structure_analysis(result) else {
        ui.add_space(4.0);
        ui.colored_label(egui::Color32::GRAY, "No structure analysis available.");
        return;
    };

    ui.add_space(6.0);
    if view::has_high_risk_markers(text) {
        ui.label(
            egui::RichText::new("Structure Analysis: (Suspicious Content Detected)")
                .color(SUSPICIOUS_RED)
                .strong(),
        );
    } else {
        ui.strong("Structure Analysis:");
    }

    if ui.button("Show/Hide Analysis").clicked() {
        entry.show_analysis = !entry.show_analysis;
    }

    if entry.show_analysis {
        let preview = if entry.expanded { None } else { view::analysis_preview(text) };
        let shown = preview.as_deref().unwrap_or(text);
        egui::ScrollArea::vertical().id_salt(("analysis_text", index)).max_height(300.0).show(
            ui,
            |ui| {
                ui.monospace(shown);
            },
        );
        // One-shot: once expanded, the control is gone for good.
        if preview.is_some() && ui.button("Show Full Analysis").clicked() {
            entry.expanded = true;
        }
    }

    if view::has_obfuscation_fields(result) {
        ui.add_space(4.0);
        ui.strong("Obfuscation Results:");
        if let Some(count) = result.suspicious_hex_count {
            ui.label(format!("Suspicious Hex Blocks: {}", count));
        }
        if let Some(count) = result.suspicious_font_count {
            ui.label(format!("Suspicious Font References: {}", count));
        }
        if let Some(obfuscated) = result.is_obfuscated {
            let (label, colour) = if obfuscated {
                ("Is Obfuscated: Yes", SUSPICIOUS_RED)
            } else {
                ("Is Obfuscated: No", SAFE_GREEN)
            };
            ui.colored_label(colour, label);
        }
    }
}

fn status_colour(status: FileStatus) -> egui::Color32 {
    match status {
        FileStatus::Encrypted => ENCRYPTED_ORANGE,
        FileStatus::Suspicious => SUSPICIOUS_RED,
        FileStatus::Safe => SAFE_GREEN,
    }
}
