use crate::app::VetApp;

pub fn show(ui: &mut egui::Ui, app: &mut VetApp) {
    ui.horizontal(|ui| {
        ui.strong(format!("Total Files: {}", app.session.len()));
        ui.separator();
        ui.label(format!("Suspicious Files: {}", app.session.suspicious_count()));

        if app.activity.active() {
            ui.separator();
            ui.spinner();
            ui.label(format!("Scanning {}", app.activity.current().unwrap_or("...")));
        }

        // Export controls, pushed to the right edge.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Download Results").clicked() {
                app.export_results();
            }
            if ui.button("Export Analysis").clicked() {
                app.export_analysis();
            }
        });
    });
}
