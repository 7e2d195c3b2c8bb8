use crate::app::VetApp;

pub fn show(ui: &mut egui::Ui, app: &mut VetApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);

        ui.heading("PDF Forensics Scanner");
        ui.add_space(20.0);

        let drop_area = ui.group(|ui| {
            ui.set_min_size(egui::vec2(400.0, 200.0));
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.label(
                    egui::RichText::new("Drop PDF files here to scan")
                        .size(18.0)
                        .color(egui::Color32::GRAY),
                );
                ui.add_space(10.0);
                if ui.button("Select PDF files").clicked() {
                    app.request_file_picker();
                }
                ui.add_space(10.0);
                if app.activity.active() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        let current = app.activity.current().unwrap_or("...");
                        ui.label(format!("Scanning {}", current));
                    });
                } else {
                    ui.label(
                        egui::RichText::new(format!("Files are sent to {}", app.endpoint))
                            .size(12.0)
                            .color(egui::Color32::DARK_GRAY),
                    );
                }
            });
        });

        // Highlight drop area when hovering with file
        if ui.input(|i| !i.raw.hovered_files.is_empty()) {
            ui.painter().rect_stroke(
                drop_area.response.rect,
                4.0,
                egui::Stroke::new(2.0, egui::Color32::LIGHT_GREEN),
                egui::StrokeKind::Outside,
            );
        }
    });
}
