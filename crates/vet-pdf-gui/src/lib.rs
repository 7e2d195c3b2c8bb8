#![forbid(unsafe_code)]

pub mod app;
pub mod panels;

/// Native entry point: run eframe in a desktop window.
pub fn start_native(endpoint: String) -> eframe::Result {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "vet-pdf - PDF forensics scanner",
        options,
        Box::new(move |cc| Ok(Box::new(app::VetApp::new(cc, endpoint)))),
    )
}
