use std::collections::VecDeque;
use std::path::Path;

use anyhow::Context;
use vet_pdf_client::{UploadEvent, UploadJob, UploadWorker};
use vet_pdf_core::export;
use vet_pdf_core::session::ScanSession;

/// Per-result UI state for the results list, index-aligned with the session.
#[derive(Debug, Default)]
pub struct EntryUi {
    /// Whether the structure-analysis text block is visible.
    pub show_analysis: bool,
    /// Whether the one-shot expand control has been used.
    pub expanded: bool,
}

/// Tracks in-flight uploads so the UI can show a spinner with the file
/// currently being scanned.
#[derive(Debug, Default)]
pub struct UploadActivity {
    in_flight: usize,
    current: Option<String>,
}

impl UploadActivity {
    /// Note one queued upload.
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    /// Note which file the worker is processing now.
    pub fn started(&mut self, file_name: &str) {
        self.current = Some(file_name.to_string());
    }

    /// Note one finished upload, success or failure. A no-op when idle.
    pub fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.current = None;
        }
    }

    pub fn active(&self) -> bool {
        self.in_flight > 0
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Application state for the forensics scanner client.
pub struct VetApp {
    /// Every result received this session, in upload order.
    pub session: ScanSession,
    /// UI state per session entry.
    pub entries: Vec<EntryUi>,
    /// In-flight upload tracking for the loading indicator.
    pub activity: UploadActivity,
    /// Pending alert messages, shown one at a time as a modal dialog.
    pub alerts: VecDeque<String>,
    /// Endpoint the worker uploads to, shown in the drop zone.
    pub endpoint: String,
    worker: Option<UploadWorker>,
}

impl VetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, endpoint: String) -> Self {
        Self::with_endpoint(endpoint)
    }

    fn with_endpoint(endpoint: String) -> Self {
        let mut alerts = VecDeque::new();
        let worker = match UploadWorker::spawn(endpoint.clone()) {
            Ok(worker) => Some(worker),
            Err(err) => {
                alerts.push_back(format!("Upload worker unavailable: {}", err));
                None
            }
        };
        Self {
            session: ScanSession::new(),
            entries: Vec::new(),
            activity: UploadActivity::default(),
            alerts,
            endpoint,
            worker,
        }
    }

    /// Open the file picker and queue every selected PDF.
    pub fn request_file_picker(&mut self) {
        let Some(paths) =
            rfd::FileDialog::new().add_filter("PDF document", &["pdf"]).pick_files()
        else {
            return;
        };
        for path in paths {
            self.queue_path(&path);
        }
    }

    /// Read a local file and queue it for upload. Unreadable files alert and
    /// are skipped, like any other per-file failure.
    pub fn queue_path(&mut self, path: &Path) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        match std::fs::read(path) {
            Ok(bytes) => self.submit_file(file_name, bytes),
            Err(err) => {
                self.push_alert(format!("Error uploading file: {} - {}", file_name, err));
            }
        }
    }

    /// Queue raw bytes for upload under the given name.
    pub fn submit_file(&mut self, file_name: String, bytes: Vec<u8>) {
        let Some(ref worker) = self.worker else {
            self.push_alert(format!(
                "Error uploading file: {} - upload worker unavailable",
                file_name
            ));
            return;
        };
        if worker.submit(UploadJob { file_name: file_name.clone(), bytes }) {
            self.activity.begin();
        } else {
            self.push_alert(format!("Error uploading file: {} - upload worker stopped", file_name));
        }
    }

    pub fn push_alert(&mut self, message: String) {
        self.alerts.push_back(message);
    }

    /// Drain pending worker events and fold them into the app state.
    fn poll_worker(&mut self) {
        let mut events = Vec::new();
        if let Some(ref worker) = self.worker {
            while let Some(event) = worker.try_next_event() {
                events.push(event);
            }
        }
        for event in events {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::Started { file_name } => {
                self.activity.started(&file_name);
            }
            UploadEvent::Completed { result, .. } => {
                self.session.append(result);
                self.entries.push(EntryUi::default());
                self.activity.finish();
            }
            UploadEvent::Failed { file_name, error } => {
                self.push_alert(format!("Error uploading file: {} - {}", file_name, error));
                self.activity.finish();
            }
        }
    }

    /// Export the raw structure-analysis dumps to a text file.
    pub fn export_analysis(&mut self) {
        match export::render_analysis_export(self.session.all()) {
            Ok(content) => self.save_export(export::ANALYSIS_EXPORT_NAME, &content),
            Err(export::ExportError::Empty) => self.push_alert("No results to export!".to_string()),
        }
    }

    /// Export the full field listing of every result to a text file.
    pub fn export_results(&mut self) {
        match export::render_results_export(self.session.all()) {
            Ok(content) => self.save_export(export::RESULTS_EXPORT_NAME, &content),
            Err(export::ExportError::Empty) => {
                self.push_alert("No results to download!".to_string())
            }
        }
    }

    fn save_export(&mut self, default_name: &str, content: &str) {
        let Some(path) = rfd::FileDialog::new().set_file_name(default_name).save_file() else {
            return;
        };
        match write_export(&path, content) {
            Ok(()) => tracing::info!(path = %path.display(), "export written"),
            Err(err) => self.push_alert(format!("{:#}", err)),
        }
    }

    /// Pull dropped files out of the input state and queue them in order.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files: Vec<_> = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped_files {
            if let Some(bytes) = file.bytes {
                self.submit_file(file.name.clone(), bytes.to_vec());
            } else if let Some(ref path) = file.path {
                self.queue_path(path);
            }
        }
    }

    /// Show the frontmost pending alert, if any, as a modal-style dialog.
    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alerts.front().cloned() else {
            return;
        };
        egui::Window::new("vet-pdf")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.alerts.pop_front();
                    }
                });
            });
    }
}

impl eframe::App for VetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        self.handle_dropped_files(ctx);

        if self.activity.active() {
            // Keep draining worker events while a request is in flight.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Summary bar and export controls appear with the first result.
        if !self.session.is_empty() {
            egui::TopBottomPanel::top("summary_panel").show(ctx, |ui| {
                crate::panels::summary::show(ui, self);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.is_empty() {
                crate::panels::drop_zone::show(ui, self);
            } else {
                crate::panels::results::show(ui, self);
            }
        });

        self.show_alert(ctx);
    }
}

fn write_export(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vet_pdf_client::UploadError;
    use vet_pdf_core::model::ScanResult;

    fn app() -> VetApp {
        // Port 9 is discard; nothing is submitted in these tests, so the
        // endpoint is never contacted.
        VetApp::with_endpoint("http://127.0.0.1:9/upload".to_string())
    }

    fn result(filename: &str) -> ScanResult {
        ScanResult { filename: filename.to_string(), ..ScanResult::default() }
    }

    #[test]
    fn completed_event_appends_result_and_entry_state() {
        let mut app = app();
        app.activity.begin();
        app.apply_event(UploadEvent::Started { file_name: "a.pdf".to_string() });
        assert_eq!(app.activity.current(), Some("a.pdf"));

        app.apply_event(UploadEvent::Completed {
            file_name: "a.pdf".to_string(),
            result: result("a.pdf"),
        });
        assert_eq!(app.session.len(), 1);
        assert_eq!(app.entries.len(), 1);
        assert!(!app.entries[0].show_analysis);
        assert!(!app.entries[0].expanded);
        assert!(!app.activity.active());
        assert!(app.alerts.is_empty());
    }

    #[test]
    fn failed_event_alerts_without_appending() {
        let mut app = app();
        app.activity.begin();
        app.apply_event(UploadEvent::Failed {
            file_name: "bad.pdf".to_string(),
            error: UploadError::Status { status: 500, body: "boom".to_string() },
        });
        assert_eq!(app.session.len(), 0);
        assert!(app.entries.is_empty());
        assert_eq!(app.alerts.len(), 1);
        assert_eq!(app.alerts[0], "Error uploading file: bad.pdf - HTTP 500: boom");
    }

    #[test]
    fn mixed_batch_keeps_only_the_success() {
        // One HTTP failure followed by one success: one alert, one entry.
        let mut app = app();
        app.activity.begin();
        app.activity.begin();
        app.apply_event(UploadEvent::Started { file_name: "bad.pdf".to_string() });
        app.apply_event(UploadEvent::Failed {
            file_name: "bad.pdf".to_string(),
            error: UploadError::Status { status: 500, body: "scan error".to_string() },
        });
        app.apply_event(UploadEvent::Started { file_name: "good.pdf".to_string() });
        app.apply_event(UploadEvent::Completed {
            file_name: "good.pdf".to_string(),
            result: result("good.pdf"),
        });

        assert_eq!(app.alerts.len(), 1);
        assert_eq!(app.session.len(), 1);
        assert_eq!(app.session.all()[0].filename, "good.pdf");
        assert!(!app.activity.active());
    }

    #[test]
    fn empty_session_exports_warn_instead_of_writing() {
        let mut app = app();
        app.export_analysis();
        app.export_results();
        assert_eq!(app.alerts.len(), 2);
        assert_eq!(app.alerts[0], "No results to export!");
        assert_eq!(app.alerts[1], "No results to download!");
    }

    #[test]
    fn activity_finish_is_idempotent_when_idle() {
        let mut activity = UploadActivity::default();
        activity.finish();
        assert!(!activity.active());

        activity.begin();
        activity.started("a.pdf");
        assert!(activity.active());
        activity.finish();
        assert!(!activity.active());
        assert_eq!(activity.current(), None);
    }
}
