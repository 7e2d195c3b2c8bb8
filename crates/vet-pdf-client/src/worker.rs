use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use vet_pdf_core::model::ScanResult;

use crate::upload::{UploadClient, UploadError};

/// One queued upload: the original file name and the raw bytes.
pub struct UploadJob {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Progress report emitted by the worker for each job.
#[derive(Debug)]
pub enum UploadEvent {
    Started { file_name: String },
    Completed { file_name: String, result: ScanResult },
    Failed { file_name: String, error: UploadError },
}

/// Handle to the background upload thread.
///
/// Jobs are processed strictly in submission order with at most one request
/// in flight, so completion events arrive in the same order files were
/// submitted. The thread exits when the handle is dropped.
pub struct UploadWorker {
    jobs: Sender<UploadJob>,
    events: Receiver<UploadEvent>,
}

impl UploadWorker {
    /// Spawn the worker thread with a client for the given endpoint.
    pub fn spawn(endpoint: impl Into<String>) -> Result<Self, UploadError> {
        let client = UploadClient::new(endpoint)?;
        let (job_tx, job_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        thread::spawn(move || run(client, job_rx, event_tx));
        Ok(Self { jobs: job_tx, events: event_rx })
    }

    /// Queue a file for upload. Returns false if the worker thread is gone.
    pub fn submit(&self, job: UploadJob) -> bool {
        self.jobs.send(job).is_ok()
    }

    /// Next pending event, if any. Never blocks.
    pub fn try_next_event(&self) -> Option<UploadEvent> {
        self.events.try_recv().ok()
    }
}

fn run(client: UploadClient, jobs: Receiver<UploadJob>, events: Sender<UploadEvent>) {
    for UploadJob { file_name, bytes } in jobs {
        if events.send(UploadEvent::Started { file_name: file_name.clone() }).is_err() {
            return;
        }

        tracing::info!(file = %file_name, size = bytes.len(), "uploading file");
        let event = match client.upload(&file_name, bytes) {
            Ok(result) => {
                tracing::info!(file = %file_name, "upload complete");
                UploadEvent::Completed { file_name, result }
            }
            Err(error) => {
                tracing::warn!(file = %file_name, %error, "upload failed");
                UploadEvent::Failed { file_name, error }
            }
        };

        if events.send(event).is_err() {
            return;
        }
    }
}
