#![forbid(unsafe_code)]

pub mod upload;
pub mod worker;

pub use upload::{UploadClient, UploadError, DEFAULT_ENDPOINT};
pub use worker::{UploadEvent, UploadJob, UploadWorker};
