use reqwest::blocking::multipart;
use vet_pdf_core::model::ScanResult;

/// Default address of the analysis service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/upload";

/// Error raised while uploading one file. Each error is scoped to its file;
/// the caller moves on to the next upload.
#[derive(Debug)]
pub enum UploadError {
    /// The service answered with a non-success status; `body` is the
    /// plain-text error it returned.
    Status { status: u16, body: String },
    /// The request never completed (connection refused, reset, ...).
    Transport(String),
    /// The response body was not a valid result record.
    Decode(String),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            UploadError::Transport(msg) => write!(f, "request failed: {}", msg),
            UploadError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

/// Blocking client for the `POST /upload` endpoint of the analysis service.
pub struct UploadClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl UploadClient {
    /// Build a client for the given endpoint URL.
    ///
    /// No request timeout is configured: uploads wait for the service as
    /// long as it takes.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, UploadError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        Ok(Self { endpoint: endpoint.into(), http })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one file as a multipart form (field `file`) and decode the
    /// returned result record.
    pub fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<ScanResult, UploadError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(UploadError::Status { status: status.as_u16(), body });
        }

        response.json::<ScanResult>().map_err(|e| UploadError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_code_and_body() {
        let err = UploadError::Status { status: 500, body: "scan failed".to_string() };
        assert_eq!(err.to_string(), "HTTP 500: scan failed");
    }

    #[test]
    fn client_keeps_configured_endpoint() {
        let client = UploadClient::new("http://127.0.0.1:5000/upload").expect("client builds");
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/upload");
    }
}
