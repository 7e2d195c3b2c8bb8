use std::io::Read;
use std::thread;
use std::time::{Duration, Instant};

use tiny_http::{Header, Response, Server};
use vet_pdf_client::{UploadClient, UploadError, UploadEvent, UploadJob, UploadWorker};
use vet_pdf_core::session::ScanSession;

/// Start a mock analysis service that answers each incoming request with the
/// next canned (status, body) pair, then shuts down.
fn mock_service(responses: Vec<(u16, String)>) -> String {
    let server = Server::http("127.0.0.1:0").expect("mock server should bind");
    let port = server.server_addr().to_ip().expect("ip listener").port();

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok(mut request) = server.recv() else {
                return;
            };
            // Drain the multipart body so the keep-alive connection stays in
            // sync for the next request.
            let mut sink = Vec::new();
            let _ = request.as_reader().read_to_end(&mut sink);

            let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .expect("static header");
            let response = Response::from_string(body).with_status_code(status).with_header(header);
            let _ = request.respond(response);
        }
    });

    format!("http://127.0.0.1:{}/upload", port)
}

fn next_event(worker: &UploadWorker) -> UploadEvent {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Some(event) = worker.try_next_event() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for upload event");
        thread::sleep(Duration::from_millis(10));
    }
}

fn success_body(filename: &str) -> String {
    format!(
        r#"{{"filename": "{}", "page_count": 1, "encrypted": false, "is_suspicious": false}}"#,
        filename
    )
}

#[test]
fn upload_decodes_success_response() {
    let endpoint = mock_service(vec![(200, success_body("report.pdf"))]);
    let client = UploadClient::new(endpoint).expect("client builds");

    let result = client.upload("report.pdf", b"%PDF-1.4".to_vec()).expect("upload should succeed");
    assert_eq!(result.filename, "report.pdf");
    assert_eq!(result.page_count, Some(1));
}

#[test]
fn upload_surfaces_server_error_body() {
    let endpoint = mock_service(vec![(500, "Error scanning file".to_string())]);
    let client = UploadClient::new(endpoint).expect("client builds");

    let err = client.upload("bad.pdf", b"%PDF-1.4".to_vec()).expect_err("500 should fail");
    match err {
        UploadError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Error scanning file");
        }
        other => panic!("expected Status error, got: {}", other),
    }
}

#[test]
fn upload_rejects_malformed_response_body() {
    let endpoint = mock_service(vec![(200, "not json".to_string())]);
    let client = UploadClient::new(endpoint).expect("client builds");

    let err = client.upload("a.pdf", b"%PDF-1.4".to_vec()).expect_err("bad body should fail");
    assert!(matches!(err, UploadError::Decode(_)), "expected Decode error, got: {}", err);
}

#[test]
fn upload_reports_transport_failure() {
    // Bind a port to learn a free number, then close it again.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
        listener.local_addr().expect("probe addr").port()
    };
    let client =
        UploadClient::new(format!("http://127.0.0.1:{}/upload", port)).expect("client builds");

    let err = client.upload("a.pdf", b"%PDF-1.4".to_vec()).expect_err("refused port should fail");
    assert!(matches!(err, UploadError::Transport(_)), "expected Transport error, got: {}", err);
}

#[test]
fn worker_processes_batch_sequentially_and_isolates_failures() {
    // First upload meets HTTP 500, second one a valid record: exactly one
    // failure and one result, in submission order.
    let endpoint = mock_service(vec![
        (500, "Error scanning file".to_string()),
        (200, success_body("good.pdf")),
    ]);
    let worker = UploadWorker::spawn(endpoint).expect("worker spawns");

    assert!(worker.submit(UploadJob { file_name: "bad.pdf".to_string(), bytes: vec![1] }));
    assert!(worker.submit(UploadJob { file_name: "good.pdf".to_string(), bytes: vec![2] }));

    let mut session = ScanSession::new();
    let mut failures = Vec::new();
    let mut order = Vec::new();

    let mut terminal = 0;
    while terminal < 2 {
        match next_event(&worker) {
            UploadEvent::Started { file_name } => order.push(format!("start {}", file_name)),
            UploadEvent::Completed { file_name, result } => {
                order.push(format!("done {}", file_name));
                session.append(result);
                terminal += 1;
            }
            UploadEvent::Failed { file_name, error } => {
                order.push(format!("fail {}", file_name));
                failures.push((file_name, error));
                terminal += 1;
            }
        }
    }

    assert_eq!(order, vec!["start bad.pdf", "fail bad.pdf", "start good.pdf", "done good.pdf"]);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "bad.pdf");
    assert!(matches!(failures[0].1, UploadError::Status { status: 500, .. }));

    assert_eq!(session.len(), 1);
    assert_eq!(session.all()[0].filename, "good.pdf");
}
