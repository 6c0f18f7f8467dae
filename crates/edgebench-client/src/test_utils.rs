//! Test helpers: a one-shot HTTP responder and an in-memory fake service

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use edgebench_core::{AnalysisResponse, Error, ExportBlob, ExportFormat, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::service::{require_code, AnalysisService};

// ─────────────────────────────────────────────────────────────────────────────
// One-shot HTTP responder
// ─────────────────────────────────────────────────────────────────────────────

/// Accept exactly one connection on an ephemeral port, answer it with the
/// given status and body, and resolve the handle to the raw request text.
///
/// Returns the base URL to point a client at.
pub async fn serve_once(
    status: u16,
    content_type: &str,
    body: Vec<u8>,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    let head = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reason_phrase(status),
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept test connection");
        let request = read_request(&mut socket).await;
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&body).await;
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fake service
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FakeState {
    analyze_results: VecDeque<Result<AnalysisResponse>>,
    export_results: VecDeque<Result<ExportBlob>>,
    analyze_calls: Vec<String>,
    export_calls: Vec<(String, ExportFormat)>,
}

/// In-memory [`AnalysisService`] returning queued results in order.
///
/// Honors the blank-buffer guard so callers observe the same contract as the
/// HTTP client: blank input is rejected without being recorded as a call.
#[derive(Clone, Default)]
pub struct FakeAnalysisService {
    state: Arc<Mutex<FakeState>>,
}

impl FakeAnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_analysis(&self, result: Result<AnalysisResponse>) {
        self.lock().analyze_results.push_back(result);
    }

    pub fn push_export(&self, result: Result<ExportBlob>) {
        self.lock().export_results.push_back(result);
    }

    /// Buffers received by `analyze`, in call order
    pub fn analyze_calls(&self) -> Vec<String> {
        self.lock().analyze_calls.clone()
    }

    pub fn export_calls(&self) -> Vec<(String, ExportFormat)> {
        self.lock().export_calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake service state poisoned")
    }
}

impl AnalysisService for FakeAnalysisService {
    async fn analyze(&self, code: &str) -> Result<AnalysisResponse> {
        require_code(code)?;
        let mut state = self.lock();
        state.analyze_calls.push(code.to_string());
        state
            .analyze_results
            .pop_front()
            .unwrap_or_else(|| Err(Error::transport("no fake analysis queued")))
    }

    async fn export_tests(&self, code: &str, format: ExportFormat) -> Result<ExportBlob> {
        let mut state = self.lock();
        state.export_calls.push((code.to_string(), format));
        state
            .export_results
            .pop_front()
            .unwrap_or_else(|| Err(Error::export_with("no fake export queued")))
    }
}
