//! HTTP implementation of the analysis service

use std::time::Duration;

use edgebench_core::prelude::*;
use edgebench_core::{
    AnalysisBody, AnalysisRequest, AnalysisResponse, ExportBlob, ExportFormat, ExportRequest,
};
use serde_json::Value;
use url::Url;

use crate::service::{require_code, AnalysisService};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for `POST /analyze` and `POST /export`.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpAnalysisClient {
    /// Build a client for the service rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| Error::config(format!("invalid server URL '{base_url}': {e}")))?;
        // Endpoints are joined relative to the base, so keep the last path
        // segment from being replaced.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config(format!("invalid endpoint '{path}': {e}")))
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, code: &str) -> Result<AnalysisResponse> {
        require_code(code)?;

        let url = self.endpoint("analyze")?;
        debug!("POST {} ({} bytes)", url, code.len());

        let response = self
            .http
            .post(url)
            .json(&AnalysisRequest::new(code))
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        // The body decides success or failure, not the status: the service
        // answers 400 with an `error` body for bad input.
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        debug!("analysis response: status {}", status);

        AnalysisBody::from_value(body)?.into_result()
    }

    async fn export_tests(&self, code: &str, format: ExportFormat) -> Result<ExportBlob> {
        let url = self.endpoint("export")?;
        debug!("POST {} (format {})", url, format);

        let response = self
            .http
            .post(url)
            .json(&ExportRequest {
                code: code.to_string(),
                format,
            })
            .send()
            .await
            .map_err(|e| Error::export_with(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("export failed with status {}", status);
            return Err(Error::export());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::export_with(e.to_string()))?;
        info!("exported {} bytes as {}", bytes.len(), format);

        Ok(ExportBlob::new(bytes.to_vec(), format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve_once;

    const SCENARIO: &str = r#"{"metrics":{"total_complexity":1,"h1":2,"h2":2,"N1":3,"N2":3},
        "functions":[{"name":"f","suggestions":[],
        "edge_cases":[{"description":"zero","category":"boundary","code":"f(0)"}]}]}"#;

    fn client(base: &str) -> HttpAnalysisClient {
        HttpAnalysisClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let c = client("http://localhost:5000/api");
        assert_eq!(
            c.endpoint("analyze").unwrap().as_str(),
            "http://localhost:5000/api/analyze"
        );
        let c = client("http://localhost:5000");
        assert_eq!(
            c.endpoint("export").unwrap().as_str(),
            "http://localhost:5000/export"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = HttpAnalysisClient::new("not a url", DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_empty_input_issues_no_request() {
        // Nothing listens here; the guard must fail before connecting.
        let c = client("http://127.0.0.1:9");
        let err = c.analyze("   \n").await.unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let (base, server) = serve_once(200, "application/json", SCENARIO.as_bytes().to_vec()).await;
        let report = client(&base).analyze("def f(x): return x").await.unwrap();

        assert_eq!(report.metrics.total_complexity, 1);
        assert_eq!(report.functions[0].name, "f");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /analyze"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(request.contains(r#"{"code":"def f(x): return x"}"#));
    }

    #[tokio::test]
    async fn test_analyze_service_error_even_with_400() {
        let (base, _server) =
            serve_once(400, "application/json", br#"{"error":"No code provided"}"#.to_vec()).await;
        let err = client(&base).analyze("x").await.unwrap_err();
        assert!(matches!(err, Error::Analysis { .. }));
        assert_eq!(err.to_string(), "No code provided");
    }

    #[tokio::test]
    async fn test_analyze_non_json_is_transport_error() {
        let (base, _server) = serve_once(500, "text/html", b"<h1>oops</h1>".to_vec()).await;
        let err = client(&base).analyze("x").await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }

    #[tokio::test]
    async fn test_analyze_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"))
            .analyze("x")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
        assert!(err.to_string().starts_with("Error analyzing code: "));
    }

    #[tokio::test]
    async fn test_export_success_names_file_py() {
        let payload = b"import pytest\n\ndef test_f_boundary():\n    pass\n".to_vec();
        let (base, server) = serve_once(200, "text/plain", payload.clone()).await;

        let blob = client(&base)
            .export_tests("def f(x): return x", ExportFormat::Unittest)
            .await
            .unwrap();

        assert_eq!(blob.bytes, payload);
        assert_eq!(blob.filename, "test_cases.unittest.py");
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /export"));
        assert!(request.contains(r#""format":"unittest""#));
    }

    #[tokio::test]
    async fn test_export_failure_status() {
        let (base, _server) =
            serve_once(400, "application/json", br#"{"error":"Analysis failed"}"#.to_vec()).await;
        let err = client(&base)
            .export_tests("def (", ExportFormat::Pytest)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error exporting tests");
    }
}
