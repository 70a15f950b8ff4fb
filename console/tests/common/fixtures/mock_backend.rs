//! Mock monitoring backend for testing
//!
//! Answers the `/api/v1` endpoints the console's clients talk to without a
//! real backend running.

use monitor_console::{initialize, App};
use reqwest::Url;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data;

/// Mock backend that simulates monitoring HTTP responses
pub struct MockBackend {
    pub server: MockServer,
    pub base_url: String,
}

impl MockBackend {
    /// Create a new mock backend
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    pub fn origin(&self) -> Url {
        Url::parse(&self.base_url).expect("mock server uri is a valid url")
    }

    /// App with its clients installed against this backend
    pub fn app(&self) -> App {
        let mut app = App::new(self.origin());
        initialize(&mut app).expect("client registry initializes");
        app
    }

    /// Mock `/api/v1/mode`
    pub async fn mock_mode(&self, agent: bool) {
        Mock::given(method("GET"))
            .and(path("/api/v1/mode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "mode": agent })))
            .mount(&self.server)
            .await;
    }

    /// Mock `/api/v1/host` with a healthy report
    pub async fn mock_host(&self, host_name: &str) {
        self.mock_json("/api/v1/host", test_data::host_report(host_name)).await;
    }

    /// Mock `/api/v1/agents` with the given body
    pub async fn mock_agents(&self, body: Value) {
        self.mock_json("/api/v1/agents", body).await;
    }

    /// Mock `/api/v1/agents` the way a backend in agent mode answers it
    pub async fn mock_agents_refused(&self) {
        Mock::given(method("GET"))
            .and(path("/api/v1/agents"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&self.server)
            .await;
    }

    /// Mock an arbitrary endpoint failing with `status_code`
    pub async fn mock_error(&self, endpoint: &str, status_code: u16, error_msg: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(error_msg))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_json(&self, endpoint: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Number of requests received for `endpoint`
    pub async fn hits(&self, endpoint: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == endpoint)
            .count()
    }
}
