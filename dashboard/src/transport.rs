use customer_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

/// Executes the plain-data requests built by the core.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a ureq agent.
///
/// 4xx/5xx responses are returned as data so the core interprets the
/// status; only failures to get any response become `ApiError::Network`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let agent = &self.agent;
        let mut response = match (request.method, request.body) {
            (HttpMethod::Get, _) => agent.get(&request.path).call(),
            (HttpMethod::Delete, _) => agent.delete(&request.path).call(),
            (HttpMethod::Post, Some(body)) => agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => agent.post(&request.path).send_empty(),
            (HttpMethod::Put, Some(body)) => agent
                .put(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => agent.put(&request.path).send_empty(),
        }
        .map_err(ApiError::network)?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(ApiError::network)?;
        tracing::debug!(status, "response received");
        Ok(HttpResponse::new(status, body))
    }
}
