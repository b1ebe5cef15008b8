use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

use sokha_core::{Locale, QuestionnaireKind, routes};
use sokha_flow::backend::{Backend, BackendError, SubmitOutcome};
use sokha_flow::page::PageData;

/// Non-2xx responses carry the server's message under this shape.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP implementation of the questionnaire backend.
///
/// The agent is configured to hand non-2xx responses back as responses
/// rather than transport errors, so the `{ "error": ... }` body can be
/// decoded and surfaced inline.
pub struct HttpBackend {
    agent: Agent,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_page(&self, path: String) -> Result<PageData, BackendError> {
        let url = self.url(&path);
        debug!(url = %url, "fetching section");

        let mut response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(&mut response));
        }
        response
            .body_mut()
            .read_json::<PageData>()
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

impl Backend for HttpBackend {
    fn fetch_entry(
        &self,
        kind: QuestionnaireKind,
        token: &str,
        locale: Locale,
    ) -> Result<PageData, BackendError> {
        self.get_page(routes::api_entry(kind, token, locale))
    }

    fn fetch_section(
        &self,
        kind: QuestionnaireKind,
        token: &str,
        locale: Locale,
        session_id: &str,
        section_index: &str,
    ) -> Result<PageData, BackendError> {
        self.get_page(routes::api_section(
            kind,
            token,
            locale,
            session_id,
            section_index,
        ))
    }

    fn submit(
        &self,
        kind: QuestionnaireKind,
        token: &str,
        section_id: &str,
        body: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<SubmitOutcome, BackendError> {
        let url = self.url(&routes::api_submit(kind, token, section_id));
        debug!(url = %url, section = %section_id, "posting submission");

        let mut response = self
            .agent
            .post(&url)
            .send_json(body)
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(&mut response));
        }
        response
            .body_mut()
            .read_json::<SubmitOutcome>()
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

fn api_error(response: &mut ureq::http::Response<ureq::Body>) -> BackendError {
    let status = response.status();
    match response.body_mut().read_json::<ErrorBody>() {
        Ok(body) => BackendError::Api {
            message: body.error,
        },
        Err(_) => BackendError::Api {
            message: format!("server error (status {status})"),
        },
    }
}
