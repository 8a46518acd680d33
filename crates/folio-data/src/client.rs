//! One-shot fetch client for third-party APIs.

use std::time::Duration;

use folio_core::RequestId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dependency::DependencyTag;
use crate::timeout::TimeoutConfig;

/// Ways a fetch can fail. Every one of them is terminal for the user action
/// that triggered the call; callers fall back to demo data instead of
/// retrying.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Undecodable response body: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Request(String),
}

/// Outbound HTTP for a demo page. Wraps Spin outbound HTTP with dependency
/// tagging so every call is attributable in logs and metrics.
pub struct FetchClient {
    request_id: RequestId,
    ceiling: TimeoutConfig,
}

impl FetchClient {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            ceiling: TimeoutConfig::default(),
        }
    }

    /// Cap all per-dependency budgets with this config.
    pub fn with_ceiling(mut self, ceiling: TimeoutConfig) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// The budget a call for `tag` runs under: the tag's own budget, capped
    /// by the client-wide ceiling. The WASI host enforces the wall clock;
    /// this value is what gets attributed in logs.
    pub fn effective_budget(&self, tag: DependencyTag) -> Duration {
        tag.time_budget().min(self.ceiling.total)
    }

    /// GET a JSON document. One attempt; the error is the caller's cue to
    /// fall back.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        tag: DependencyTag,
    ) -> Result<T, FetchError> {
        let _budget = self.effective_budget(tag);

        let req = spin_sdk::http::Request::get(url);
        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        decode_response(resp, url)
    }

    /// POST a JSON body and decode a JSON response. One attempt, like GET.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        tag: DependencyTag,
    ) -> Result<T, FetchError> {
        let _budget = self.effective_budget(tag);

        let payload = serde_json::to_vec(body).map_err(|e| FetchError::Request(e.to_string()))?;
        let req = spin_sdk::http::Request::builder()
            .method(spin_sdk::http::Method::Post)
            .uri(url)
            .header("content-type", "application/json")
            .body(payload)
            .build();

        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        decode_response(resp, url)
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}

fn decode_response<T: DeserializeOwned>(
    resp: spin_sdk::http::Response,
    url: &str,
) -> Result<T, FetchError> {
    let status = *resp.status();
    if status >= 400 {
        return Err(FetchError::Http {
            status,
            url: url.to_owned(),
        });
    }

    serde_json::from_slice(resp.body()).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_caps_tag_budgets() {
        let client = FetchClient::new(RequestId::from_string("f-1"))
            .with_ceiling(TimeoutConfig::from_total(Duration::from_millis(1000)));

        assert_eq!(
            client.effective_budget(DependencyTag::Email),
            Duration::from_millis(1000)
        );
        // Under the ceiling, the tag's own budget applies.
        let roomy = FetchClient::new(RequestId::from_string("f-2"));
        assert_eq!(
            roomy.effective_budget(DependencyTag::Weather),
            Duration::from_millis(1500)
        );
    }
}
