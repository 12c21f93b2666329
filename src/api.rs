//! API client for the inspection backend

use inspector_types::{error_message, QueryParams, World};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::InspectError;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /{world}/inspect` - the result body is returned untouched
    pub async fn inspect(&self, params: &QueryParams) -> Result<Value, InspectError> {
        self.get(&inspect_url(&self.base_url, params)).await
    }

    /// `GET /worlds`
    pub async fn worlds(&self) -> Result<Vec<World>, InspectError> {
        self.get(&format!("{}/worlds", self.base_url)).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, InspectError> {
        tracing::debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| InspectError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable body falls through to the generic status message
            let body = response.bytes().await.unwrap_or_default();
            return Err(InspectError::Status {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| InspectError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| InspectError::Decode(e.to_string()))
    }
}

/// `{base}/{world}/inspect?obj=..&perspective=..&context=..`
pub fn inspect_url(base_url: &str, params: &QueryParams) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("obj", &params.obj)
        .append_pair("perspective", &params.perspective)
        .append_pair("context", &params.context)
        .finish();

    format!(
        "{}/{}/inspect?{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(&params.world),
        query
    )
}
