//! HTTP client helpers (REST + icon assets).
//!
//! # Design
//! - One client per page, shared through context.
//! - Non-success statuses are errors; bodies are only read on success.
//! - Icon bytes become blob object URLs revoked when their handle drops.

use crate::core::config::ViewerConfig;
use crate::core::error::{IconError, LoadError};
use crate::core::icons::IconUrl;
use crate::core::logic::LogSource;
use blocklog_models::FetchResult;
use gloo::file::{Blob, ObjectUrl};
use gloo_net::http::Request;

const ICON_MIME: &str = "image/png";

/// Object URL for a fetched icon; revoked on drop.
pub(crate) struct IconHandle(ObjectUrl);

impl IconUrl for IconHandle {
    fn url(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: ViewerConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub(crate) fn logs_url(&self, source: &LogSource) -> String {
        self.config.logs_url(source)
    }

    pub(crate) async fn fetch_logs(&self, source: &LogSource) -> Result<FetchResult, LoadError> {
        let response = Request::get(&self.logs_url(source))
            .send()
            .await
            .map_err(|err| LoadError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(LoadError::Status {
                status: response.status(),
            });
        }
        let body = response
            .text()
            .await
            .map_err(|err| LoadError::Network(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| LoadError::Decode(err.to_string()))
    }

    pub(crate) async fn fetch_icon(&self, slug: &str) -> Result<IconHandle, IconError> {
        let response = Request::get(&self.config.icon_url(slug))
            .send()
            .await
            .map_err(|err| IconError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(IconError::Status {
                status: response.status(),
            });
        }
        let bytes = response
            .binary()
            .await
            .map_err(|err| IconError::Network(err.to_string()))?;
        let blob = Blob::new_with_options(bytes.as_slice(), Some(ICON_MIME));
        Ok(IconHandle(ObjectUrl::from(blob)))
    }
}
