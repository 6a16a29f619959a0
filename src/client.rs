use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::constants::USER_AGENT;
use crate::error::FetchError;
use crate::i18n::Language;
use crate::models::WttrResponse;

/// HTTP client for the wttr.in JSON endpoint
#[derive(Clone)]
pub struct WttrClient {
    client: Arc<Client>,
    base_url: String,
}

impl WttrClient {
    /// Creates a new client from the configured base URL and timeout
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the `format=j1` document for `city`
    pub fn report_url(&self, city: &str, lang: Language) -> String {
        format!(
            "{}/{}?format=j1&lang={}",
            self.base_url,
            urlencoding::encode(city.trim()),
            lang.wttr_code()
        )
    }

    /// Fetches and validates the weather document for `city`
    pub async fn fetch(&self, city: &str, lang: Language) -> Result<WttrResponse, FetchError> {
        let url = self.report_url(city, lang);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::info!("Status code for {}: {}", city, status);

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::CityNotFound);
        }
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let data: WttrResponse = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        if !data.is_complete() {
            return Err(FetchError::Malformed(
                "missing current_condition or weather".to_string(),
            ));
        }

        Ok(data)
    }
}
