//! `WeatherSource` backed by an HTTP JSON endpoint.
use async_trait::async_trait;
use reqwest::{Client, header};
use url::Url;

use crate::config::WeatherApiConfig;

use super::source::{WeatherError, WeatherResult, WeatherSource, parse_record};
use super::types::WeatherRecord;

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug)]
pub struct HttpWeatherSource {
    client: Client,
    url: Url,
    api_key: Option<String>,
}

impl HttpWeatherSource {
    pub fn new(config: &WeatherApiConfig) -> reqwest::Result<Self> {
        // The client-wide timeout covers connect, headers and body.
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl WeatherSource for HttpWeatherSource {
    fn source_name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> WeatherResult<WeatherRecord> {
        let mut request = self
            .client
            .get(self.url.clone())
            .header(header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UpstreamUnavailable(format!(
                "upstream responded with {status}"
            )));
        }

        let body = response.bytes().await.map_err(unavailable)?;
        let record = parse_record(&body)?;

        tracing::debug!(
            source = self.source_name(),
            location = record.location.as_deref().unwrap_or("-"),
            observed_at = ?record.observed_at(),
            "fetched weather record"
        );

        Ok(record)
    }
}

fn unavailable(e: reqwest::Error) -> WeatherError {
    if e.is_timeout() {
        WeatherError::UpstreamUnavailable("upstream request timed out".into())
    } else {
        WeatherError::UpstreamUnavailable(e.without_url().to_string())
    }
}
