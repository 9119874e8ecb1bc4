use super::models::{ApiErrors, RecordsPage};
use async_trait::async_trait;
use linode_records_application::ports::{DomainRecordClient, ListOptions};
use linode_records_domain::config::ApiConfig;
use linode_records_domain::{DomainError, DomainRecord};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Header carrying the JSON filter on list calls.
const FILTER_HEADER: &str = "X-Filter";

/// Domain record client backed by the Linode REST API.
pub struct LinodeDomainRecordClient {
    http: reqwest::Client,
    base_url: String,
    page_size: Option<u32>,
}

impl LinodeDomainRecordClient {
    pub fn new(config: &ApiConfig) -> Result<Self, DomainError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                DomainError::ConfigError("API token contains invalid characters".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent())
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            page_size: config.page_size,
        })
    }

    fn records_url(&self, domain_id: i64) -> String {
        format!("{}/domains/{}/records", self.base_url, domain_id)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, DomainError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::Transport(format!("Timeout waiting for {}", url))
            } else {
                DomainError::Transport(format!("Request to {} failed: {}", url, e))
            }
        })?;

        let response = Self::check_status(response).await?;

        response.json::<T>().await.map_err(|e| {
            DomainError::InvalidResponse(format!("Failed to decode response from {}: {}", url, e))
        })
    }

    async fn check_status(response: Response) -> Result<Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let reason = serde_json::from_str::<ApiErrors>(&body)
            .ok()
            .and_then(|errors| errors.reason())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        debug!(status = status.as_u16(), reason = %reason, "Linode API returned an error");

        Err(DomainError::Api {
            status: status.as_u16(),
            reason,
        })
    }
}

#[async_trait]
impl DomainRecordClient for LinodeDomainRecordClient {
    #[instrument(skip(self))]
    async fn get_record(
        &self,
        domain_id: i64,
        record_id: i64,
    ) -> Result<DomainRecord, DomainError> {
        let url = format!("{}/{}", self.records_url(domain_id), record_id);
        debug!(url = %url, "Fetching domain record");

        self.send_json(self.http.get(&url), &url).await
    }

    #[instrument(skip(self))]
    async fn list_records(
        &self,
        domain_id: i64,
        options: &ListOptions,
    ) -> Result<Vec<DomainRecord>, DomainError> {
        let mut url = format!("{}?page={}", self.records_url(domain_id), options.page.max(1));
        if let Some(size) = self.page_size {
            url.push_str(&format!("&page_size={}", size));
        }

        let mut request = self.http.get(&url);
        if let Some(filter) = options.filter.as_deref() {
            request = request.header(FILTER_HEADER, filter);
        }

        let page: RecordsPage = self.send_json(request, &url).await?;

        debug!(
            url = %url,
            returned = page.data.len(),
            results = page.results,
            pages = page.pages,
            "Listed domain records"
        );

        Ok(page.data)
    }
}
