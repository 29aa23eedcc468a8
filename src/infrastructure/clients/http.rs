use crate::domain::{FetchOutcome, PageFetcher};
use crate::error::Result;
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};

pub(crate) const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:91.0) Gecko/20100101 Firefox/91.0",
];

/// Plain HTTP GET fetcher. One user agent is picked per client.
///
/// An empty body counts as a failed fetch, and so does a page lacking the
/// element set with [`HttpFetcher::requiring`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    required: Option<Selector>,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            required: None,
        }
    }

    pub fn requiring(mut self, element: Selector) -> Self {
        self.required = Some(element);
        self
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self::new(build_client(timeout)?))
    }
}

/// Client with a request timeout and a user agent picked at random from [`USER_AGENTS`].
pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    let user_agent = USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0]);
    debug!("Using user agent {}", user_agent);

    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?)
}

fn contains_element(page: &str, element: &Selector) -> bool {
    Html::parse_document(page).select(element).next().is_some()
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        info!("Fetching {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!("Timeout waiting for page to load: {}", e);
                return FetchOutcome::FetchFailed(format!("timeout: {e}"));
            }
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return FetchOutcome::FetchFailed(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with status {}", url, status);
            return FetchOutcome::FetchFailed(format!("HTTP status {status}"));
        }

        match response.text().await {
            Ok(body) if body.trim().is_empty() => {
                warn!("{} returned an empty page", url);
                FetchOutcome::FetchFailed("empty page".into())
            }
            Ok(body) => {
                debug!("Fetched {} bytes from {}", body.len(), url);
                if let Some(required) = &self.required {
                    if !contains_element(&body, required) {
                        warn!("Expected page element missing from {}", url);
                        return FetchOutcome::FetchFailed("missing expected page element".into());
                    }
                }
                FetchOutcome::Fetched(body)
            }
            Err(e) => {
                warn!("Could not read body from {}: {}", url, e);
                FetchOutcome::FetchFailed(e.to_string())
            }
        }
    }
}
