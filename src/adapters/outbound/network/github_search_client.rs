use super::user_agent;
use crate::crawl::domain::ManifestFile;
use crate::ports::outbound::{CodeSearchRepository, SearchHit, SearchOutcome};
use crate::shared::error::CrawlError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use std::time::Duration;

/// GitHub code-search client
///
/// Queries `search/code` with `filename:<f>+repo:<owner>/<repo>` and
/// downloads matching files through their raw view URL.
///
/// # Rate limiting
/// The client itself never sleeps. GitHub's secondary rate limit answers
/// with 403/429, which is surfaced as [`SearchOutcome::Rejected`] so the
/// caller can back off.
pub struct GitHubCodeSearchClient {
    client: Client,
    api_url: String,
    credential: String,
}

impl GitHubCodeSearchClient {
    const API_ENDPOINT: &'static str = "https://api.github.com";
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the public GitHub API authenticated with `credential`
    pub fn new(credential: String) -> Result<Self> {
        if credential.trim().is_empty() {
            return Err(CrawlError::MissingCredential.into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent())
            .build()?;

        Ok(Self {
            client,
            api_url: Self::API_ENDPOINT.to_string(),
            credential,
        })
    }

    /// Points the client at another API root, e.g. a GitHub Enterprise instance
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn search_url(&self, manifest: &ManifestFile) -> String {
        let repository = manifest.repository();
        format!(
            "{}/search/code?q=filename:{}+repo:{}/{}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(manifest.filename()),
            urlencoding::encode(repository.owner()),
            urlencoding::encode(repository.name()),
        )
    }
}

impl CodeSearchRepository for GitHubCodeSearchClient {
    fn search(&self, manifest: &ManifestFile) -> Result<SearchOutcome> {
        let url = self.search_url(manifest);
        let request_error = |e: reqwest::Error| CrawlError::SearchRequestError {
            query: format!("{} in {}", manifest.filename(), manifest.repository()),
            details: e.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.credential))
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(request_error)?;

        if !response.status().is_success() {
            return Ok(SearchOutcome::Rejected {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().map_err(request_error)?;
        parse_search_response(&body)
    }

    fn download(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Ok(None);
        }

        Ok(Some(response.bytes()?.to_vec()))
    }
}

// GitHub search API response structures

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    html_url: String,
}

fn parse_search_response(body: &str) -> Result<SearchOutcome> {
    let response: SearchResponse = serde_json::from_str(body)?;

    if response.items.is_empty() {
        return Ok(SearchOutcome::Empty);
    }

    Ok(SearchOutcome::Found(
        response
            .items
            .into_iter()
            .map(|item| SearchHit::new(item.html_url))
            .collect(),
    ))
}
