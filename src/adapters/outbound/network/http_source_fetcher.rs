use super::user_agent;
use crate::ports::outbound::SourceDocumentFetcher;
use crate::shared::Result;
use reqwest::blocking::Client;
use std::time::Duration;

/// HttpSourceFetcher adapter downloading awesome-list documents over HTTP
pub struct HttpSourceFetcher {
    client: Client,
}

impl HttpSourceFetcher {
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent())
            .build()?;

        Ok(Self { client })
    }
}

impl SourceDocumentFetcher for HttpSourceFetcher {
    fn fetch(&self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Ok(None);
        }

        Ok(Some(response.text()?))
    }
}
