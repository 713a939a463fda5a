use awesome_sbom::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock CodeSearchRepository with scripted search results and downloads
///
/// Searches without a scripted outcome return `Empty`; downloads of unknown
/// URLs return `None`. Every call is recorded.
#[derive(Default, Clone)]
pub struct MockCodeSearch {
    outcomes: HashMap<(String, String), SearchOutcome>,
    downloads: HashMap<String, Vec<u8>>,
    pub searches: Arc<Mutex<Vec<String>>>,
    pub downloaded: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockCodeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the result of searching `filename` in `repository` ("owner/name")
    pub fn with_outcome(mut self, repository: &str, filename: &str, outcome: SearchOutcome) -> Self {
        self.outcomes
            .insert((repository.to_string(), filename.to_string()), outcome);
        self
    }

    pub fn with_download(mut self, url: &str, content: &str) -> Self {
        self.downloads
            .insert(url.to_string(), content.as_bytes().to_vec());
        self
    }

    /// Recorded searches as "owner/name:filename"
    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn downloaded(&self) -> Vec<String> {
        self.downloaded.lock().unwrap().clone()
    }
}

impl CodeSearchRepository for MockCodeSearch {
    fn search(&self, manifest: &ManifestFile) -> Result<SearchOutcome> {
        let repository = manifest.repository().to_string();
        self.searches
            .lock()
            .unwrap()
            .push(format!("{}:{}", repository, manifest.filename()));
        Ok(self
            .outcomes
            .get(&(repository, manifest.filename().to_string()))
            .cloned()
            .unwrap_or(SearchOutcome::Empty))
    }

    fn download(&self, url: &str) -> Result<Option<Vec<u8>>> {
        self.downloaded.lock().unwrap().push(url.to_string());
        Ok(self.downloads.get(url).cloned())
    }
}
