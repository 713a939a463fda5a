use awesome_sbom::prelude::*;
use std::collections::HashMap;

/// Mock SourceDocumentFetcher serving documents from memory
///
/// Unknown URLs behave like a 404.
#[derive(Default)]
pub struct MockSourceFetcher {
    pub documents: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockSourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: &str, content: &str) -> Self {
        self.documents.insert(url.to_string(), content.to_string());
        self
    }
}

impl SourceDocumentFetcher for MockSourceFetcher {
    fn fetch(&self, url: &str) -> Result<Option<String>> {
        Ok(self.documents.get(url).cloned())
    }
}
