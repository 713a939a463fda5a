use awesome_sbom::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock RepositoryMaterializer that fabricates a tiny working copy
///
/// URLs listed in `failing` are reported as clone failures.
#[derive(Default, Clone)]
pub struct MockMaterializer {
    pub failing: Vec<String>,
    pub destinations: Arc<Mutex<Vec<PathBuf>>>,
    pub urls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockMaterializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }

    pub fn destinations(&self) -> Vec<PathBuf> {
        self.destinations.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl RepositoryMaterializer for MockMaterializer {
    fn materialize(&self, url: &str, destination: &Path) -> Result<()> {
        self.urls.lock().unwrap().push(url.to_string());
        self.destinations
            .lock()
            .unwrap()
            .push(destination.to_path_buf());

        if self.failing.iter().any(|f| f == url) {
            anyhow::bail!("remote: Repository not found.");
        }

        fs::create_dir_all(destination)?;
        fs::write(destination.join("Cargo.lock"), "version = 3\n")?;
        Ok(())
    }
}
