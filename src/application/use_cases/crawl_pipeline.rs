use crate::application::dto::{CrawlMode, EcosystemReport, RepositoryOutcome};
use crate::crawl::domain::{Candidate, Ecosystem};
use crate::crawl::services::RepositoryUrlExtractor;
use crate::ports::outbound::{DedupLedger, ProgressReporter, SourceDocumentFetcher};
use crate::shared::Result;

/// How a run turns one repository candidate into SBOM artifacts
///
/// Implemented once per crawl mode. The pipeline owns iteration, dedup and
/// failure isolation; a strategy only handles a single repository.
pub trait RepositoryStrategy {
    fn mode(&self) -> CrawlMode;

    /// Ledger of repositories already done for `ecosystem`
    ///
    /// `None` means every candidate is processed.
    fn ledger(&self, ecosystem: &Ecosystem) -> Result<Option<Box<dyn DedupLedger>>>;

    /// Order in which candidates are processed
    fn order(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates
    }

    /// Processes one repository
    ///
    /// # Errors
    /// Any error is confined to this repository by the pipeline
    fn process(&self, ecosystem: &Ecosystem, candidate: &Candidate) -> Result<RepositoryOutcome>;
}

/// CrawlPipeline - drives a run over all configured ecosystems
///
/// # Type Parameters
/// * `F` - SourceDocumentFetcher implementation
/// * `S` - RepositoryStrategy implementation
/// * `PR` - ProgressReporter implementation
pub struct CrawlPipeline<F, S, PR> {
    fetcher: F,
    strategy: S,
    progress_reporter: PR,
}

impl<F, S, PR> CrawlPipeline<F, S, PR>
where
    F: SourceDocumentFetcher,
    S: RepositoryStrategy,
    PR: ProgressReporter,
{
    pub fn new(fetcher: F, strategy: S, progress_reporter: PR) -> Self {
        Self {
            fetcher,
            strategy,
            progress_reporter,
        }
    }

    /// Runs every ecosystem in order
    ///
    /// Never fails: unavailable documents, unreadable ledgers and repository
    /// failures are logged and counted in the returned reports.
    pub fn run(&self, ecosystems: &[Ecosystem]) -> Vec<EcosystemReport> {
        self.progress_reporter.report(&format!(
            "🚀 Starting {} crawl over {} ecosystem(s)",
            self.strategy.mode(),
            ecosystems.len()
        ));

        ecosystems
            .iter()
            .map(|ecosystem| self.run_ecosystem(ecosystem))
            .collect()
    }

    fn run_ecosystem(&self, ecosystem: &Ecosystem) -> EcosystemReport {
        let mut report = EcosystemReport::new(ecosystem.name());

        let Some(document) = self.fetch_source(ecosystem) else {
            report.source_unavailable = true;
            self.progress_reporter.report_completion(&report.to_string());
            return report;
        };

        let candidates = self
            .strategy
            .order(RepositoryUrlExtractor::extract_candidates(&document));
        report.candidates = candidates.len();
        self.progress_reporter.report(&format!(
            "🔗 [{}] Found {} repository candidate(s)",
            ecosystem.name(),
            candidates.len()
        ));

        let mut ledger = match self.strategy.ledger(ecosystem) {
            Ok(ledger) => ledger,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "❌ [{}] Could not read existing output, skipping ecosystem: {:#}",
                    ecosystem.name(),
                    e
                ));
                self.progress_reporter.report_completion(&report.to_string());
                return report;
            }
        };
        if let Some(ledger) = ledger.as_deref() {
            self.progress_reporter.report(&format!(
                "📂 [{}] {} repository(ies) already done",
                ecosystem.name(),
                ledger.len()
            ));
        }

        let total = candidates.len();
        for (idx, candidate) in candidates.iter().enumerate() {
            let label = candidate.identity.to_string();
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&label));

            if ledger
                .as_deref()
                .is_some_and(|l| l.is_done(&candidate.identity))
            {
                report.record(&RepositoryOutcome::Skipped);
                continue;
            }

            match self.strategy.process(ecosystem, candidate) {
                Ok(outcome) => {
                    self.report_outcome(ecosystem, &label, &outcome);
                    report.record(&outcome);
                    if let Some(ledger) = ledger.as_deref_mut() {
                        ledger.record(candidate.identity.clone());
                    }
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ [{}] {} failed: {:#}",
                        ecosystem.name(),
                        label,
                        e
                    ));
                    report.record_failure();
                }
            }
        }

        self.progress_reporter.report_completion(&report.to_string());
        report
    }

    fn fetch_source(&self, ecosystem: &Ecosystem) -> Option<String> {
        self.progress_reporter.report(&format!(
            "🌐 [{}] Fetching {}",
            ecosystem.name(),
            ecosystem.source_url()
        ));

        match self.fetcher.fetch(ecosystem.source_url()) {
            Ok(Some(document)) => Some(document),
            Ok(None) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  [{}] Source document unavailable: {}",
                    ecosystem.name(),
                    ecosystem.source_url()
                ));
                None
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  [{}] Failed to fetch source document: {:#}",
                    ecosystem.name(),
                    e
                ));
                None
            }
        }
    }

    fn report_outcome(&self, ecosystem: &Ecosystem, label: &str, outcome: &RepositoryOutcome) {
        let message = match outcome {
            RepositoryOutcome::Generated { artifacts } => {
                format!("✅ [{}] {}: {} SBOM file(s) written", ecosystem.name(), label, artifacts)
            }
            RepositoryOutcome::NoLibraries => format!(
                "   [{}] {}: no library components, nothing written",
                ecosystem.name(),
                label
            ),
            RepositoryOutcome::NoManifest => {
                format!("   [{}] {}: no manifest found", ecosystem.name(), label)
            }
            RepositoryOutcome::Skipped => return,
        };
        self.progress_reporter.report(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::domain::RepositoryIdentity;
    use std::cell::RefCell;
    use std::collections::HashSet;

    struct MockFetcher {
        document: Option<String>,
    }

    impl SourceDocumentFetcher for MockFetcher {
        fn fetch(&self, _url: &str) -> Result<Option<String>> {
            Ok(self.document.clone())
        }
    }

    struct FailingFetcher;

    impl SourceDocumentFetcher for FailingFetcher {
        fn fetch(&self, _url: &str) -> Result<Option<String>> {
            anyhow::bail!("connection refused")
        }
    }

    #[derive(Default)]
    struct SetLedger(HashSet<RepositoryIdentity>);

    impl DedupLedger for SetLedger {
        fn is_done(&self, identity: &RepositoryIdentity) -> bool {
            self.0.contains(identity)
        }

        fn record(&mut self, identity: RepositoryIdentity) {
            self.0.insert(identity);
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    #[derive(Default)]
    struct MockStrategy {
        done: Vec<RepositoryIdentity>,
        failing: Vec<&'static str>,
        use_ledger: bool,
        processed: RefCell<Vec<String>>,
    }

    impl RepositoryStrategy for MockStrategy {
        fn mode(&self) -> CrawlMode {
            CrawlMode::Clone
        }

        fn ledger(&self, _ecosystem: &Ecosystem) -> Result<Option<Box<dyn DedupLedger>>> {
            if !self.use_ledger {
                return Ok(None);
            }
            Ok(Some(Box::new(SetLedger(self.done.iter().cloned().collect()))))
        }

        fn process(
            &self,
            _ecosystem: &Ecosystem,
            candidate: &Candidate,
        ) -> Result<RepositoryOutcome> {
            let name = candidate.identity.to_string();
            self.processed.borrow_mut().push(name.clone());
            if self.failing.contains(&name.as_str()) {
                anyhow::bail!("clone of {} failed", name);
            }
            Ok(RepositoryOutcome::Generated { artifacts: 3 })
        }
    }

    #[derive(Default)]
    struct CapturingReporter {
        errors: RefCell<Vec<String>>,
        completions: RefCell<Vec<String>>,
    }

    impl ProgressReporter for CapturingReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, message: &str) {
            self.completions.borrow_mut().push(message.to_string());
        }
    }

    const DOCUMENT: &str = "\
* [Bar](https://github.com/foo/bar) - see https://github.com/foo/bar/issues
* [Baz](https://github.com/foo/baz)
* [Qux](https://github.com/acme/qux.git)
";

    fn go() -> Ecosystem {
        Ecosystem::default_catalog()
            .into_iter()
            .find(|e| e.name() == "go")
            .unwrap()
    }

    fn fetcher() -> MockFetcher {
        MockFetcher {
            document: Some(DOCUMENT.to_string()),
        }
    }

    #[test]
    fn test_run_processes_each_identity_once() {
        let reporter = CapturingReporter::default();
        let pipeline = CrawlPipeline::new(fetcher(), MockStrategy::default(), &reporter);

        let reports = pipeline.run(&[go()]);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].candidates, 3);
        assert_eq!(reports[0].generated, 3);
        assert_eq!(
            *pipeline.strategy.processed.borrow(),
            vec!["acme/qux", "foo/bar", "foo/baz"]
        );
        assert_eq!(reporter.completions.borrow().len(), 1);
    }

    #[test]
    fn test_done_identities_are_skipped() {
        let strategy = MockStrategy {
            use_ledger: true,
            done: vec![RepositoryIdentity::new("foo", "bar").unwrap()],
            ..MockStrategy::default()
        };
        let pipeline = CrawlPipeline::new(fetcher(), strategy, CapturingReporter::default());

        let reports = pipeline.run(&[go()]);

        assert_eq!(reports[0].skipped, 1);
        assert_eq!(reports[0].generated, 2);
        assert!(!pipeline
            .strategy
            .processed
            .borrow()
            .contains(&"foo/bar".to_string()));
    }

    #[test]
    fn test_failure_is_isolated() {
        let strategy = MockStrategy {
            failing: vec!["foo/bar"],
            ..MockStrategy::default()
        };
        let reporter = CapturingReporter::default();
        let pipeline = CrawlPipeline::new(fetcher(), strategy, &reporter);

        let reports = pipeline.run(&[go(), go()]);

        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.failed, 1);
            assert_eq!(report.generated, 2);
        }
        let errors = reporter.errors.borrow();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("foo/bar"));
        assert!(errors[0].contains("clone of foo/bar failed"));
    }

    #[test]
    fn test_unavailable_source_yields_zero_candidates() {
        let reporter = CapturingReporter::default();
        let pipeline = CrawlPipeline::new(
            MockFetcher { document: None },
            MockStrategy::default(),
            &reporter,
        );

        let reports = pipeline.run(&[go()]);

        assert!(reports[0].source_unavailable);
        assert_eq!(reports[0].candidates, 0);
        assert!(pipeline.strategy.processed.borrow().is_empty());
        assert_eq!(reporter.errors.borrow().len(), 1);
    }

    #[test]
    fn test_transport_error_yields_zero_candidates() {
        let reporter = CapturingReporter::default();
        let pipeline = CrawlPipeline::new(FailingFetcher, MockStrategy::default(), &reporter);

        let reports = pipeline.run(&[go()]);

        assert!(reports[0].source_unavailable);
        assert!(reporter.errors.borrow()[0].contains("connection refused"));
    }
}
