mod adapters;
mod application;
mod cli;
mod config;
mod crawl;
mod ports;
mod shared;

use adapters::outbound::console::ConsoleProgressReporter;
use adapters::outbound::filesystem::{DirectoryLedgerProvider, FileSystemWriter, LedgerLayout};
use adapters::outbound::network::{
    FixedDelayRateLimiter, GitHubCodeSearchClient, HttpSourceFetcher,
};
use adapters::outbound::tools::{SyftTool, TrivyTool};
use adapters::outbound::vcs::GitCloner;
use application::dto::{CrawlConfig, CrawlMode, EcosystemReport};
use application::use_cases::{
    CloneAndScanStrategy, CollectMetadataStrategy, CrawlPipeline, SbomGenerationService,
};
use cli::Args;
use ports::outbound::{ArtifactWriter, ProgressReporter};
use shared::error::{CrawlError, ExitCode};
use shared::Result;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }

    process::exit(ExitCode::Success.as_i32());
}

/// Configuration mistakes are argument errors; everything else is an application error
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<CrawlError>() {
        Some(
            CrawlError::MissingCredential
            | CrawlError::UnknownEcosystem { .. }
            | CrawlError::Validation { .. },
        ) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

fn run(args: Args) -> Result<()> {
    let file = match args.config.as_deref() {
        Some(path) => {
            let file = config::load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Some(file)
        }
        None => {
            let file = config::discover_config(&std::env::current_dir()?)?;
            if file.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            file
        }
    };
    let config = args.into_crawl_config(file)?;
    config.validate()?;

    // Create adapters (Dependency Injection)
    let progress_reporter = ConsoleProgressReporter::new();
    let fetcher = HttpSourceFetcher::new()?;
    let writer = FileSystemWriter::new();
    writer.ensure_directory(&config.output_root)?;

    let reports = match config.mode {
        CrawlMode::Clone => run_clone_mode(&config, fetcher, writer, &progress_reporter),
        CrawlMode::Metadata => {
            writer.ensure_directory(&config.metadata_root)?;
            run_metadata_mode(&config, fetcher, writer, &progress_reporter)?
        }
    };

    report_summary(&progress_reporter, &reports);
    Ok(())
}

fn run_clone_mode(
    config: &CrawlConfig,
    fetcher: HttpSourceFetcher,
    writer: FileSystemWriter,
    progress_reporter: &ConsoleProgressReporter,
) -> Vec<EcosystemReport> {
    let generator = SbomGenerationService::new(SyftTool::new(config.syft_program.clone()), writer);
    let mut strategy = CloneAndScanStrategy::new(
        GitCloner::new(config.clone_depth),
        generator,
        config.output_root.clone(),
    );
    if config.skip_existing {
        strategy = strategy.with_ledger(Box::new(DirectoryLedgerProvider::new(
            config.output_root.clone(),
            LedgerLayout::Flat,
        )));
    }

    CrawlPipeline::new(fetcher, strategy, progress_reporter).run(&config.ecosystems)
}

fn run_metadata_mode(
    config: &CrawlConfig,
    fetcher: HttpSourceFetcher,
    writer: FileSystemWriter,
    progress_reporter: &ConsoleProgressReporter,
) -> Result<Vec<EcosystemReport>> {
    let credential = config
        .credential()
        .ok_or(CrawlError::MissingCredential)?
        .to_string();
    let mut search = GitHubCodeSearchClient::new(credential)?;
    if let Some(api_url) = &config.api_url {
        search = search.with_api_url(api_url.as_str());
    }

    let generator =
        SbomGenerationService::new(TrivyTool::new(config.trivy_program.clone()), writer);
    let strategy = CollectMetadataStrategy::new(
        search,
        FixedDelayRateLimiter::new(config.sleep_short, config.sleep_long),
        generator,
        Box::new(DirectoryLedgerProvider::new(
            config.metadata_root.clone(),
            LedgerLayout::PerEcosystem,
        )),
        progress_reporter,
    )
    .with_roots(config.metadata_root.clone(), config.output_root.clone());

    Ok(CrawlPipeline::new(fetcher, strategy, progress_reporter).run(&config.ecosystems))
}

fn report_summary(progress_reporter: &ConsoleProgressReporter, reports: &[EcosystemReport]) {
    let generated: usize = reports.iter().map(|r| r.generated).sum();
    let failed: usize = reports.iter().map(|r| r.failed).sum();
    let skipped: usize = reports.iter().map(|r| r.skipped).sum();
    progress_reporter.report(&format!(
        "🏁 Done: {} repository(ies) with SBOMs, {} skipped, {} failed across {} ecosystem(s)",
        generated,
        skipped,
        failed,
        reports.len()
    ));
}
