/// Console adapters for run logging
mod progress_reporter;

pub use progress_reporter::ConsoleProgressReporter;
