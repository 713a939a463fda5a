/// ProgressReporter port for run logging
///
/// All console output of a crawl goes through this port, so per-repository
/// failures can be observed in tests and rendered consistently on the console.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through the current ecosystem
    ///
    /// # Arguments
    /// * `current` - Number of candidates handled so far
    /// * `total` - Number of candidates in the ecosystem
    /// * `message` - Optional label, usually the repository being processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a failure that was isolated and did not stop the run
    fn report_error(&self, message: &str);

    /// Reports the end of an ecosystem
    fn report_completion(&self, message: &str);
}

/// A shared reporter can be handed to every component of a run
impl<P: ProgressReporter + ?Sized> ProgressReporter for &P {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message);
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message);
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message);
    }
}
