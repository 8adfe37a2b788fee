/// ProgressReporter port for user feedback during a catalog build
///
/// Messages go to a side channel (stderr) so rendered catalogs are never
/// mixed with progress output.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress of a counted step
    ///
    /// # Arguments
    /// * `current` - Items done so far
    /// * `total` - Items expected
    /// * `message` - Optional label for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
