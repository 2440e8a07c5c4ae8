/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to a side channel (stderr for the CLI) so that the report
/// itself can be piped from stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
