/// Sink for load-time warnings. Storage reports dropped records through
/// this seam instead of printing, so callers decide where warnings go.
pub trait Reporter {
    fn report(&self, message: &str);
}

pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&self, message: &str) {
        eprintln!("{message}");
    }
}

pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _message: &str) {}
}
