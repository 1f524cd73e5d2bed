use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case logs to `tracing` under the `shopping` target so they can be
/// filtered with `RUST_LOG=shopping=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shopping", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shopping", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shopping", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shopping", "{}", message);
    }
}
