use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target shared by every domain event, so `RUST_LOG=eatright=debug` selects them.
const TARGET: &str = "eatright";

/// Forwards domain log calls to `tracing`, tagging each event with the
/// use-case group that emitted it.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    scope: &'static str,
}

impl TracingLogger {
    pub const fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, scope = self.scope, "{}", message);
    }
}
