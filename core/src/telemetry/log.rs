use log::{debug, info};

/// Thin wrapper over the `log` facade that tags messages with their source.
pub struct LogManager {
    scope: &'static str,
}

impl LogManager {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.scope, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("sinetable")
    }
}
