use tracing::{debug, error};

/// Logging capability handed to the webhook at construction time.
///
/// Implementations must not panic.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    fn error(&self, err: &anyhow::Error);
}

/// Forwards to the `tracing` subscriber installed by the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        debug!("{message}");
    }

    fn error(&self, err: &anyhow::Error) {
        // {:?} prints the whole context chain
        error!("{err:?}");
    }
}

/// Discards everything, useful in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str) {}

    fn error(&self, _err: &anyhow::Error) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Arc;

    #[test]
    fn loggers_are_object_safe() {
        let loggers: Vec<Arc<dyn Logger>> = vec![Arc::new(TracingLogger), Arc::new(NullLogger)];
        for logger in loggers {
            logger.debug("POST /corbadoWebhook");
            logger.error(&anyhow!("boom").context("callback failed"));
        }
    }
}
