// Application state shared across all modules

use std::sync::Arc;

use crate::rules::{RecordValidator, RuleRegistry};

/// Application state. The registry is fully populated before the server
/// starts and only read afterwards, so no lock is needed.
#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<RuleRegistry>,
}

impl AppState {
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn validator(&self) -> RecordValidator<'_> {
        RecordValidator::new(&self.registry)
    }
}
