//! Application state.

use bigo_core::Analyzer;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    /// Report failures with 502/503 instead of 200.
    pub strict_status: bool,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            strict_status: false,
        }
    }

    pub fn with_strict_status(mut self, strict_status: bool) -> Self {
        self.strict_status = strict_status;
        self
    }
}
