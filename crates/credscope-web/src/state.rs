//! Shared application state for the web server.

use std::sync::Arc;

use credscope_common::{Result, ServerConfig, Theme};
use credscope_scoring::Scorer;

/// Shared state injected into every Axum handler. Immutable for the life
/// of the process: theme and scorer are built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub theme: Theme,
    pub scorer: Scorer,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let theme = Theme::load(config.theme_file.as_deref())?;
        Ok(Self {
            config,
            theme,
            scorer: Scorer::default(),
        })
    }
}

pub type SharedState = Arc<AppState>;
