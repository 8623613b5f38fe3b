use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Oracle;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The role registry and template tables are compile-time statics and need no
/// slot here.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable explanation oracle. Default: `LlmClient`.
    pub oracle: Arc<dyn Oracle>,
    pub config: Config,
}
