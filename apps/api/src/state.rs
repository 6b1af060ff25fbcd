use std::sync::Arc;

use crate::config::Config;
use crate::scoring::AtsEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless after construction; shared by every request.
    pub engine: Arc<AtsEngine>,
}
