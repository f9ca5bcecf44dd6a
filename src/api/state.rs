use std::sync::Arc;

use crate::board::BoardClient;
use crate::config::Config;
use crate::normalize::TransformRegistry;
use crate::observability::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub board: Arc<BoardClient>,
    pub registry: Arc<TransformRegistry>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, board: BoardClient, registry: TransformRegistry) -> Self {
        Self {
            config: Arc::new(config),
            board: Arc::new(board),
            registry: Arc::new(registry),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
