use async_trait::async_trait;
use thiserror::Error;

use crate::board::{BoardClient, BoardError};

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Rewrites one submitted field into the board API's parameter
///
/// Implementations receive the submitted value and the destination list id
/// and return the `(parameter name, parameter value)` pair that replaces the
/// field. They may call the board API through `client`.
#[async_trait]
pub trait FieldTransform: Send + Sync {
    async fn apply(
        &self,
        value: &str,
        list_id: &str,
        client: &BoardClient,
    ) -> Result<(String, String), TransformError>;
}
