use async_trait::async_trait;
use tracing::{debug, info};

use super::traits::{FieldTransform, TransformError};
use crate::board::BoardClient;

/// Renames the field, keeping its value
#[derive(Debug, Clone)]
pub struct RenameTransform {
    target: String,
}

impl RenameTransform {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[async_trait]
impl FieldTransform for RenameTransform {
    async fn apply(
        &self,
        value: &str,
        _list_id: &str,
        _client: &BoardClient,
    ) -> Result<(String, String), TransformError> {
        Ok((self.target.clone(), value.to_string()))
    }
}

/// Resolves a label by name (or color) on the list's board, creating it when absent
#[derive(Debug, Clone, Default)]
pub struct LabelTransform;

pub const LABEL_PARAM: &str = "idLabels";

#[async_trait]
impl FieldTransform for LabelTransform {
    async fn apply(
        &self,
        value: &str,
        list_id: &str,
        client: &BoardClient,
    ) -> Result<(String, String), TransformError> {
        let board_id = client.board_of_list(list_id).await?;
        let labels = client.board_labels(&board_id).await?;

        // first match in board order, name or color
        if let Some(label) = labels.iter().find(|label| label.matches(value)) {
            debug!(label_id = %label.id, %board_id, "Reusing existing label");
            return Ok((LABEL_PARAM.to_string(), label.id.clone()));
        }

        let label_id = client.create_label(&board_id, value).await?;
        info!(%label_id, %board_id, name = value, "Created label");

        Ok((LABEL_PARAM.to_string(), label_id))
    }
}
