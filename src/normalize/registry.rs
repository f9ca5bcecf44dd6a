use std::collections::BTreeMap;
use std::sync::Arc;

use super::builtin::{LabelTransform, RenameTransform};
use super::traits::{FieldTransform, TransformError};
use crate::board::BoardClient;
use crate::submission::Submission;

pub const LIST_PARAM: &str = "idList";

/// Outbound form parameters for the create-card call, in order
pub type NormalizedParameters = Vec<(String, String)>;

/// Registry mapping submitted field names to transforms
#[derive(Clone)]
pub struct TransformRegistry {
    transforms: BTreeMap<String, Arc<dyn FieldTransform>>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            transforms: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, field: impl Into<String>, transform: Arc<dyn FieldTransform>) {
        self.transforms.insert(field.into(), transform);
    }

    pub fn get(&self, field: &str) -> Option<Arc<dyn FieldTransform>> {
        self.transforms.get(field).cloned()
    }

    pub fn has_transform(&self, field: &str) -> bool {
        self.transforms.contains_key(field)
    }

    /// Registry with the built-in `description` and `label` transforms
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("description", Arc::new(RenameTransform::new("desc")));
        registry.register("label", Arc::new(LabelTransform));
        registry
    }

    /// Builds the create-card parameters for `submission` on list `list_id`
    ///
    /// Transforms run one after another in submission order. Fields without
    /// a transform are passed through unchanged.
    pub async fn normalize(
        &self,
        submission: &Submission,
        list_id: &str,
        client: &BoardClient,
    ) -> Result<NormalizedParameters, TransformError> {
        let mut params: NormalizedParameters = submission
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        params.push((LIST_PARAM.to_string(), list_id.to_string()));

        for (field, value) in submission.iter() {
            let Some(transform) = self.get(field) else {
                continue;
            };

            let (key, value) = transform.apply(value, list_id, client).await?;
            params.retain(|(k, _)| k != field);
            params.push((key, value));
        }

        Ok(params)
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
