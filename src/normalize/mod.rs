//! Field normalization for the create-card call
//!
//! Submitted fields are named after the form's labels; the board API expects
//! its own parameter names. [`TransformRegistry`] maps a field name to a
//! [`FieldTransform`] that produces the replacement `(name, value)` pair.
//!
//! ## Built-in transforms
//!
//! - `description` → `desc` ([`RenameTransform`])
//! - `label` → `idLabels` ([`LabelTransform`]): looks the label up on the
//!   list's board by name, then by color, and creates it when nothing matches
//!
//! Any other field is passed through unchanged.

mod builtin;
mod registry;
mod traits;

pub use builtin::{LABEL_PARAM, LabelTransform, RenameTransform};
pub use registry::{LIST_PARAM, NormalizedParameters, TransformRegistry};
pub use traits::{FieldTransform, TransformError};
