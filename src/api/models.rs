//! HTTP-facing models for the webhook endpoint.
//!
//! Successful card creation is answered with the board API's own JSON body.
//! Every failure produced by this service is answered with [`ErrorResponse`]:
//!
//! ```json
//! { "error": "The search param listId is not given" }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
