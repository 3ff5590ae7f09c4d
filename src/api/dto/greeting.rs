//! DTO for the greeting endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub msg: String,
}
