//! Handler for the `GET /user` greeting.

use axum::Json;

use crate::api::dto::greeting::GreetingResponse;

pub async fn greeting_handler() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        msg: "Hello, this is your GET /user response ".to_string(),
    })
}
