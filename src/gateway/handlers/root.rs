use axum::Json;

use super::super::types::RootResponse;

pub const ROOT_MESSAGE: &str = "Divine Flavours API is running";

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    ),
    tag = "System"
)]
pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}
