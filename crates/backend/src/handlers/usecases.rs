use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::u501_registro_guia::{RegistroGuiaRequest, RegistroGuiaResponse};
use serde_json::json;

use crate::shared::config::get_config;
use crate::usecases::u501_registro_guia::executor;

/// POST /api/u501/registro
pub async fn u501_registro(
    Json(request): Json<RegistroGuiaRequest>,
) -> Result<Json<RegistroGuiaResponse>, (StatusCode, Json<serde_json::Value>)> {
    match executor::execute(request, &get_config().apisperu).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            let status = match e.code.as_str() {
                "VALIDATION_ERROR" => StatusCode::UNPROCESSABLE_ENTITY,
                "NOT_FOUND" => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((status, Json(json!({"error": e.message, "code": e.code}))))
        }
    }
}
