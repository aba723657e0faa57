use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::enums::TipoTransporte;
use serde_json::json;

use crate::domain::a006_transportista;

/// GET /api/transportista
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a006_transportista::Transportista>>, StatusCode> {
    match a006_transportista::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list transportistas: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/transportista/por_modalidad/:codigo
pub async fn list_by_modalidad(
    Path(codigo): Path<String>,
) -> Result<Json<Vec<contracts::domain::a006_transportista::Transportista>>, StatusCode> {
    let modalidad = match TipoTransporte::from_code(&codigo) {
        Some(m) => m,
        None => return Err(StatusCode::BAD_REQUEST),
    };
    match a006_transportista::service::list_by_modalidad(modalidad).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/transportista/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a006_transportista::Transportista>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a006_transportista::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/transportista
pub async fn upsert(
    Json(dto): Json<contracts::domain::a006_transportista::TransportistaDto>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let result = if dto.id.is_some() {
        a006_transportista::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a006_transportista::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": e.to_string()})),
        )),
    }
}

/// DELETE /api/transportista/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a006_transportista::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
