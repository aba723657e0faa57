use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::domain::a011_guia_remision;
use crate::shared::config::get_config;

/// GET /api/guia_remision
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a011_guia_remision::GuiaRemision>>, StatusCode> {
    match a011_guia_remision::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list guias: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/guia_remision/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a011_guia_remision::GuiaRemision>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a011_guia_remision::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/guia_remision/:id/enviar_sunat
///
/// Reenvía una guía Pendiente o Rechazada. El rechazo de SUNAT no es un
/// error HTTP: la guía actualizada viaja en la respuesta con su estado.
pub async fn enviar_sunat(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a011_guia_remision::GuiaRemision>, (StatusCode, Json<serde_json::Value>)>
{
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "ID inválido"})),
            ))
        }
    };
    match a011_guia_remision::service::enviar_sunat(uuid, &get_config().apisperu).await {
        Ok(guia) => Ok(Json(guia)),
        Err(e) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": e.to_string()})),
        )),
    }
}

/// DELETE /api/guia_remision/:id
pub async fn delete(
    Path(id): Path<String>,
) -> Result<(), (StatusCode, Json<serde_json::Value>)> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "ID inválido"})),
            ))
        }
    };
    match a011_guia_remision::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "La guía no existe"})),
        )),
        Err(e) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": e.to_string()})),
        )),
    }
}
