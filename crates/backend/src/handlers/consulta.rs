use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::enums::TipoDocumento;
use contracts::shared::consulta_documento::IdentidadConsultada;
use serde_json::json;

use crate::shared::apisperu::document_lookup::DocumentLookupClient;
use crate::shared::apisperu::ApisPeruError;
use crate::shared::config::get_config;

fn map_error(e: ApisPeruError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match &e {
        ApisPeruError::NoEncontrado => StatusCode::NOT_FOUND,
        ApisPeruError::SinToken => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({"error": e.to_string()})))
}

/// GET /api/consulta/dni/:numero
pub async fn dni(
    Path(numero): Path<String>,
) -> Result<Json<IdentidadConsultada>, (StatusCode, Json<serde_json::Value>)> {
    if let Err(e) = TipoDocumento::Dni.validar_numero(&numero) {
        return Err((StatusCode::BAD_REQUEST, Json(json!({"error": e}))));
    }

    let client = DocumentLookupClient::new(&get_config().apisperu);
    match client.consultar_dni(&numero).await {
        Ok(identidad) => Ok(Json(identidad)),
        Err(e) => Err(map_error(e)),
    }
}

/// GET /api/consulta/ruc/:numero
pub async fn ruc(
    Path(numero): Path<String>,
) -> Result<Json<IdentidadConsultada>, (StatusCode, Json<serde_json::Value>)> {
    if let Err(e) = TipoDocumento::Ruc.validar_numero(&numero) {
        return Err((StatusCode::BAD_REQUEST, Json(json!({"error": e}))));
    }

    let client = DocumentLookupClient::new(&get_config().apisperu);
    match client.consultar_ruc(&numero).await {
        Ok(identidad) => Ok(Json(identidad)),
        Err(e) => Err(map_error(e)),
    }
}
