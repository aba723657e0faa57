use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::ubigeo::UbigeoOption;

use crate::shared::data::ubigeo;

/// GET /api/ubigeo/departamentos
pub async fn departamentos() -> Result<Json<Vec<UbigeoOption>>, StatusCode> {
    match ubigeo::departamentos().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to load departamentos: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/ubigeo/provincias/:departamento
pub async fn provincias(
    Path(departamento): Path<String>,
) -> Result<Json<Vec<UbigeoOption>>, StatusCode> {
    if departamento.len() != 2 {
        return Err(StatusCode::BAD_REQUEST);
    }
    match ubigeo::provincias(&departamento).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/ubigeo/distritos/:provincia
pub async fn distritos(
    Path(provincia): Path<String>,
) -> Result<Json<Vec<UbigeoOption>>, StatusCode> {
    if provincia.len() != 4 {
        return Err(StatusCode::BAD_REQUEST);
    }
    match ubigeo::distritos(&provincia).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
