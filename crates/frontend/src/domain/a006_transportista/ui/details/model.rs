use crate::shared::api_utils::{delete_request, get_json, post_json};
use contracts::domain::a006_transportista::{Transportista, TransportistaDto};
use contracts::domain::a007_vehiculo::{Vehiculo, VehiculoDto};

pub async fn fetch_by_id(id: String) -> Result<Transportista, String> {
    get_json(&format!("/api/transportista/{}", id)).await
}

pub async fn save_form(dto: TransportistaDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/transportista", &dto).await?;
    Ok(data.id)
}

pub async fn fetch_vehiculos(transportista_id: &str) -> Result<Vec<Vehiculo>, String> {
    get_json(&format!("/api/vehiculo/por_transportista/{}", transportista_id)).await
}

pub async fn save_vehiculo(dto: VehiculoDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/vehiculo", &dto).await?;
    Ok(data.id)
}

pub async fn delete_vehiculo(id: &str) -> Result<(), String> {
    delete_request(&format!("/api/vehiculo/{}", id)).await
}
