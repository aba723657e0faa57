use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a005_cliente::{Cliente, ClienteDto};
use contracts::shared::consulta_documento::IdentidadConsultada;

pub async fn fetch_by_id(id: String) -> Result<Cliente, String> {
    get_json(&format!("/api/cliente/{}", id)).await
}

pub async fn save_form(dto: ClienteDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/cliente", &dto).await?;
    Ok(data.id)
}

/// Consulta de identidad por DNI (8 dígitos)
pub async fn consultar_dni(numero: &str) -> Result<IdentidadConsultada, String> {
    get_json(&format!("/api/consulta/dni/{}", numero)).await
}

/// Consulta de identidad por RUC (11 dígitos)
pub async fn consultar_ruc(numero: &str) -> Result<IdentidadConsultada, String> {
    get_json(&format!("/api/consulta/ruc/{}", numero)).await
}
