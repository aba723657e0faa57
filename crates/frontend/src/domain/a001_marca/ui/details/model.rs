use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a001_marca::{Marca, MarcaDto};

pub async fn fetch_by_id(id: String) -> Result<Marca, String> {
    get_json(&format!("/api/marca/{}", id)).await
}

pub async fn save_form(dto: MarcaDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/marca", &dto).await?;
    Ok(data.id)
}
