use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a008_almacen::{Almacen, AlmacenDto};

pub async fn fetch_by_id(id: String) -> Result<Almacen, String> {
    get_json(&format!("/api/almacen/{}", id)).await
}

pub async fn save_form(dto: AlmacenDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/almacen", &dto).await?;
    Ok(data.id)
}
