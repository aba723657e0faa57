use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a002_categoria::{Categoria, CategoriaDto};

pub async fn fetch_by_id(id: String) -> Result<Categoria, String> {
    get_json(&format!("/api/categoria/{}", id)).await
}

pub async fn save_form(dto: CategoriaDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/categoria", &dto).await?;
    Ok(data.id)
}
