use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a002_categoria::Categoria;
use contracts::domain::a003_subcategoria::{Subcategoria, SubcategoriaDto};

pub async fn fetch_by_id(id: String) -> Result<Subcategoria, String> {
    get_json(&format!("/api/subcategoria/{}", id)).await
}

pub async fn fetch_categorias() -> Result<Vec<Categoria>, String> {
    get_json("/api/categoria").await
}

pub async fn save_form(dto: SubcategoriaDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/subcategoria", &dto).await?;
    Ok(data.id)
}
