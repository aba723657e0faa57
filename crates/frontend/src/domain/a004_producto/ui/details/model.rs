use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a001_marca::Marca;
use contracts::domain::a002_categoria::Categoria;
use contracts::domain::a003_subcategoria::Subcategoria;
use contracts::domain::a004_producto::{Producto, ProductoDto};

pub async fn fetch_by_id(id: String) -> Result<Producto, String> {
    get_json(&format!("/api/producto/{}", id)).await
}

pub async fn fetch_marcas() -> Result<Vec<Marca>, String> {
    get_json("/api/marca").await
}

pub async fn fetch_categorias() -> Result<Vec<Categoria>, String> {
    get_json("/api/categoria").await
}

pub async fn fetch_subcategorias(categoria_id: &str) -> Result<Vec<Subcategoria>, String> {
    get_json(&format!("/api/subcategoria/por_categoria/{}", categoria_id)).await
}

pub async fn save_form(dto: ProductoDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/producto", &dto).await?;
    Ok(data.id)
}
