use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a008_almacen::Almacen;
use contracts::domain::a009_nota_ingreso::{NotaIngreso, NotaIngresoDto};

pub async fn fetch_by_id(id: String) -> Result<NotaIngreso, String> {
    get_json(&format!("/api/nota_ingreso/{}", id)).await
}

pub async fn fetch_almacenes() -> Result<Vec<Almacen>, String> {
    get_json("/api/almacen").await
}

pub async fn save_form(dto: NotaIngresoDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/nota_ingreso", &dto).await?;
    Ok(data.id)
}
