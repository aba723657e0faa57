use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a008_almacen::Almacen;
use contracts::domain::a010_nota_salida::{NotaSalida, NotaSalidaDto};

pub async fn fetch_by_id(id: String) -> Result<NotaSalida, String> {
    get_json(&format!("/api/nota_salida/{}", id)).await
}

pub async fn fetch_almacenes() -> Result<Vec<Almacen>, String> {
    get_json("/api/almacen").await
}

pub async fn save_form(dto: NotaSalidaDto) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        id: String,
    }
    let data: SaveResponse = post_json("/api/nota_salida", &dto).await?;
    Ok(data.id)
}
