use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a005_cliente::Cliente;
use contracts::domain::a006_transportista::Transportista;
use contracts::domain::a007_vehiculo::Vehiculo;
use contracts::domain::a008_almacen::Almacen;
use contracts::enums::TipoTransporte;
use contracts::shared::ubigeo::UbigeoOption;
use contracts::usecases::u501_registro_guia::{RegistroGuiaRequest, RegistroGuiaResponse};

pub async fn fetch_almacenes() -> Result<Vec<Almacen>, String> {
    get_json("/api/almacen").await
}

pub async fn fetch_departamentos() -> Result<Vec<UbigeoOption>, String> {
    get_json("/api/ubigeo/departamentos").await
}

pub async fn fetch_provincias(departamento: &str) -> Result<Vec<UbigeoOption>, String> {
    get_json(&format!("/api/ubigeo/provincias/{}", departamento)).await
}

pub async fn fetch_distritos(provincia: &str) -> Result<Vec<UbigeoOption>, String> {
    get_json(&format!("/api/ubigeo/distritos/{}", provincia)).await
}

pub async fn fetch_transportistas(modalidad: TipoTransporte) -> Result<Vec<Transportista>, String> {
    get_json(&format!(
        "/api/transportista/por_modalidad/{}",
        modalidad.code()
    ))
    .await
}

pub async fn fetch_vehiculos(transportista_id: &str) -> Result<Vec<Vehiculo>, String> {
    get_json(&format!("/api/vehiculo/por_transportista/{}", transportista_id)).await
}

pub async fn search_clientes(texto: &str) -> Result<Vec<Cliente>, String> {
    get_json(&format!(
        "/api/cliente/search?q={}",
        urlencoding::encode(texto)
    ))
    .await
}

pub async fn registrar(request: &RegistroGuiaRequest) -> Result<RegistroGuiaResponse, String> {
    post_json("/api/u501/registro", request).await
}
