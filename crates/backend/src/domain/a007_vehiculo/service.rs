use super::repository;
use contracts::domain::a007_vehiculo::{Vehiculo, VehiculoDto};
use uuid::Uuid;

pub async fn create(dto: VehiculoDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("VEH-{}", Uuid::new_v4()));
    let mut aggregate = Vehiculo::new_for_insert(
        code,
        dto.placa.clone(),
        dto.transportista_ref.clone().unwrap_or_default(),
    );
    let dto_con_id = VehiculoDto {
        id: Some(aggregate.to_string_id()),
        code: Some(aggregate.base.code.clone()),
        ..dto
    };
    aggregate.update(&dto_con_id);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: VehiculoDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Vehiculo>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Vehiculo>> {
    repository::list_all().await
}

pub async fn list_by_transportista(transportista_id: Uuid) -> anyhow::Result<Vec<Vehiculo>> {
    repository::find_by_transportista(transportista_id).await
}
