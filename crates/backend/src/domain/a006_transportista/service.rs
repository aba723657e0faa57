use super::repository;
use contracts::domain::a006_transportista::{Transportista, TransportistaDto};
use contracts::enums::TipoTransporte;
use uuid::Uuid;

pub async fn create(dto: TransportistaDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("TRA-{}", Uuid::new_v4()));
    let mut aggregate = Transportista::new_for_insert(
        code,
        dto.description.clone(),
        dto.tipo_transporte,
        dto.comment.clone(),
    );
    let dto_con_id = TransportistaDto {
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

pub async fn update(dto: TransportistaDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Transportista>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Transportista>> {
    repository::list_all().await
}

pub async fn list_by_modalidad(modalidad: TipoTransporte) -> anyhow::Result<Vec<Transportista>> {
    repository::find_by_modalidad(modalidad).await
}
