use super::repository;
use contracts::domain::a003_subcategoria::{Subcategoria, SubcategoriaDto};
use uuid::Uuid;

pub async fn create(dto: SubcategoriaDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("SUB-{}", Uuid::new_v4()));
    let mut aggregate = Subcategoria::new_for_insert(
        code,
        dto.description,
        dto.categoria_ref.unwrap_or_default(),
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: SubcategoriaDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Subcategoria>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Subcategoria>> {
    repository::list_all().await
}

pub async fn list_by_categoria(categoria_id: Uuid) -> anyhow::Result<Vec<Subcategoria>> {
    repository::find_by_categoria(categoria_id).await
}
