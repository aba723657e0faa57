use super::repository;
use contracts::domain::a002_categoria::{Categoria, CategoriaDto};
use uuid::Uuid;

pub async fn create(dto: CategoriaDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("CAT-{}", Uuid::new_v4()));
    let mut aggregate = Categoria::new_for_insert(code, dto.description, dto.comment);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: CategoriaDto) -> anyhow::Result<()> {
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
    // Las subcategorías colgadas de la categoría siguen existiendo; la UI
    // las muestra como huérfanas hasta reasignarlas
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Categoria>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Categoria>> {
    repository::list_all().await
}
