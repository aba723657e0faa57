use super::repository;
use contracts::domain::a005_cliente::{Cliente, ClienteDto};
use uuid::Uuid;

pub async fn create(dto: ClienteDto) -> anyhow::Result<Uuid> {
    // Un mismo documento no puede registrarse dos veces
    if let Some(existente) = repository::find_by_documento(&dto.numero_documento).await? {
        anyhow::bail!(
            "El documento {} ya está registrado para «{}»",
            dto.numero_documento,
            existente.base.description
        );
    }

    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("CLI-{}", Uuid::new_v4()));
    let mut aggregate = Cliente::new_for_insert(
        code,
        dto.description.clone(),
        dto.tipo_persona,
        dto.tipo_documento,
        dto.numero_documento.clone(),
        dto.direccion.clone().unwrap_or_default(),
        dto.comment.clone(),
    );
    let dto_con_id = ClienteDto {
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

pub async fn update(dto: ClienteDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Cliente>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Cliente>> {
    repository::list_all().await
}

pub async fn search(texto: &str) -> anyhow::Result<Vec<Cliente>> {
    repository::search(texto, 20).await
}

pub async fn find_by_documento(numero: &str) -> anyhow::Result<Option<Cliente>> {
    repository::find_by_documento(numero).await
}
