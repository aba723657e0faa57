use super::repository;
use crate::domain::a004_producto::service::{self as producto_service, MovimientoStock};
use crate::shared::format::format_correlativo;
use contracts::domain::a009_nota_ingreso::{NotaIngreso, NotaIngresoDto};
use uuid::Uuid;

pub async fn create(dto: NotaIngresoDto) -> anyhow::Result<Uuid> {
    let correlativo = repository::next_correlativo().await?;
    let numero = format_correlativo("NI", correlativo);

    let mut aggregate = NotaIngreso::new_for_insert(
        numero,
        dto.fecha.clone(),
        dto.almacen_ref.clone().unwrap_or_default(),
        dto.proveedor.clone().unwrap_or_default(),
        dto.lines.clone(),
    );
    aggregate.observacion = dto.observacion.clone().unwrap_or_default();
    aggregate.base.comment = dto.comment.clone();

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: NotaIngresoDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    if aggregate.base.metadata.is_posted {
        anyhow::bail!("Una nota asentada no puede modificarse; anule el asiento primero");
    }

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    if let Some(aggregate) = repository::get_by_id(id).await? {
        if aggregate.base.metadata.is_posted {
            anyhow::bail!("Una nota asentada no puede eliminarse; anule el asiento primero");
        }
    }
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<NotaIngreso>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<NotaIngreso>> {
    repository::list_all().await
}

/// Asentar la nota: incrementa el stock de cada línea
pub async fn post(id: Uuid) -> anyhow::Result<()> {
    let aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    if aggregate.base.metadata.is_posted {
        anyhow::bail!("La nota {} ya está asentada", aggregate.numero);
    }
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let movimientos = movimientos_de(&aggregate, 1.0)?;
    producto_service::aplicar_movimientos(&movimientos).await?;
    repository::set_posted(id, true).await
}

/// Anular el asiento: revierte el incremento de stock
///
/// La reversión es una salida, así que puede fallar si el stock ya se
/// consumió por otros documentos.
pub async fn unpost(id: Uuid) -> anyhow::Result<()> {
    let aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    if !aggregate.base.metadata.is_posted {
        anyhow::bail!("La nota {} no está asentada", aggregate.numero);
    }

    let movimientos = movimientos_de(&aggregate, -1.0)?;
    producto_service::aplicar_movimientos(&movimientos).await?;
    repository::set_posted(id, false).await
}

fn movimientos_de(aggregate: &NotaIngreso, signo: f64) -> anyhow::Result<Vec<MovimientoStock>> {
    aggregate
        .parse_lines()
        .into_iter()
        .map(|line| {
            let producto_ref = Uuid::parse_str(&line.producto_ref)
                .map_err(|_| anyhow::anyhow!("Línea con producto inválido: {}", line.descripcion))?;
            Ok(MovimientoStock {
                producto_ref,
                delta: signo * line.cantidad,
            })
        })
        .collect()
}
