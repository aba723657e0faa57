use super::repository;
use contracts::domain::a004_producto::{Producto, ProductoDto};
use uuid::Uuid;

pub async fn create(dto: ProductoDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("PRD-{}", Uuid::new_v4()));
    let mut aggregate =
        Producto::new_for_insert(code, dto.description.clone(), dto.unidad, dto.precio_venta, dto.comment.clone());
    // El resto de campos del DTO se aplican por la vía normal
    let dto_con_id = ProductoDto {
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

pub async fn update(dto: ProductoDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Producto>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Producto>> {
    repository::list_all().await
}

pub async fn search(texto: &str) -> anyhow::Result<Vec<Producto>> {
    repository::search(texto, 20).await
}

// ============================================================================
// Movimientos de stock
// ============================================================================

/// Movimiento de existencias: delta positivo ingresa, negativo retira
#[derive(Debug, Clone, PartialEq)]
pub struct MovimientoStock {
    pub producto_ref: Uuid,
    pub delta: f64,
}

/// Verifica que los retiros no dejen stock negativo.
///
/// Devuelve el primer producto sin existencia suficiente, nombrándolo en el
/// mensaje para que la UI lo muestre tal cual.
pub fn verificar_disponibilidad(
    productos: &[Producto],
    movimientos: &[MovimientoStock],
) -> Result<(), String> {
    for mov in movimientos {
        if mov.delta >= 0.0 {
            continue;
        }
        let producto = productos
            .iter()
            .find(|p| p.base.id.value() == mov.producto_ref)
            .ok_or_else(|| format!("Producto {} no existe", mov.producto_ref))?;

        let salida = -mov.delta;
        if salida > producto.stock {
            return Err(format!(
                "Stock insuficiente de «{}»: disponible {}, solicitado {}",
                producto.display_name(),
                producto.stock,
                salida
            ));
        }
    }
    Ok(())
}

/// Aplica un conjunto de movimientos de stock validando disponibilidad.
///
/// Los retiros se validan contra la existencia actual antes de tocar la BD;
/// si alguno no alcanza, no se aplica ninguno.
pub async fn aplicar_movimientos(movimientos: &[MovimientoStock]) -> anyhow::Result<()> {
    let mut productos = Vec::with_capacity(movimientos.len());
    for mov in movimientos {
        let producto = repository::get_by_id(mov.producto_ref)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Producto {} no existe", mov.producto_ref))?;
        productos.push(producto);
    }

    verificar_disponibilidad(&productos, movimientos).map_err(|e| anyhow::anyhow!("{}", e))?;

    for mov in movimientos {
        repository::adjust_stock(mov.producto_ref, mov.delta).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UnidadMedida;

    fn producto(nombre: &str, stock: f64) -> Producto {
        let mut p = Producto::new_for_insert(
            format!("PRD-{}", nombre),
            nombre.into(),
            UnidadMedida::Niu,
            1.0,
            None,
        );
        p.stock = stock;
        p
    }

    #[test]
    fn test_verificar_disponibilidad_ok() {
        let p = producto("Agua", 10.0);
        let movs = vec![MovimientoStock {
            producto_ref: p.base.id.value(),
            delta: -10.0,
        }];
        assert!(verificar_disponibilidad(&[p], &movs).is_ok());
    }

    #[test]
    fn test_verificar_disponibilidad_insuficiente() {
        let p = producto("Agua", 3.0);
        let movs = vec![MovimientoStock {
            producto_ref: p.base.id.value(),
            delta: -5.0,
        }];
        let err = verificar_disponibilidad(&[p], &movs).unwrap_err();
        assert!(err.contains("Agua"));
        assert!(err.contains("disponible 3"));
    }

    #[test]
    fn test_verificar_disponibilidad_ingreso_no_valida() {
        // los ingresos nunca fallan por stock
        let p = producto("Agua", 0.0);
        let movs = vec![MovimientoStock {
            producto_ref: p.base.id.value(),
            delta: 100.0,
        }];
        assert!(verificar_disponibilidad(&[p], &movs).is_ok());
    }

    #[test]
    fn test_verificar_disponibilidad_producto_desconocido() {
        let movs = vec![MovimientoStock {
            producto_ref: Uuid::new_v4(),
            delta: -1.0,
        }];
        assert!(verificar_disponibilidad(&[], &movs).is_err());
    }
}
