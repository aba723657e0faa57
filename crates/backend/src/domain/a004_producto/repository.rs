use chrono::Utc;
use contracts::domain::a004_producto::{Producto, ProductoId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::UnidadMedida;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_producto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub codigo_barras: String,
    pub marca_ref: Option<String>,
    pub categoria_ref: Option<String>,
    pub subcategoria_ref: Option<String>,
    pub unidad: String,
    pub precio_venta: f64,
    pub stock: f64,
    pub stock_minimo: f64,
    pub variante: String,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Producto {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Producto {
            base: BaseAggregate::with_metadata(
                ProductoId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            codigo_barras: m.codigo_barras,
            marca_ref: m.marca_ref,
            categoria_ref: m.categoria_ref,
            subcategoria_ref: m.subcategoria_ref,
            unidad: UnidadMedida::from_code(&m.unidad).unwrap_or_default(),
            precio_venta: m.precio_venta,
            stock: m.stock,
            stock_minimo: m.stock_minimo,
            variante: m.variante,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Producto, for_insert: bool) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        codigo_barras: Set(aggregate.codigo_barras.clone()),
        marca_ref: Set(aggregate.marca_ref.clone()),
        categoria_ref: Set(aggregate.categoria_ref.clone()),
        subcategoria_ref: Set(aggregate.subcategoria_ref.clone()),
        unidad: Set(aggregate.unidad.code().to_string()),
        precio_venta: Set(aggregate.precio_venta),
        stock: Set(aggregate.stock),
        stock_minimo: Set(aggregate.stock_minimo),
        variante: Set(aggregate.variante.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: if for_insert {
            Set(Some(aggregate.base.metadata.created_at))
        } else {
            sea_orm::ActiveValue::NotSet
        },
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Producto>> {
    let mut items: Vec<Producto> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| {
        a.base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase())
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Producto>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Producto) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate, true).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Producto) -> anyhow::Result<()> {
    to_active(aggregate, false).update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// Buscar productos por código, código de barras o descripción
///
/// Se cargan los no eliminados y se filtra en la aplicación para hacer el
/// contains sin distinguir mayúsculas ni acentos de la BD.
pub async fn search(texto: &str, limit: usize) -> anyhow::Result<Vec<Producto>> {
    let needle = texto.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let all_items: Vec<Model> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;

    let items: Vec<Producto> = all_items
        .into_iter()
        .filter(|m| {
            m.code.to_lowercase().contains(&needle)
                || m.codigo_barras.to_lowercase().contains(&needle)
                || m.description.to_lowercase().contains(&needle)
                || m.variante.to_lowercase().contains(&needle)
        })
        .take(limit)
        .map(Into::into)
        .collect();

    Ok(items)
}

/// Ajustar la existencia de un producto en `delta` (positivo o negativo)
pub async fn adjust_stock(id: Uuid, delta: f64) -> anyhow::Result<()> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Stock, Expr::col(Column::Stock).add(delta))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    if result.rows_affected == 0 {
        anyhow::bail!("Producto {} no encontrado al ajustar stock", id);
    }
    Ok(())
}
