use chrono::Utc;
use contracts::domain::a009_nota_ingreso::{NotaIngreso, NotaIngresoId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a009_nota_ingreso")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub numero: String,
    pub fecha: String,
    pub almacen_ref: String,
    pub proveedor: String,
    pub observacion: String,
    pub lines_json: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for NotaIngreso {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        NotaIngreso {
            base: BaseAggregate::with_metadata(
                NotaIngresoId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            numero: m.numero,
            fecha: m.fecha,
            almacen_ref: m.almacen_ref,
            proveedor: m.proveedor,
            observacion: m.observacion,
            lines_json: m.lines_json,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &NotaIngreso, for_insert: bool) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        numero: Set(aggregate.numero.clone()),
        fecha: Set(aggregate.fecha.clone()),
        almacen_ref: Set(aggregate.almacen_ref.clone()),
        proveedor: Set(aggregate.proveedor.clone()),
        observacion: Set(aggregate.observacion.clone()),
        lines_json: Set(aggregate.lines_json.clone()),
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

pub async fn list_all() -> anyhow::Result<Vec<NotaIngreso>> {
    let mut items: Vec<NotaIngreso> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Los documentos más recientes primero
    items.sort_by(|a, b| b.numero.cmp(&a.numero));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<NotaIngreso>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Siguiente correlativo de la serie (cuenta también los eliminados para no
/// reutilizar números)
pub async fn next_correlativo() -> anyhow::Result<i64> {
    let count = Entity::find().count(conn()).await?;
    Ok(count as i64 + 1)
}

pub async fn insert(aggregate: &NotaIngreso) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate, true).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &NotaIngreso) -> anyhow::Result<()> {
    to_active(aggregate, false).update(conn()).await?;
    Ok(())
}

pub async fn set_posted(id: Uuid, posted: bool) -> anyhow::Result<()> {
    use sea_orm::sea_query::Expr;
    Entity::update_many()
        .col_expr(Column::IsPosted, Expr::value(posted))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
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
