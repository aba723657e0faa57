use chrono::Utc;
use contracts::domain::a007_vehiculo::{Vehiculo, VehiculoId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_vehiculo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub placa: String,
    pub transportista_ref: String,
    pub marca: String,
    pub modelo: String,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Vehiculo {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Vehiculo {
            base: BaseAggregate::with_metadata(
                VehiculoId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            placa: m.placa,
            transportista_ref: m.transportista_ref,
            marca: m.marca,
            modelo: m.modelo,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Vehiculo, for_insert: bool) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        placa: Set(aggregate.placa.clone()),
        transportista_ref: Set(aggregate.transportista_ref.clone()),
        marca: Set(aggregate.marca.clone()),
        modelo: Set(aggregate.modelo.clone()),
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

pub async fn list_all() -> anyhow::Result<Vec<Vehiculo>> {
    let mut items: Vec<Vehiculo> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.placa.cmp(&b.placa));
    Ok(items)
}

/// Vehículos de un transportista (select dependiente del asistente de guías)
pub async fn find_by_transportista(transportista_id: Uuid) -> anyhow::Result<Vec<Vehiculo>> {
    let mut items: Vec<Vehiculo> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::TransportistaRef.eq(transportista_id.to_string()))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.placa.cmp(&b.placa));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Vehiculo>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Vehiculo) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate, true).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Vehiculo) -> anyhow::Result<()> {
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
