use chrono::Utc;
use contracts::domain::a005_cliente::{Cliente, ClienteId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::{TipoDocumento, TipoPersona};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_cliente")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub tipo_persona: String,
    pub tipo_documento: String,
    pub numero_documento: String,
    pub apellidos: String,
    pub nombres: String,
    pub direccion: String,
    pub ubigeo: String,
    pub telefono: String,
    pub email: String,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Cliente {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Cliente {
            base: BaseAggregate::with_metadata(
                ClienteId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            tipo_persona: TipoPersona::from_code(&m.tipo_persona).unwrap_or_default(),
            tipo_documento: TipoDocumento::from_code(&m.tipo_documento)
                .unwrap_or(TipoDocumento::Dni),
            numero_documento: m.numero_documento,
            apellidos: m.apellidos,
            nombres: m.nombres,
            direccion: m.direccion,
            ubigeo: m.ubigeo,
            telefono: m.telefono,
            email: m.email,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Cliente, for_insert: bool) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        tipo_persona: Set(aggregate.tipo_persona.code().to_string()),
        tipo_documento: Set(aggregate.tipo_documento.code().to_string()),
        numero_documento: Set(aggregate.numero_documento.clone()),
        apellidos: Set(aggregate.apellidos.clone()),
        nombres: Set(aggregate.nombres.clone()),
        direccion: Set(aggregate.direccion.clone()),
        ubigeo: Set(aggregate.ubigeo.clone()),
        telefono: Set(aggregate.telefono.clone()),
        email: Set(aggregate.email.clone()),
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

pub async fn list_all() -> anyhow::Result<Vec<Cliente>> {
    let mut items: Vec<Cliente> = Entity::find()
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Cliente>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Buscar un cliente por su número de documento (evita duplicados al
/// registrar destinatarios desde la consulta DNI/RUC)
pub async fn find_by_documento(numero: &str) -> anyhow::Result<Option<Cliente>> {
    let result = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::NumeroDocumento.eq(numero.trim()))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Buscar clientes por nombre o documento (picker del asistente de guías)
pub async fn search(texto: &str, limit: usize) -> anyhow::Result<Vec<Cliente>> {
    let needle = texto.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let all_items: Vec<Model> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;

    let items: Vec<Cliente> = all_items
        .into_iter()
        .filter(|m| {
            m.description.to_lowercase().contains(&needle)
                || m.numero_documento.contains(needle.trim())
        })
        .take(limit)
        .map(Into::into)
        .collect();

    Ok(items)
}

pub async fn insert(aggregate: &Cliente) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate, true).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Cliente) -> anyhow::Result<()> {
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
