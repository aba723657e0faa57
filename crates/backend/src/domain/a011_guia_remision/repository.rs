use chrono::Utc;
use contracts::domain::a011_guia_remision::{GuiaRemision, GuiaRemisionId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::{EstadoSunat, MotivoTraslado, TipoTransporte};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a011_guia_remision")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub serie: String,
    pub correlativo: i64,
    pub fecha_emision: String,
    pub fecha_traslado: String,
    pub motivo: String,
    pub modalidad: String,
    pub destinatario_ref: String,
    pub transportista_ref: String,
    pub vehiculo_ref: Option<String>,
    pub almacen_ref: String,
    pub partida_ubigeo: String,
    pub partida_direccion: String,
    pub llegada_ubigeo: String,
    pub llegada_direccion: String,
    pub peso_bruto: f64,
    pub bultos: i32,
    pub lines_json: Option<String>,
    pub estado_sunat: String,
    pub sunat_ticket: Option<String>,
    pub sunat_error: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GuiaRemision {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        GuiaRemision {
            base: BaseAggregate::with_metadata(
                GuiaRemisionId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            serie: m.serie,
            correlativo: m.correlativo,
            fecha_emision: m.fecha_emision,
            fecha_traslado: m.fecha_traslado,
            motivo: MotivoTraslado::from_code(&m.motivo).unwrap_or_default(),
            modalidad: TipoTransporte::from_code(&m.modalidad).unwrap_or_default(),
            destinatario_ref: m.destinatario_ref,
            transportista_ref: m.transportista_ref,
            vehiculo_ref: m.vehiculo_ref,
            almacen_ref: m.almacen_ref,
            partida_ubigeo: m.partida_ubigeo,
            partida_direccion: m.partida_direccion,
            llegada_ubigeo: m.llegada_ubigeo,
            llegada_direccion: m.llegada_direccion,
            peso_bruto: m.peso_bruto,
            bultos: m.bultos,
            lines_json: m.lines_json,
            estado_sunat: EstadoSunat::from_code(&m.estado_sunat).unwrap_or_default(),
            sunat_ticket: m.sunat_ticket,
            sunat_error: m.sunat_error,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &GuiaRemision, for_insert: bool) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        serie: Set(aggregate.serie.clone()),
        correlativo: Set(aggregate.correlativo),
        fecha_emision: Set(aggregate.fecha_emision.clone()),
        fecha_traslado: Set(aggregate.fecha_traslado.clone()),
        motivo: Set(aggregate.motivo.code().to_string()),
        modalidad: Set(aggregate.modalidad.code().to_string()),
        destinatario_ref: Set(aggregate.destinatario_ref.clone()),
        transportista_ref: Set(aggregate.transportista_ref.clone()),
        vehiculo_ref: Set(aggregate.vehiculo_ref.clone()),
        almacen_ref: Set(aggregate.almacen_ref.clone()),
        partida_ubigeo: Set(aggregate.partida_ubigeo.clone()),
        partida_direccion: Set(aggregate.partida_direccion.clone()),
        llegada_ubigeo: Set(aggregate.llegada_ubigeo.clone()),
        llegada_direccion: Set(aggregate.llegada_direccion.clone()),
        peso_bruto: Set(aggregate.peso_bruto),
        bultos: Set(aggregate.bultos),
        lines_json: Set(aggregate.lines_json.clone()),
        estado_sunat: Set(aggregate.estado_sunat.code().to_string()),
        sunat_ticket: Set(aggregate.sunat_ticket.clone()),
        sunat_error: Set(aggregate.sunat_error.clone()),
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

pub async fn list_all() -> anyhow::Result<Vec<GuiaRemision>> {
    let items: Vec<GuiaRemision> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::Correlativo)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<GuiaRemision>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Siguiente correlativo dentro de una serie
pub async fn next_correlativo(serie: &str) -> anyhow::Result<i64> {
    let ultimo: Option<Model> = Entity::find()
        .filter(Column::Serie.eq(serie))
        .order_by_desc(Column::Correlativo)
        .limit(1)
        .one(conn())
        .await?;
    Ok(ultimo.map(|m| m.correlativo).unwrap_or(0) + 1)
}

pub async fn insert(aggregate: &GuiaRemision) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate, true).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &GuiaRemision) -> anyhow::Result<()> {
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
