use super::repository;
use crate::domain::a004_producto::service::{self as producto_service, MovimientoStock};
use crate::domain::{a005_cliente, a006_transportista, a007_vehiculo};
use crate::shared::apisperu::invoicing::{build_despatch_payload, InvoicingClient};
use crate::shared::config::ApisPeruConfig;
use contracts::domain::a011_guia_remision::GuiaRemision;
use uuid::Uuid;

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<GuiaRemision>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<GuiaRemision>> {
    repository::list_all().await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let Some(guia) = repository::get_by_id(id).await? else {
        return Ok(false);
    };
    if guia.estado_sunat == contracts::enums::EstadoSunat::Aceptada {
        anyhow::bail!(
            "La guía {} ya fue aceptada por SUNAT y no puede eliminarse",
            guia.numero_completo()
        );
    }

    // El registro descontó stock; eliminar la guía lo devuelve
    let movimientos: Vec<MovimientoStock> = guia
        .parse_lines()
        .into_iter()
        .filter_map(|line| {
            Uuid::parse_str(&line.producto_ref)
                .ok()
                .map(|producto_ref| MovimientoStock {
                    producto_ref,
                    delta: line.cantidad,
                })
        })
        .collect();
    producto_service::aplicar_movimientos(&movimientos).await?;

    repository::soft_delete(id).await
}

/// (Re)enviar una guía guardada a SUNAT y registrar el resultado.
///
/// Devuelve la guía actualizada; el rechazo NO es un error de esta función,
/// queda registrado en `estado_sunat`/`sunat_error`.
pub async fn enviar_sunat(id: Uuid, config: &ApisPeruConfig) -> anyhow::Result<GuiaRemision> {
    let mut guia = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    if !guia.estado_sunat.puede_enviarse() {
        anyhow::bail!(
            "La guía {} ya fue aceptada por SUNAT",
            guia.numero_completo()
        );
    }

    let destinatario_id = Uuid::parse_str(&guia.destinatario_ref)
        .map_err(|_| anyhow::anyhow!("Guía con destinatario inválido"))?;
    let destinatario = a005_cliente::repository::get_by_id(destinatario_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("El destinatario de la guía ya no existe"))?;

    let transportista_id = Uuid::parse_str(&guia.transportista_ref)
        .map_err(|_| anyhow::anyhow!("Guía con transportista inválido"))?;
    let transportista = a006_transportista::repository::get_by_id(transportista_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("El transportista de la guía ya no existe"))?;

    let placa = match &guia.vehiculo_ref {
        Some(vehiculo_ref) => {
            let vehiculo_id = Uuid::parse_str(vehiculo_ref)
                .map_err(|_| anyhow::anyhow!("Guía con vehículo inválido"))?;
            a007_vehiculo::repository::get_by_id(vehiculo_id)
                .await?
                .map(|v| v.placa)
        }
        None => None,
    };

    let payload = build_despatch_payload(&guia, &destinatario, &transportista, placa);
    let client = InvoicingClient::new(config);

    let resultado = match client.enviar_guia(&payload).await {
        Ok(ticket) => Ok(ticket),
        Err(e) => {
            tracing::warn!(
                "Envío a SUNAT de {} falló: {}",
                guia.numero_completo(),
                e
            );
            Err(e.to_string())
        }
    };

    guia.aplicar_resultado_sunat(resultado);
    guia.before_write();
    repository::update(&guia).await?;
    Ok(guia)
}
