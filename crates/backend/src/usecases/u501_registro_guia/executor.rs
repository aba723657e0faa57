//! Ejecutor del registro de guías de remisión.
//!
//! Recibe la solicitud armada por el asistente, aplica las reglas cruzadas
//! que ningún agregado puede validar por sí solo, persiste la guía,
//! descuenta stock y dispara el envío a SUNAT. El guardado local y el envío
//! son pasos separados: si SUNAT rechaza o no responde, la guía queda
//! guardada con su estado y puede reenviarse después.

use contracts::domain::a011_guia_remision::{GuiaRemision, GuiaRemisionLine};
use contracts::enums::TipoTransporte;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u501_registro_guia::{
    RegistroGuiaLine, RegistroGuiaRequest, RegistroGuiaResponse,
};
use uuid::Uuid;

use crate::domain::a004_producto::service::{self as producto_service, MovimientoStock};
use crate::domain::{
    a005_cliente, a006_transportista, a007_vehiculo, a008_almacen, a011_guia_remision,
};
use crate::shared::apisperu::invoicing::{build_despatch_payload, InvoicingClient};
use crate::shared::config::ApisPeruConfig;

/// Consolida líneas repetidas del mismo producto sumando cantidades.
///
/// El asistente ya fusiona al agregar, pero la solicitud puede llegar con
/// duplicados (doble clic, borradores viejos de localStorage); el stock se
/// valida sobre la cantidad consolidada.
pub fn consolidar_lineas(lines: &[RegistroGuiaLine]) -> Vec<RegistroGuiaLine> {
    let mut out: Vec<RegistroGuiaLine> = Vec::new();
    for line in lines {
        match out.iter_mut().find(|l| l.producto_ref == line.producto_ref) {
            Some(existente) => existente.cantidad += line.cantidad,
            None => out.push(line.clone()),
        }
    }
    out
}

fn parse_ref(value: &str, nombre: &str) -> Result<Uuid, UseCaseError> {
    Uuid::parse_str(value)
        .map_err(|_| UseCaseError::validation(format!("Debe seleccionarse {}", nombre)))
}

/// Ejecuta el registro completo de la guía
pub async fn execute(
    request: RegistroGuiaRequest,
    config: &ApisPeruConfig,
) -> Result<RegistroGuiaResponse, UseCaseError> {
    // ------------------------------------------------------------------
    // Resolución de referencias
    // ------------------------------------------------------------------
    let destinatario_id = parse_ref(&request.destinatario_ref, "un destinatario")?;
    let destinatario = a005_cliente::repository::get_by_id(destinatario_id)
        .await
        .map_err(|e| UseCaseError::internal(e.to_string()))?
        .ok_or_else(|| UseCaseError::not_found("El destinatario no existe"))?;

    let transportista_id = parse_ref(&request.transportista_ref, "un transportista")?;
    let transportista = a006_transportista::repository::get_by_id(transportista_id)
        .await
        .map_err(|e| UseCaseError::internal(e.to_string()))?
        .ok_or_else(|| UseCaseError::not_found("El transportista no existe"))?;

    let almacen_id = parse_ref(&request.almacen_ref, "un almacén de partida")?;
    let almacen = a008_almacen::repository::get_by_id(almacen_id)
        .await
        .map_err(|e| UseCaseError::internal(e.to_string()))?
        .ok_or_else(|| UseCaseError::not_found("El almacén de partida no existe"))?;

    // ------------------------------------------------------------------
    // Reglas cruzadas de transporte
    // ------------------------------------------------------------------
    if transportista.tipo_transporte != request.modalidad {
        return Err(UseCaseError::validation(format!(
            "«{}» no opera en la modalidad {}",
            transportista.base.description,
            request.modalidad.display_name()
        )));
    }

    let placa = match request.modalidad {
        TipoTransporte::Privado => {
            if !transportista.conductor_completo() {
                return Err(UseCaseError::validation(
                    "El transporte privado requiere los datos completos del conductor",
                ));
            }
            let vehiculo_ref = request
                .vehiculo_ref
                .as_deref()
                .ok_or_else(|| UseCaseError::validation("Debe seleccionarse un vehículo"))?;
            let vehiculo_id = parse_ref(vehiculo_ref, "un vehículo")?;
            let vehiculo = a007_vehiculo::repository::get_by_id(vehiculo_id)
                .await
                .map_err(|e| UseCaseError::internal(e.to_string()))?
                .ok_or_else(|| UseCaseError::not_found("El vehículo no existe"))?;
            if vehiculo.transportista_ref != request.transportista_ref {
                return Err(UseCaseError::validation(format!(
                    "El vehículo {} no pertenece a «{}»",
                    vehiculo.placa, transportista.base.description
                )));
            }
            Some(vehiculo.placa)
        }
        TipoTransporte::Publico => None,
    };

    // ------------------------------------------------------------------
    // Armado del documento
    // ------------------------------------------------------------------
    let lines = consolidar_lineas(&request.lines);
    let guia_lines: Vec<GuiaRemisionLine> = lines
        .iter()
        .map(|l| GuiaRemisionLine {
            producto_ref: l.producto_ref.clone(),
            descripcion: l.descripcion.clone(),
            unidad: l.unidad,
            cantidad: l.cantidad,
        })
        .collect();

    let serie = request.serie.trim().to_uppercase();
    let correlativo = a011_guia_remision::repository::next_correlativo(&serie)
        .await
        .map_err(|e| UseCaseError::internal(e.to_string()))?;

    let mut guia = GuiaRemision::new_for_insert(
        serie,
        correlativo,
        request.fecha_emision.clone(),
        request.fecha_traslado.clone(),
        request.motivo,
        request.modalidad,
        request.destinatario_ref.clone(),
        request.transportista_ref.clone(),
        request.almacen_ref.clone(),
        guia_lines,
    );
    guia.vehiculo_ref = request.vehiculo_ref.clone();

    // El punto de partida cae al almacén si el asistente no lo cambió
    guia.partida_ubigeo = if request.partida_ubigeo.is_empty() {
        almacen.ubigeo.clone()
    } else {
        request.partida_ubigeo.clone()
    };
    guia.partida_direccion = if request.partida_direccion.is_empty() {
        almacen.direccion.clone()
    } else {
        request.partida_direccion.clone()
    };
    guia.llegada_ubigeo = request.llegada_ubigeo.clone();
    guia.llegada_direccion = request.llegada_direccion.clone();
    guia.peso_bruto = request.peso_bruto;
    guia.bultos = request.bultos;

    guia.validate().map_err(UseCaseError::validation)?;

    // ------------------------------------------------------------------
    // Descuento de stock (falla sin persistir nada si no alcanza)
    // ------------------------------------------------------------------
    let movimientos: Vec<MovimientoStock> = lines
        .iter()
        .map(|l| {
            let producto_ref = Uuid::parse_str(&l.producto_ref).map_err(|_| {
                UseCaseError::validation(format!("Línea con producto inválido: {}", l.descripcion))
            })?;
            Ok(MovimientoStock {
                producto_ref,
                delta: -l.cantidad,
            })
        })
        .collect::<Result<_, UseCaseError>>()?;

    producto_service::aplicar_movimientos(&movimientos)
        .await
        .map_err(|e| UseCaseError::validation(e.to_string()))?;

    guia.before_write();
    a011_guia_remision::repository::insert(&guia)
        .await
        .map_err(|e| UseCaseError::internal(e.to_string()))?;

    tracing::info!("Guía {} registrada", guia.numero_completo());

    // ------------------------------------------------------------------
    // Envío a SUNAT (no revierte el guardado local)
    // ------------------------------------------------------------------
    if request.enviar_sunat {
        let payload = build_despatch_payload(&guia, &destinatario, &transportista, placa);
        let client = InvoicingClient::new(config);
        let resultado = match client.enviar_guia(&payload).await {
            Ok(ticket) => Ok(ticket),
            Err(e) => {
                tracing::warn!("Envío a SUNAT de {} falló: {}", guia.numero_completo(), e);
                Err(e.to_string())
            }
        };
        guia.aplicar_resultado_sunat(resultado);
        guia.before_write();
        a011_guia_remision::repository::update(&guia)
            .await
            .map_err(|e| UseCaseError::internal(e.to_string()))?;
    }

    Ok(RegistroGuiaResponse {
        guia_id: guia.to_string_id(),
        numero: guia.numero_completo(),
        estado_sunat: guia.estado_sunat,
        sunat_ticket: guia.sunat_ticket.clone(),
        sunat_error: guia.sunat_error.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UnidadMedida;

    fn linea(producto: &str, cantidad: f64) -> RegistroGuiaLine {
        RegistroGuiaLine {
            producto_ref: producto.into(),
            descripcion: format!("Producto {}", producto),
            unidad: UnidadMedida::Niu,
            cantidad,
        }
    }

    #[test]
    fn test_consolidar_lineas_fusiona_repetidos() {
        let lines = vec![linea("A", 3.0), linea("B", 1.0), linea("A", 2.0)];
        let out = consolidar_lineas(&lines);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].producto_ref, "A");
        assert_eq!(out[0].cantidad, 5.0);
        assert_eq!(out[1].cantidad, 1.0);
    }

    #[test]
    fn test_consolidar_lineas_preserva_orden() {
        let lines = vec![linea("B", 1.0), linea("A", 2.0), linea("B", 4.0)];
        let out = consolidar_lineas(&lines);
        assert_eq!(out[0].producto_ref, "B");
        assert_eq!(out[0].cantidad, 5.0);
        assert_eq!(out[1].producto_ref, "A");
    }

    #[test]
    fn test_consolidar_lineas_vacio() {
        assert!(consolidar_lineas(&[]).is_empty());
    }
}
