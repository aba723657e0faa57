use contracts::domain::a005_cliente::Cliente;
use contracts::domain::a006_transportista::Transportista;
use contracts::domain::a011_guia_remision::GuiaRemision;
use contracts::enums::TipoTransporte;
use serde::{Deserialize, Serialize};

use super::ApisPeruError;
use crate::shared::config::ApisPeruConfig;

/// Cliente HTTP del servicio de facturación electrónica
/// (facturacion.apisperu.com) para el envío de guías de remisión
pub struct InvoicingClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

// ============================================================================
// Payload del envío (guía de remisión remitente, tipoDoc 09)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DespatchParty {
    #[serde(rename = "tipoDoc")]
    pub tipo_doc: String,
    #[serde(rename = "numDoc")]
    pub num_doc: String,
    #[serde(rename = "rznSocial")]
    pub rzn_social: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DespatchPunto {
    pub ubigeo: String,
    pub direccion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DespatchEnvio {
    /// Motivo de traslado (catálogo 20)
    #[serde(rename = "codTraslado")]
    pub cod_traslado: String,
    /// Modalidad de transporte (catálogo 18)
    #[serde(rename = "modTraslado")]
    pub mod_traslado: String,
    #[serde(rename = "fecTraslado")]
    pub fec_traslado: String,
    #[serde(rename = "pesoTotal")]
    pub peso_total: f64,
    #[serde(rename = "undPesoTotal")]
    pub und_peso_total: String,
    #[serde(rename = "numBultos")]
    pub num_bultos: i32,
    pub partida: DespatchPunto,
    pub llegada: DespatchPunto,
    pub transportista: DespatchParty,
    /// Placa del vehículo; solo en transporte privado
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DespatchDetail {
    pub codigo: String,
    pub descripcion: String,
    pub unidad: String,
    pub cantidad: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DespatchPayload {
    /// Siempre "09": guía de remisión remitente
    #[serde(rename = "tipoDoc")]
    pub tipo_doc: String,
    pub serie: String,
    pub correlativo: String,
    #[serde(rename = "fechaEmision")]
    pub fecha_emision: String,
    pub destinatario: DespatchParty,
    pub envio: DespatchEnvio,
    pub details: Vec<DespatchDetail>,
}

/// Arma el payload de envío a partir de la guía y sus partes relacionadas
///
/// Función pura: toda la resolución de referencias ocurre antes, en el
/// ejecutor del caso de uso.
pub fn build_despatch_payload(
    guia: &GuiaRemision,
    destinatario: &Cliente,
    transportista: &Transportista,
    placa: Option<String>,
) -> DespatchPayload {
    // Para transporte público identifica la empresa por RUC; para privado
    // el conductor por DNI
    let transportista_party = match guia.modalidad {
        TipoTransporte::Publico => DespatchParty {
            tipo_doc: "6".into(),
            num_doc: transportista.ruc.clone(),
            rzn_social: transportista.base.description.clone(),
        },
        TipoTransporte::Privado => DespatchParty {
            tipo_doc: "1".into(),
            num_doc: transportista.conductor_dni.clone(),
            rzn_social: transportista.conductor_nombres.clone(),
        },
    };

    DespatchPayload {
        tipo_doc: "09".into(),
        serie: guia.serie.clone(),
        correlativo: guia.correlativo.to_string(),
        fecha_emision: guia.fecha_emision.clone(),
        destinatario: DespatchParty {
            tipo_doc: destinatario.tipo_documento.code().to_string(),
            num_doc: destinatario.numero_documento.clone(),
            rzn_social: destinatario.base.description.clone(),
        },
        envio: DespatchEnvio {
            cod_traslado: guia.motivo.code().to_string(),
            mod_traslado: guia.modalidad.code().to_string(),
            fec_traslado: guia.fecha_traslado.clone(),
            peso_total: guia.peso_bruto,
            und_peso_total: "KGM".into(),
            num_bultos: guia.bultos,
            partida: DespatchPunto {
                ubigeo: guia.partida_ubigeo.clone(),
                direccion: guia.partida_direccion.clone(),
            },
            llegada: DespatchPunto {
                ubigeo: guia.llegada_ubigeo.clone(),
                direccion: guia.llegada_direccion.clone(),
            },
            transportista: transportista_party,
            placa,
        },
        details: guia
            .parse_lines()
            .into_iter()
            .map(|line| DespatchDetail {
                codigo: line.producto_ref,
                descripcion: line.descripcion,
                unidad: line.unidad.code().to_string(),
                cantidad: line.cantidad,
            })
            .collect(),
    }
}

// ============================================================================
// Respuesta del servicio
// ============================================================================

#[derive(Debug, Deserialize)]
struct SunatError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct SunatResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    ticket: Option<String>,
    #[serde(default)]
    error: Option<SunatError>,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(rename = "sunatResponse")]
    sunat_response: Option<SunatResponse>,
}

impl InvoicingClient {
    pub fn new(config: &ApisPeruConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.facturacion_url.trim_end_matches('/').to_string(),
            token: config.facturacion_token.clone(),
        }
    }

    /// Enviar la guía a SUNAT; devuelve el ticket si fue aceptada
    pub async fn enviar_guia(&self, payload: &DespatchPayload) -> Result<String, ApisPeruError> {
        if self.token.is_empty() {
            return Err(ApisPeruError::SinToken);
        }

        let url = format!("{}/despatch/send", self.base_url);
        tracing::info!(
            "Enviando guía {}-{} a SUNAT",
            payload.serie,
            payload.correlativo
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!("SUNAT send failed with HTTP {}: {}", status, text);
            return Err(ApisPeruError::Http(status.as_u16()));
        }

        let parsed: SendResponse =
            serde_json::from_str(&text).map_err(|e| ApisPeruError::Formato(e.to_string()))?;

        match parsed.sunat_response {
            Some(sunat) if sunat.success => {
                Ok(sunat.ticket.unwrap_or_default())
            }
            Some(sunat) => {
                let error = sunat
                    .error
                    .map(|e| {
                        if e.code.is_empty() {
                            e.message
                        } else {
                            format!("{}: {}", e.code, e.message)
                        }
                    })
                    .unwrap_or_else(|| "rechazo sin detalle".to_string());
                Err(ApisPeruError::Rechazo(error))
            }
            None => Err(ApisPeruError::Formato(
                "respuesta sin sunatResponse".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a011_guia_remision::GuiaRemisionLine;
    use contracts::enums::{MotivoTraslado, TipoDocumento, TipoPersona, UnidadMedida};
    use uuid::Uuid;

    fn guia_de_prueba(modalidad: TipoTransporte) -> GuiaRemision {
        let mut guia = GuiaRemision::new_for_insert(
            "T001".into(),
            45,
            "2024-03-10".into(),
            "2024-03-11".into(),
            MotivoTraslado::Venta,
            modalidad,
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
            vec![GuiaRemisionLine {
                producto_ref: "PRD-1".into(),
                descripcion: "Agua mineral 625ml".into(),
                unidad: UnidadMedida::Niu,
                cantidad: 50.0,
            }],
        );
        guia.partida_ubigeo = "150101".into();
        guia.partida_direccion = "Av. Argentina 2456".into();
        guia.llegada_ubigeo = "040101".into();
        guia.llegada_direccion = "Calle Mercaderes 120".into();
        guia.peso_bruto = 32.5;
        guia.bultos = 3;
        guia
    }

    fn destinatario_de_prueba() -> Cliente {
        Cliente::new_for_insert(
            "CLI-000001".into(),
            "COMERCIAL ANDINA S.A.C.".into(),
            TipoPersona::Juridico,
            TipoDocumento::Ruc,
            "20547896321".into(),
            "Calle Mercaderes 120".into(),
            None,
        )
    }

    #[test]
    fn test_payload_transporte_publico() {
        let guia = guia_de_prueba(TipoTransporte::Publico);
        let mut transportista = Transportista::new_for_insert(
            "TRA-000001".into(),
            "Transportes Andinos SAC".into(),
            TipoTransporte::Publico,
            None,
        );
        transportista.ruc = "20458796312".into();

        let payload =
            build_despatch_payload(&guia, &destinatario_de_prueba(), &transportista, None);

        assert_eq!(payload.tipo_doc, "09");
        assert_eq!(payload.correlativo, "45");
        assert_eq!(payload.envio.mod_traslado, "01");
        assert_eq!(payload.envio.transportista.tipo_doc, "6");
        assert_eq!(payload.envio.transportista.num_doc, "20458796312");
        assert!(payload.envio.placa.is_none());
        assert_eq!(payload.details.len(), 1);
        assert_eq!(payload.details[0].unidad, "NIU");
    }

    #[test]
    fn test_payload_transporte_privado_lleva_conductor_y_placa() {
        let mut guia = guia_de_prueba(TipoTransporte::Privado);
        guia.vehiculo_ref = Some(Uuid::new_v4().to_string());

        let mut transportista = Transportista::new_for_insert(
            "TRA-000002".into(),
            "Flota propia".into(),
            TipoTransporte::Privado,
            None,
        );
        transportista.conductor_dni = "45879632".into();
        transportista.conductor_nombres = "Juan Pérez Rojas".into();
        transportista.conductor_licencia = "Q45879632".into();

        let payload = build_despatch_payload(
            &guia,
            &destinatario_de_prueba(),
            &transportista,
            Some("ABC123".into()),
        );

        assert_eq!(payload.envio.mod_traslado, "02");
        assert_eq!(payload.envio.transportista.tipo_doc, "1");
        assert_eq!(payload.envio.transportista.num_doc, "45879632");
        assert_eq!(payload.envio.placa.as_deref(), Some("ABC123"));
    }

    #[test]
    fn test_payload_serializa_sin_placa() {
        let guia = guia_de_prueba(TipoTransporte::Publico);
        let mut transportista = Transportista::new_for_insert(
            "TRA-000001".into(),
            "Transportes Andinos SAC".into(),
            TipoTransporte::Publico,
            None,
        );
        transportista.ruc = "20458796312".into();

        let payload =
            build_despatch_payload(&guia, &destinatario_de_prueba(), &transportista, None);
        let json = serde_json::to_string(&payload).unwrap();
        // la placa ausente no debe viajar en el JSON
        assert!(!json.contains("placa"));
        assert!(json.contains("\"codTraslado\":\"01\""));
    }
}
