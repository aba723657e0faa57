use contracts::enums::TipoDocumento;
use contracts::shared::consulta_documento::IdentidadConsultada;
use serde::Deserialize;

use super::ApisPeruError;
use crate::shared::config::ApisPeruConfig;

/// Cliente HTTP del servicio de consulta DNI/RUC (dniruc.apisperu.com)
pub struct DocumentLookupClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Respuesta del endpoint /dni/{numero}
#[derive(Debug, Deserialize)]
pub struct DniResponse {
    pub dni: String,
    #[serde(default)]
    pub nombres: String,
    #[serde(rename = "apellidoPaterno", default)]
    pub apellido_paterno: String,
    #[serde(rename = "apellidoMaterno", default)]
    pub apellido_materno: String,
}

/// Respuesta del endpoint /ruc/{numero}
#[derive(Debug, Deserialize)]
pub struct RucResponse {
    pub ruc: String,
    #[serde(rename = "razonSocial", default)]
    pub razon_social: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub ubigeo: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// Traduce la respuesta de DNI a la forma neutra del sistema
pub fn identidad_desde_dni(resp: DniResponse) -> IdentidadConsultada {
    let apellidos = format!("{} {}", resp.apellido_paterno, resp.apellido_materno)
        .trim()
        .to_string();
    let nombre_completo = format!("{} {}", apellidos, resp.nombres)
        .trim()
        .to_string();

    IdentidadConsultada {
        tipo_documento: TipoDocumento::Dni,
        numero_documento: resp.dni,
        nombre_completo,
        apellidos,
        nombres: resp.nombres,
        direccion: String::new(),
        ubigeo: String::new(),
        estado: String::new(),
    }
}

/// Traduce la respuesta de RUC a la forma neutra del sistema
pub fn identidad_desde_ruc(resp: RucResponse) -> IdentidadConsultada {
    IdentidadConsultada {
        tipo_documento: TipoDocumento::Ruc,
        numero_documento: resp.ruc,
        nombre_completo: resp.razon_social.trim().to_string(),
        apellidos: String::new(),
        nombres: String::new(),
        direccion: resp.direccion.unwrap_or_default(),
        ubigeo: resp.ubigeo.unwrap_or_default(),
        estado: resp.estado.unwrap_or_default(),
    }
}

impl DocumentLookupClient {
    pub fn new(config: &ApisPeruConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.consulta_url.trim_end_matches('/').to_string(),
            token: config.consulta_token.clone(),
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApisPeruError> {
        if self.token.is_empty() {
            return Err(ApisPeruError::SinToken);
        }

        // El servicio acepta el token como query param
        let url = format!("{}/{}?token={}", self.base_url, path, self.token);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(ApisPeruError::NoEncontrado);
        }
        if !status.is_success() {
            return Err(ApisPeruError::Http(status.as_u16()));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApisPeruError::Formato(e.to_string()))
    }

    /// Consultar un DNI (8 dígitos)
    pub async fn consultar_dni(&self, numero: &str) -> Result<IdentidadConsultada, ApisPeruError> {
        let resp: DniResponse = self.fetch(&format!("dni/{}", numero.trim())).await?;
        Ok(identidad_desde_dni(resp))
    }

    /// Consultar un RUC (11 dígitos)
    pub async fn consultar_ruc(&self, numero: &str) -> Result<IdentidadConsultada, ApisPeruError> {
        let resp: RucResponse = self.fetch(&format!("ruc/{}", numero.trim())).await?;
        Ok(identidad_desde_ruc(resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identidad_desde_dni() {
        let json = r#"{
            "dni": "45871236",
            "nombres": "ROSA MARIA",
            "apellidoPaterno": "QUISPE",
            "apellidoMaterno": "MAMANI"
        }"#;
        let resp: DniResponse = serde_json::from_str(json).unwrap();
        let identidad = identidad_desde_dni(resp);
        assert_eq!(identidad.tipo_documento, TipoDocumento::Dni);
        assert_eq!(identidad.apellidos, "QUISPE MAMANI");
        assert_eq!(identidad.nombre_completo, "QUISPE MAMANI ROSA MARIA");
    }

    #[test]
    fn test_identidad_desde_ruc() {
        let json = r#"{
            "ruc": "20547896321",
            "razonSocial": "COMERCIAL ANDINA S.A.C.",
            "direccion": "AV. ARGENTINA NRO. 2456",
            "ubigeo": "150101",
            "estado": "ACTIVO"
        }"#;
        let resp: RucResponse = serde_json::from_str(json).unwrap();
        let identidad = identidad_desde_ruc(resp);
        assert_eq!(identidad.tipo_documento, TipoDocumento::Ruc);
        assert_eq!(identidad.nombre_completo, "COMERCIAL ANDINA S.A.C.");
        assert_eq!(identidad.ubigeo, "150101");
    }

    #[test]
    fn test_identidad_desde_ruc_campos_ausentes() {
        // el servicio omite dirección/ubigeo para algunos contribuyentes
        let json = r#"{"ruc": "10458712365", "razonSocial": "BODEGA ROSITA"}"#;
        let resp: RucResponse = serde_json::from_str(json).unwrap();
        let identidad = identidad_desde_ruc(resp);
        assert_eq!(identidad.direccion, "");
        assert_eq!(identidad.ubigeo, "");
    }
}
