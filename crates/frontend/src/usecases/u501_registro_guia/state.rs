//! Estado del asistente de registro de guías.
//!
//! El borrador completo es serializable y se guarda en localStorage en cada
//! cambio, así la selección sobrevive a un reload del navegador.

use contracts::enums::{MotivoTraslado, TipoTransporte, UnidadMedida};
use contracts::usecases::u501_registro_guia::{RegistroGuiaLine, RegistroGuiaRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Línea del borrador: la línea de la solicitud más el stock conocido del
/// producto al momento de agregarlo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorradorLine {
    #[serde(rename = "productoRef")]
    pub producto_ref: String,
    pub descripcion: String,
    pub unidad: UnidadMedida,
    pub cantidad: f64,
    #[serde(rename = "stockConocido")]
    pub stock_conocido: f64,
}

/// Borrador serializable del asistente
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BorradorGuia {
    pub serie: String,
    #[serde(rename = "fechaEmision")]
    pub fecha_emision: String,
    #[serde(rename = "fechaTraslado")]
    pub fecha_traslado: String,
    pub motivo: MotivoTraslado,
    pub modalidad: TipoTransporte,
    #[serde(rename = "destinatarioRef")]
    pub destinatario_ref: String,
    #[serde(rename = "destinatarioNombre")]
    pub destinatario_nombre: String,
    #[serde(rename = "transportistaRef")]
    pub transportista_ref: String,
    #[serde(rename = "vehiculoRef")]
    pub vehiculo_ref: String,
    #[serde(rename = "almacenRef")]
    pub almacen_ref: String,
    #[serde(rename = "llegadaUbigeo")]
    pub llegada_ubigeo: String,
    #[serde(rename = "llegadaDireccion")]
    pub llegada_direccion: String,
    #[serde(rename = "pesoBruto")]
    pub peso_bruto: f64,
    pub bultos: i32,
    pub lines: Vec<BorradorLine>,
}

impl BorradorGuia {
    pub fn nuevo() -> Self {
        Self {
            serie: "T001".to_string(),
            bultos: 1,
            ..Default::default()
        }
    }

    /// Agrega un producto; si ya está en el borrador fusiona la cantidad y
    /// refresca el stock conocido con el valor recién buscado
    pub fn agregar_linea(
        &mut self,
        producto_ref: String,
        descripcion: String,
        unidad: UnidadMedida,
        stock: f64,
    ) {
        match self
            .lines
            .iter_mut()
            .find(|l| l.producto_ref == producto_ref)
        {
            Some(line) => {
                line.cantidad += 1.0;
                line.stock_conocido = stock;
            }
            None => self.lines.push(BorradorLine {
                producto_ref,
                descripcion,
                unidad,
                cantidad: 1.0,
                stock_conocido: stock,
            }),
        }
    }

    /// ¿Alguna línea pide más que el stock conocido?
    pub fn lineas_con_exceso(&self) -> Vec<&BorradorLine> {
        self.lines
            .iter()
            .filter(|l| l.cantidad > l.stock_conocido)
            .collect()
    }

    /// Los problemas que aún impiden registrar, en orden de pantalla
    pub fn pendientes(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.fecha_emision.is_empty() || self.fecha_traslado.is_empty() {
            out.push("Complete las fechas de emisión y traslado");
        }
        if self.lines.is_empty() {
            out.push("Agregue al menos un producto");
        }
        if !self.lineas_con_exceso().is_empty() {
            out.push("Hay cantidades que superan el stock disponible");
        }
        if self.destinatario_ref.is_empty() {
            out.push("Seleccione un destinatario");
        }
        if self.transportista_ref.is_empty() {
            out.push("Seleccione un transportista");
        }
        if self.modalidad == TipoTransporte::Privado && self.vehiculo_ref.is_empty() {
            out.push("Seleccione un vehículo");
        }
        if self.almacen_ref.is_empty() {
            out.push("Seleccione el almacén de partida");
        }
        if self.llegada_ubigeo.len() != 6 || self.llegada_direccion.trim().is_empty() {
            out.push("Complete el punto de llegada");
        }
        if self.peso_bruto <= 0.0 {
            out.push("Indique el peso bruto");
        }
        out
    }

    pub fn puede_registrar(&self) -> bool {
        self.pendientes().is_empty()
    }

    /// Convierte el borrador en la solicitud del backend
    pub fn to_request(&self) -> RegistroGuiaRequest {
        RegistroGuiaRequest {
            serie: self.serie.clone(),
            fecha_emision: self.fecha_emision.clone(),
            fecha_traslado: self.fecha_traslado.clone(),
            motivo: self.motivo,
            modalidad: self.modalidad,
            destinatario_ref: self.destinatario_ref.clone(),
            transportista_ref: self.transportista_ref.clone(),
            vehiculo_ref: if self.vehiculo_ref.is_empty() {
                None
            } else {
                Some(self.vehiculo_ref.clone())
            },
            almacen_ref: self.almacen_ref.clone(),
            partida_ubigeo: String::new(),
            partida_direccion: String::new(),
            llegada_ubigeo: self.llegada_ubigeo.clone(),
            llegada_direccion: self.llegada_direccion.clone(),
            peso_bruto: self.peso_bruto,
            bultos: self.bultos,
            lines: self
                .lines
                .iter()
                .map(|l| RegistroGuiaLine {
                    producto_ref: l.producto_ref.clone(),
                    descripcion: l.descripcion.clone(),
                    unidad: l.unidad,
                    cantidad: l.cantidad,
                })
                .collect(),
            enviar_sunat: true,
        }
    }

    /// Índice rápido producto → stock conocido (para la tabla)
    pub fn stock_index(&self) -> HashMap<String, f64> {
        self.lines
            .iter()
            .map(|l| (l.producto_ref.clone(), l.stock_conocido))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn borrador_completo() -> BorradorGuia {
        let mut b = BorradorGuia::nuevo();
        b.fecha_emision = "2024-03-10".into();
        b.fecha_traslado = "2024-03-11".into();
        b.destinatario_ref = "d".into();
        b.transportista_ref = "t".into();
        b.almacen_ref = "a".into();
        b.llegada_ubigeo = "040101".into();
        b.llegada_direccion = "Calle Mercaderes 120".into();
        b.peso_bruto = 10.0;
        b.agregar_linea("p1".into(), "Agua".into(), UnidadMedida::Niu, 50.0);
        b
    }

    #[test]
    fn test_agregar_linea_fusiona_y_actualiza_stock() {
        let mut b = BorradorGuia::nuevo();
        b.agregar_linea("p1".into(), "Agua".into(), UnidadMedida::Niu, 10.0);
        b.agregar_linea("p2".into(), "Galletas".into(), UnidadMedida::Niu, 5.0);
        b.agregar_linea("p1".into(), "Agua".into(), UnidadMedida::Niu, 8.0);

        assert_eq!(b.lines.len(), 2);
        assert_eq!(b.lines[0].cantidad, 2.0);
        // el stock conocido se refresca con la última búsqueda
        assert_eq!(b.lines[0].stock_conocido, 8.0);
    }

    #[test]
    fn test_lineas_con_exceso() {
        let mut b = BorradorGuia::nuevo();
        b.agregar_linea("p1".into(), "Agua".into(), UnidadMedida::Niu, 1.0);
        assert!(b.lineas_con_exceso().is_empty());
        b.lines[0].cantidad = 3.0;
        assert_eq!(b.lineas_con_exceso().len(), 1);
    }

    #[test]
    fn test_pendientes_borrador_vacio() {
        let b = BorradorGuia::nuevo();
        assert!(!b.puede_registrar());
        assert!(b.pendientes().len() >= 5);
    }

    #[test]
    fn test_puede_registrar_completo() {
        let b = borrador_completo();
        assert!(b.puede_registrar(), "pendientes: {:?}", b.pendientes());
    }

    #[test]
    fn test_privado_exige_vehiculo() {
        let mut b = borrador_completo();
        b.modalidad = TipoTransporte::Privado;
        assert!(!b.puede_registrar());
        b.vehiculo_ref = "v".into();
        assert!(b.puede_registrar());
    }

    #[test]
    fn test_to_request() {
        let b = borrador_completo();
        let request = b.to_request();
        assert_eq!(request.serie, "T001");
        assert_eq!(request.lines.len(), 1);
        assert!(request.vehiculo_ref.is_none());
        assert!(request.enviar_sunat);
    }
}
