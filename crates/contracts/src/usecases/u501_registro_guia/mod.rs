pub mod request;
pub mod response;

pub use request::{RegistroGuiaLine, RegistroGuiaRequest};
pub use response::RegistroGuiaResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct RegistroGuia;

impl UseCaseMetadata for RegistroGuia {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "registro_guia"
    }

    fn display_name() -> &'static str {
        "Registro de Guía de Remisión"
    }

    fn description() -> &'static str {
        "Arma la guía de remisión, descuenta stock y la envía a SUNAT"
    }
}
