pub mod aggregate;

pub use aggregate::{Transportista, TransportistaDto, TransportistaId};
