pub mod aggregate;

pub use aggregate::{Vehiculo, VehiculoDto, VehiculoId};
