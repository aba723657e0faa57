pub mod aggregate;

pub use aggregate::{NotaIngreso, NotaIngresoDto, NotaIngresoId, NotaIngresoLine};
