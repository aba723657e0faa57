pub mod aggregate;

pub use aggregate::{Almacen, AlmacenDto, AlmacenId};
