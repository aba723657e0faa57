pub mod aggregate;

pub use aggregate::{Marca, MarcaDto, MarcaId};
