pub mod aggregate;

pub use aggregate::{Subcategoria, SubcategoriaDto, SubcategoriaId};
