pub mod aggregate;

pub use aggregate::{Categoria, CategoriaDto, CategoriaId};
