pub mod aggregate;

pub use aggregate::{Cliente, ClienteDto, ClienteId};
