pub mod aggregate;

pub use aggregate::{GuiaRemision, GuiaRemisionId, GuiaRemisionLine};
