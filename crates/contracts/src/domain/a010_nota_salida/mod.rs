pub mod aggregate;

pub use aggregate::{NotaSalida, NotaSalidaDto, NotaSalidaId, NotaSalidaLine};
