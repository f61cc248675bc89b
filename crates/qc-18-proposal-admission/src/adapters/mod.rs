//! Adapters layer (Hexagonal Architecture)

mod decoder;
mod execution_payload;
mod router;

pub use decoder::*;
pub use execution_payload::*;
pub use router::*;
