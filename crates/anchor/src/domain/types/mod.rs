// Re-export all types so callers can use `domain::types::*`

pub use kind::*;
pub use config::*;
pub use summary::*;

// Module declarations
mod kind;
mod config;
mod summary;
