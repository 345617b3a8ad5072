pub mod anchor;
pub mod builder;
pub mod diagnostic;
pub mod error;
pub mod types;
