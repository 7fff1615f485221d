//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Pure domain services.
pub mod services;

pub use entities::{Embed, Link, LoadState, PostMetadata};
pub use errors::EmbedError;
pub use services::DimensionCalculator;
