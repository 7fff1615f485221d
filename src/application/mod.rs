//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateless embed services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{EmbedProps, Platform};
pub use services::{EmbedPolicy, LinkClassifier, YouTubeTimeParser};
pub use use_cases::{LoadEmbedUseCase, PlayVideoUseCase};
