//! post-embed - embed resolution for links attached to chat posts.
//!
//! This crate decides how a post's link is shown: as a YouTube thumbnail,
//! an inline image, an Open Graph preview, the post's message attachments,
//! or not at all. It resolves shortened links and image sizes through ports
//! so hosts can plug in their own network stack.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the post embed component.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "post-embed";
