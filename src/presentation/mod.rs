//! Presentation layer: the stateful post embed.

pub mod post_embed;

pub use post_embed::PostEmbed;
