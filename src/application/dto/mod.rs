//! Data transfer objects for the application layer.

mod embed_props;

pub use embed_props::{EmbedProps, Platform};
