//! HTTP adapters for redirect resolution and image size probing.

pub mod image_size_client;
pub mod offline;
pub mod redirect_client;

pub use image_size_client::HttpImageSizeClient;
pub use offline::OfflineClient;
pub use redirect_client::HttpRedirectClient;

use crate::domain::errors::EmbedError;

const USER_AGENT: &str = concat!("post-embed/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

fn map_request_error(e: &reqwest::Error) -> EmbedError {
    if e.is_timeout() {
        EmbedError::network("request timed out")
    } else if e.is_connect() {
        EmbedError::network("failed to connect")
    } else {
        EmbedError::network(e.to_string())
    }
}
