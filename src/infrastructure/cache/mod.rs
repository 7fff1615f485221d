//! In-memory caches placed in front of network ports.

pub mod redirect_cache;

pub use redirect_cache::{CacheStats, CachedRedirectResolver};
