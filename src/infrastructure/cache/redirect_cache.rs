//! LRU cache of resolved redirects, so a link seen in many posts is only
//! expanded once.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use crate::domain::errors::EmbedError;
use crate::domain::ports::RedirectPort;

/// Default number of links remembered.
pub const DEFAULT_CACHE_SIZE: usize = 256;

/// Redirect port decorator remembering successful resolutions.
///
/// Both "redirects to X" and "does not redirect" are cached; failures are
/// not.
pub struct CachedRedirectResolver {
    inner: Arc<dyn RedirectPort>,
    cache: Mutex<LruCache<String, Option<String>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedRedirectResolver {
    /// Wraps `inner` with a cache of `capacity` links.
    #[must_use]
    pub fn new(inner: Arc<dyn RedirectPort>, capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Wraps `inner` with the default capacity.
    #[must_use]
    pub fn with_default_capacity(inner: Arc<dyn RedirectPort>) -> Self {
        Self::new(inner, DEFAULT_CACHE_SIZE)
    }

    /// Returns cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.cache.lock().len(),
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of cached links.
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Redirect cache: {} links ({} hits, {} misses)",
            self.size, self.hits, self.misses
        )
    }
}

#[async_trait]
impl RedirectPort for CachedRedirectResolver {
    async fn redirect_location(&self, link: &str) -> Result<Option<String>, EmbedError> {
        let cached = self.cache.lock().get(link).cloned();
        if let Some(cached) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(link, "Redirect cache hit");
            return Ok(cached);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(link, "Redirect cache miss");

        let resolved = self.inner.redirect_location(link).await?;
        self.cache.lock().put(link.to_string(), resolved.clone());
        Ok(resolved)
    }
}
