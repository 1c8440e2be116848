//! Router module.
//!
//! Handshake-facing resolution layer over [`SniTrie`]: given the server name
//! from a TLS ClientHello, picks the per-host context to present, falling
//! back to a default context when nothing matches. Lookups go through an LRU
//! cache keyed by the normalized server name.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::error::Result;
use crate::trie::SniTrie;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Router builder options.
pub struct SniRouterOptions {
    /// LRU cache size for resolution results
    pub cache_size: usize,
}

impl Default for SniRouterOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl SniRouterOptions {
    /// Create new router options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// SNI router with a default-context fallback and cached resolution.
///
/// Registration (`&mut self`) must be serialized externally against concurrent
/// [`resolve`](SniRouter::resolve) calls; `resolve` itself only locks the
/// cache. No operation blocks or performs I/O.
pub struct SniRouter<T: Clone> {
    trie: SniTrie<T>,
    default_context: Option<T>,
    cache: Mutex<LruCache<String, Option<T>>>,
}

impl<T: Clone> SniRouter<T> {
    /// Create a router with no default context.
    pub fn new(options: SniRouterOptions) -> Self {
        let cache_size =
            NonZeroUsize::new(options.cache_size).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            trie: SniTrie::new(),
            default_context: None,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Set the context returned when no registration matches.
    pub fn with_default(mut self, context: T) -> Self {
        self.default_context = Some(context);
        self
    }

    /// Register a hostname or `*.`-prefixed wildcard pattern.
    ///
    /// Invalidates the resolution cache on success.
    pub fn register(&mut self, pattern: &str, context: T) -> Result<()> {
        self.trie.insert(pattern, context)?;
        debug!(pattern, "registered SNI context");
        self.cache.lock().clear();
        Ok(())
    }

    /// Unregister a hostname or pattern, returning its context.
    ///
    /// Invalidates the resolution cache when something was removed.
    pub fn unregister(&mut self, pattern: &str) -> Option<T> {
        let removed = self.trie.remove(pattern)?;
        debug!(pattern, "unregistered SNI context");
        self.cache.lock().clear();
        Some(removed)
    }

    /// Resolve a server name to its context.
    ///
    /// Returns the most specific registered context, or the default context
    /// when nothing matches. The trie result (including misses) is cached;
    /// the default is applied after the cache, so cached negatives stay valid
    /// if the default ever differs.
    pub fn resolve(&self, server_name: &str) -> Option<T> {
        // Normalize defensively, allocating only when uppercase bytes are
        // detected; the cache key and trie walk both want lowercase. The
        // cache is probed through the borrowed name, so the hit path stays
        // allocation-free for already-lowercase input.
        let normalized;
        let name = if server_name.bytes().any(|b| b.is_ascii_uppercase()) {
            normalized = server_name.to_lowercase();
            normalized.as_str()
        } else {
            server_name
        };

        let mut cache = self.cache.lock();

        let matched = if let Some(cached) = cache.get(name) {
            trace!(server_name = %name, hit = cached.is_some(), "resolution cache hit");
            cached.clone()
        } else {
            // Cache miss: compute while holding the lock. The walk is a
            // bounded, CPU-only label traversal, so holding the lock is
            // acceptable and prevents stampedes on the same key.
            let result = self.trie.find(name).cloned();
            trace!(server_name = %name, hit = result.is_some(), "resolved server name");
            cache.put(name.to_string(), result.clone());
            result
        };

        matched.or_else(|| self.default_context.clone())
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Clear the resolution cache.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Tear down all registrations, handing each context to `f` exactly once.
    /// The default context, if any, is not affected.
    pub fn clear_with<F>(&mut self, f: F)
    where
        F: FnMut(T),
    {
        self.trie.clear_with(f);
        self.cache.lock().clear();
    }
}
