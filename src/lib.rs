//! SNI Router - A wildcard-aware SNI hostname routing trie for Rust
//!
//! This library resolves the server name from a TLS ClientHello to a
//! per-host context (certificate, TLS configuration, backend handle), with
//! support for:
//! - Exact hostname registrations (`www.example.com`)
//! - Leading-wildcard patterns (`*.example.com`, matching strictly-deeper
//!   names only)
//! - Exact-beats-wildcard precedence, deepest wildcard winning among
//!   wildcards
//! - Removal with subtree-preserving pruning
//! - Teardown that surrenders every registered context to a caller callback
//! - LRU-cached resolution with a default-context fallback
//!
//! # Example
//!
//! ```rust
//! use sni_router_r::{SniRouter, SniRouterOptions};
//!
//! let mut router = SniRouter::new(SniRouterOptions::default())
//!     .with_default("fallback-ctx");
//!
//! router.register("example.com", "apex-ctx").unwrap();
//! router.register("*.example.com", "wildcard-ctx").unwrap();
//! router.register("api.example.com", "api-ctx").unwrap();
//!
//! // Exact registration wins over the wildcard
//! assert_eq!(router.resolve("api.example.com"), Some("api-ctx"));
//! // Anything else under the suffix hits the wildcard
//! assert_eq!(router.resolve("www.example.com"), Some("wildcard-ctx"));
//! // The wildcard does not cover its own suffix; the apex has its own entry
//! assert_eq!(router.resolve("example.com"), Some("apex-ctx"));
//! // Unknown names fall back to the default context
//! assert_eq!(router.resolve("other.org"), Some("fallback-ctx"));
//! ```
//!
//! # Pattern Syntax
//!
//! | Pattern | Example | Matches |
//! |---------|---------|---------|
//! | Exact | `www.example.com` | `www.example.com` only |
//! | Wildcard | `*.example.com` | `a.example.com`, `a.b.example.com`, never `example.com` |
//!
//! `*` is only legal as the leading `*.` prefix; empty strings and empty
//! labels are rejected at registration time.
//!
//! For callers that want the bare data structure without caching or a
//! default fallback, [`SniTrie`] is the underlying trie.

pub mod error;
pub mod router;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SniError};
pub use router::{SniRouter, SniRouterOptions, DEFAULT_CACHE_SIZE};
pub use trie::SniTrie;
pub use types::{HostPattern, PatternKind};
