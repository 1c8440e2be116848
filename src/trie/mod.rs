//! Reverse-domain-label trie for SNI hostname routing.
//!
//! Maps hostnames and `*.`-prefixed wildcard patterns to caller-supplied
//! payloads. Labels are matched rightmost (TLD) first, so `www.example.com`
//! walks `com` -> `example` -> `www`. Exact registrations always beat
//! wildcards; among wildcards the deepest (most specific) suffix wins.

use std::collections::HashMap;

use crate::error::{Result, SniError};
use crate::types::{HostPattern, PatternKind};

/// One trie node per domain label.
///
/// A node may carry an exact payload, a wildcard payload, both, or neither
/// (a payload-less transit node only holding structure for deeper entries).
#[derive(Debug)]
struct TrieNode<T> {
    children: HashMap<String, TrieNode<T>>,
    exact: Option<T>,
    wildcard: Option<T>,
}

// Manual impl: derive(Default) would bound T: Default.
impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            exact: None,
            wildcard: None,
        }
    }
}

impl<T> TrieNode<T> {
    /// A dead node holds no payload and no children; it is pruned on remove.
    fn is_dead(&self) -> bool {
        self.exact.is_none() && self.wildcard.is_none() && self.children.is_empty()
    }
}

/// Hostname-to-payload routing trie with wildcard support.
///
/// The trie exclusively owns its node graph; payloads are owned values handed
/// back through [`remove`](SniTrie::remove) or [`clear_with`](SniTrie::clear_with).
/// There is no internal locking: callers must serialize mutation against
/// concurrent lookups (see [`SniRouter`](crate::router::SniRouter) for the
/// cached, handshake-facing layer).
#[derive(Debug)]
pub struct SniTrie<T> {
    root: TrieNode<T>,
    len: usize,
}

impl<T> Default for SniTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SniTrie<T> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
        }
    }

    /// Number of live registrations (exact and wildcard slots counted
    /// separately).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register a hostname or `*.`-prefixed wildcard pattern.
    ///
    /// Returns [`SniError::AlreadyRegistered`] if the targeted slot is
    /// occupied and [`SniError::InvalidPattern`] for malformed input. Failed
    /// inserts leave the trie untouched: a duplicate's full node path
    /// necessarily pre-exists, so the walk below creates nothing before the
    /// occupancy check fires.
    pub fn insert(&mut self, pattern: &str, payload: T) -> Result<()> {
        let pattern = HostPattern::parse(pattern)?;

        let mut node = &mut self.root;
        for label in pattern.labels() {
            node = node.children.entry(label.clone()).or_default();
        }

        let slot = match pattern.kind() {
            PatternKind::Exact => &mut node.exact,
            PatternKind::Wildcard => &mut node.wildcard,
        };
        if slot.is_some() {
            return Err(SniError::AlreadyRegistered(pattern.as_str().to_string()));
        }
        *slot = Some(payload);
        self.len += 1;
        Ok(())
    }

    /// Resolve a concrete (non-wildcard) server name to the most specific
    /// registered payload.
    ///
    /// Exact matches win over wildcards regardless of depth. A wildcard
    /// matches only strictly-deeper names: `*.google.com` covers
    /// `x.google.com` and `a.b.google.com` but not `google.com` itself.
    /// Matching is case-insensitive; empty or malformed names resolve to
    /// `None`.
    pub fn find(&self, server_name: &str) -> Option<&T> {
        // Reject malformed names before walking: the walk can dead-end on a
        // missing child and return a recorded wildcard without ever reaching
        // a later empty label. Covers the empty string too.
        if server_name.split('.').any(|label| label.is_empty()) {
            return None;
        }

        // Normalize to lowercase, allocating only when uppercase bytes are
        // present.
        let normalized;
        let name = if server_name.bytes().any(|b| b.is_ascii_uppercase()) {
            normalized = server_name.to_lowercase();
            normalized.as_str()
        } else {
            server_name
        };

        let mut node = &self.root;
        let mut best: Option<&T> = None;

        for label in name.rsplit('.') {
            // At least one unconsumed label remains below this node, so a
            // wildcard here covers the queried name. Deeper nodes overwrite
            // shallower candidates, keeping the most specific one.
            if let Some(payload) = node.wildcard.as_ref() {
                best = Some(payload);
            }
            match node.children.get(label) {
                Some(child) => node = child,
                None => return best,
            }
        }

        // The terminal node's own wildcard is not a candidate: wildcards
        // require at least one extra label of depth.
        node.exact.as_ref().or(best)
    }

    /// Unregister a hostname or pattern previously inserted verbatim.
    ///
    /// Clears only the slot matching the input form (exact vs wildcard) and
    /// returns its payload. Returns `None` when the path or slot is absent,
    /// including for unparseable input; failed removals mutate nothing.
    /// Nodes left childless and payload-less are pruned bottom-up along the
    /// removal path, never touching nodes with surviving data.
    pub fn remove(&mut self, pattern: &str) -> Option<T> {
        let pattern = HostPattern::parse(pattern).ok()?;
        let removed = Self::remove_at(&mut self.root, pattern.labels(), 0, pattern.kind())?;
        self.len -= 1;
        Some(removed)
    }

    fn remove_at(
        node: &mut TrieNode<T>,
        labels: &[String],
        depth: usize,
        kind: PatternKind,
    ) -> Option<T> {
        if depth == labels.len() {
            return match kind {
                PatternKind::Exact => node.exact.take(),
                PatternKind::Wildcard => node.wildcard.take(),
            };
        }

        let label = &labels[depth];
        let child = node.children.get_mut(label)?;
        let removed = Self::remove_at(child, labels, depth + 1, kind)?;

        // Prune on the way back up. The root is never reached here: only
        // children are candidates, so an empty trie keeps its root node.
        if child.is_dead() {
            node.children.remove(label);
        }
        Some(removed)
    }

    /// Tear down the trie, handing every live payload (exact and wildcard) to
    /// `f` exactly once. The trie is empty afterwards.
    pub fn clear_with<F>(&mut self, mut f: F)
    where
        F: FnMut(T),
    {
        let root = std::mem::take(&mut self.root);
        self.len = 0;
        Self::drain_node(root, &mut f);
    }

    /// Tear down the trie, dropping all payloads.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.len = 0;
    }

    fn drain_node<F>(node: TrieNode<T>, f: &mut F)
    where
        F: FnMut(T),
    {
        if let Some(payload) = node.exact {
            f(payload);
        }
        if let Some(payload) = node.wildcard {
            f(payload);
        }
        for (_, child) in node.children {
            Self::drain_node(child, f);
        }
    }
}
