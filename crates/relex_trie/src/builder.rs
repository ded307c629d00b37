//! Provisional prefix tree accumulating token-sequence registrations.
//!
//! Nodes live in one owned arena (`Vec<BuilderNode>`) addressed by `u32`
//! indices; the root group and every node's child group are index vectors
//! kept sorted by edge symbol at insertion time. That sort order is what
//! the compiled trie's binary search later relies on, so it is maintained
//! here rather than fixed up at compile time.

use relex_token::TokenKind;
use thiserror::Error;

/// One comparable, orderable unit of input matched at each trie edge.
pub type Symbol = char;

/// Arena index sentinel for an absent link (no parent, no such node).
pub(crate) const EMPTY: u32 = u32::MAX;

/// Handle to a node inside a [`TrieBuilder`].
///
/// Only meaningful for the builder that returned it; compiled tries use
/// their own [`NodeId`](crate::NodeId) space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BuilderNodeId(pub(crate) u32);

/// A sequence was already registered with a different kind.
///
/// The existing node is left untouched; `existing` is the kind it keeps
/// and `requested` the one that was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("sequence already registered as {existing:?}, rejected re-registration as {requested:?}")]
pub struct RegisterConflict {
    /// Terminal node of the conflicting sequence.
    pub node: BuilderNodeId,
    /// Kind the node already holds (unchanged).
    pub existing: TokenKind,
    /// Kind the rejected registration asked for.
    pub requested: TokenKind,
}

/// One provisional tree node.
#[derive(Debug)]
pub(crate) struct BuilderNode {
    /// Edge symbol leading from the parent to this node.
    pub(crate) symbol: Symbol,
    /// `TokenKind::INVALID` until some registration terminates here.
    pub(crate) kind: TokenKind,
    /// Arena index of the parent, `EMPTY` at root level.
    pub(crate) parent: u32,
    /// Child arena indices, sorted ascending by edge symbol.
    pub(crate) children: Vec<u32>,
}

/// Builder accumulating `sequence -> TokenKind` registrations.
///
/// Registration order never affects the final tree shape: each child group
/// is a sorted set keyed by edge symbol. Compile with
/// [`TokenTrie::compile`](crate::TokenTrie::compile), which consumes the
/// builder — changing the token set afterwards means building a new trie.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    nodes: Vec<BuilderNode>,
    /// Root-level arena indices, sorted ascending by edge symbol.
    roots: Vec<u32>,
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        TrieBuilder::default()
    }

    /// Register `sequence` as a complete token of kind `kind`.
    ///
    /// Walks the path, creating missing nodes (intermediate nodes are pure
    /// prefixes holding `TokenKind::INVALID`). At the terminal node:
    ///
    /// - no kind yet: the kind is set, `Ok`;
    /// - identical kind: no-op, `Ok` (idempotent);
    /// - different kind: node unchanged, `Err(RegisterConflict)`.
    ///
    /// `sequence` must be non-empty and `kind` must not be the invalid
    /// sentinel; both are debug-asserted contract preconditions.
    pub fn register(
        &mut self,
        sequence: &[Symbol],
        kind: TokenKind,
    ) -> Result<BuilderNodeId, RegisterConflict> {
        debug_assert!(!sequence.is_empty(), "token sequence must be non-empty");
        debug_assert!(
            kind.is_valid(),
            "cannot register the invalid sentinel as a token kind"
        );

        let mut current = EMPTY;
        for &symbol in sequence {
            current = self.child_or_insert(current, symbol);
        }
        self.claim(current, kind)
    }

    /// [`register`](Self::register) over the characters of `text`.
    pub fn register_str(
        &mut self,
        text: &str,
        kind: TokenKind,
    ) -> Result<BuilderNodeId, RegisterConflict> {
        let sequence: Vec<Symbol> = text.chars().collect();
        self.register(&sequence, kind)
    }

    /// Kind currently held by `id` (`TokenKind::INVALID` for pure prefixes).
    pub fn kind_of(&self, id: BuilderNodeId) -> TokenKind {
        self.nodes[id.0 as usize].kind
    }

    /// Total number of nodes, prefix nodes included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn roots(&self) -> &[u32] {
        &self.roots
    }

    pub(crate) fn node(&self, index: u32) -> &BuilderNode {
        &self.nodes[index as usize]
    }

    /// Find the child of `parent` (or the root-level node, if `parent` is
    /// `EMPTY`) reached by `symbol`, inserting a fresh prefix node if the
    /// edge does not exist yet. The group stays sorted.
    fn child_or_insert(&mut self, parent: u32, symbol: Symbol) -> u32 {
        let insert_at = {
            let nodes = &self.nodes;
            let group: &[u32] = if parent == EMPTY {
                &self.roots
            } else {
                &nodes[parent as usize].children
            };
            match group.binary_search_by_key(&symbol, |&i| nodes[i as usize].symbol) {
                Ok(found) => return group[found],
                Err(insert_at) => insert_at,
            }
        };

        let new_index = u32::try_from(self.nodes.len()).unwrap_or(EMPTY);
        debug_assert!(new_index != EMPTY, "builder arena exceeded u32 capacity");
        self.nodes.push(BuilderNode {
            symbol,
            kind: TokenKind::INVALID,
            parent,
            children: Vec::new(),
        });

        let group = if parent == EMPTY {
            &mut self.roots
        } else {
            &mut self.nodes[parent as usize].children
        };
        group.insert(insert_at, new_index);
        new_index
    }

    /// Resolve the terminal node's kind per the conflict rules.
    fn claim(&mut self, index: u32, kind: TokenKind) -> Result<BuilderNodeId, RegisterConflict> {
        let id = BuilderNodeId(index);
        let node = &mut self.nodes[index as usize];
        if node.kind == kind {
            Ok(id)
        } else if !node.kind.is_valid() {
            node.kind = kind;
            Ok(id)
        } else {
            Err(RegisterConflict {
                node: id,
                existing: node.kind,
                requested: kind,
            })
        }
    }
}
