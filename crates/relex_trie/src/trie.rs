//! Flat compiled trie and its query operations.
//!
//! [`TokenTrie::compile`] flattens a [`TrieBuilder`] in two breadth-first
//! passes: pass 1 assigns every builder node a flat index and level in BFS
//! order, pass 2 re-walks that order and emits nodes with resolved parent,
//! first-child, and sibling-group fields. BFS guarantees each sibling group
//! lands contiguously, in the ascending symbol order the builder maintained,
//! so one `(group_start, group_len)` pair describes the whole group.
//!
//! # Group search
//!
//! Matching one symbol means searching one sibling group. Groups at or
//! above [`BINARY_SEARCH_MIN`] are binary-searched; smaller groups are
//! scanned linearly with an early exit the moment a sibling's symbol
//! exceeds the probe (the group is sorted, so nothing later can match).
//! Both strategies return identical results on every input, enforced by
//! a property test over arbitrary groups and probes.

use std::collections::VecDeque;

use relex_token::TokenKind;

use crate::builder::{Symbol, TrieBuilder, EMPTY};

/// Sibling groups at or above this size are binary-searched; smaller
/// groups use the early-exit linear scan. Operator alphabets keep most
/// groups tiny, so the linear path is the common case.
const BINARY_SEARCH_MIN: usize = 8;

/// Index of a node inside a compiled [`TokenTrie`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of this node in the flat array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of the compiled flat array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TrieNode {
    /// Edge symbol leading from the parent to this node.
    pub(crate) symbol: Symbol,
    /// `TokenKind::INVALID` on pure prefix nodes.
    pub(crate) kind: TokenKind,
    /// Flat index of the parent; `EMPTY` at root level.
    pub(crate) parent: u32,
    /// Flat index of the first child; `EMPTY` for leaves.
    pub(crate) first_child: u32,
    /// Start of the sibling group this node belongs to.
    pub(crate) group_start: u32,
    /// Size of that sibling group (shared by all its members).
    pub(crate) group_len: u32,
    /// Depth below the root group (roots are level 0). Diagnostic.
    pub(crate) level: u32,
}

/// Immutable, search-optimized token trie.
///
/// Produced once by [`compile`](Self::compile); read-only thereafter, so
/// shared references can be handed to any number of threads. Queries never
/// allocate and never fail exceptionally — a miss is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenTrie {
    nodes: Vec<TrieNode>,
}

impl TokenTrie {
    /// Flatten `builder` into the compiled array.
    ///
    /// Consumes the builder: the provisional tree has no further use once
    /// flattened, and taking it by value makes the compile-exactly-once
    /// lifecycle a move rather than a convention. An empty builder yields
    /// an empty trie.
    pub fn compile(builder: TrieBuilder) -> TokenTrie {
        // Pass 1: breadth-first index and level assignment.
        // `order` is the emission order; `flat_of[builder index]` maps into it.
        let mut order: Vec<(u32, u32)> = Vec::with_capacity(builder.node_count());
        let mut flat_of: Vec<u32> = vec![EMPTY; builder.node_count()];
        let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
        for &root in builder.roots() {
            queue.push_back((root, 0));
        }
        while let Some((index, level)) = queue.pop_front() {
            flat_of[index as usize] = u32::try_from(order.len()).unwrap_or(EMPTY);
            order.push((index, level));
            for &child in &builder.node(index).children {
                queue.push_back((child, level + 1));
            }
        }

        // Pass 2: emit nodes in the same order, resolving links through
        // `flat_of`. A node's sibling group is described by its parent's
        // child list: the group starts at the flat index of the first
        // child and spans the whole list.
        let mut nodes = Vec::with_capacity(order.len());
        for &(index, level) in &order {
            let source = builder.node(index);
            let first_child = source
                .children
                .first()
                .map_or(EMPTY, |&child| flat_of[child as usize]);
            let (group_start, group_len) = if source.parent == EMPTY {
                (0, u32::try_from(builder.roots().len()).unwrap_or(EMPTY))
            } else {
                let siblings = &builder.node(source.parent).children;
                (
                    flat_of[siblings[0] as usize],
                    u32::try_from(siblings.len()).unwrap_or(EMPTY),
                )
            };
            let parent = if source.parent == EMPTY {
                EMPTY
            } else {
                flat_of[source.parent as usize]
            };
            nodes.push(TrieNode {
                symbol: source.symbol,
                kind: source.kind,
                parent,
                first_child,
                group_start,
                group_len,
                level,
            });
        }
        TokenTrie { nodes }
    }

    /// Match `symbol` against the root-level sibling group.
    pub fn find_first(&self, symbol: Symbol) -> Option<NodeId> {
        let root_len = self.nodes.first().map_or(0, |node| node.group_len);
        self.find_in_group(0, root_len, symbol)
    }

    /// Match `symbol` against the children of `current`.
    ///
    /// With `current == None` this is [`find_first`](Self::find_first);
    /// when `current` is a leaf the result is immediately `None`.
    pub fn find_next(&self, current: Option<NodeId>, symbol: Symbol) -> Option<NodeId> {
        let Some(current) = current else {
            return self.find_first(symbol);
        };
        let node = &self.nodes[current.index()];
        if node.first_child == EMPTY {
            return None;
        }
        let first = &self.nodes[node.first_child as usize];
        debug_assert_eq!(
            first.group_start, node.first_child,
            "first child must open its sibling group"
        );
        self.find_in_group(first.group_start, first.group_len, symbol)
    }

    /// Match an entire symbol sequence from the root.
    ///
    /// Stops at the first miss. An empty sequence yields `None`: there is
    /// no node for "nothing matched yet".
    pub fn traverse(&self, symbols: impl IntoIterator<Item = Symbol>) -> Option<NodeId> {
        let mut current = None;
        for symbol in symbols {
            current = Some(self.find_next(current, symbol)?);
        }
        current
    }

    /// Walk parent links from `from` up to a root-level node, invoking
    /// `visit` with each edge symbol in leaf-to-root order.
    ///
    /// Callers wanting the forward sequence collect and reverse.
    pub fn back_trace(&self, from: NodeId, mut visit: impl FnMut(Symbol)) {
        let mut index = from.0;
        while index != EMPTY {
            let node = &self.nodes[index as usize];
            visit(node.symbol);
            index = node.parent;
        }
    }

    /// Kind stored at `id` (`TokenKind::INVALID` for pure prefixes).
    #[inline]
    pub fn kind_of(&self, id: NodeId) -> TokenKind {
        self.nodes[id.index()].kind
    }

    /// Depth of `id` below the root group (roots are level 0).
    #[inline]
    pub fn level_of(&self, id: NodeId) -> u32 {
        self.nodes[id.index()].level
    }

    /// Total number of nodes, prefix nodes included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Search the sibling group `[start, start + len)` for `symbol`,
    /// dispatching on group size.
    fn find_in_group(&self, start: u32, len: u32, symbol: Symbol) -> Option<NodeId> {
        let group = &self.nodes[start as usize..(start + len) as usize];
        let offset = if group.len() >= BINARY_SEARCH_MIN {
            binary_find(group, symbol)
        } else {
            linear_find(group, symbol)
        }?;
        Some(NodeId(start + u32::try_from(offset).unwrap_or(EMPTY)))
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }
}

/// Scan a sorted sibling group front to back, bailing out as soon as a
/// sibling's symbol exceeds the probe.
fn linear_find(group: &[TrieNode], symbol: Symbol) -> Option<usize> {
    for (offset, node) in group.iter().enumerate() {
        if node.symbol == symbol {
            return Some(offset);
        }
        if node.symbol > symbol {
            return None;
        }
    }
    None
}

/// Binary-search a sorted sibling group. Must agree with [`linear_find`]
/// on every input.
fn binary_find(group: &[TrieNode], symbol: Symbol) -> Option<usize> {
    group.binary_search_by_key(&symbol, |node| node.symbol).ok()
}
