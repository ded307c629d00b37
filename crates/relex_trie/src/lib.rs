//! Compile-then-query token-sequence trie.
//!
//! The matching core of the relex tokenizer: a fixed set of multi-symbol
//! tokens (operators, punctuation, comment delimiters) is registered once,
//! compiled into a flat search-optimized array, and then queried one symbol
//! at a time as the scanner advances.
//!
//! # Pipeline
//!
//! 1. [`TrieBuilder`] — accumulate `sequence -> TokenKind` registrations
//!    into a provisional arena tree. Registration order never affects the
//!    result; child groups are kept sorted by edge symbol.
//! 2. [`TokenTrie::compile`] — flatten the builder (consumed by value) into
//!    an immutable node array via two breadth-first passes.
//! 3. Query — [`TokenTrie::find_first`] / [`find_next`](TokenTrie::find_next)
//!    step one symbol at a time; [`traverse`](TokenTrie::traverse) runs a
//!    whole sequence; [`back_trace`](TokenTrie::back_trace) reconstructs a
//!    matched sequence from its terminal node.
//!
//! # Longest match
//!
//! The scanner drives longest-match itself: it keeps calling `find_next`
//! while matches continue, remembering the last node whose kind was valid,
//! and falls back to that node when the next symbol misses. Every miss is
//! an ordinary `None`, never an error.
//!
//! ```
//! use relex_token::TokenKind;
//! use relex_trie::{TokenTrie, TrieBuilder};
//!
//! let mut builder = TrieBuilder::new();
//! builder.register_str("<", TokenKind::plain(0))?;
//! builder.register_str("<<", TokenKind::plain(1))?;
//! let trie = TokenTrie::compile(builder);
//!
//! let node = trie.traverse("<<".chars());
//! assert_eq!(node.map(|n| trie.kind_of(n)), Some(TokenKind::plain(1)));
//! # Ok::<(), relex_trie::RegisterConflict>(())
//! ```

mod builder;
mod trie;

pub use builder::{BuilderNodeId, RegisterConflict, Symbol, TrieBuilder};
pub use trie::{NodeId, TokenTrie};
