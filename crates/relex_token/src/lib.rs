//! Token-kind encoding and classification for the relex tokenizer.
//!
//! A [`TokenKind`] is the opaque payload attached to a complete symbol
//! sequence in the token trie (see the `relex_trie` crate). The trie never
//! interprets kinds; it only stores and compares them. This crate owns the
//! interpretation: which kinds denote comment delimiters, which denote
//! numeric-literal prefixes, and the digit/base rules the scanner applies
//! after matching such a prefix.
//!
//! # Encoding
//!
//! A kind packs a class byte, a class-specific detail byte, and a 16-bit
//! user id into one `u32`:
//!
//! ```text
//! bits 31..24   class   (plain / comment / number prefix)
//! bits 23..16   detail  (comment kind, or number-prefix flag byte)
//! bits 15..0    id      (distinguishes kinds of the same class)
//! ```
//!
//! The all-ones value is reserved as [`TokenKind::INVALID`] — the sentinel
//! the trie stores on pure prefix nodes that are not themselves complete
//! tokens. No constructor can produce it, so a valid kind never collides
//! with the sentinel.
//!
//! This crate has no relex_* dependencies, so external tools (highlighters,
//! formatters) can classify kinds without pulling in the matching engine.

mod kind;
mod number;

pub use kind::{CommentKind, TokenClass, TokenKind};
pub use number::{base_or_default, is_digit_allowed, NumberPrefixFlags};
