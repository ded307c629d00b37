//! Packed token-kind representation and its decoded class view.

use std::fmt;

use crate::number::NumberPrefixFlags;

const CLASS_SHIFT: u32 = 24;
const DETAIL_SHIFT: u32 = 16;

const CLASS_MASK: u32 = 0xFF00_0000;
const DETAIL_MASK: u32 = 0x00FF_0000;
const ID_MASK: u32 = 0x0000_FFFF;

const CLASS_PLAIN: u32 = 0x00;
const CLASS_COMMENT: u32 = 0x01;
const CLASS_NUMBER_PREFIX: u32 = 0x02;

/// Which flavor of comment delimiter a comment kind denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommentKind {
    /// Comment runs to end of line (e.g. `//`, `#`).
    SingleLine = 0,
    /// Opens a block comment (e.g. `/*`).
    MultiLineStart = 1,
    /// Closes a block comment (e.g. `*/`).
    MultiLineEnd = 2,
}

/// Decoded view of a [`TokenKind`]'s class byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenClass {
    /// An ordinary token (operator, punctuation, keyword delimiter).
    Plain,
    /// A comment delimiter.
    Comment(CommentKind),
    /// A numeric-literal prefix (e.g. `0x`), carrying base and digit rules.
    NumberPrefix(NumberPrefixFlags),
}

/// Opaque identifier for what a complete symbol sequence means.
///
/// Stored by the token trie on every node; [`TokenKind::INVALID`] marks
/// nodes that are reachable prefixes but not complete tokens. Compared
/// only for equality by the trie — all interpretation happens through
/// [`TokenKind::class`] and the predicates below.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenKind(u32);

impl TokenKind {
    /// Sentinel: "not a complete token". The trie stores this on pure
    /// prefix nodes. Constructors can never produce this value.
    pub const INVALID: TokenKind = TokenKind(u32::MAX);

    /// An ordinary token kind with a caller-chosen id.
    #[inline]
    pub const fn plain(id: u16) -> TokenKind {
        TokenKind((CLASS_PLAIN << CLASS_SHIFT) | id as u32)
    }

    /// A comment-delimiter kind.
    #[inline]
    pub const fn comment(id: u16, kind: CommentKind) -> TokenKind {
        TokenKind((CLASS_COMMENT << CLASS_SHIFT) | ((kind as u32) << DETAIL_SHIFT) | id as u32)
    }

    /// A numeric-literal-prefix kind carrying its base and digit rules.
    #[inline]
    pub const fn number_prefix(id: u16, flags: NumberPrefixFlags) -> TokenKind {
        TokenKind(
            (CLASS_NUMBER_PREFIX << CLASS_SHIFT)
                | ((flags.bits() as u32) << DETAIL_SHIFT)
                | id as u32,
        )
    }

    /// `true` for every kind except the [`INVALID`](Self::INVALID) sentinel.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// The raw packed value, for embedders that persist kinds.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The 16-bit user id this kind was constructed with.
    #[inline]
    pub const fn id(self) -> u16 {
        (self.0 & ID_MASK) as u16
    }

    /// Decode the class byte into its tagged view.
    ///
    /// The sentinel decodes to [`TokenClass::Plain`]; callers are expected
    /// to check [`is_valid`](Self::is_valid) first where it matters.
    pub fn class(self) -> TokenClass {
        match (self.0 & CLASS_MASK) >> CLASS_SHIFT {
            CLASS_COMMENT => TokenClass::Comment(self.decode_comment_kind()),
            CLASS_NUMBER_PREFIX => TokenClass::NumberPrefix(
                NumberPrefixFlags::from_bits_truncate(self.detail_byte()),
            ),
            _ => TokenClass::Plain,
        }
    }

    /// `true` iff this kind denotes a comment delimiter.
    #[inline]
    pub const fn is_comment(self) -> bool {
        (self.0 & CLASS_MASK) >> CLASS_SHIFT == CLASS_COMMENT
    }

    /// The comment flavor, or `None` outside the comment class.
    pub fn comment_kind(self) -> Option<CommentKind> {
        if self.is_comment() {
            Some(self.decode_comment_kind())
        } else {
            None
        }
    }

    /// `true` iff this kind is a to-end-of-line comment delimiter.
    #[inline]
    pub fn is_single_line_comment(self) -> bool {
        self.comment_kind() == Some(CommentKind::SingleLine)
    }

    /// `true` iff this kind opens a block comment.
    #[inline]
    pub fn is_multi_line_comment_start(self) -> bool {
        self.comment_kind() == Some(CommentKind::MultiLineStart)
    }

    /// `true` iff this kind closes a block comment.
    #[inline]
    pub fn is_multi_line_comment_end(self) -> bool {
        self.comment_kind() == Some(CommentKind::MultiLineEnd)
    }

    /// The number-prefix flag byte, or `None` outside the prefix class.
    pub fn number_prefix_flags(self) -> Option<NumberPrefixFlags> {
        if (self.0 & CLASS_MASK) >> CLASS_SHIFT == CLASS_NUMBER_PREFIX {
            Some(NumberPrefixFlags::from_bits_truncate(self.detail_byte()))
        } else {
            None
        }
    }

    #[inline]
    const fn detail_byte(self) -> u8 {
        ((self.0 & DETAIL_MASK) >> DETAIL_SHIFT) as u8
    }

    fn decode_comment_kind(self) -> CommentKind {
        // Constructors only emit ordinals 0..=2; anything else would mean a
        // hand-forged raw value, which we map to the nearest safe reading.
        match self.detail_byte() {
            0 => CommentKind::SingleLine,
            1 => CommentKind::MultiLineStart,
            _ => CommentKind::MultiLineEnd,
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "TokenKind(INVALID)");
        }
        match self.class() {
            TokenClass::Plain => write!(f, "TokenKind(plain #{})", self.id()),
            TokenClass::Comment(kind) => write!(f, "TokenKind({kind:?} #{})", self.id()),
            TokenClass::NumberPrefix(flags) => {
                write!(f, "TokenKind(NumberPrefix base={} #{})", flags.base(), self.id())
            }
        }
    }
}

#[cfg(test)]
mod tests;
