use pretty_assertions::assert_eq;

use super::*;
use crate::number::NumberPrefixFlags;

// === Packed layout ===

#[test]
fn kind_is_four_bytes() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 4);
}

#[test]
fn class_bytes_occupy_semantic_ranges() {
    // Plain kinds live below 0x0100_0000.
    assert_eq!(TokenKind::plain(0).raw(), 0x0000_0000);
    assert_eq!(TokenKind::plain(42).raw(), 0x0000_002A);

    // Comment kinds carry class 0x01 and the flavor in the detail byte.
    assert_eq!(
        TokenKind::comment(1, CommentKind::SingleLine).raw(),
        0x0100_0001
    );
    assert_eq!(
        TokenKind::comment(1, CommentKind::MultiLineStart).raw(),
        0x0101_0001
    );
    assert_eq!(
        TokenKind::comment(1, CommentKind::MultiLineEnd).raw(),
        0x0102_0001
    );

    // Number-prefix kinds carry class 0x02 and the flag byte.
    let hex = TokenKind::number_prefix(3, NumberPrefixFlags::BASE_16);
    assert_eq!(hex.raw(), 0x0240_0003);
}

#[test]
fn invalid_is_all_ones_and_unconstructible() {
    assert_eq!(TokenKind::INVALID.raw(), u32::MAX);
    assert!(!TokenKind::INVALID.is_valid());

    // Even the extreme constructor inputs stay clear of the sentinel.
    assert!(TokenKind::plain(u16::MAX).is_valid());
    assert!(TokenKind::comment(u16::MAX, CommentKind::MultiLineEnd).is_valid());
    assert!(TokenKind::number_prefix(u16::MAX, NumberPrefixFlags::all()).is_valid());
}

#[test]
fn same_id_different_class_are_distinct() {
    let plain = TokenKind::plain(7);
    let comment = TokenKind::comment(7, CommentKind::SingleLine);
    let prefix = TokenKind::number_prefix(7, NumberPrefixFlags::BASE_2);
    assert_ne!(plain, comment);
    assert_ne!(comment, prefix);
    assert_ne!(plain, prefix);
    assert_eq!(plain.id(), 7);
    assert_eq!(comment.id(), 7);
    assert_eq!(prefix.id(), 7);
}

// === Class decoding ===

#[test]
fn class_round_trips() {
    assert_eq!(TokenKind::plain(9).class(), TokenClass::Plain);
    assert_eq!(
        TokenKind::comment(9, CommentKind::MultiLineStart).class(),
        TokenClass::Comment(CommentKind::MultiLineStart)
    );
    assert_eq!(
        TokenKind::number_prefix(9, NumberPrefixFlags::BASE_8).class(),
        TokenClass::NumberPrefix(NumberPrefixFlags::BASE_8)
    );
}

// === Comment predicates ===

#[test]
fn comment_predicates_classify_line_comment() {
    let line = TokenKind::comment(0, CommentKind::SingleLine);
    assert!(line.is_comment());
    assert!(line.is_single_line_comment());
    assert!(!line.is_multi_line_comment_start());
    assert!(!line.is_multi_line_comment_end());
    assert_eq!(line.comment_kind(), Some(CommentKind::SingleLine));
}

#[test]
fn comment_predicates_classify_block_delimiters() {
    let start = TokenKind::comment(1, CommentKind::MultiLineStart);
    let end = TokenKind::comment(2, CommentKind::MultiLineEnd);
    assert!(start.is_multi_line_comment_start());
    assert!(!start.is_multi_line_comment_end());
    assert!(end.is_multi_line_comment_end());
    assert!(!end.is_single_line_comment());
}

#[test]
fn non_comment_kinds_are_not_comments() {
    let shl = TokenKind::plain(3);
    assert!(!shl.is_comment());
    assert_eq!(shl.comment_kind(), None);
    assert!(!shl.is_single_line_comment());

    let hex = TokenKind::number_prefix(0, NumberPrefixFlags::BASE_16);
    assert!(!hex.is_comment());
}

// === Number-prefix decoding ===

#[test]
fn number_prefix_flags_round_trip() {
    let flags = NumberPrefixFlags::BASE_16 | NumberPrefixFlags::EMPTY_DIGITS_OK;
    let kind = TokenKind::number_prefix(5, flags);
    assert_eq!(kind.number_prefix_flags(), Some(flags));
}

#[test]
fn non_prefix_kinds_have_no_flags() {
    assert_eq!(TokenKind::plain(5).number_prefix_flags(), None);
    assert_eq!(
        TokenKind::comment(5, CommentKind::SingleLine).number_prefix_flags(),
        None
    );
}

// === Debug rendering ===

#[test]
fn debug_names_the_class() {
    assert_eq!(format!("{:?}", TokenKind::INVALID), "TokenKind(INVALID)");
    assert_eq!(format!("{:?}", TokenKind::plain(4)), "TokenKind(plain #4)");
    assert_eq!(
        format!("{:?}", TokenKind::comment(0, CommentKind::SingleLine)),
        "TokenKind(SingleLine #0)"
    );
    assert_eq!(
        format!("{:?}", TokenKind::number_prefix(1, NumberPrefixFlags::BASE_16)),
        "TokenKind(NumberPrefix base=16 #1)"
    );
}
