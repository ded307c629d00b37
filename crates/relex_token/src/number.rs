//! Numeric-literal prefix flags and digit/base rules.
//!
//! A number-prefix token (like `0x` or `0b`) tells the scanner two things:
//! which base the following digits are read in, and whether the bare prefix
//! with no digits after it is already a complete literal. Both are packed
//! into one flag byte carried in the prefix kind's detail field.

use bitflags::bitflags;

bitflags! {
    /// Properties of a numeric-literal prefix, packed into one byte.
    ///
    /// At most one `BASE_*` flag is expected to be set; when none is set
    /// (or an unrecognized combination leaks in), [`base`](Self::base)
    /// falls back to [`DEFAULT_BASE`](Self::DEFAULT_BASE).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NumberPrefixFlags: u8 {
        /// The bare prefix with no following digits is itself a complete
        /// literal. Without this flag, at least one digit must follow.
        const EMPTY_DIGITS_OK = 1 << 0;

        /// Digits are read in base 2.
        const BASE_2 = 1 << 1;
        /// Digits are read in base 4.
        const BASE_4 = 1 << 2;
        /// Digits are read in base 8.
        const BASE_8 = 1 << 3;
        /// Digits are read in base 10.
        const BASE_10 = 1 << 4;
        /// Digits are read in base 12.
        const BASE_12 = 1 << 5;
        /// Digits are read in base 16.
        const BASE_16 = 1 << 6;
    }
}

impl NumberPrefixFlags {
    /// Base used when no `BASE_*` flag is set.
    pub const DEFAULT_BASE: u32 = 10;

    /// The base this prefix implies, defaulting to 10 when unset.
    pub fn base(self) -> u32 {
        if self.contains(Self::BASE_2) {
            2
        } else if self.contains(Self::BASE_4) {
            4
        } else if self.contains(Self::BASE_8) {
            8
        } else if self.contains(Self::BASE_10) {
            10
        } else if self.contains(Self::BASE_12) {
            12
        } else if self.contains(Self::BASE_16) {
            16
        } else {
            Self::DEFAULT_BASE
        }
    }

    /// `true` when at least one digit must follow the prefix.
    #[inline]
    pub const fn requires_digits(self) -> bool {
        !self.contains(Self::EMPTY_DIGITS_OK)
    }
}

/// Is `symbol` a valid digit in `base`?
///
/// Digit values are `0`–`9` for `'0'..='9'` and `10`–`15` for `'a'..='f'`
/// / `'A'..='F'`; anything else is not a digit. The symbol is allowed iff
/// its value is strictly below `base`, so `'F'` passes in base 16 but not
/// in base 10.
#[inline]
pub fn is_digit_allowed(symbol: char, base: u32) -> bool {
    symbol.to_digit(16).is_some_and(|value| value < base)
}

/// Pick the effective base: `explicit` when positive, else `default`.
#[inline]
pub const fn base_or_default(explicit: u32, default: u32) -> u32 {
    if explicit > 0 {
        explicit
    } else {
        default
    }
}

#[cfg(test)]
mod tests;
