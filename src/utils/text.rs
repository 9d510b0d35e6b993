//! Message normalization and letter arithmetic.
//!
//! Solitaire works on the 26 letters `A..=Z` numbered 1..=26. Anything else
//! in the input is dropped rather than rejected, and messages are padded
//! with `X` to whole five-letter groups, the way the cipher is worked by
//! hand.

/// Letters per output group.
pub const BLOCK_SIZE: usize = 5;

/// Letter used to pad a message to a whole number of groups.
pub const PAD: char = 'X';

const ALPHABET_LEN: u8 = 26;

/// Yields the ASCII letters of `text`, uppercased, dropping everything else.
pub fn letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
}

/// Returns the value of an uppercase letter: `A` = 1 .. `Z` = 26.
///
/// # Parameters
/// - `letter`: An ASCII uppercase letter, as produced by [`letters`].
pub fn ordinal(letter: char) -> u8 {
    debug_assert!(letter.is_ascii_uppercase(), "not an uppercase letter: {letter:?}");
    (letter as u8) - b'A' + 1
}

/// Returns the letter for a value in 1..=26.
pub fn from_ordinal(value: u8) -> char {
    debug_assert!((1..=ALPHABET_LEN).contains(&value), "letter value out of range: {value}");
    char::from(b'A' + value - 1)
}

/// Filters `text` to uppercase letters and pads it with `X` to a multiple of 5.
///
/// # Examples
///
/// ```
/// use pontifex::utils::text::normalize;
///
/// assert_eq!(normalize("Solitaire!"), "SOLITAIREX");
/// assert_eq!(normalize("KIRAK SFJAN"), "KIRAKSFJAN");
/// assert_eq!(normalize("--"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out: String = letters(text).collect();
    while !out.len().is_multiple_of(BLOCK_SIZE) {
        out.push(PAD);
    }
    out
}

/// Splits `text` into groups of five separated by a single space.
///
/// # Examples
///
/// ```
/// use pontifex::utils::text::group;
///
/// assert_eq!(group("KIRAKSFJAN"), "KIRAK SFJAN");
/// assert_eq!(group("ABC"), "ABC");
/// ```
pub fn group(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / BLOCK_SIZE);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && i.is_multiple_of(BLOCK_SIZE) {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Adds a keystream letter to a message letter: `A + A = B`, `Z + A = A`.
pub fn add(message: char, key: char) -> char {
    let sum = ordinal(message) + ordinal(key) - 1;
    from_ordinal(sum % ALPHABET_LEN + 1)
}

/// Subtracts a keystream letter from a cipher letter; the inverse of [`add`].
pub fn sub(cipher: char, key: char) -> char {
    let diff = ordinal(cipher) + ALPHABET_LEN - ordinal(key) - 1;
    from_ordinal(diff % ALPHABET_LEN + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_filters_and_uppercases() {
        let out: String = letters("Hello, Wörld 42!").collect();
        assert_eq!(out, "HELLOWRLD");
    }

    #[test]
    fn test_ordinal_bounds() {
        assert_eq!(ordinal('A'), 1);
        assert_eq!(ordinal('M'), 13);
        assert_eq!(ordinal('Z'), 26);
        assert_eq!(from_ordinal(1), 'A');
        assert_eq!(from_ordinal(26), 'Z');
    }

    #[test]
    fn test_normalize_pads_to_block() {
        assert_eq!(normalize("Solitaire!"), "SOLITAIREX");
        assert_eq!(normalize("a"), "AXXXX");
        assert_eq!(normalize("abcde"), "ABCDE");
        assert_eq!(normalize("do not use pc"), "DONOTUSEPC");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("The quick brown fox");
        assert_eq!(normalize(&once), once);
        assert_eq!(normalize(&group(&once)), once);
    }

    #[test]
    fn test_group() {
        assert_eq!(group(""), "");
        assert_eq!(group("ABCDE"), "ABCDE");
        assert_eq!(group("ABCDEFGHIJ"), "ABCDE FGHIJ");
        assert_eq!(group("ABCDEF"), "ABCDE F");
    }

    #[test]
    fn test_add() {
        assert_eq!(add('A', 'A'), 'B');
        assert_eq!(add('A', 'D'), 'E');
        assert_eq!(add('D', 'K'), 'O');
        assert_eq!(add('Z', 'A'), 'A');
        assert_eq!(add('Z', 'Z'), 'Z');
        assert_eq!(add('Y', 'Z'), 'Y');
    }

    #[test]
    fn test_sub_inverts_add() {
        for m in 'A'..='Z' {
            for k in 'A'..='Z' {
                assert_eq!(sub(add(m, k), k), m, "m={} k={}", m, k);
            }
        }
    }
}
