//! Error types for the Pontifex library.
//!
//! The cipher itself never fails on caller text: anything that is not a
//! letter is filtered out before use. Errors only arise when a caller hands
//! in a deck that is not a permutation of the 54 cards, or when the
//! configuration layer cannot read its files.

use thiserror::Error;

use crate::card::Card;

/// Errors produced by the Pontifex library.
#[derive(Debug, Error)]
pub enum PontifexError {
    /// A deck was built from a sequence that does not hold exactly 54 cards.
    #[error("deck must hold exactly 54 cards, got {len}")]
    InvalidDeckSize { len: usize },

    /// A deck was built from a sequence that repeats a card.
    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),

    /// A ranked card carries a rank outside 1..=13.
    #[error("card {0} has a rank outside 1..=13")]
    InvalidCard(Card),

    /// The configuration file is not valid TOML for [`PontifexConfig`](crate::config::PontifexConfig).
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PontifexResult<T> = Result<T, PontifexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn test_display_invalid_deck_size() {
        let err = PontifexError::InvalidDeckSize { len: 52 };
        assert_eq!(format!("{}", err), "deck must hold exactly 54 cards, got 52");
    }

    #[test]
    fn test_display_duplicate_card() {
        let err = PontifexError::DuplicateCard(Card::JokerB);
        assert_eq!(format!("{}", err), "card B🃏 appears more than once in the deck");

        let err = PontifexError::DuplicateCard(Card::Ranked {
            rank: 12,
            suit: Suit::Hearts,
        });
        assert_eq!(format!("{}", err), "card Q♥ appears more than once in the deck");
    }

    #[test]
    fn test_display_config() {
        let err = PontifexError::Config("expected `=`".to_string());
        assert_eq!(format!("{}", err), "config error: expected `=`");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PontifexError = io.into();
        assert!(matches!(err, PontifexError::Io(_)));
    }
}
