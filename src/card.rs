//! Playing cards as used by the Solitaire cipher.
//!
//! A deck holds 52 ranked cards and two jokers. The jokers are separate
//! identities: `JokerA` and `JokerB` move by different amounts each round,
//! so they never compare equal.

use std::fmt;

use crate::error::{PontifexError, PontifexResult};

/// Number of ranks per suit.
pub const RANKS: u8 = 13;

/// Value shared by both jokers when counting.
pub const JOKER_VALUE: u8 = 53;

/// Card suits in bridge order, which is also the counting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in bridge order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Offset added to a card's rank to get its counting value.
    fn offset(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => RANKS,
            Suit::Hearts => 2 * RANKS,
            Suit::Spades => 3 * RANKS,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

/// One of the 54 cards of a Solitaire deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    /// A regular card with `rank` in 1..=13 (ace low, king 13).
    Ranked { rank: u8, suit: Suit },
    /// The "A" joker, moved down one card per round.
    JokerA,
    /// The "B" joker, moved down two cards per round.
    JokerB,
}

impl Card {
    /// Builds a ranked card, rejecting ranks outside 1..=13.
    ///
    /// # Errors
    /// [`PontifexError::InvalidCard`] if `rank` is 0 or above 13.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontifex::card::{Card, Suit};
    ///
    /// assert_eq!(Card::ranked(12, Suit::Hearts).unwrap().to_string(), "Q♥");
    /// assert!(Card::ranked(14, Suit::Hearts).is_err());
    /// ```
    pub fn ranked(rank: u8, suit: Suit) -> PontifexResult<Card> {
        let card = Card::Ranked { rank, suit };
        if card.is_well_formed() {
            Ok(card)
        } else {
            Err(PontifexError::InvalidCard(card))
        }
    }

    /// Returns the counting value used for cuts and keystream lookup.
    ///
    /// Clubs count 1..=13, diamonds 14..=26, hearts 27..=39, spades 40..=52.
    /// Either joker counts 53.
    ///
    /// # Panics
    /// Debug builds panic on a ranked card whose rank is outside 1..=13;
    /// use [`Card::ranked`] to build cards from untrusted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontifex::card::{Card, Suit};
    ///
    /// assert_eq!(Card::Ranked { rank: 1, suit: Suit::Clubs }.value(), 1);
    /// assert_eq!(Card::Ranked { rank: 2, suit: Suit::Hearts }.value(), 28);
    /// assert_eq!(Card::JokerB.value(), 53);
    /// ```
    pub fn value(self) -> u8 {
        match self {
            Card::Ranked { rank, suit } => {
                debug_assert!(self.is_well_formed(), "card {self} has a rank outside 1..=13");
                rank.wrapping_add(suit.offset())
            }
            Card::JokerA | Card::JokerB => JOKER_VALUE,
        }
    }

    /// Returns the keystream letter for this card, or `None` for a joker.
    ///
    /// Clubs and hearts map rank 1..=13 to `A..=M`; diamonds and spades map
    /// rank 1..=13 to `N..=Z`. Returns `None` as well for a rank outside
    /// 1..=13.
    pub fn letter(self) -> Option<char> {
        match self {
            Card::Ranked { rank, .. } if !(1..=RANKS).contains(&rank) => None,
            Card::Ranked { rank, suit } => {
                let ordinal = match suit {
                    Suit::Clubs | Suit::Hearts => rank,
                    Suit::Diamonds | Suit::Spades => rank + RANKS,
                };
                Some(char::from(b'A' + ordinal - 1))
            }
            Card::JokerA | Card::JokerB => None,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::JokerA | Card::JokerB)
    }

    /// Returns `true` if a ranked card carries a rank in 1..=13.
    pub(crate) fn is_well_formed(self) -> bool {
        match self {
            Card::Ranked { rank, .. } => (1..=RANKS).contains(&rank),
            Card::JokerA | Card::JokerB => true,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Card::Ranked { rank, suit } => {
                let rank = match rank {
                    1 => "A".to_string(),
                    11 => "J".to_string(),
                    12 => "Q".to_string(),
                    13 => "K".to_string(),
                    n => n.to_string(),
                };
                format!("{}{}", rank, suit.symbol())
            }
            Card::JokerA => "A🃏".to_string(),
            Card::JokerB => "B🃏".to_string(),
        };
        f.pad(&label)
    }
}
