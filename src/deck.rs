//! The 54-card deck and its primitive moves.
//!
//! A [`Deck`] is always a permutation of the same 54 cards. Every operation
//! here only repositions cards; none creates, drops or duplicates one. The
//! three moves (relocate, count cut, triple cut) are all the Solitaire
//! algorithm needs.

use std::fmt;

use crate::card::{Card, Suit, RANKS};
use crate::error::{PontifexError, PontifexResult};

/// Number of cards in a Solitaire deck (52 ranked cards + 2 jokers).
pub const DECK_SIZE: usize = 54;

/// Index of the bottom card. A count cut never moves it.
const BOTTOM: usize = DECK_SIZE - 1;

/// Cards per row when a deck is rendered as text.
const ROW_WIDTH: usize = 9;

/// An ordered permutation of the 54 Solitaire cards.
///
/// Index 0 is the top of the deck (the first card dealt face up), index 53
/// is the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a deck in the fresh order: clubs, diamonds, hearts, spades,
    /// each ace to king, followed by joker A and joker B.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontifex::card::{Card, Suit};
    /// use pontifex::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.top(), Card::Ranked { rank: 1, suit: Suit::Clubs });
    /// assert_eq!(deck.bottom(), Card::JokerB);
    /// ```
    pub fn new() -> Self {
        let mut cards = [Card::JokerA; DECK_SIZE];
        let ranked = Suit::ALL
            .iter()
            .flat_map(|&suit| (1..=RANKS).map(move |rank| Card::Ranked { rank, suit }));
        for (slot, card) in cards.iter_mut().zip(ranked) {
            *slot = card;
        }
        cards[BOTTOM - 1] = Card::JokerA;
        cards[BOTTOM] = Card::JokerB;
        Deck { cards }
    }

    /// Builds a deck from an explicit card order.
    ///
    /// # Errors
    /// - [`PontifexError::InvalidDeckSize`] if `cards` is not 54 long.
    /// - [`PontifexError::InvalidCard`] if a ranked card has a rank outside 1..=13.
    /// - [`PontifexError::DuplicateCard`] if a card appears twice.
    pub fn from_cards(cards: &[Card]) -> PontifexResult<Self> {
        let cards: [Card; DECK_SIZE] = cards
            .try_into()
            .map_err(|_| PontifexError::InvalidDeckSize { len: cards.len() })?;
        let deck = Deck { cards };
        deck.validate()?;
        Ok(deck)
    }

    /// Checks that the deck holds each of the 54 cards exactly once.
    pub fn validate(&self) -> PontifexResult<()> {
        let mut seen = [false; DECK_SIZE];
        for &card in &self.cards {
            if !card.is_well_formed() {
                return Err(PontifexError::InvalidCard(card));
            }
            let slot = &mut seen[identity(card)];
            if *slot {
                return Err(PontifexError::DuplicateCard(card));
            }
            *slot = true;
        }
        Ok(())
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    pub fn top(&self) -> Card {
        self.cards[0]
    }

    pub fn bottom(&self) -> Card {
        self.cards[BOTTOM]
    }

    /// Returns the 0-based position of `card`.
    ///
    /// # Panics
    /// Panics if `card` is not one of the 54 cards, which only happens for a
    /// ranked card built with a rank outside 1..=13 (see [`Card::ranked`]).
    pub fn position(&self, card: Card) -> usize {
        match self.cards.iter().position(|&c| c == card) {
            Some(index) => index,
            None => panic!("card {card} is not in the deck"),
        }
    }

    /// Moves `card` down by `offset` places, wrapping past the bottom.
    ///
    /// The card is lifted out (leaving 53 cards) and reinserted at 0-based
    /// index `((i + offset - 1) mod 53) + 1`, where `i` was its index. A card
    /// never wraps into the top slot: moving the bottom card down one puts
    /// it just below the top card.
    ///
    /// # Panics
    /// Panics if `offset` is 0 or `card` is not in the deck.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontifex::card::Card;
    /// use pontifex::deck::Deck;
    ///
    /// let mut deck = Deck::new();
    /// deck.relocate(Card::JokerB, 1);
    /// assert_eq!(deck.cards()[1], Card::JokerB);
    /// ```
    pub fn relocate(&mut self, card: Card, offset: usize) {
        assert!(offset > 0, "relocation offset must be positive");
        let from = self.position(card);
        let to = (from + offset - 1) % BOTTOM + 1;
        if to > from {
            self.cards[from..=to].rotate_left(1);
        } else if to < from {
            self.cards[to..=from].rotate_right(1);
        }
    }

    /// Moves the top `n` cards to sit directly above the bottom card.
    ///
    /// The bottom card stays put. `n == 53` leaves the order unchanged.
    ///
    /// # Panics
    /// Panics if `n > 53`.
    pub fn count_cut(&mut self, n: usize) {
        assert!(n <= BOTTOM, "count cut of {n} exceeds {BOTTOM} cards");
        self.cards[..BOTTOM].rotate_left(n);
    }

    /// Swaps the cards above the first marker with the cards below the second.
    ///
    /// The markers and everything between them stay together in the middle.
    /// The two markers may be given in either order.
    ///
    /// # Panics
    /// Panics if either marker is not in the deck.
    pub fn triple_cut(&mut self, first: Card, second: Card) {
        let (mut upper, mut lower) = (self.position(first), self.position(second));
        if upper > lower {
            std::mem::swap(&mut upper, &mut lower);
        }
        let below = &self.cards[lower + 1..];
        let middle = &self.cards[upper..=lower];
        let above = &self.cards[..upper];

        let mut cut = [Card::JokerA; DECK_SIZE];
        let (head, rest) = cut.split_at_mut(below.len());
        let (mid, tail) = rest.split_at_mut(middle.len());
        head.copy_from_slice(below);
        mid.copy_from_slice(middle);
        tail.copy_from_slice(above);
        self.cards = cut;
    }
}

/// Maps each card to a distinct slot in 0..54.
fn identity(card: Card) -> usize {
    match card {
        Card::Ranked { .. } => usize::from(card.value()) - 1,
        Card::JokerA => BOTTOM - 1,
        Card::JokerB => BOTTOM,
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cards.chunks(ROW_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = chunk.iter().map(|c| format!("{:>3}", c)).collect();
            f.write_str(line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
