//! The Solitaire round: the single state transition used by both keying
//! and keystream generation.
//!
//! A round is always the same four moves, with no conditional skipping:
//!
//! ```text
//! 1. move joker A down 1
//! 2. move joker B down 2
//! 3. triple cut around the two jokers
//! 4. count cut by the value of the bottom card (joker = 53)
//! ```

use crate::card::Card;
use crate::deck::Deck;
use crate::trace::{Observer, Step};

/// Places joker A moves each round.
pub const JOKER_A_STEP: usize = 1;

/// Places joker B moves each round.
pub const JOKER_B_STEP: usize = 2;

/// Advances `deck` by one round, reporting each move to `observer`.
///
/// In debug and test builds the 54-card invariant is checked after the
/// round; a violation means the deck primitives are broken.
///
/// # Examples
///
/// ```
/// use pontifex::deck::Deck;
/// use pontifex::round::round;
/// use pontifex::trace::Silent;
///
/// let mut deck = Deck::new();
/// round(&mut deck, &mut Silent);
/// assert_ne!(deck, Deck::new());
/// ```
pub fn round<O: Observer + ?Sized>(deck: &mut Deck, observer: &mut O) {
    move_down(deck, Card::JokerA, JOKER_A_STEP, observer);
    move_down(deck, Card::JokerB, JOKER_B_STEP, observer);

    deck.triple_cut(Card::JokerA, Card::JokerB);
    observer.observe(Step::TripleCut(Card::JokerA, Card::JokerB), deck);

    let n = usize::from(deck.bottom().value());
    count_cut(deck, n, observer);

    debug_assert!(
        deck.validate().is_ok(),
        "deck invariant broken after round: {:?}",
        deck.validate()
    );
}

fn move_down<O: Observer + ?Sized>(deck: &mut Deck, card: Card, by: usize, observer: &mut O) {
    deck.relocate(card, by);
    observer.observe(Step::MoveDown { card, by }, deck);
}

/// Count cut that reports itself; shared with keying.
pub(crate) fn count_cut<O: Observer + ?Sized>(deck: &mut Deck, n: usize, observer: &mut O) {
    deck.count_cut(n);
    observer.observe(Step::Cut(n), deck);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::trace::{Recorder, Silent};

    fn card(rank: u8, suit: Suit) -> Card {
        Card::Ranked { rank, suit }
    }

    #[test]
    fn test_first_round_from_fresh_deck() {
        // Joker B wraps to just below A♣, the triple cut leaves A♣ alone at
        // the bottom and the count cut by 1 sends joker B above it.
        let mut deck = Deck::new();
        round(&mut deck, &mut Silent);

        assert_eq!(deck.top(), card(2, Suit::Clubs));
        assert_eq!(deck.cards()[50], card(13, Suit::Spades));
        assert_eq!(deck.cards()[51], Card::JokerA);
        assert_eq!(deck.cards()[52], Card::JokerB);
        assert_eq!(deck.bottom(), card(1, Suit::Clubs));
    }

    #[test]
    fn test_round_reports_four_steps_in_order() {
        let mut deck = Deck::new();
        let mut recorder = Recorder::new();
        round(&mut deck, &mut recorder);

        let steps: Vec<Step> = recorder.events().iter().map(|e| e.step).collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], Step::MoveDown { card: Card::JokerA, by: 1 });
        assert_eq!(steps[1], Step::MoveDown { card: Card::JokerB, by: 2 });
        assert_eq!(steps[2], Step::TripleCut(Card::JokerA, Card::JokerB));
        assert!(matches!(steps[3], Step::Cut(_)));
        assert_eq!(recorder.events()[3].deck, deck);
    }

    #[test]
    fn test_round_is_deterministic() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        for _ in 0..100 {
            round(&mut a, &mut Silent);
            round(&mut b, &mut Silent);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_many_rounds_keep_invariant() {
        let mut deck = Deck::new();
        for _ in 0..1000 {
            round(&mut deck, &mut Silent);
            assert!(deck.validate().is_ok());
        }
    }
}
