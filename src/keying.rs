//! Keying the deck from a passphrase.
//!
//! Each letter of the passphrase (case-insensitive, non-letters ignored)
//! runs one full round followed by a count cut by the letter's value
//! (A = 1 .. Z = 26). An empty passphrase leaves the deck untouched.

use tracing::debug;

use crate::deck::Deck;
use crate::round::{count_cut, round};
use crate::trace::{Observer, Step};
use crate::utils::text::{letters, ordinal};

/// Keys `deck` with `passphrase` and returns the number of keying steps run.
///
/// Keying is a pure function of the starting deck and the passphrase:
/// the same inputs always leave the same deck.
///
/// # Examples
///
/// ```
/// use pontifex::deck::Deck;
/// use pontifex::keying::key_deck;
/// use pontifex::trace::Silent;
///
/// let mut deck = Deck::new();
/// assert_eq!(key_deck(&mut deck, "", &mut Silent), 0);
/// assert_eq!(deck, Deck::new());
///
/// assert_eq!(key_deck(&mut deck, "Foo-7!", &mut Silent), 3);
/// ```
pub fn key_deck<O: Observer + ?Sized>(deck: &mut Deck, passphrase: &str, observer: &mut O) -> usize {
    let mut steps = 0;
    for letter in letters(passphrase) {
        observer.observe(Step::KeyLetter(letter), deck);
        round(deck, observer);
        count_cut(deck, usize::from(ordinal(letter)), observer);
        steps += 1;
    }
    debug!(steps, "keyed deck from passphrase");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{Recorder, Silent};

    #[test]
    fn test_empty_passphrase_is_noop() {
        let mut deck = Deck::new();
        let mut recorder = Recorder::new();
        assert_eq!(key_deck(&mut deck, "", &mut recorder), 0);
        assert_eq!(deck, Deck::new());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_non_letters_are_ignored() {
        let mut plain = Deck::new();
        key_deck(&mut plain, "CRYPTONOMICON", &mut Silent);

        let mut noisy = Deck::new();
        let steps = key_deck(&mut noisy, " crypto-nomicon 42!", &mut Silent);
        assert_eq!(steps, 13);
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_only_punctuation_keys_nothing() {
        let mut deck = Deck::new();
        assert_eq!(key_deck(&mut deck, "123 !?", &mut Silent), 0);
        assert_eq!(deck, Deck::new());
    }

    #[test]
    fn test_keying_is_deterministic() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        key_deck(&mut a, "secret", &mut Silent);
        key_deck(&mut b, "SECRET", &mut Silent);
        assert_eq!(a, b);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_different_passphrases_differ() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        key_deck(&mut a, "A", &mut Silent);
        key_deck(&mut b, "B", &mut Silent);
        assert_ne!(a, b);
    }

    #[test]
    fn test_keying_reports_letter_round_and_cut() {
        let mut deck = Deck::new();
        let mut recorder = Recorder::new();
        key_deck(&mut deck, "f", &mut recorder);

        let steps: Vec<Step> = recorder.events().iter().map(|e| e.step).collect();
        // letter marker, four round moves, the letter cut
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0], Step::KeyLetter('F'));
        assert_eq!(steps[5], Step::Cut(6));
    }
}
