//! Keystream generation.
//!
//! The keystream is an endless, stateful sequence of letters. Each attempt
//! runs one round, reads the top card's value `n`, counts down `n` cards and
//! looks at the card after them. A ranked card yields its letter; a joker
//! yields nothing and the next attempt starts from the already advanced
//! deck. Wasted rounds are never undone.

use tracing::trace;

use crate::deck::Deck;
use crate::round::round;
use crate::trace::{Observer, Silent, Step};

/// Endless letter stream driven by an exclusively owned deck.
///
/// Pulling more letters always continues from the current deck; the only
/// way to see the same letters again is to start a new `Keystream` from the
/// same deck.
///
/// # Examples
///
/// ```
/// use pontifex::deck::Deck;
/// use pontifex::keystream::Keystream;
///
/// let letters: String = Keystream::new(Deck::new()).take(5).collect();
/// assert_eq!(letters, "DWJXH");
/// ```
#[derive(Debug)]
pub struct Keystream<O = Silent> {
    deck: Deck,
    observer: O,
    rounds: u64,
    letters: u64,
}

impl Keystream<Silent> {
    /// Creates a keystream over `deck` that records nothing.
    pub fn new(deck: Deck) -> Self {
        Self::with_observer(deck, Silent)
    }
}

impl<O: Observer> Keystream<O> {
    /// Creates a keystream over `deck` that reports every step to `observer`.
    pub fn with_observer(deck: Deck, observer: O) -> Self {
        Keystream {
            deck,
            observer,
            rounds: 0,
            letters: 0,
        }
    }

    /// Produces the next keystream letter, running as many rounds as needed.
    pub fn next_letter(&mut self) -> char {
        loop {
            round(&mut self.deck, &mut self.observer);
            self.rounds += 1;

            let count = usize::from(self.deck.top().value());
            let card = self.deck.cards()[count];
            match card.letter() {
                Some(letter) => {
                    self.letters += 1;
                    self.observer.observe(Step::NextLetter(letter), &self.deck);
                    return letter;
                }
                None => {
                    trace!(round = self.rounds, %card, "joker in output position, no letter");
                    self.observer.observe(Step::SkipJoker(card), &self.deck);
                }
            }
        }
    }

    /// Current deck state.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rounds run so far, including rounds that produced no letter.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Letters produced so far.
    pub fn letters(&self) -> u64 {
        self.letters
    }

    /// Rounds that landed on a joker and produced no letter.
    pub fn skips(&self) -> u64 {
        self.rounds - self.letters
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Reports a step that happened outside the keystream against the current deck.
    pub(crate) fn observe(&mut self, step: Step) {
        self.observer.observe(step, &self.deck);
    }

    /// Swaps in a new starting deck and clears the counters.
    pub(crate) fn restart(&mut self, deck: Deck) {
        self.deck = deck;
        self.rounds = 0;
        self.letters = 0;
    }
}

impl<O: Observer> Iterator for Keystream<O> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        Some(self.next_letter())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
