//! Step-by-step record of what the cipher does to the deck.
//!
//! Every primitive move reports a [`Step`] together with the deck it left
//! behind to an [`Observer`]. The core never waits, renders or stores
//! anything itself; a presentation layer that wants to replay the shuffle
//! at human pace collects the events with a [`Recorder`] and plays them back
//! on its own schedule. [`Silent`] discards everything and is the default.

use std::fmt;

use crate::card::Card;
use crate::cipher::Direction;
use crate::deck::Deck;
use crate::utils::text::group;

/// One operation performed by the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A message is about to be run through the keystream.
    Begin(Direction),
    /// A fresh deck was laid out.
    Reset,
    /// A passphrase letter is about to be keyed into the deck.
    KeyLetter(char),
    /// A card was moved down by `by` places.
    MoveDown { card: Card, by: usize },
    /// The deck was triple-cut around two markers.
    TripleCut(Card, Card),
    /// A count cut moved this many cards from the top to just above the bottom card.
    Cut(usize),
    /// A round ended on a joker and produced no letter.
    SkipJoker(Card),
    /// A keystream letter was produced.
    NextLetter(char),
    /// A message letter was combined with the keystream into this letter.
    Output(char),
    /// Every letter of the message has been processed.
    Done(Direction),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Begin(Direction::Encrypt) => f.write_str("encrypting"),
            Step::Begin(Direction::Decrypt) => f.write_str("decrypting"),
            Step::Reset => f.write_str("reset deck"),
            Step::KeyLetter(letter) => write!(f, "keying deck: {}", letter),
            Step::MoveDown { card, by } => write!(f, "move {} down by {}", card, by),
            Step::TripleCut(first, second) => write!(f, "triple cut {} and {}", first, second),
            Step::Cut(count) => write!(f, "cut {}", count),
            Step::SkipJoker(card) => write!(f, "skip joker {}", card),
            Step::NextLetter(letter) => write!(f, "next letter: {}", letter),
            Step::Output(letter) => write!(f, "output letter: {}", letter),
            Step::Done(Direction::Encrypt) => f.write_str("encrypted"),
            Step::Done(Direction::Decrypt) => f.write_str("decrypted"),
        }
    }
}

/// A step paired with the deck as it stood right after the step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub step: Step,
    pub deck: Deck,
    /// Output of the current message so far, in five-letter groups. Empty
    /// until the first [`Step::Output`] after a [`Step::Begin`].
    pub output: String,
}

/// Receives every step the cipher performs.
///
/// Implementations must not assume any timing: events arrive as fast as the
/// deck is shuffled.
pub trait Observer {
    /// Called once per step with the deck state after the step.
    fn observe(&mut self, step: Step, deck: &Deck);
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {
    #[inline]
    fn observe(&mut self, _step: Step, _deck: &Deck) {}
}

/// Observer that keeps every step with a snapshot of the deck and of the
/// output built so far.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    events: Vec<Event>,
    output: String,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Observer for Recorder {
    fn observe(&mut self, step: Step, deck: &Deck) {
        match step {
            Step::Begin(_) => self.output.clear(),
            Step::Output(letter) => self.output.push(letter),
            _ => {}
        }
        self.events.push(Event {
            step,
            deck: *deck,
            output: group(&self.output),
        });
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn observe(&mut self, step: Step, deck: &Deck) {
        (**self).observe(step, deck);
    }
}
