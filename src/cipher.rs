//! Pontifex: the Solitaire cipher orchestrator.
//!
//! Lays out a fresh deck, keys it from a passphrase, then combines the
//! normalized message with the keystream one letter at a time:
//!
//! ```text
//! RESET (fresh deck) -> KEY (passphrase) -> BEGIN -> { next keystream letter + combine }* -> DONE
//! ```
//!
//! Encryption adds keystream letters (`A + A = B`), decryption subtracts
//! them. Both directions run the exact same deck transitions, so a decoder
//! keyed with the same passphrase sees the same keystream.

use tracing::debug;

use crate::deck::Deck;
use crate::keying::key_deck;
use crate::keystream::Keystream;
use crate::trace::{Event, Observer, Recorder, Silent, Step};
use crate::utils::text::{self, group, normalize};

/// Which way letters are combined with the keystream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn combine(self, letter: char, key: char) -> char {
        match self {
            Direction::Encrypt => text::add(letter, key),
            Direction::Decrypt => text::sub(letter, key),
        }
    }
}

/// Solitaire cipher keyed from a passphrase.
///
/// The keystream advances with every letter processed, so successive calls
/// to [`encrypt`](Self::encrypt) continue the same stream rather than
/// starting over. A decoder must process the same letter positions as the
/// encoder did. [`reset`](Self::reset) returns to the freshly keyed deck.
///
/// # Examples
///
/// ```
/// use pontifex::Pontifex;
///
/// let mut encoder = Pontifex::new("CRYPTONOMICON");
/// assert_eq!(encoder.encrypt("Solitaire"), "KIRAK SFJAN");
///
/// let mut decoder = Pontifex::new("CRYPTONOMICON");
/// assert_eq!(decoder.decrypt("KIRAK SFJAN"), "SOLIT AIREX");
/// ```
#[derive(Debug)]
pub struct Pontifex<O = Silent> {
    keyed: Deck,
    keying_steps: usize,
    stream: Keystream<O>,
}

impl Default for Pontifex<Silent> {
    fn default() -> Self {
        Self::new("")
    }
}

impl Pontifex<Silent> {
    /// Keys a fresh deck with `passphrase`.
    ///
    /// Only letters of the passphrase count; an empty passphrase leaves the
    /// deck in its fresh order.
    pub fn new(passphrase: &str) -> Self {
        Self::with_observer(passphrase, Silent)
    }
}

impl<O: Observer> Pontifex<O> {
    /// Keys a fresh deck with `passphrase`, reporting every step to `observer`.
    ///
    /// The observer sees the fresh deck first, then the keying steps, then
    /// every keystream step as letters are processed.
    pub fn with_observer(passphrase: &str, mut observer: O) -> Self {
        let mut deck = Deck::new();
        observer.observe(Step::Reset, &deck);
        let keying_steps = key_deck(&mut deck, passphrase, &mut observer);
        Pontifex {
            keyed: deck,
            keying_steps,
            stream: Keystream::with_observer(deck, observer),
        }
    }

    /// Encrypts `plaintext`, returning uppercase five-letter groups.
    ///
    /// Non-letters are dropped and the message is padded with `X` to a
    /// multiple of five letters before encryption.
    pub fn encrypt(&mut self, plaintext: &str) -> String {
        self.transform(Direction::Encrypt, plaintext)
    }

    /// Decrypts `ciphertext`, returning uppercase five-letter groups.
    ///
    /// Padding added at encryption time is kept.
    pub fn decrypt(&mut self, ciphertext: &str) -> String {
        self.transform(Direction::Decrypt, ciphertext)
    }

    /// Runs `text` through the cipher in the given direction.
    ///
    /// The observer sees [`Step::Begin`], then for every letter the keystream
    /// steps followed by [`Step::Output`], then [`Step::Done`].
    pub fn transform(&mut self, direction: Direction, text: &str) -> String {
        let message = normalize(text);
        let rounds_before = self.stream.rounds();
        let skips_before = self.stream.skips();

        self.stream.observe(Step::Begin(direction));
        let mut output = String::with_capacity(message.len());
        for letter in message.chars() {
            let combined = direction.combine(letter, self.stream.next_letter());
            self.stream.observe(Step::Output(combined));
            output.push(combined);
        }
        self.stream.observe(Step::Done(direction));

        debug!(
            ?direction,
            letters = message.len(),
            rounds = self.stream.rounds() - rounds_before,
            skipped = self.stream.skips() - skips_before,
            "message processed"
        );
        group(&output)
    }

    /// Draws the next `len` keystream letters without combining them.
    pub fn keystream(&mut self, len: usize) -> String {
        self.stream.by_ref().take(len).collect()
    }

    /// Returns to the deck as it stood right after keying.
    pub fn reset(&mut self) {
        self.stream.restart(self.keyed);
    }

    /// Deck as it stood right after keying.
    pub fn keyed_deck(&self) -> &Deck {
        &self.keyed
    }

    /// Current deck state.
    pub fn deck(&self) -> &Deck {
        self.stream.deck()
    }

    /// Number of passphrase letters keyed into the deck.
    pub fn keying_steps(&self) -> usize {
        self.keying_steps
    }

    /// Keystream rounds run since keying (or the last reset).
    pub fn rounds(&self) -> u64 {
        self.stream.rounds()
    }

    /// Keystream rounds that landed on a joker.
    pub fn skips(&self) -> u64 {
        self.stream.skips()
    }

    pub fn observer(&self) -> &O {
        self.stream.observer()
    }

    pub fn into_observer(self) -> O {
        self.stream.into_observer()
    }
}

/// Encrypts `plaintext` under `passphrase` with a freshly keyed deck.
///
/// # Examples
///
/// ```
/// assert_eq!(pontifex::encrypt("AAAAA AAAAA AAAAA", ""), "EXKYI ZSGEH UNTIQ");
/// ```
pub fn encrypt(plaintext: &str, passphrase: &str) -> String {
    Pontifex::new(passphrase).encrypt(plaintext)
}

/// Decrypts `ciphertext` under `passphrase` with a freshly keyed deck.
///
/// # Examples
///
/// ```
/// assert_eq!(pontifex::decrypt("EXKYI ZSGEH UNTIQ", ""), "AAAAA AAAAA AAAAA");
/// ```
pub fn decrypt(ciphertext: &str, passphrase: &str) -> String {
    Pontifex::new(passphrase).decrypt(ciphertext)
}

/// Like [`encrypt`], also returning every step with a deck snapshot.
pub fn encrypt_traced(plaintext: &str, passphrase: &str) -> (String, Vec<Event>) {
    traced(Direction::Encrypt, plaintext, passphrase)
}

/// Like [`decrypt`], also returning every step with a deck snapshot.
pub fn decrypt_traced(ciphertext: &str, passphrase: &str) -> (String, Vec<Event>) {
    traced(Direction::Decrypt, ciphertext, passphrase)
}

fn traced(direction: Direction, text: &str, passphrase: &str) -> (String, Vec<Event>) {
    let mut cipher = Pontifex::with_observer(passphrase, Recorder::new());
    let output = cipher.transform(direction, text);
    (output, cipher.into_observer().into_events())
}
