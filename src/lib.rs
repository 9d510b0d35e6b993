//! Pontifex: the Solitaire playing-card stream cipher.
//!
//! Solitaire, described by Bruce Schneier for Neal Stephenson's
//! *Cryptonomicon*, is a stream cipher a person can run by hand with a deck
//! of 52 cards and two jokers. Each step of the algorithm is a simple,
//! auditable move of cards, so this crate keeps the deck explicit and
//! exposes every move.
//!
//! This is a historical and educational cipher. It reproduces the published
//! algorithm faithfully and makes no claim of modern cryptographic strength.
//!
//! # Architecture
//!
//! ```text
//! Card / Deck   (54-card permutation: relocate, count cut, triple cut)
//!     ↓
//! round         (joker A down 1, joker B down 2, triple cut, count cut)
//!     ↓                               ↓
//! key_deck      (round + letter cut)  Keystream (round, skip jokers, emit letter)
//!     ↓                               ↓
//! Pontifex      (normalize, combine letters mod 26, group by five)
//! ```
//!
//! Every move can be reported to an [`Observer`](trace::Observer) as a
//! [`Step`](trace::Step) with a deck snapshot, for a presentation layer to
//! replay at its own pace.
//!
//! # Examples
//!
//! ```
//! let ciphertext = pontifex::encrypt("Solitaire!", "CRYPTONOMICON");
//! assert_eq!(ciphertext, "KIRAK SFJAN");
//!
//! let plaintext = pontifex::decrypt(&ciphertext, "CRYPTONOMICON");
//! assert_eq!(plaintext, "SOLIT AIREX");
//! ```
//!
//! Keep one keyed cipher and continue its keystream across messages:
//!
//! ```
//! use pontifex::Pontifex;
//!
//! let mut cipher = Pontifex::new("");
//! assert_eq!(cipher.encrypt("AAAAA"), "EXKYI");
//! assert_eq!(cipher.encrypt("AAAAA"), "ZSGEH");
//!
//! cipher.reset();
//! assert_eq!(cipher.encrypt("AAAAA"), "EXKYI");
//! ```

#![deny(clippy::all)]

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod keying;
pub mod keystream;
pub mod round;
pub mod trace;
pub mod utils;

mod cipher;

pub use cipher::{decrypt, decrypt_traced, encrypt, encrypt_traced, Direction, Pontifex};
pub use error::{PontifexError, PontifexResult};
