//! Step-by-step playback of a recorded run.
//!
//! The cipher hands over a finished list of events; this module prints them
//! one at a time and sleeps between them. Nothing here feeds back into the
//! cipher.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use pontifex::trace::{Event, Step};
use pontifex::utils::text::group;
use pontifex::Direction;

/// Prints `events` to `out`, pausing `delay` between them.
///
/// Each event prints its status line and, unless `steps_only`, the deck it
/// left. Produced keystream letters print the keystream so far, combined
/// letters print the ciphertext or plaintext so far.
pub fn replay<W: Write>(
    events: &[Event],
    delay: Duration,
    steps_only: bool,
    out: &mut W,
) -> io::Result<()> {
    let mut keystream = String::new();
    let mut label = "output";
    for (i, event) in events.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }
        writeln!(out, "{}", event.step)?;
        match event.step {
            Step::Begin(direction) => {
                keystream.clear();
                label = match direction {
                    Direction::Encrypt => "ciphertext",
                    Direction::Decrypt => "plaintext",
                };
            }
            Step::NextLetter(letter) => {
                keystream.push(letter);
                writeln!(out, "keystream: {}", group(&keystream))?;
            }
            Step::Output(_) => writeln!(out, "{}: {}", label, event.output)?,
            _ => {}
        }
        if !steps_only && !matches!(event.step, Step::Begin(_) | Step::Done(_)) {
            writeln!(out, "{}", event.deck)?;
            writeln!(out)?;
        }
        out.flush()?;
    }
    Ok(())
}
