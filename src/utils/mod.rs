//! Text helpers shared by the keying and cipher layers.

pub mod text;
