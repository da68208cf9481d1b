//! Text ciphers built by composing per-character policies, plus a bounded
//! guess-and-check code cracker.
//!
//! As in the kitchen crate, the mechanics here are policy-free: what a
//! character encodes to, how a guess is produced, and what counts as a valid
//! decoding are all supplied by the caller.

pub mod cipher;
pub mod cracker;

pub use cipher::{classed_cipher, text_cipher};
pub use cracker::{CodeCracker, CrackError};
