//! Error types for the Klondike engine
//!
//! Only programming errors live here. Rejected moves, failed undos and the
//! like are normal gameplay outcomes and are reported as [`Rejection`]
//! values in the engine's replies, never as errors.
//!
//! [`Rejection`]: crate::game::Rejection

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KlondikeError {
    /// The dealer was handed something other than a full 52-card deck.
    /// Indicates a bug in deck construction, not a user mistake.
    #[error("invalid deck size: expected {expected} cards, got {actual}")]
    InvalidDeckSize { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, KlondikeError>;
