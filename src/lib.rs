//! Klondike Solitaire game-state engine
//!
//! This crate is the rules-and-state core of a single-player Klondike game:
//! deck construction and shuffling, the initial deal, move legality, state
//! mutation on draw/move/auto-move, and snapshot-based undo. Presentation
//! (rendering, gesture capture) is an external collaborator that feeds the
//! engine [`game::Intent`]s and displays the [`game::TableView`] it gets back.

pub mod core;
pub mod error;
pub mod game;

pub use error::{KlondikeError, Result};
