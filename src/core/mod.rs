//! Core card types shared by every part of the engine

pub mod card;
pub mod deck;

pub use card::{Card, Color, Suit, ACE, JACK, KING, QUEEN};
pub use deck::{shuffle, standard_deck, DECK_SIZE};
