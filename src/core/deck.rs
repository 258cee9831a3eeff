//! Deck factory and shuffle

use crate::core::{Card, Suit, ACE, KING};
use rand::seq::SliceRandom;

/// A standard single deck.
pub const DECK_SIZE: usize = 52;

/// Build the ordered 52-card deck, one card per (rank, suit) pair, all
/// face-down. No randomness here; shuffling is a separate step.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in ACE..=KING {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Shuffle a deck in place with a uniform Fisher-Yates pass.
///
/// Every permutation is equally likely given a uniform RNG, and no card is
/// duplicated or lost. Callers hand in the game's seeded RNG so deals are
/// reproducible.
pub fn shuffle(deck: &mut [Card], rng: &mut impl rand::Rng) {
    deck.shuffle(rng);
}
