//! Initial deal
//!
//! Distributes a shuffled deck into the seven tableau piles and the stock.

use crate::core::{Card, DECK_SIZE};
use crate::game::{Pile, TABLEAU_COUNT};
use crate::{KlondikeError, Result};

/// Deal a shuffled 52-card deck into the opening layout.
///
/// Tableau pile `k` (0-indexed) receives `k + 1` cards consumed in order
/// from the front of the deck; within each pile only the last-dealt card is
/// turned face-up. The 24 remaining cards become the stock, face-down, in
/// remaining deck order.
///
/// The deck size is checked defensively even though the only in-crate caller
/// always supplies 52 cards.
pub fn deal(deck: Vec<Card>) -> Result<([Pile; TABLEAU_COUNT], Pile)> {
    if deck.len() != DECK_SIZE {
        return Err(KlondikeError::InvalidDeckSize {
            expected: DECK_SIZE,
            actual: deck.len(),
        });
    }

    let mut tableau: [Pile; TABLEAU_COUNT] = Default::default();
    let mut deck = deck.into_iter();

    for (k, pile) in tableau.iter_mut().enumerate() {
        for j in 0..=k {
            // The iterator cannot run dry: 28 <= 52, checked above.
            let mut card = deck.next().ok_or(KlondikeError::InvalidDeckSize {
                expected: DECK_SIZE,
                actual: 0,
            })?;
            card.face_up = j == k;
            pile.push(card);
        }
    }

    let stock = Pile::from_cards(deck.collect());
    Ok((tableau, stock))
}
