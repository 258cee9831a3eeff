//! Move legality predicates
//!
//! The only two legality rules in the game. Both are pure functions over a
//! candidate card and the pile it would land on, so they can be unit tested
//! in isolation and reused by any operation that needs them.

use crate::core::{Card, ACE, KING};
use crate::game::Pile;

/// May `card` land on `pile` as a tableau placement?
///
/// Empty piles accept only Kings. Otherwise the card must be exactly one
/// rank below the pile's top and of the opposite color.
pub fn can_place_on_tableau(card: &Card, pile: &Pile) -> bool {
    match pile.top() {
        None => card.rank == KING,
        Some(top) => card.rank + 1 == top.rank && card.color() != top.color(),
    }
}

/// May `card` land on `pile` as a foundation placement?
///
/// Empty foundations accept only Aces. Otherwise the card must be exactly
/// one rank above the pile's top and of the same suit.
pub fn can_place_on_foundation(card: &Card, pile: &Pile) -> bool {
    match pile.top() {
        None => card.rank == ACE,
        Some(top) => card.rank == top.rank + 1 && card.suit == top.suit,
    }
}
