//! Ordered card piles
//!
//! Every pile in the game is an ordered sequence with the *end* of the
//! sequence as the visible/top position. The four pile kinds differ only in
//! the rules applied to them, not in representation.

use crate::core::Card;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A run of cards moved together. A face-up run is at most 13 cards
/// (King down to Ace), so this never spills to the heap.
pub type CardRun = SmallVec<[Card; 13]>;

/// An ordered pile of cards, top at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    pub cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Pile { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Pile { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Detach the suffix starting at `start`, preserving order.
    /// Returns an empty run if `start` is past the end.
    pub fn split_off_run(&mut self, start: usize) -> CardRun {
        if start >= self.cards.len() {
            return CardRun::new();
        }
        self.cards.drain(start..).collect()
    }

    /// Append a run to the top of the pile, preserving order.
    pub fn extend_run(&mut self, run: CardRun) {
        self.cards.extend(run);
    }

    /// True iff every card from `start` to the top is face-up.
    pub fn is_face_up_suffix(&self, start: usize) -> bool {
        start < self.cards.len() && self.cards[start..].iter().all(|c| c.face_up)
    }

    /// Flip the top card face-up, if there is one and it is face-down.
    /// Used when a tableau move exposes a new top.
    pub fn flip_top_face_up(&mut self) {
        if let Some(top) = self.cards.last_mut() {
            top.face_up = true;
        }
    }
}
