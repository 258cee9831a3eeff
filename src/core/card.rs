//! Card identity: rank, suit, color, and the face-up flag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank constants for the named cards. Ranks run 1 (Ace) through 13 (King).
pub const ACE: u8 = 1;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;

/// The four suits, in deck-construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }

    fn word(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
        }
    }
}

/// Card color, the thing tableau stacking alternates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A playing card.
///
/// Identity is (rank, suit); `face_up` is presentation state that travels
/// with the card but never participates in equality or hashing. There are
/// exactly 52 distinct identities and the engine never duplicates one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    /// 1 = Ace .. 13 = King
    pub rank: u8,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card. Panics on a rank outside 1..=13, which can
    /// only happen through a programming error.
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!((ACE..=KING).contains(&rank), "card rank out of range: {rank}");
        Card {
            rank,
            suit,
            face_up: false,
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Same identity, regardless of which way either card is facing.
    pub fn same_card(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    /// The original asset-style name, e.g. `ace_of_spades`, `10_of_hearts`.
    pub fn name(&self) -> String {
        let rank = match self.rank {
            ACE => "ace".to_string(),
            JACK => "jack".to_string(),
            QUEEN => "queen".to_string(),
            KING => "king".to_string(),
            n => n.to_string(),
        };
        format!("{}_of_{}", rank, self.suit.word())
    }
}

// Equality is identity equality: face_up is excluded so that a snapshot
// comparison or an auto-move lookup matches the card wherever it lies.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.same_card(other)
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            ACE => "A".to_string(),
            JACK => "J".to_string(),
            QUEEN => "Q".to_string(),
            KING => "K".to_string(),
            n => n.to_string(),
        };
        write!(f, "{}{}", rank, self.suit.symbol())
    }
}
