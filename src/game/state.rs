//! The game-state aggregate and its mutating operations
//!
//! `GameState` exclusively owns the single table for the session: one stock,
//! one waste, seven tableau piles, four foundations. All mutation goes
//! through the operations here; callers outside the crate interact through
//! the intent boundary in [`crate::game::engine`] and only ever see owned
//! view values.

use crate::core::{standard_deck, shuffle, Card, DECK_SIZE};
use crate::game::dealer::deal;
use crate::game::rules::{can_place_on_foundation, can_place_on_tableau};
use crate::game::{HistoryStack, Pile, Snapshot};
use crate::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

pub const TABLEAU_COUNT: usize = 7;
pub const FOUNDATION_COUNT: usize = 4;

/// How many cards a single draw action takes from the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrawMode {
    #[default]
    Single,
    Triple,
}

impl DrawMode {
    pub fn cards_per_draw(self) -> usize {
        match self {
            DrawMode::Single => 1,
            DrawMode::Triple => 3,
        }
    }
}

/// Why an intent was not applied. These are ordinary gameplay outcomes
/// (user missteps), reported as values and never escalated to errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The rules predicate said no, or the move request was malformed
    /// (bad pile index, face-down card, source equals target).
    IllegalMove,
    /// Auto-move found no foundation that accepts the card, or the card is
    /// not currently on top of a tableau pile or the waste.
    NoLegalTarget,
    /// Undo with an empty history stack.
    NoHistory,
    /// Draw with an empty stock; the caller should offer a recycle instead.
    EmptyStock,
}

/// Result of a single game operation: applied, or rejected without mutation.
pub type MoveResult = std::result::Result<(), Rejection>;

/// Where a move-sequence originates. Opaque identifiers (pile index plus
/// card position) cross the boundary instead of live card references; the
/// engine resolves them against its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSource {
    /// The top card of the waste (only the top may ever move).
    Waste,
    /// The face-up run starting at `index` within tableau pile `pile`.
    Tableau { pile: usize, index: usize },
}

/// Complete table state for one Klondike session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub stock: Pile,
    pub waste: Pile,
    pub tableau: [Pile; TABLEAU_COUNT],
    pub foundations: [Pile; FOUNDATION_COUNT],
    pub draw_mode: DrawMode,

    /// Seedable RNG for shuffles, serialized with the state so a saved game
    /// reshuffles the same way on replay.
    pub rng: ChaCha12Rng,

    /// Undo stack. Draws and recycles are deliberately not recorded; only
    /// card moves between piles push snapshots.
    pub history: HistoryStack,

    /// Applied operations since the deal: draws, recycles, and card moves.
    /// Undo does not roll this back; it counts what the player did, not
    /// where the table ended up.
    pub moves_played: u32,
}

impl GameState {
    /// Shuffle, deal, and perform the opening draw for the given mode.
    /// `seed` pins the shuffle for deterministic replay; `None` seeds from
    /// the OS entropy source.
    pub fn new_game(draw_mode: DrawMode, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_entropy(),
        };
        let mut state = GameState {
            stock: Pile::new(),
            waste: Pile::new(),
            tableau: Default::default(),
            foundations: Default::default(),
            draw_mode,
            rng,
            history: HistoryStack::new(),
            moves_played: 0,
        };
        state.redeal()?;
        Ok(state)
    }

    /// Tear down the current table and deal a fresh one with this state's
    /// RNG. Clears the waste, foundations, and all history, then performs
    /// the opening draw.
    pub fn redeal(&mut self) -> Result<()> {
        let mut deck = standard_deck();
        shuffle(&mut deck, &mut self.rng);
        let (tableau, stock) = deal(deck)?;
        self.tableau = tableau;
        self.stock = stock;
        self.waste.clear();
        for foundation in &mut self.foundations {
            foundation.clear();
        }
        self.history.clear();

        let _ = self.draw_from_stock();
        self.moves_played = 0;
        self.debug_check();
        Ok(())
    }

    /// Switch draw mode. The table is re-dealt: a mid-game mode change
    /// would let three-card-draw games leak buried waste cards.
    pub fn set_draw_mode(&mut self, draw_mode: DrawMode) -> Result<()> {
        self.draw_mode = draw_mode;
        self.redeal()
    }

    /// Draw 1 or 3 cards (per mode) from the stock onto the waste, fewer if
    /// the stock runs out mid-draw. Each drawn card is turned face-up; the
    /// last card popped becomes the new waste top. Not undoable.
    pub fn draw_from_stock(&mut self) -> MoveResult {
        if self.stock.is_empty() {
            return Err(Rejection::EmptyStock);
        }
        for _ in 0..self.draw_mode.cards_per_draw() {
            match self.stock.pop() {
                Some(mut card) => {
                    card.face_up = true;
                    self.waste.push(card);
                }
                None => break,
            }
        }
        self.moves_played += 1;
        self.debug_check();
        Ok(())
    }

    /// Turn the waste back into the stock once the stock is exhausted.
    /// The waste is reversed so the card drawn first returns to the bottom
    /// of the stock, restoring draw order for the next pass. Cards keep
    /// their face-up flag through the recycle. Not undoable.
    pub fn recycle_waste(&mut self) -> MoveResult {
        if !self.stock.is_empty() || self.waste.is_empty() {
            return Err(Rejection::IllegalMove);
        }
        let mut cards = std::mem::take(&mut self.waste.cards);
        cards.reverse();
        self.stock.cards = cards;
        self.moves_played += 1;
        self.debug_check();
        Ok(())
    }

    /// Move a face-up run onto a tableau pile.
    ///
    /// The run is identified by its source location, never passed as card
    /// data: the waste contributes exactly its top card, a tableau source
    /// contributes the contiguous face-up suffix starting at `index`. The
    /// whole operation is atomic; any validation failure leaves the state
    /// untouched and reports [`Rejection::IllegalMove`].
    pub fn move_sequence(&mut self, source: MoveSource, target: usize) -> MoveResult {
        if target >= TABLEAU_COUNT {
            return Err(Rejection::IllegalMove);
        }

        match source {
            MoveSource::Waste => {
                let card = match self.waste.top() {
                    Some(card) => *card,
                    None => return Err(Rejection::IllegalMove),
                };
                if !can_place_on_tableau(&card, &self.tableau[target]) {
                    return Err(Rejection::IllegalMove);
                }

                self.history.save(self.snapshot());
                self.waste.pop();
                self.tableau[target].push(card);
            }
            MoveSource::Tableau { pile, index } => {
                if pile >= TABLEAU_COUNT || pile == target {
                    return Err(Rejection::IllegalMove);
                }
                if !self.tableau[pile].is_face_up_suffix(index) {
                    return Err(Rejection::IllegalMove);
                }
                let first = self.tableau[pile].cards[index];
                if !can_place_on_tableau(&first, &self.tableau[target]) {
                    return Err(Rejection::IllegalMove);
                }

                self.history.save(self.snapshot());
                let run = self.tableau[pile].split_off_run(index);
                self.tableau[target].extend_run(run);
                self.tableau[pile].flip_top_face_up();
            }
        }

        self.moves_played += 1;
        self.debug_check();
        Ok(())
    }

    /// Send a card to the first foundation that accepts it.
    ///
    /// The card must currently be the top of a tableau pile or the top of
    /// the waste; buried cards always report [`Rejection::NoLegalTarget`].
    /// Foundations are tried in fixed order, so a suit's pile is whichever
    /// slot its Ace landed in first. The snapshot is taken only after a
    /// legal target is found, so failed attempts leave no history entry.
    pub fn auto_move_to_foundation(&mut self, card: Card) -> MoveResult {
        let source = self.find_exposed(&card).ok_or(Rejection::NoLegalTarget)?;

        let target = self
            .foundations
            .iter()
            .position(|pile| can_place_on_foundation(&card, pile))
            .ok_or(Rejection::NoLegalTarget)?;

        self.history.save(self.snapshot());
        let card = match source {
            MoveSource::Waste => self.waste.pop(),
            MoveSource::Tableau { pile, .. } => {
                let card = self.tableau[pile].pop();
                self.tableau[pile].flip_top_face_up();
                card
            }
        };
        // find_exposed guaranteed the source top exists.
        if let Some(card) = card {
            self.foundations[target].push(card);
        }

        self.moves_played += 1;
        self.debug_check();
        Ok(())
    }

    /// Restore the table to the snapshot taken before the last recorded
    /// move. Repeatable: each call walks one more step back.
    pub fn undo(&mut self) -> MoveResult {
        let snapshot = self.history.undo_pop().ok_or(Rejection::NoHistory)?;
        self.stock = snapshot.stock;
        self.waste = snapshot.waste;
        self.tableau = snapshot.tableau;
        self.foundations = snapshot.foundations;
        self.debug_check();
        Ok(())
    }

    /// Deep copy of the four pile groups for the history stack.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stock: self.stock.clone(),
            waste: self.waste.clone(),
            tableau: self.tableau.clone(),
            foundations: self.foundations.clone(),
        }
    }

    /// Total cards across all piles. Always [`DECK_SIZE`] between operations.
    pub fn total_cards(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.tableau.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
    }

    /// Locate `card` among the currently movable tops: the waste top or a
    /// tableau pile top. Buried cards are not found.
    fn find_exposed(&self, card: &Card) -> Option<MoveSource> {
        if self.waste.top().is_some_and(|top| top.same_card(card)) {
            return Some(MoveSource::Waste);
        }
        self.tableau
            .iter()
            .position(|pile| pile.top().is_some_and(|top| top.same_card(card)))
            .map(|pile| MoveSource::Tableau {
                pile,
                index: self.tableau[pile].len() - 1,
            })
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.total_cards(), DECK_SIZE, "card conservation violated");
    }
}
