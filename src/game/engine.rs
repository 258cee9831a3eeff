//! Intent boundary between the engine and its presentation layer
//!
//! The collaborator (UI, bot, test harness) sends one [`Intent`] at a time;
//! the engine applies it against the exclusively-owned [`GameState`] and
//! replies with the outcome plus a fresh [`TableView`]. Intents are
//! serialized by the caller, so the engine never needs internal locking.

use crate::core::Card;
use crate::game::{
    DrawMode, EventLog, GameState, MoveSource, Rejection, TableView, VerbosityLevel,
};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user intent, expressed with opaque identifiers only. Live card
/// references never cross this boundary; `AutoMoveToFoundation` carries a
/// card *value* whose identity (rank, suit) the engine resolves internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Reshuffle and redeal; clears all history.
    NewGame,
    /// Change the draw mode. The table re-deals, as a mode change mid-pass
    /// would corrupt the waste fan.
    SetDrawMode(DrawMode),
    DrawFromStock,
    RecycleWaste,
    MoveSequence { source: MoveSource, target: usize },
    AutoMoveToFoundation { card: Card },
    Undo,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::NewGame => write!(f, "new game"),
            Intent::SetDrawMode(mode) => write!(f, "set draw mode {mode:?}"),
            Intent::DrawFromStock => write!(f, "draw"),
            Intent::RecycleWaste => write!(f, "recycle waste"),
            Intent::MoveSequence { source, target } => {
                write!(f, "move {source:?} -> tableau {}", target + 1)
            }
            Intent::AutoMoveToFoundation { card } => write!(f, "auto-move {card}"),
            Intent::Undo => write!(f, "undo"),
        }
    }
}

/// Whether an intent changed the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// What the presentation layer gets back from every intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub outcome: Outcome,
    pub table: TableView,
}

/// The engine facade: one game state, one event log, one intent at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engine {
    state: GameState,
    pub log: EventLog,
}

impl Engine {
    /// Start a session with a freshly dealt game.
    pub fn new(draw_mode: DrawMode, seed: Option<u64>, log: EventLog) -> Result<Self> {
        Ok(Engine {
            state: GameState::new_game(draw_mode, seed)?,
            log,
        })
    }

    /// Read access for tests and tooling. Mutation goes through `apply`.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current table, independently of any intent.
    pub fn table(&self) -> TableView {
        TableView::of(&self.state)
    }

    /// Apply one intent and report the result. Recoverable rejections come
    /// back inside the reply; `Err` is reserved for invariant violations
    /// that indicate a bug.
    pub fn apply(&mut self, intent: Intent) -> Result<Reply> {
        let result = match intent {
            Intent::NewGame => {
                self.state.redeal()?;
                Ok(())
            }
            Intent::SetDrawMode(mode) => {
                self.state.set_draw_mode(mode)?;
                Ok(())
            }
            Intent::DrawFromStock => self.state.draw_from_stock(),
            Intent::RecycleWaste => self.state.recycle_waste(),
            Intent::MoveSequence { source, target } => {
                self.state.move_sequence(source, target)
            }
            Intent::AutoMoveToFoundation { card } => {
                self.state.auto_move_to_foundation(card)
            }
            Intent::Undo => self.state.undo(),
        };

        let outcome = match result {
            Ok(()) => {
                self.log
                    .log(VerbosityLevel::Normal, format!("applied: {intent}"));
                Outcome::Applied
            }
            Err(rejection) => {
                self.log.log(
                    VerbosityLevel::Minimal,
                    format!("rejected: {intent} ({rejection:?})"),
                );
                Outcome::Rejected(rejection)
            }
        };

        let table = self.table();
        if self.log.verbosity() >= VerbosityLevel::Verbose {
            self.log.log(VerbosityLevel::Verbose, table.to_string());
        }
        if table.is_won() {
            self.log.log(VerbosityLevel::Minimal, "game won!");
        }

        Ok(Reply { outcome, table })
    }
}
