//! Game state, rules, and the intent boundary

pub mod dealer;
pub mod engine;
pub mod history;
pub mod logger;
pub mod pile;
pub mod rules;
pub mod state;
pub mod view;

pub use engine::{Engine, Intent, Outcome, Reply};
pub use history::{HistoryStack, Snapshot};
pub use logger::{EventLog, VerbosityLevel};
pub use pile::{CardRun, Pile};
pub use state::{
    DrawMode, GameState, MoveResult, MoveSource, Rejection, FOUNDATION_COUNT, TABLEAU_COUNT,
};
pub use view::TableView;
