//! Read-only table views for the presentation layer
//!
//! After every intent the engine hands back a [`TableView`]: owned value
//! copies of everything a renderer needs. No live references to engine
//! state ever cross the boundary, so the presentation layer cannot mutate
//! the table behind the engine's back.

use crate::core::Card;
use crate::game::GameState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The stock as the renderer sees it: a count and an empty flag (the cards
/// themselves are face-down and never shown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockView {
    pub count: usize,
    pub is_empty: bool,
}

/// The waste: the visible fan (last 1 or 3 cards per draw mode, oldest
/// first) plus the total pile size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteView {
    pub visible: Vec<Card>,
    pub count: usize,
}

/// One tableau pile: every card in order with its face-up flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauView {
    pub cards: Vec<Card>,
}

/// One foundation: its top card and how many cards it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationView {
    pub top: Option<Card>,
    pub count: usize,
}

/// Snapshot of the whole table for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub stock: StockView,
    pub waste: WasteView,
    pub tableau: Vec<TableauView>,
    pub foundations: Vec<FoundationView>,
    pub moves_played: u32,
    pub history_depth: usize,
}

impl TableView {
    /// Build a fresh view from the live state. Everything is copied.
    pub fn of(state: &GameState) -> Self {
        let visible_count = state.draw_mode.cards_per_draw();
        let start = state.waste.len().saturating_sub(visible_count);

        TableView {
            stock: StockView {
                count: state.stock.len(),
                is_empty: state.stock.is_empty(),
            },
            waste: WasteView {
                visible: state.waste.cards[start..].to_vec(),
                count: state.waste.len(),
            },
            tableau: state
                .tableau
                .iter()
                .map(|pile| TableauView {
                    cards: pile.cards.clone(),
                })
                .collect(),
            foundations: state
                .foundations
                .iter()
                .map(|pile| FoundationView {
                    top: pile.top().copied(),
                    count: pile.len(),
                })
                .collect(),
            moves_played: state.moves_played,
            history_depth: state.history.len(),
        }
    }

    /// Game won once all four foundations are complete.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.count == 13)
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &Card) -> fmt::Result {
    if card.face_up {
        write!(f, "{:>4}", card.to_string())
    } else {
        write!(f, "  ##")
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stock: {:2} cards   waste:", self.stock.count)?;
        if self.waste.visible.is_empty() {
            write!(f, " (empty)")?;
        }
        for card in &self.waste.visible {
            write_card(f, card)?;
        }
        writeln!(f)?;

        write!(f, "foundations:")?;
        for (i, foundation) in self.foundations.iter().enumerate() {
            match &foundation.top {
                Some(card) => write!(f, "  [{}] {}", i + 1, card)?,
                None => write!(f, "  [{}] --", i + 1)?,
            }
        }
        writeln!(f)?;

        for (i, pile) in self.tableau.iter().enumerate() {
            write!(f, "  t{}:", i + 1)?;
            for card in &pile.cards {
                write_card(f, card)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "moves: {}   undoable: {}",
            self.moves_played, self.history_depth
        )
    }
}

impl From<&GameState> for TableView {
    fn from(state: &GameState) -> Self {
        TableView::of(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DrawMode, FOUNDATION_COUNT, TABLEAU_COUNT};

    #[test]
    fn test_view_counts_match_state() {
        let state = GameState::new_game(DrawMode::Triple, Some(3)).unwrap();
        let view = TableView::of(&state);

        assert_eq!(view.stock.count, 21);
        assert!(!view.stock.is_empty);
        assert_eq!(view.waste.count, 3);
        assert_eq!(view.waste.visible.len(), 3);
        assert_eq!(view.tableau.len(), TABLEAU_COUNT);
        assert_eq!(view.foundations.len(), FOUNDATION_COUNT);
        assert!(view.foundations.iter().all(|f| f.top.is_none()));
        assert!(!view.is_won());
    }

    #[test]
    fn test_waste_fan_limited_by_draw_mode() {
        let mut state = GameState::new_game(DrawMode::Triple, Some(3)).unwrap();
        state.draw_from_stock().unwrap();
        state.draw_from_stock().unwrap();
        let view = TableView::of(&state);

        assert_eq!(view.waste.count, 9);
        assert_eq!(view.waste.visible.len(), 3);
        // The fan shows the newest three, ending with the waste top.
        assert_eq!(view.waste.visible.last(), state.waste.top());
    }

    #[test]
    fn test_view_is_detached_from_state() {
        let mut state = GameState::new_game(DrawMode::Single, Some(4)).unwrap();
        let view = TableView::of(&state);
        let stock_before = view.stock.count;

        state.draw_from_stock().unwrap();
        // The copy is unaffected by later mutation.
        assert_eq!(view.stock.count, stock_before);
    }

    #[test]
    fn test_display_renders_every_pile() {
        let state = GameState::new_game(DrawMode::Single, Some(5)).unwrap();
        let rendered = TableView::of(&state).to_string();
        assert!(rendered.contains("stock: 23"));
        assert!(rendered.contains("t7:"));
        assert!(rendered.contains("foundations:"));
    }
}
