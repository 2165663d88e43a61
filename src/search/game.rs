use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;

/// The game-specific half of the search: state, moves, scoring, and exactly
/// reversible mutation.
///
/// `apply` followed by `undo` with the returned token must leave the state
/// exactly as it was; the driver brackets every descent with that pair.
/// Scores share one absolute scale where larger is better for the
/// maximizing player.
pub trait Game {
    type State;
    type Move: Clone + Eq + Hash + Debug;
    type Undo;
    type MoveList: IntoIterator<Item = Self::Move>;

    /// Whether the side to move in `state` is the maximizing player.
    fn is_maximizing(state: &Self::State) -> bool;

    /// Whether the game is over in `state` (no further moves matter).
    fn is_terminal(state: &Self::State) -> bool;

    /// Scores a non-terminal state at the depth horizon. `last_move` is the
    /// move that produced this state.
    fn score_leaf(state: &mut Self::State, last_move: &Self::Move) -> i32;

    /// Scores a state with no further play: terminal, or no moves available.
    fn score_terminal(state: &mut Self::State) -> i32;

    /// The side to move's moves, best guesses first. Orderings that front-load
    /// strong moves produce earlier cutoffs; `hints` carries what previous
    /// searching learned.
    fn list_moves(state: &mut Self::State, hints: &OrderingHints<Self::Move>) -> Self::MoveList;

    fn apply(state: &mut Self::State, mv: &Self::Move) -> Self::Undo;

    fn undo(state: &mut Self::State, undo: Self::Undo);
}

/// Move-ordering knowledge accumulated across searches: the best line found
/// by the previous search, and moves that have caused beta cutoffs.
#[derive(Debug)]
pub struct OrderingHints<M: Eq + Hash> {
    critical_path: FxHashSet<M>,
    pruners: FxHashSet<M>,
}

impl<M: Eq + Hash> Default for OrderingHints<M> {
    fn default() -> Self {
        Self {
            critical_path: FxHashSet::default(),
            pruners: FxHashSet::default(),
        }
    }
}

impl<M: Eq + Hash + Clone> OrderingHints<M> {
    pub fn is_on_critical_path(&self, mv: &M) -> bool {
        self.critical_path.contains(mv)
    }

    pub fn is_pruner(&self, mv: &M) -> bool {
        self.pruners.contains(mv)
    }

    /// Records a move that just caused a cutoff. Pruners accumulate for the
    /// lifetime of the search driver.
    pub fn note_pruner(&mut self, mv: &M) {
        if !self.pruners.contains(mv) {
            self.pruners.insert(mv.clone());
        }
    }

    /// Replaces the critical path with the best line of the latest search.
    pub fn set_critical_path(&mut self, line: impl IntoIterator<Item = M>) {
        self.critical_path.clear();
        self.critical_path.extend(line);
    }
}
