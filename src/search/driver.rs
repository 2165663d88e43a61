use log::debug;
use thiserror::Error;

use super::game::{Game, OrderingHints};

/// Initial window bounds. They sit strictly outside any score a game should
/// produce, so even a forced loss beats the unexplored default.
pub const LOWEST_SCORE: i32 = i32::MIN + 1;
pub const HIGHEST_SCORE: i32 = i32::MAX - 1;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves to search")]
    NoAvailableMoves,
    #[error("search depth must be at least 1")]
    DepthTooLow,
}

/// Depth-bounded alpha-beta minimax over a [`Game`].
///
/// The driver is reusable: ordering hints (the previous best line and the
/// moves that caused cutoffs) carry over from one `search` call to the next,
/// so searching successive positions of the same game gets faster orderings
/// for free.
pub struct GameSearch<G: Game> {
    depth: u8,
    hints: OrderingHints<G::Move>,
    line: Vec<G::Move>,
    searched_position_count: usize,
    cutoff_count: usize,
}

impl<G: Game> GameSearch<G> {
    pub fn new(depth: u8) -> Result<Self, SearchError> {
        if depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        Ok(Self {
            depth,
            hints: OrderingHints::default(),
            line: Vec::new(),
            searched_position_count: 0,
            cutoff_count: 0,
        })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Positions visited by the most recent `search` call.
    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Subtrees abandoned to cutoffs in the most recent `search` call.
    pub fn cutoff_count(&self) -> usize {
        self.cutoff_count
    }

    /// The best line found by the most recent `search` call, starting with
    /// the returned move.
    pub fn last_line(&self) -> &[G::Move] {
        &self.line
    }

    /// Finds the best move for the side to move in `state`.
    ///
    /// `state` is mutated during the search and restored before returning.
    /// Ties are broken toward the earliest move in ordering: a later move
    /// must strictly beat the incumbent to replace it, which also keeps the
    /// result deterministic for a deterministic ordering.
    pub fn search(&mut self, state: &mut G::State) -> Result<G::Move, SearchError> {
        self.searched_position_count = 0;
        self.cutoff_count = 0;

        let maximizing = G::is_maximizing(state);
        let mut alpha = LOWEST_SCORE;
        let mut beta = HIGHEST_SCORE;
        let mut best_move: Option<G::Move> = None;
        let mut best_score = if maximizing { LOWEST_SCORE } else { HIGHEST_SCORE };
        let mut best_line = Vec::new();
        let mut child_line = Vec::new();

        // The root window never closes (only one bound tightens here), so
        // every root move gets scored.
        for mv in G::list_moves(state, &self.hints) {
            let score = self.descend(state, &mv, self.depth - 1, alpha, beta, &mut child_line);
            let improved = match best_move {
                Some(_) => {
                    if maximizing {
                        score > best_score
                    } else {
                        score < best_score
                    }
                }
                None => true,
            };
            if improved {
                best_score = score;
                best_line.clear();
                best_line.push(mv.clone());
                best_line.append(&mut child_line);
                best_move = Some(mv);
            }
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
        }

        let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
        debug!(
            "picked {:?} scoring {} after {} positions ({} cutoffs), line {:?}",
            best_move, best_score, self.searched_position_count, self.cutoff_count, best_line
        );
        self.hints.set_critical_path(best_line.iter().cloned());
        self.line = best_line;
        Ok(best_move)
    }

    /// Applies `mv`, scores the resulting subtree, and puts the state back.
    fn descend(
        &mut self,
        state: &mut G::State,
        mv: &G::Move,
        depth: u8,
        alpha: i32,
        beta: i32,
        line: &mut Vec<G::Move>,
    ) -> i32 {
        let undo = G::apply(state, mv);
        let score = self.minimax(state, mv, depth, alpha, beta, line);
        G::undo(state, undo);
        score
    }

    fn minimax(
        &mut self,
        state: &mut G::State,
        last_move: &G::Move,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        line: &mut Vec<G::Move>,
    ) -> i32 {
        self.searched_position_count += 1;

        if G::is_terminal(state) {
            line.clear();
            return G::score_terminal(state);
        }
        if depth == 0 {
            line.clear();
            return G::score_leaf(state, last_move);
        }

        let maximizing = G::is_maximizing(state);
        let mut best = if maximizing { LOWEST_SCORE } else { HIGHEST_SCORE };
        let mut visited_any = false;
        let mut best_line = Vec::new();
        let mut child_line = Vec::new();

        for mv in G::list_moves(state, &self.hints) {
            visited_any = true;
            let score = self.descend(state, &mv, depth - 1, alpha, beta, &mut child_line);
            let improved = if maximizing { score > best } else { score < best };
            if improved {
                best = score;
                best_line.clear();
                best_line.push(mv.clone());
                best_line.append(&mut child_line);
            }
            if maximizing {
                alpha = alpha.max(best);
            } else {
                beta = beta.min(best);
            }
            if alpha >= beta {
                self.cutoff_count += 1;
                self.hints.note_pruner(&mv);
                break;
            }
        }

        // A side with no moves at all ends the game on the spot.
        if !visited_any {
            line.clear();
            return G::score_terminal(state);
        }

        line.clear();
        line.append(&mut best_line);
        best
    }
}
