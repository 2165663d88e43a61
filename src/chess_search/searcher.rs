use log::debug;

use super::move_orderer;
use crate::board::{Board, Color, MoveUndo};
use crate::chess_move::ChessMove;
use crate::evaluate;
use crate::move_generator::{ChessMoveList, MoveGenerator};
use crate::search::{Game, GameSearch, OrderingHints, SearchError};

/// Chess as seen by the generic search driver: White maximizes, a captured
/// king ends the game, and leaves are scored by the evaluator.
pub struct ChessGame;

impl Game for ChessGame {
    type State = Board;
    type Move = ChessMove;
    type Undo = MoveUndo;
    type MoveList = ChessMoveList;

    fn is_maximizing(board: &Board) -> bool {
        board.turn() == Color::White
    }

    fn is_terminal(board: &Board) -> bool {
        board.is_done()
    }

    fn score_leaf(board: &mut Board, last_move: &ChessMove) -> i32 {
        evaluate::score(board, last_move)
    }

    fn score_terminal(board: &mut Board) -> i32 {
        evaluate::score_terminal(board)
    }

    fn list_moves(board: &mut Board, hints: &OrderingHints<ChessMove>) -> ChessMoveList {
        let moves = MoveGenerator::default().generate_moves(board);
        move_orderer::order_moves(board, moves, hints)
    }

    fn apply(board: &mut Board, mv: &ChessMove) -> MoveUndo {
        board.apply(mv)
    }

    fn undo(board: &mut Board, undo: MoveUndo) {
        board.undo(undo);
    }
}

/// A reusable engine for one game: keeping the searcher alive between moves
/// lets the driver's ordering hints speed up later searches.
pub struct ChessSearcher {
    search: GameSearch<ChessGame>,
}

impl ChessSearcher {
    pub fn new(depth: u8) -> Result<Self, SearchError> {
        Ok(Self {
            search: GameSearch::new(depth)?,
        })
    }

    /// The best move for the side to move. The board is used as scratch
    /// space during the search but comes back unchanged.
    pub fn next_move(&mut self, board: &mut Board) -> Result<ChessMove, SearchError> {
        let best = self.search.search(board)?;
        debug!(
            "{} plays {} at depth {} ({} positions, {} cutoffs)",
            board.turn(),
            best,
            self.search.depth(),
            self.search.searched_position_count(),
            self.search.cutoff_count(),
        );
        Ok(best)
    }

    pub fn searched_position_count(&self) -> usize {
        self.search.searched_position_count()
    }

    pub fn last_line(&self) -> &[ChessMove] {
        self.search.last_line()
    }
}

/// One-shot convenience wrapper around [`ChessSearcher`].
pub fn search_best_move(board: &mut Board, depth: u8) -> Result<ChessMove, SearchError> {
    ChessSearcher::new(depth)?.next_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn best_move(fen: &str, depth: u8) -> ChessMove {
        let mut board: Board = fen.parse().unwrap();
        search_best_move(&mut board, depth).unwrap()
    }

    #[test]
    fn test_takes_a_free_queen() {
        let best = best_move("4k3/8/8/8/4q3/3P4/8/4K3 w - - 0 50", 2);
        assert_eq!(best.from, Square::new(5, 3));
        assert_eq!(best.to, Square::new(4, 4));
    }

    #[test]
    fn test_finds_a_back_rank_mate() {
        // Re8 traps the king behind its own pawns; at depth 3 the search
        // sees the king fall no matter what Black answers.
        let best = best_move("6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1", 3);
        assert_eq!(best.from, Square::new(7, 4));
        assert_eq!(best.to, Square::new(0, 4));
    }

    #[test]
    fn test_black_saves_the_queen_by_taking_the_attacker() {
        // Black to move with the queen attacked by the d3 pawn: capturing
        // it both answers the threat and minimizes the score.
        let fen = "3k4/8/8/8/4q3/3P4/8/3K4 b - - 0 50";
        let mut board: Board = fen.parse().unwrap();
        let best = search_best_move(&mut board, 2).unwrap();
        assert_eq!(best.from, Square::new(4, 4));
        assert_eq!(best.to, Square::new(5, 3));
        // The search must not leave the board disturbed.
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_search_is_deterministic() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
        assert_eq!(best_move(fen, 2), best_move(fen, 2));
    }

    #[test]
    fn test_ties_break_toward_the_first_ordered_move() {
        // Lone kings: every move scores the same, so the ordering's first
        // move wins.
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
        let mut board: Board = fen.parse().unwrap();
        let ordered = ChessGame::list_moves(&mut board, &OrderingHints::default());
        let best = search_best_move(&mut board, 2).unwrap();
        assert_eq!(best, ordered[0]);
    }

    #[test]
    fn test_stalemate_has_no_move_to_return() {
        let mut board: Board = "k7/8/K7/1Q6/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(
            search_best_move(&mut board, 2),
            Err(SearchError::NoAvailableMoves)
        );
    }

    #[test]
    fn test_reusing_the_searcher_across_moves() {
        let mut board = Board::starting_position();
        let mut searcher = ChessSearcher::new(2).unwrap();

        let first = searcher.next_move(&mut board).unwrap();
        assert!(!searcher.last_line().is_empty());
        board.apply(&first);

        let reply = searcher.next_move(&mut board).unwrap();
        assert_eq!(board.get(reply.from).map(|p| p.color), Some(Color::Black));
    }
}
