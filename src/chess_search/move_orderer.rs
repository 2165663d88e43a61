//! Heuristic move ordering.
//!
//! Better-first orderings make alpha-beta cut sooner, so each move gets a
//! guessed strength and the list is sorted strongest first. Ranks are in
//! thousandths of the base heuristic so capture differentials stay integral.

use crate::board::{Board, PieceKind};
use crate::chess_move::ChessMove;
use crate::move_generator::ChessMoveList;
use crate::search::OrderingHints;

/// One rank point from the base heuristics is worth this many rank millis.
const SCALE: i64 = 1000;

/// Quiet moves by kings and pawns start lower than piece activity.
const KING_PAWN_BASE: i64 = 100;
const PIECE_BASE: i64 = 200;

/// Multipliers for moves previous searching flagged as strong.
const CRITICAL_PATH_FACTOR: i64 = 100;
const PRUNER_FACTOR: i64 = 50;
const CASTLE_FACTOR: i64 = 11;

/// Sorts `moves` strongest guess first. The sort is stable, so moves the
/// heuristics cannot separate keep their generation order and the overall
/// ordering stays deterministic.
pub fn order_moves(
    board: &Board,
    mut moves: ChessMoveList,
    hints: &OrderingHints<ChessMove>,
) -> ChessMoveList {
    moves.sort_by_key(|mv| rank(board, mv, hints));
    moves
}

/// A move's ordering rank; lower sorts earlier. Strength is computed as a
/// positive magnitude and negated, so the strongest guesses get the most
/// negative ranks.
fn rank(board: &Board, mv: &ChessMove, hints: &OrderingHints<ChessMove>) -> i64 {
    let mover = match board.get(mv.from) {
        Some(piece) => piece,
        None => return 0,
    };

    // Captures rank on their own material differential regardless of what
    // kind of piece does the capturing.
    let mut base = if mv.is_capture() || !matches!(mover.kind, PieceKind::King | PieceKind::Pawn) {
        PIECE_BASE
    } else {
        KING_PAWN_BASE
    };

    if hints.is_on_critical_path(mv) {
        base *= CRITICAL_PATH_FACTOR;
    }
    if hints.is_pruner(mv) {
        base *= PRUNER_FACTOR;
    }
    if mv.castle.is_some() {
        base *= CASTLE_FACTOR;
    }

    let magnitude = match mv.captured_piece() {
        // Winning captures outrank even ones, which outrank losing ones,
        // with a flat boost that keeps ordinary captures ahead of quiet
        // moves.
        Some(victim) => {
            let gap = (victim.material().abs() - mover.material().abs()) as i64;
            base * (2 * (gap + 100) + 11 * SCALE)
        }
        None => base * SCALE,
    };
    -magnitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::move_generator::MoveGenerator;

    fn ordered(fen: &str, hints: &OrderingHints<ChessMove>) -> ChessMoveList {
        let board: Board = fen.parse().unwrap();
        let moves = MoveGenerator::default().generate_moves(&board);
        order_moves(&board, moves, hints)
    }

    fn position_of(moves: &ChessMoveList, from: Square, to: Square) -> usize {
        moves
            .iter()
            .position(|mv| mv.from == from && mv.to == to)
            .unwrap()
    }

    #[test]
    fn test_captures_and_castling_lead_the_ordering() {
        let hints = OrderingHints::default();
        let moves = ordered("6k1/4p3/3pP3/6r1/1p3P2/3p4/PP2P3/R3K3 w Q d7 0 50", &hints);
        // Pawn takes rook, then the two even pawn captures in generation
        // order (en passant from e6, then exd3), then castling.
        assert_eq!(moves[0].to, Square::new(3, 6));
        assert!(moves[1].en_passant_capture.is_some());
        assert_eq!(moves[2].to, Square::new(5, 3));
        assert!(moves[3].castle.is_some());
    }

    #[test]
    fn test_winning_captures_outrank_losing_ones() {
        let hints = OrderingHints::default();
        let fen = "k7/8/5p2/2q5/1P6/8/5Q2/K7 w - - 0 1";
        let moves = ordered(fen, &hints);
        let pawn_takes_queen = position_of(&moves, Square::new(4, 1), Square::new(3, 2));
        let queen_takes_queen = position_of(&moves, Square::new(6, 5), Square::new(3, 2));
        let queen_takes_pawn = position_of(&moves, Square::new(6, 5), Square::new(2, 5));
        assert!(pawn_takes_queen < queen_takes_queen);
        assert!(queen_takes_queen < queen_takes_pawn);
    }

    #[test]
    fn test_pruner_hint_promotes_a_quiet_move() {
        let fen = "k7/8/5p2/2q5/1P6/8/5Q2/K7 w - - 0 1";
        let quiet = ChessMove::new(Square::new(6, 5), Square::new(5, 5));

        let mut hints = OrderingHints::default();
        hints.note_pruner(&quiet);
        let moves = ordered(fen, &hints);
        assert_eq!(moves[0], quiet);
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let hints = OrderingHints::default();
        let fen = "6k1/4p3/3pP3/6r1/1p3P2/3p4/PP2P3/R3K3 w Q d7 0 50";
        assert_eq!(ordered(fen, &hints), ordered(fen, &hints));
    }
}
