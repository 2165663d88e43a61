//! Position evaluation.
//!
//! Scores live on one absolute scale: positive favors White regardless of
//! whose turn it is. The backbone is the board's running material balance;
//! on top of that, leaf positions get an exchange-walk adjustment for the
//! piece that just moved (a cheap stand-in for searching past the horizon)
//! plus small pawn-advancement and knight-placement terms.

use smallvec::SmallVec;

use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::chess_move::ChessMove;
use crate::move_generator::attacks;

/// Sentinel magnitude for a decided game. Positional scores stay far inside
/// this bound, and the search's initial bounds stay outside it.
pub const WIN: i32 = 1_000_000;

/// Bonus per pawn, indexed by the pawn's distance from its promotion rank.
/// Index 0 is unused; a pawn reaching distance zero has promoted.
const PAWN_RANK_BONUS: [i32; 7] = [0, 120, 60, 13, 14, 10, 0];

const PAWN_DEFENDER_BONUS: i32 = 5;

const KNIGHT_EDGE_PENALTY: i32 = 25;

/// Score for a position with no further play: a captured king decides the
/// game, anything else is a draw.
///
/// The winner's score is nudged one point toward zero by the side-to-move
/// affinity, so a forced win found deeper in the tree still compares equal
/// to one found earlier while staying inside the search's initial bounds.
pub fn score_terminal(board: &Board) -> i32 {
    if !board.is_done() {
        return 0;
    }
    // The side to move is the side whose king is gone.
    let decided = match board.turn() {
        Color::White => -WIN,
        Color::Black => WIN,
    };
    board.player_affinity() + decided
}

/// Scores a leaf position reached by `last_move`.
pub fn score(board: &Board, last_move: &ChessMove) -> i32 {
    if board.is_done() {
        return score_terminal(board);
    }

    let mut total = board.material_balance();

    // King landing squares were already screened by the generator; for any
    // other piece, ask whether standing on this square survives the
    // exchanges it invites.
    if let Some(piece) = board.get(last_move.to) {
        if piece.kind != PieceKind::King {
            total += horizon_adjustment(board, last_move.to);
        }
    }

    for color in Color::ALL {
        let positional = pawn_bonus(board, color) + knight_on_edge(board, color);
        total += positional * color.affinity();
    }
    total
}

/// Plays out the capture sequence that taking the piece on `pos` would
/// start, cheapest attackers first and strictly alternating while both
/// sides can recapture, and returns the signed material swing.
///
/// Each side only trades "down or even" (captures a victim worth at least
/// the capturing piece), except that the final attacker in the sequence has
/// nobody left to answer it and captures unconditionally.
pub fn horizon_adjustment(board: &Board, pos: Square) -> i32 {
    let subject = match board.get(pos) {
        Some(piece) => piece,
        None => return 0,
    };
    let (enemies, friends) = attacks::attackers_of(board, pos, subject.color);
    if enemies.is_empty() {
        return 0;
    }

    let mut sequence: SmallVec<[Piece; 16]> = SmallVec::new();
    for i in 0..enemies.len().min(friends.len()) {
        sequence.push(enemies[i].1);
        sequence.push(friends[i].1);
    }
    // One unanswered enemy beyond the alternation still gets its capture.
    if enemies.len() > friends.len() {
        sequence.push(enemies[friends.len()].1);
    }

    let mut adjustment = 0;
    let mut victim = subject;
    for (i, &attacker) in sequence.iter().enumerate() {
        let is_last = i == sequence.len() - 1;
        if victim.material().abs() >= attacker.material().abs() || is_last {
            adjustment -= victim.material();
            victim = attacker;
        } else {
            break;
        }
    }
    adjustment
}

/// Advancement and mutual-defense bonuses for `color`'s pawns, as a
/// positive quantity from that side's point of view.
fn pawn_bonus(board: &Board, color: Color) -> i32 {
    let pawn = Piece::new(PieceKind::Pawn, color);
    let promotion_rank = match color {
        Color::White => 0u8,
        Color::Black => 7,
    };
    let mut bonus = 0;
    for &square in board.piece_squares(pawn) {
        let distance = promotion_rank.abs_diff(square.rank);
        bonus += PAWN_RANK_BONUS[distance as usize];

        // Own pawns one rank behind on adjacent files defend this one.
        let behind = color.affinity() as i8;
        for file_delta in [-1, 1] {
            if let Some(defender) = square.offset(behind, file_delta) {
                if board.get(defender) == Some(pawn) {
                    bonus += PAWN_DEFENDER_BONUS;
                }
            }
        }
    }
    bonus
}

/// Penalty for `color`'s knights sitting on the board's rim, as a negative
/// quantity from that side's point of view.
fn knight_on_edge(board: &Board, color: Color) -> i32 {
    let knight = Piece::new(PieceKind::Knight, color);
    let mut bonus = 0;
    for &square in board.piece_squares(knight) {
        if square.rank == 0 || square.rank == 7 || square.file == 0 || square.file == 7 {
            bonus -= KNIGHT_EDGE_PENALTY;
        }
    }
    bonus
}
