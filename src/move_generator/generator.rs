use smallvec::SmallVec;

use super::attacks::{self, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use crate::board::{Board, CastleRights, Color, Piece, PieceKind, Square};
use crate::chess_move::{CastleSide, ChessMove};

pub type ChessMoveList = SmallVec<[ChessMove; 64]>;

/// Generates the side to move's moves. Stateless; the board is read but
/// never touched.
#[derive(Clone, Copy, Default)]
pub struct MoveGenerator;

/// The castling rights a move through `square` invalidates.
fn rights_touching(square: Square) -> CastleRights {
    match (square.rank, square.file) {
        (7, 4) => CastleRights::for_color(Color::White),
        (7, 7) => CastleRights::WHITE_KINGSIDE,
        (7, 0) => CastleRights::WHITE_QUEENSIDE,
        (0, 4) => CastleRights::for_color(Color::Black),
        (0, 7) => CastleRights::BLACK_KINGSIDE,
        (0, 0) => CastleRights::BLACK_QUEENSIDE,
        _ => CastleRights::NONE,
    }
}

/// `Some(updated)` when moving `from` -> `to` changes the castling rights,
/// which happens when either endpoint is a king or rook home square.
fn rights_after(board: &Board, from: Square, to: Square) -> Option<CastleRights> {
    let lost = rights_touching(from).union(rights_touching(to));
    let updated = board.castle_rights().without(lost);
    (updated != board.castle_rights()).then_some(updated)
}

fn side_right(side: CastleSide) -> CastleRights {
    match side {
        CastleSide::WhiteKingside => CastleRights::WHITE_KINGSIDE,
        CastleSide::WhiteQueenside => CastleRights::WHITE_QUEENSIDE,
        CastleSide::BlackKingside => CastleRights::BLACK_KINGSIDE,
        CastleSide::BlackQueenside => CastleRights::BLACK_QUEENSIDE,
    }
}

impl MoveGenerator {
    /// All moves available to the side to move, fully resolved and in a
    /// deterministic order.
    ///
    /// King moves (castling included) are screened so the king never steps
    /// onto an attacked square; no other legality filtering happens here.
    /// A move that exposes one's own king simply loses that king on the
    /// opponent's next move.
    pub fn generate_moves(&self, board: &Board) -> ChessMoveList {
        let color = board.turn();
        let mut moves = ChessMoveList::new();
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind, color);
            for &from in board.piece_squares(piece) {
                match kind {
                    PieceKind::Pawn => self.pawn_moves(board, from, color, &mut moves),
                    PieceKind::Knight => {
                        self.leaper_moves(board, from, color, &KNIGHT_OFFSETS, &mut moves)
                    }
                    PieceKind::Bishop => {
                        self.slider_moves(board, from, color, &BISHOP_DIRECTIONS, &mut moves)
                    }
                    PieceKind::Rook => {
                        self.slider_moves(board, from, color, &ROOK_DIRECTIONS, &mut moves)
                    }
                    PieceKind::Queen => {
                        self.slider_moves(board, from, color, &ROOK_DIRECTIONS, &mut moves);
                        self.slider_moves(board, from, color, &BISHOP_DIRECTIONS, &mut moves);
                    }
                    PieceKind::King => self.king_moves(board, from, color, &mut moves),
                }
            }
        }
        self.castle_moves(board, color, &mut moves);
        moves
    }

    fn pawn_moves(&self, board: &Board, from: Square, color: Color, moves: &mut ChessMoveList) {
        // White pawns advance toward rank 0, Black toward rank 7.
        let dir = -color.affinity() as i8;
        let start_rank = match color {
            Color::White => 6,
            Color::Black => 1,
        };

        if let Some(one) = from.offset(dir, 0) {
            if board.get(one).is_none() {
                let mut mv = ChessMove::new(from, one);
                mv.new_castle_rights = rights_after(board, from, one);
                moves.push(mv);
                if from.rank == start_rank {
                    if let Some(two) = one.offset(dir, 0) {
                        if board.get(two).is_none() {
                            let mut mv = ChessMove::new(from, two);
                            mv.new_en_passant_target = Some(one);
                            moves.push(mv);
                        }
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            let to = match from.offset(dir, file_delta) {
                Some(to) => to,
                None => continue,
            };
            if let Some(victim) = board.get(to) {
                if victim.color != color {
                    let mut mv = ChessMove::with_capture(from, to, victim);
                    mv.new_castle_rights = rights_after(board, from, to);
                    moves.push(mv);
                }
            } else if board.en_passant_target() == Some(to) {
                // The bypassing pawn sits beside the mover, on the file it
                // just crossed.
                let victim_square = Square::new(from.rank, to.file);
                let mut mv = ChessMove::new(from, to);
                mv.en_passant_capture =
                    Some((victim_square, Piece::new(PieceKind::Pawn, color.opposite())));
                moves.push(mv);
            }
        }
    }

    fn leaper_moves(
        &self,
        board: &Board,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        moves: &mut ChessMoveList,
    ) {
        for &(rank_delta, file_delta) in offsets {
            let to = match from.offset(rank_delta, file_delta) {
                Some(to) => to,
                None => continue,
            };
            match board.get(to) {
                Some(occupant) if occupant.color == color => continue,
                Some(victim) => {
                    let mut mv = ChessMove::with_capture(from, to, victim);
                    mv.new_castle_rights = rights_after(board, from, to);
                    moves.push(mv);
                }
                None => {
                    let mut mv = ChessMove::new(from, to);
                    mv.new_castle_rights = rights_after(board, from, to);
                    moves.push(mv);
                }
            }
        }
    }

    fn slider_moves(
        &self,
        board: &Board,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut ChessMoveList,
    ) {
        for &(rank_delta, file_delta) in directions {
            let mut current = from;
            while let Some(to) = current.offset(rank_delta, file_delta) {
                match board.get(to) {
                    Some(occupant) if occupant.color == color => break,
                    Some(victim) => {
                        let mut mv = ChessMove::with_capture(from, to, victim);
                        mv.new_castle_rights = rights_after(board, from, to);
                        moves.push(mv);
                        break;
                    }
                    None => {
                        let mut mv = ChessMove::new(from, to);
                        mv.new_castle_rights = rights_after(board, from, to);
                        moves.push(mv);
                        current = to;
                    }
                }
            }
        }
    }

    fn king_moves(&self, board: &Board, from: Square, color: Color, moves: &mut ChessMoveList) {
        let enemy = color.opposite();
        for (rank_delta, file_delta) in KING_OFFSETS {
            let to = match from.offset(rank_delta, file_delta) {
                Some(to) => to,
                None => continue,
            };
            if attacks::is_attacked(board, to, enemy) {
                continue;
            }
            match board.get(to) {
                Some(occupant) if occupant.color == color => continue,
                Some(victim) => {
                    let mut mv = ChessMove::with_capture(from, to, victim);
                    mv.new_castle_rights = rights_after(board, from, to);
                    moves.push(mv);
                }
                None => {
                    let mut mv = ChessMove::new(from, to);
                    mv.new_castle_rights = rights_after(board, from, to);
                    moves.push(mv);
                }
            }
        }
    }

    fn castle_moves(&self, board: &Board, color: Color, moves: &mut ChessMoveList) {
        let enemy = color.opposite();
        for side in CastleSide::ALL {
            if side.color() != color || !board.castle_rights().contains(side_right(side)) {
                continue;
            }
            // Stale FEN rights can outlive the rook.
            if board.get(side.rook_from()) != Some(Piece::new(PieceKind::Rook, color)) {
                continue;
            }
            let rank = side.king_from().rank;
            let between: &[u8] = if side.rook_from().file == 7 {
                &[5, 6]
            } else {
                &[1, 2, 3]
            };
            if between
                .iter()
                .any(|&file| board.get(Square::new(rank, file)).is_some())
            {
                continue;
            }
            // The king's start, crossing, and landing squares must all be
            // safe. The crossing square is where the rook lands.
            if [side.king_from(), side.rook_to(), side.king_to()]
                .iter()
                .any(|&square| attacks::is_attacked(board, square, enemy))
            {
                continue;
            }

            let mut mv = ChessMove::new(side.king_from(), side.king_to());
            mv.castle = Some(side);
            mv.new_castle_rights = rights_after(board, side.king_from(), side.king_to());
            moves.push(mv);
        }
    }
}
