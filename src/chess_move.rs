//! Fully resolved chess moves.
//!
//! The move generator resolves everything a move will do to the board at
//! generation time, so [`Board::apply`](crate::board::Board::apply) never has
//! to rediscover captures, castling rook hops, or rights updates.

use std::fmt;

use crate::board::{CastleRights, Color, Piece, Square};

/// The four castling moves, each pinning down the king and rook squares it
/// touches. White castles along rank 7, Black along rank 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CastleSide {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 4] = [
        CastleSide::WhiteKingside,
        CastleSide::WhiteQueenside,
        CastleSide::BlackKingside,
        CastleSide::BlackQueenside,
    ];

    pub fn color(self) -> Color {
        match self {
            CastleSide::WhiteKingside | CastleSide::WhiteQueenside => Color::White,
            CastleSide::BlackKingside | CastleSide::BlackQueenside => Color::Black,
        }
    }

    fn back_rank(self) -> u8 {
        match self.color() {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn king_from(self) -> Square {
        Square::new(self.back_rank(), 4)
    }

    pub fn king_to(self) -> Square {
        match self {
            CastleSide::WhiteKingside | CastleSide::BlackKingside => {
                Square::new(self.back_rank(), 6)
            }
            CastleSide::WhiteQueenside | CastleSide::BlackQueenside => {
                Square::new(self.back_rank(), 2)
            }
        }
    }

    pub fn rook_from(self) -> Square {
        match self {
            CastleSide::WhiteKingside | CastleSide::BlackKingside => {
                Square::new(self.back_rank(), 7)
            }
            CastleSide::WhiteQueenside | CastleSide::BlackQueenside => {
                Square::new(self.back_rank(), 0)
            }
        }
    }

    pub fn rook_to(self) -> Square {
        match self {
            CastleSide::WhiteKingside | CastleSide::BlackKingside => {
                Square::new(self.back_rank(), 5)
            }
            CastleSide::WhiteQueenside | CastleSide::BlackQueenside => {
                Square::new(self.back_rank(), 3)
            }
        }
    }
}

/// A single move with all of its board effects resolved.
///
/// `capture` is the piece sitting on `to`, if any; en passant victims live on
/// a different square and are carried separately. `new_castle_rights` is
/// `Some` only when the move changes the rights, and `Some(CastleRights::NONE)`
/// clears them entirely.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub capture: Option<Piece>,
    pub en_passant_capture: Option<(Square, Piece)>,
    pub new_castle_rights: Option<CastleRights>,
    pub new_en_passant_target: Option<Square>,
    pub castle: Option<CastleSide>,
}

impl ChessMove {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            capture: None,
            en_passant_capture: None,
            new_castle_rights: None,
            new_en_passant_target: None,
            castle: None,
        }
    }

    pub fn with_capture(from: Square, to: Square, capture: Piece) -> Self {
        Self {
            capture: Some(capture),
            ..Self::new(from, to)
        }
    }

    /// True for ordinary captures and en passant alike.
    pub fn is_capture(&self) -> bool {
        self.capture.is_some() || self.en_passant_capture.is_some()
    }

    /// The piece removed from the board by this move, if any.
    pub fn captured_piece(&self) -> Option<Piece> {
        self.capture
            .or_else(|| self.en_passant_capture.map(|(_, piece)| piece))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_castle_squares() {
        let side = CastleSide::WhiteKingside;
        assert_eq!(side.king_from(), Square::new(7, 4));
        assert_eq!(side.king_to(), Square::new(7, 6));
        assert_eq!(side.rook_from(), Square::new(7, 7));
        assert_eq!(side.rook_to(), Square::new(7, 5));

        let side = CastleSide::BlackQueenside;
        assert_eq!(side.king_from(), Square::new(0, 4));
        assert_eq!(side.king_to(), Square::new(0, 2));
        assert_eq!(side.rook_from(), Square::new(0, 0));
        assert_eq!(side.rook_to(), Square::new(0, 3));
    }

    #[test]
    fn test_display_uses_algebraic_squares() {
        let mv = ChessMove::new(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_captured_piece_covers_en_passant() {
        let victim = Piece::new(PieceKind::Pawn, Color::Black);
        let mut mv = ChessMove::new(Square::new(3, 4), Square::new(2, 3));
        mv.en_passant_capture = Some((Square::new(3, 3), victim));
        assert!(mv.is_capture());
        assert_eq!(mv.captured_piece(), Some(victim));
    }
}
