//! Chess board state representation.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::castle_rights::CastleRights;
use super::color::Color;
use super::error::BoardError;
use super::fen::{self, FenParseError};
use super::piece::Piece;
use super::square::Square;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A chess position: an 8x8 grid of optional pieces, a per-piece square
/// index mirroring the grid exactly, and game metadata including the running
/// material balance and the terminal ("king captured") flag.
///
/// One `Board` is shared by an entire search. Moves are applied and undone
/// in place through [`Board::apply`] and [`Board::undo`] rather than by
/// copying the position per node, so those two operations must be exact
/// inverses. All other mutation is limited to construction (`put`, the FEN
/// decoder, and `set_turn` for staging positions).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub(super) grid: [[Option<Piece>; 8]; 8],
    pub(super) positions: [BTreeSet<Square>; 12],
    pub(super) turn: Color,
    pub(super) castle_rights: CastleRights,
    pub(super) en_passant_target: Option<Square>,
    pub(super) halfmove_clock: u32,
    pub(super) fullmove_number: u32,
    pub(super) material_balance: i32,
    pub(super) is_done: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [[None; 8]; 8],
            positions: Default::default(),
            turn: Color::White,
            castle_rights: CastleRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            material_balance: 0,
            is_done: false,
        }
    }
}

impl Board {
    /// An empty board with White to move and no castling rights.
    pub fn new() -> Self {
        Default::default()
    }

    /// A fresh, independently owned copy of the standard starting position.
    pub fn starting_position() -> Self {
        fen::parse_fen(STARTING_POSITION_FEN).expect("starting position FEN is valid")
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.grid[square.rank as usize][square.file as usize]
    }

    /// Places a piece during position construction. Search-time mutation
    /// goes through [`Board::apply`] instead, which keeps the index and the
    /// material balance in lockstep with the grid.
    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if self.get(square).is_some() {
            return Err(BoardError::SquareOccupied(square));
        }
        self.grid[square.rank as usize][square.file as usize] = Some(piece);
        self.positions[piece.index()].insert(square);
        self.material_balance += piece.material();
        Ok(())
    }

    /// Every square currently occupied by `piece`, in (rank, file) order.
    pub fn piece_squares(&self, piece: Piece) -> &BTreeSet<Square> {
        &self.positions[piece.index()]
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// Side-to-move multiplier: +1 when White is to move, -1 for Black.
    pub fn player_affinity(&self) -> i32 {
        self.turn.affinity()
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Sum of the signed material values of every occupied square; positive
    /// favors White. Maintained incrementally by `put` and `apply`.
    pub fn material_balance(&self) -> i32 {
        self.material_balance
    }

    /// True once a king has been captured. Game end is signalled by the
    /// capture itself rather than by checkmate detection ahead of it.
    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn to_fen(&self) -> String {
        fen::to_fen(self)
    }
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        fen::parse_fen(input)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in &self.grid {
            for cell in rank {
                match cell {
                    Some(piece) => write!(f, "{} ", piece.to_fen())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Board {
    /// Checks the index and material-balance invariants against the grid.
    pub(crate) fn assert_consistent(&self) {
        use super::piece::PieceKind;

        let mut balance = 0;
        for rank in 0..8u8 {
            for file in 0..8u8 {
                let square = Square::new(rank, file);
                match self.get(square) {
                    Some(piece) => {
                        balance += piece.material();
                        assert!(
                            self.positions[piece.index()].contains(&square),
                            "{} at {} missing from index",
                            piece.to_fen(),
                            square
                        );
                    }
                    None => {
                        for positions in &self.positions {
                            assert!(
                                !positions.contains(&square),
                                "empty square {} present in index",
                                square
                            );
                        }
                    }
                }
            }
        }
        assert_eq!(balance, self.material_balance, "material balance drifted");

        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                for square in self.piece_squares(piece) {
                    assert_eq!(
                        self.get(*square),
                        Some(piece),
                        "index claims {} at {}",
                        piece.to_fen(),
                        square
                    );
                }
            }
        }
    }
}
