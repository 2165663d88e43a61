//! In-place move application and its exact inverse.
//!
//! [`Board::apply`] mutates the position and returns a [`MoveUndo`] record;
//! feeding that record to [`Board::undo`] restores the board bit for bit.
//! The search leans on this pair to walk the game tree on a single board
//! instead of copying positions at every node.

use smallvec::SmallVec;

use super::board::Board;
use super::castle_rights::CastleRights;
use super::color::Color;
use super::piece::{Piece, PieceKind};
use super::square::Square;
use crate::chess_move::ChessMove;

/// One grid cell to put back during undo: `piece` stood on `origin` before
/// the move, and if `vacated` is set, whatever now occupies that square must
/// be cleared first. A move touches at most four cells (mover, victim,
/// en passant victim, castling rook).
#[derive(Clone, Debug)]
pub(super) struct CellRestore {
    origin: Square,
    vacated: Option<Square>,
    piece: Piece,
}

/// Everything needed to reverse one applied move.
#[derive(Clone, Debug)]
pub struct MoveUndo {
    balance: i32,
    castle_rights: CastleRights,
    en_passant_target: Option<Square>,
    cells: SmallVec<[CellRestore; 4]>,
    mv: ChessMove,
}

impl Board {
    /// Applies `mv` to the board and returns the record that reverses it.
    ///
    /// The move must come from the generator (or be equally well formed):
    /// its capture, en passant, rights, and castling fields are trusted
    /// rather than re-derived here. Pawns reaching the far rank are promoted
    /// to queens. Capturing a king marks the position done.
    ///
    /// Panics if the source square is empty, since that means the move and
    /// the board have fallen out of sync.
    pub fn apply(&mut self, mv: &ChessMove) -> MoveUndo {
        let mut undo = MoveUndo {
            balance: self.material_balance,
            castle_rights: self.castle_rights,
            en_passant_target: self.en_passant_target,
            cells: SmallVec::new(),
            mv: mv.clone(),
        };

        let piece = self.grid[mv.from.rank as usize][mv.from.file as usize]
            .take()
            .expect("apply: move source square is empty");
        self.positions[piece.index()].remove(&mv.from);
        undo.cells.push(CellRestore {
            origin: mv.from,
            vacated: Some(mv.to),
            piece,
        });

        if let Some(victim) = mv.capture {
            self.grid[mv.to.rank as usize][mv.to.file as usize] = None;
            self.positions[victim.index()].remove(&mv.to);
            self.material_balance -= victim.material();
            if victim.kind == PieceKind::King {
                self.is_done = true;
            }
            undo.cells.push(CellRestore {
                origin: mv.to,
                vacated: None,
                piece: victim,
            });
        }

        if let Some((victim_square, victim)) = mv.en_passant_capture {
            self.grid[victim_square.rank as usize][victim_square.file as usize] = None;
            self.positions[victim.index()].remove(&victim_square);
            self.material_balance -= victim.material();
            undo.cells.push(CellRestore {
                origin: victim_square,
                vacated: None,
                piece: victim,
            });
        }

        let landing = if piece.kind == PieceKind::Pawn && (mv.to.rank == 0 || mv.to.rank == 7) {
            Piece::new(PieceKind::Queen, piece.color)
        } else {
            piece
        };
        self.material_balance += landing.material() - piece.material();
        self.grid[mv.to.rank as usize][mv.to.file as usize] = Some(landing);
        self.positions[landing.index()].insert(mv.to);

        if let Some(side) = mv.castle {
            let rook = self.grid[side.rook_from().rank as usize][side.rook_from().file as usize]
                .take()
                .expect("apply: castling rook square is empty");
            self.positions[rook.index()].remove(&side.rook_from());
            self.grid[side.rook_to().rank as usize][side.rook_to().file as usize] = Some(rook);
            self.positions[rook.index()].insert(side.rook_to());
            undo.cells.push(CellRestore {
                origin: side.rook_from(),
                vacated: Some(side.rook_to()),
                piece: rook,
            });
        }

        if let Some(rights) = mv.new_castle_rights {
            self.castle_rights = rights;
        }
        self.en_passant_target = mv.new_en_passant_target;

        if self.turn == Color::Black {
            self.fullmove_number += 1;
        }
        self.halfmove_clock += 1;
        self.turn = self.turn.opposite();

        undo
    }

    /// Reverses the move described by `record`, restoring the board to the
    /// exact state it had before the matching [`Board::apply`]. Returns the
    /// move that was undone.
    pub fn undo(&mut self, record: MoveUndo) -> ChessMove {
        self.material_balance = record.balance;
        self.castle_rights = record.castle_rights;
        self.en_passant_target = record.en_passant_target;

        for cell in &record.cells {
            if let Some(vacated) = cell.vacated {
                if let Some(occupant) =
                    self.grid[vacated.rank as usize][vacated.file as usize].take()
                {
                    self.positions[occupant.index()].remove(&vacated);
                }
            }
            self.grid[cell.origin.rank as usize][cell.origin.file as usize] = Some(cell.piece);
            self.positions[cell.piece.index()].insert(cell.origin);
        }

        if self.turn == Color::White {
            self.fullmove_number -= 1;
        }
        self.halfmove_clock -= 1;
        self.turn = self.turn.opposite();
        self.is_done = false;

        record.mv
    }
}
