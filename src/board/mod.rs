//! Chess position representation and in-place mutation.

pub mod apply;
pub mod castle_rights;
pub mod color;
pub mod error;
pub mod fen;
pub mod piece;
pub mod square;

#[allow(clippy::module_inception)]
mod board;
#[cfg(test)]
mod tests;

pub use apply::MoveUndo;
pub use board::{Board, STARTING_POSITION_FEN};
pub use castle_rights::CastleRights;
pub use color::Color;
pub use error::BoardError;
pub use piece::{Piece, PieceKind};
pub use square::Square;
