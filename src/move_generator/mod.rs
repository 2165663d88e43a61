//! Pseudo-legal move generation.
//!
//! Moves come out fully resolved (captures, en passant, castling rook hops,
//! and rights updates are all precomputed) and in a deterministic order:
//! piece kinds from pawn to king, squares in rank-then-file order, castling
//! moves last. The only legality screen applied here is king destination
//! safety; leaving one's own king en prise is instead punished a ply later
//! when the king gets captured.

pub mod attacks;

#[allow(clippy::module_inception)]
mod generator;

pub use generator::{ChessMoveList, MoveGenerator};
