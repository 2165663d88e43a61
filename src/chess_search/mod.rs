//! Chess plugged into the generic search driver.

pub mod move_orderer;

mod searcher;

pub use searcher::{search_best_move, ChessGame, ChessSearcher};
