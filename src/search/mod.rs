//! Generic depth-bounded alpha-beta search.
//!
//! The driver knows nothing about chess: any two-player, perfect-information
//! game can plug in through the [`Game`] trait. Scores are absolute (the
//! maximizing player prefers larger values no matter whose turn it is), and
//! the game tree is walked on a single mutable state via apply/undo rather
//! than by cloning states.

mod driver;
mod game;

#[cfg(test)]
mod tests;

pub use driver::{GameSearch, SearchError, HIGHEST_SCORE, LOWEST_SCORE};
pub use game::{Game, OrderingHints};
