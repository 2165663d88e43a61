use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),
}
