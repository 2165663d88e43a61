pub mod board;
pub mod chess_move;
pub mod chess_search;
pub mod evaluate;
pub mod move_generator;
pub mod search;
