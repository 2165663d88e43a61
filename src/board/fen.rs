//! Forsyth-Edwards Notation encoding and decoding.

use thiserror::Error;

use super::board::Board;
use super::castle_rights::CastleRights;
use super::color::Color;
use super::piece::Piece;
use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum FenParseError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),
    #[error("piece placement must describe 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("rank {0} does not describe exactly 8 files")]
    WrongFileCount(usize),
    #[error("invalid piece character: {0:?}")]
    InvalidPiece(char),
    #[error("invalid active color: {0:?}")]
    InvalidActiveColor(String),
    #[error("invalid castling rights: {0:?}")]
    InvalidCastleRights(String),
    #[error("invalid en passant target: {0:?}")]
    InvalidEnPassantTarget(String),
    #[error("invalid halfmove clock: {0:?}")]
    InvalidHalfmoveClock(String),
    #[error("invalid fullmove number: {0:?}")]
    InvalidFullmoveNumber(String),
}

/// Builds a board from the six whitespace-separated FEN fields. Ranks are
/// listed eighth rank first, which matches the board's rank 0.
pub fn parse_fen(input: &str) -> Result<Board, FenParseError> {
    let mut fields = input.split_whitespace();
    let placement = fields
        .next()
        .ok_or(FenParseError::MissingField("piece placement"))?;
    let active_color = fields
        .next()
        .ok_or(FenParseError::MissingField("active color"))?;
    let castle_rights = fields
        .next()
        .ok_or(FenParseError::MissingField("castling rights"))?;
    let en_passant = fields
        .next()
        .ok_or(FenParseError::MissingField("en passant target"))?;
    let halfmove = fields
        .next()
        .ok_or(FenParseError::MissingField("halfmove clock"))?;
    let fullmove = fields
        .next()
        .ok_or(FenParseError::MissingField("fullmove number"))?;

    let mut board = Board::new();

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenParseError::WrongRankCount(ranks.len()));
    }
    for (rank, rank_text) in ranks.iter().enumerate() {
        // Tracked wider than a file index so a run of digits cannot wrap
        // back into the valid range.
        let mut file = 0u32;
        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip;
            } else {
                let piece = Piece::from_fen(c).ok_or(FenParseError::InvalidPiece(c))?;
                if file >= 8 {
                    return Err(FenParseError::WrongFileCount(rank + 1));
                }
                board
                    .put(Square::new(rank as u8, file as u8), piece)
                    .expect("left-to-right placement never revisits a square");
                file += 1;
            }
            if file > 8 {
                return Err(FenParseError::WrongFileCount(rank + 1));
            }
        }
        if file != 8 {
            return Err(FenParseError::WrongFileCount(rank + 1));
        }
    }

    let mut color_chars = active_color.chars();
    board.turn = match (color_chars.next().and_then(Color::from_fen), color_chars.next()) {
        (Some(color), None) => color,
        _ => return Err(FenParseError::InvalidActiveColor(active_color.to_string())),
    };

    board.castle_rights = castle_rights
        .parse::<CastleRights>()
        .map_err(|_| FenParseError::InvalidCastleRights(castle_rights.to_string()))?;

    board.en_passant_target = match en_passant {
        "-" => None,
        text => Some(
            Square::from_algebraic(text)
                .ok_or_else(|| FenParseError::InvalidEnPassantTarget(text.to_string()))?,
        ),
    };

    board.halfmove_clock = halfmove
        .parse()
        .map_err(|_| FenParseError::InvalidHalfmoveClock(halfmove.to_string()))?;
    board.fullmove_number = fullmove
        .parse()
        .map_err(|_| FenParseError::InvalidFullmoveNumber(fullmove.to_string()))?;

    Ok(board)
}

/// Serializes the board back to the six FEN fields.
pub fn to_fen(board: &Board) -> String {
    let mut placement = String::new();
    for rank in 0..8u8 {
        if rank > 0 {
            placement.push('/');
        }
        let mut empty_run = 0;
        for file in 0..8u8 {
            match board.get(Square::new(rank, file)) {
                Some(piece) => {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    placement.push(piece.to_fen());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            placement.push_str(&empty_run.to_string());
        }
    }

    let en_passant = match board.en_passant_target() {
        Some(square) => square.to_string(),
        None => "-".to_string(),
    };

    format!(
        "{} {} {} {} {} {}",
        placement,
        board.turn().to_fen(),
        board.castle_rights(),
        en_passant,
        board.halfmove_clock(),
        board.fullmove_number(),
    )
}
