use std::fmt;

/// A board coordinate in (rank-index, file-index) form. Rank index 0 is the
/// eighth rank, so indices grow downward toward White's side: a8 is (0, 0)
/// and h1 is (7, 7). This matches the top-down layout of the board grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    pub fn new(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8, "square ({}, {}) off board", rank, file);
        Self { rank, file }
    }

    /// Offsets the square, returning `None` when the result falls off the board.
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        let rank = self.rank as i8 + rank_delta;
        let file = self.file as i8 + file_delta;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::new(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Parses algebraic notation, e.g. `"e4"`.
    pub fn from_algebraic(text: &str) -> Option<Square> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::new(b'8' - rank, file - b'a'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            (b'8' - self.rank) as char
        )
    }
}
