use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::color::Color;

/// Castling availability as a bitmask, one bit per side and wing. The empty
/// mask is the "no rights" state and renders as `-` in FEN.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CastleRights(u8);

#[derive(Error, Debug, PartialEq)]
#[error("invalid castling rights character: {0:?}")]
pub struct ParseCastleRightsError(pub char);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const WHITE_KINGSIDE: CastleRights = CastleRights(1);
    pub const WHITE_QUEENSIDE: CastleRights = CastleRights(1 << 1);
    pub const BLACK_KINGSIDE: CastleRights = CastleRights(1 << 2);
    pub const BLACK_QUEENSIDE: CastleRights = CastleRights(1 << 3);
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Both wings of one side.
    pub fn for_color(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights(Self::WHITE_KINGSIDE.0 | Self::WHITE_QUEENSIDE.0),
            Color::Black => CastleRights(Self::BLACK_KINGSIDE.0 | Self::BLACK_QUEENSIDE.0),
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn union(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    pub fn without(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (right, letter) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.contains(right) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

impl FromStr for CastleRights {
    type Err = ParseCastleRightsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text == "-" {
            return Ok(Self::NONE);
        }
        let mut rights = Self::NONE;
        for c in text.chars() {
            rights = rights.union(match c {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                _ => return Err(ParseCastleRightsError(c)),
            });
        }
        Ok(rights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        for text in ["-", "K", "Qk", "KQkq", "kq"] {
            let rights: CastleRights = text.parse().unwrap();
            assert_eq!(rights.to_string(), text);
        }
    }

    #[test]
    fn test_rejects_unknown_letters() {
        assert_eq!(
            "KX".parse::<CastleRights>(),
            Err(ParseCastleRightsError('X'))
        );
    }

    #[test]
    fn test_without_clears_only_named_rights() {
        let rights = CastleRights::ALL.without(CastleRights::for_color(Color::White));
        assert!(!rights.contains(CastleRights::WHITE_KINGSIDE));
        assert!(!rights.contains(CastleRights::WHITE_QUEENSIDE));
        assert!(rights.contains(CastleRights::BLACK_KINGSIDE));
        assert!(rights.contains(CastleRights::BLACK_QUEENSIDE));
    }
}
