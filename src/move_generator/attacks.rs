//! Square attack queries shared by the generator and the evaluator.

use smallvec::SmallVec;

use crate::board::{Board, Color, Piece, PieceKind, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub type AttackerList = SmallVec<[(Square, Piece); 8]>;

/// The first occupied square along a ray, if any.
pub fn first_piece_along(
    board: &Board,
    from: Square,
    direction: (i8, i8),
) -> Option<(Square, Piece)> {
    let mut current = from;
    while let Some(next) = current.offset(direction.0, direction.1) {
        if let Some(piece) = board.get(next) {
            return Some((next, piece));
        }
        current = next;
    }
    None
}

/// Whether any piece of `by_color` attacks `target` on the current board.
pub fn is_attacked(board: &Board, target: Square, by_color: Color) -> bool {
    let pawn_rank_delta = match by_color {
        Color::White => 1,
        Color::Black => -1,
    };
    for file_delta in [-1, 1] {
        if let Some(square) = target.offset(pawn_rank_delta, file_delta) {
            if board.get(square) == Some(Piece::new(PieceKind::Pawn, by_color)) {
                return true;
            }
        }
    }

    for (offsets, kind) in [
        (KNIGHT_OFFSETS, PieceKind::Knight),
        (KING_OFFSETS, PieceKind::King),
    ] {
        for (rank_delta, file_delta) in offsets {
            if let Some(square) = target.offset(rank_delta, file_delta) {
                if board.get(square) == Some(Piece::new(kind, by_color)) {
                    return true;
                }
            }
        }
    }

    for direction in ROOK_DIRECTIONS {
        if let Some((_, piece)) = first_piece_along(board, target, direction) {
            if piece.color == by_color
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
    }
    for direction in BISHOP_DIRECTIONS {
        if let Some((_, piece)) = first_piece_along(board, target, direction) {
            if piece.color == by_color
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    false
}

/// Collects every piece bearing on `target`, split into attackers of the
/// side opposing `defender` and defenders of that side. Both lists come
/// back sorted cheapest first (by absolute material value, then square) so
/// the evaluator's exchange walk can feed pieces in trade order.
///
/// Only direct attacks are found; batteries hiding behind a front piece are
/// not unstacked.
pub fn attackers_of(board: &Board, target: Square, defender: Color) -> (AttackerList, AttackerList) {
    let mut enemies = AttackerList::new();
    let mut friends = AttackerList::new();
    let mut record = |square: Square, piece: Piece| {
        if piece.color == defender {
            friends.push((square, piece));
        } else {
            enemies.push((square, piece));
        }
    };

    // A pawn attacks `target` if it sits one rank behind it, diagonally,
    // from its own side's point of view.
    for color in Color::ALL {
        let pawn_rank_delta = match color {
            Color::White => 1,
            Color::Black => -1,
        };
        for file_delta in [-1, 1] {
            if let Some(square) = target.offset(pawn_rank_delta, file_delta) {
                let pawn = Piece::new(PieceKind::Pawn, color);
                if board.get(square) == Some(pawn) {
                    record(square, pawn);
                }
            }
        }
    }

    for (offsets, kind) in [
        (KNIGHT_OFFSETS, PieceKind::Knight),
        (KING_OFFSETS, PieceKind::King),
    ] {
        for (rank_delta, file_delta) in offsets {
            if let Some(square) = target.offset(rank_delta, file_delta) {
                if let Some(piece) = board.get(square) {
                    if piece.kind == kind {
                        record(square, piece);
                    }
                }
            }
        }
    }

    for direction in ROOK_DIRECTIONS {
        if let Some((square, piece)) = first_piece_along(board, target, direction) {
            if matches!(piece.kind, PieceKind::Rook | PieceKind::Queen) {
                record(square, piece);
            }
        }
    }
    for direction in BISHOP_DIRECTIONS {
        if let Some((square, piece)) = first_piece_along(board, target, direction) {
            if matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen) {
                record(square, piece);
            }
        }
    }

    let cheapest_first = |(square, piece): &(Square, Piece)| (piece.material().abs(), *square);
    enemies.sort_by_key(cheapest_first);
    friends.sort_by_key(cheapest_first);
    (enemies, friends)
}
