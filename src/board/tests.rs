use super::*;
use crate::move_generator::MoveGenerator;

#[test]
fn test_empty_board_defaults() {
    let board = Board::new();
    assert_eq!(board.turn(), Color::White);
    assert_eq!(board.castle_rights(), CastleRights::NONE);
    assert_eq!(board.material_balance(), 0);
    assert!(!board.is_done());
    board.assert_consistent();
}

#[test]
fn test_put_rejects_occupied_square() {
    let mut board = Board::new();
    let square = Square::new(4, 4);
    let pawn = Piece::new(PieceKind::Pawn, Color::White);
    board.put(square, pawn).unwrap();
    assert_eq!(
        board.put(square, pawn),
        Err(BoardError::SquareOccupied(square))
    );
}

#[test]
fn test_starting_position_layout() {
    let board = Board::starting_position();
    board.assert_consistent();
    assert_eq!(
        board.get(Square::new(7, 4)),
        Some(Piece::new(PieceKind::King, Color::White))
    );
    assert_eq!(
        board.get(Square::new(0, 3)),
        Some(Piece::new(PieceKind::Queen, Color::Black))
    );
    assert_eq!(
        board
            .piece_squares(Piece::new(PieceKind::Pawn, Color::White))
            .len(),
        8
    );
    assert_eq!(board.castle_rights(), CastleRights::ALL);
}

#[test]
fn test_piece_squares_iterates_in_rank_file_order() {
    let board = Board::starting_position();
    let rooks: Vec<Square> = board
        .piece_squares(Piece::new(PieceKind::Rook, Color::White))
        .iter()
        .copied()
        .collect();
    assert_eq!(rooks, vec![Square::new(7, 0), Square::new(7, 7)]);
}

// Walks several plies of generated moves, then unwinds them in reverse.
// Every intermediate position must keep the grid, the index, and the
// material balance in agreement, and the unwind must land exactly on the
// starting position.
#[test]
fn test_deep_apply_undo_walk_restores_the_start() {
    let generator = MoveGenerator::default();
    let mut board = Board::starting_position();
    let before = board.clone();
    let mut records = Vec::new();

    for ply in 0..12 {
        let moves = generator.generate_moves(&board);
        assert!(!moves.is_empty());
        // Pick a different move each ply to vary the walk.
        let mv = moves[ply % moves.len()].clone();
        records.push(board.apply(&mv));
        board.assert_consistent();
    }

    while let Some(record) = records.pop() {
        board.undo(record);
        board.assert_consistent();
    }
    assert_eq!(board, before);
}
