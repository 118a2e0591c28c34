//! Core Type Tests
//!
//! Tests for squares, movement classification and move records.

use rookery::core::board::{Color, Piece, PieceKind, Square};
use rookery::core::moves::{Move, MoveKind};

fn classify(piece: Piece, from: (u8, u8), to: (u8, u8)) -> MoveKind {
    MoveKind::classify(piece, Square::new(from.0, from.1), Square::new(to.0, to.1))
}

// ============================================================================
// Square Tests
// ============================================================================

#[test]
fn test_square_accessors() {
    let sq = Square::new(3, 4);
    assert_eq!(sq.rank(), 3);
    assert_eq!(sq.file(), 4);
    assert_eq!(sq.index(), 28);
}

#[test]
#[should_panic]
fn test_square_rank_out_of_range() {
    Square::new(8, 0);
}

#[test]
#[should_panic]
fn test_square_file_out_of_range() {
    Square::new(0, 8);
}

#[test]
fn test_square_try_new() {
    assert_eq!(Square::try_new(0, 0), Some(Square::new(0, 0)));
    assert_eq!(Square::try_new(7, 7), Some(Square::new(7, 7)));
    assert_eq!(Square::try_new(-1, 0), None);
    assert_eq!(Square::try_new(0, 8), None);
}

#[test]
fn test_square_display() {
    // Rank 0 prints as rank 8, file 0 as the a-file.
    assert_eq!(Square::new(0, 0).to_string(), "a8");
    assert_eq!(Square::new(7, 7).to_string(), "h1");
    assert_eq!(Square::new(6, 4).to_string(), "e2");
}

#[test]
fn test_square_flipped() {
    assert_eq!(Square::new(0, 0).flipped(), Square::new(7, 7));
    assert_eq!(Square::new(2, 5).flipped(), Square::new(5, 2));
}

#[test]
fn test_square_offset() {
    let sq = Square::new(4, 4);
    assert_eq!(sq.offset(-1, 1), Some(Square::new(3, 5)));
    assert_eq!(Square::new(0, 0).offset(-1, 0), None);
    assert_eq!(Square::new(7, 7).offset(0, 1), None);
}

#[test]
fn test_square_all_covers_board() {
    assert_eq!(Square::all().count(), 64);
    assert_eq!(Square::all().next(), Some(Square::new(0, 0)));
    assert_eq!(Square::all().last(), Some(Square::new(7, 7)));
}

// ============================================================================
// Pawn Classification Tests
// ============================================================================

#[test]
fn test_white_pawn_moves() {
    let pawn = Piece::new(PieceKind::Pawn, Color::White);
    assert_eq!(classify(pawn, (6, 4), (5, 4)), MoveKind::PawnPush);
    assert_eq!(classify(pawn, (6, 4), (4, 4)), MoveKind::PawnDoublePush);
    assert_eq!(classify(pawn, (6, 4), (5, 3)), MoveKind::PawnCapture);
    assert_eq!(classify(pawn, (6, 4), (5, 5)), MoveKind::PawnCapture);
    assert_eq!(classify(pawn, (6, 4), (7, 4)), MoveKind::Illegal);
    assert_eq!(classify(pawn, (6, 4), (6, 5)), MoveKind::Illegal);
}

#[test]
fn test_black_pawn_moves() {
    let pawn = Piece::new(PieceKind::Pawn, Color::Black);
    assert_eq!(classify(pawn, (1, 4), (2, 4)), MoveKind::PawnPush);
    assert_eq!(classify(pawn, (1, 4), (3, 4)), MoveKind::PawnDoublePush);
    assert_eq!(classify(pawn, (1, 4), (2, 5)), MoveKind::PawnCapture);
    assert_eq!(classify(pawn, (1, 4), (0, 4)), MoveKind::Illegal);
}

#[test]
fn test_pawn_double_push_needs_unmoved_pawn() {
    let mut pawn = Piece::new(PieceKind::Pawn, Color::White);
    pawn.moves = 1;
    assert_eq!(classify(pawn, (5, 4), (3, 4)), MoveKind::Illegal);
    assert_eq!(classify(pawn, (5, 4), (4, 4)), MoveKind::PawnPush);
}

// ============================================================================
// King Classification Tests
// ============================================================================

#[test]
fn test_king_steps() {
    let king = Piece::new(PieceKind::King, Color::White);
    assert_eq!(classify(king, (4, 4), (3, 4)), MoveKind::KingStep);
    assert_eq!(classify(king, (4, 4), (5, 5)), MoveKind::KingStep);
    assert_eq!(classify(king, (4, 4), (4, 3)), MoveKind::KingStep);
    assert_eq!(classify(king, (4, 4), (2, 4)), MoveKind::Illegal);
}

#[test]
fn test_castling_classification() {
    let king = Piece::new(PieceKind::King, Color::White);
    assert_eq!(classify(king, (7, 4), (7, 6)), MoveKind::CastleKingside);
    assert_eq!(classify(king, (7, 4), (7, 2)), MoveKind::CastleQueenside);

    let black_king = Piece::new(PieceKind::King, Color::Black);
    assert_eq!(classify(black_king, (0, 4), (0, 6)), MoveKind::CastleKingside);
    assert_eq!(classify(black_king, (0, 4), (0, 2)), MoveKind::CastleQueenside);
}

#[test]
fn test_castling_needs_unmoved_king_at_home() {
    let mut king = Piece::new(PieceKind::King, Color::White);
    king.moves = 1;
    assert_eq!(classify(king, (7, 4), (7, 6)), MoveKind::Illegal);

    // Off the home square or the home rank, two files sideways is nothing.
    let king = Piece::new(PieceKind::King, Color::White);
    assert_eq!(classify(king, (4, 4), (4, 6)), MoveKind::Illegal);
    assert_eq!(classify(king, (7, 3), (7, 5)), MoveKind::Illegal);
}

// ============================================================================
// Knight / Slider Classification Tests
// ============================================================================

#[test]
fn test_knight_jumps() {
    let knight = Piece::new(PieceKind::Knight, Color::White);
    assert_eq!(classify(knight, (4, 4), (2, 5)), MoveKind::KnightJump);
    assert_eq!(classify(knight, (4, 4), (6, 3)), MoveKind::KnightJump);
    assert_eq!(classify(knight, (4, 4), (5, 6)), MoveKind::KnightJump);
    assert_eq!(classify(knight, (4, 4), (3, 2)), MoveKind::KnightJump);
    assert_eq!(classify(knight, (4, 4), (2, 4)), MoveKind::Illegal);
    assert_eq!(classify(knight, (4, 4), (2, 6)), MoveKind::Illegal);
}

#[test]
fn test_rook_lines() {
    let rook = Piece::new(PieceKind::Rook, Color::White);
    assert_eq!(classify(rook, (4, 4), (0, 4)), MoveKind::Up);
    assert_eq!(classify(rook, (4, 4), (7, 4)), MoveKind::Down);
    assert_eq!(classify(rook, (4, 4), (4, 0)), MoveKind::Left);
    assert_eq!(classify(rook, (4, 4), (4, 7)), MoveKind::Right);
    assert_eq!(classify(rook, (4, 4), (3, 3)), MoveKind::Illegal);
}

#[test]
fn test_bishop_diagonals() {
    let bishop = Piece::new(PieceKind::Bishop, Color::White);
    assert_eq!(classify(bishop, (4, 4), (1, 7)), MoveKind::DiagUpRight);
    assert_eq!(classify(bishop, (4, 4), (2, 2)), MoveKind::DiagUpLeft);
    assert_eq!(classify(bishop, (4, 4), (6, 6)), MoveKind::DiagDownRight);
    assert_eq!(classify(bishop, (4, 4), (6, 2)), MoveKind::DiagDownLeft);
    assert_eq!(classify(bishop, (4, 4), (4, 6)), MoveKind::Illegal);
}

#[test]
fn test_queen_takes_both() {
    let queen = Piece::new(PieceKind::Queen, Color::Black);
    assert_eq!(classify(queen, (4, 4), (0, 4)), MoveKind::Up);
    assert_eq!(classify(queen, (4, 4), (6, 6)), MoveKind::DiagDownRight);
    assert_eq!(classify(queen, (4, 4), (2, 5)), MoveKind::Illegal);
}

// ============================================================================
// Move Record Tests
// ============================================================================

#[test]
fn test_move_display() {
    let mv = Move::new(Square::new(6, 4), Square::new(4, 4));
    assert_eq!(mv.to_string(), "e2e4");
}

#[test]
fn test_piece_chars() {
    assert_eq!(Piece::new(PieceKind::Knight, Color::White).to_char(), 'N');
    assert_eq!(Piece::new(PieceKind::Knight, Color::Black).to_char(), 'n');
    assert_eq!(Piece::new(PieceKind::King, Color::White).to_char(), 'K');
}

#[test]
fn test_material_values() {
    assert_eq!(PieceKind::Pawn.material(), 100);
    assert_eq!(PieceKind::Queen.material(), 900);
    assert!(PieceKind::King.material() > PieceKind::Queen.material());
}
