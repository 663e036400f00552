use crate::board::{evaluate, Piece, PieceKind, Position, PositionBuilder, Side, Square};

#[test]
fn test_starting_position_is_balanced() {
    assert_eq!(evaluate(&Position::starting()), 0);
    assert_eq!(evaluate(&Position::empty()), 0);
}

#[test]
fn test_piece_values() {
    let mut builder = PositionBuilder::new();
    for (file, kind) in PieceKind::ALL.into_iter().enumerate() {
        builder = builder.piece(Square::at(file, 0), Piece::new(Side::White, kind));
    }
    assert_eq!(evaluate(&builder.build()), 1 + 3 + 3 + 5 + 9);
}

#[test]
fn test_black_material_counts_negative() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/PPP5/3rK3");
    assert_eq!(evaluate(&pos), 3 - 5);
}

#[test]
fn test_kings_are_worth_nothing() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/8");
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_swap_colors_negates() {
    let pos = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/8/PPPP1PPP/RNBQKBNR");
    assert_eq!(evaluate(&pos.swap_colors()), -evaluate(&pos));

    let lopsided = Position::from_fen("7k/3q4/8/8/8/8/8/K7");
    assert_eq!(evaluate(&lopsided), -9);
    assert_eq!(evaluate(&lopsided.swap_colors()), 9);
}

#[test]
fn test_material_method_matches_evaluate() {
    let pos = Position::from_fen("7k/3q4/8/8/8/8/8/K2Q4");
    assert_eq!(pos.material(), evaluate(&pos));
}
