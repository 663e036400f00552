use super::{mv, sq};
use crate::board::{ApplyError, Piece, PieceKind, Position, Side};

#[test]
fn test_apply_returns_new_position() {
    let start = Position::starting();
    let before = start;
    let next = start.apply(mv("e2e4"));

    assert_eq!(start, before);
    assert_eq!(next.piece_at(sq("e2")), None);
    assert_eq!(
        next.piece_at(sq("e4")),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );
    assert_eq!(next.count(Side::White), 16);
}

#[test]
fn test_apply_capture_replaces_target() {
    let pos = Position::from_fen("7k/3q4/8/8/8/8/8/K2Q4");
    let next = pos.apply(mv("d1d7"));
    assert_eq!(
        next.piece_at(sq("d7")),
        Some(Piece::new(Side::White, PieceKind::Queen))
    );
    assert_eq!(next.count(Side::Black), 1);
    assert_eq!(pos.count(Side::Black), 2);
}

#[test]
fn test_branches_do_not_share_state() {
    let start = Position::starting();
    let left = start.apply(mv("e2e4"));
    let right = start.apply(mv("d2d4"));
    assert!(left.is_empty(sq("e2")));
    assert!(!right.is_empty(sq("e2")));
    assert!(right.is_empty(sq("d2")));
    assert!(!left.is_empty(sq("d2")));
}

#[test]
fn test_chained_applies() {
    let pos = Position::starting()
        .apply(mv("e2e4"))
        .apply(mv("e7e5"))
        .apply(mv("g1f3"))
        .apply(mv("b8c6"));
    assert_eq!(
        pos.to_fen_placement(),
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R"
    );
}

#[test]
fn test_try_apply_rejects_empty_origin() {
    let start = Position::starting();
    assert_eq!(
        start.try_apply(mv("e4e5")),
        Err(ApplyError::EmptyOrigin { square: sq("e4") })
    );
}

#[test]
#[should_panic(expected = "cannot apply e4e5")]
fn test_apply_panics_on_empty_origin() {
    let _ = Position::starting().apply(mv("e4e5"));
}
