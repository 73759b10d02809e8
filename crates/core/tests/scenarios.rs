use chess_duel_core::{Error, Game, MoveKind, PieceKind, Side, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        game.play(mv).unwrap_or_else(|e| panic!("{mv} rejected: {e}"));
        let kings_down = Side::BOTH
            .iter()
            .filter(|side| !game.king(**side).is_active())
            .count();
        assert!(kings_down <= 1);
    }
}

/// Red pawn parked on d4, Green to move on turn 5.
fn pawn_on_d4() -> Game {
    let mut game = Game::new();
    play_all(&mut game, &["Ph3", "Pd5", "Ph4", "Pd4"]);
    assert_eq!(game.turn(), 5);
    assert_eq!(game.current_side(), Side::Green);
    game
}

#[test]
fn two_square_opening_moves_the_pawn() {
    let mut game = Game::new();
    let pawn = game.occupant(sq("e2")).unwrap().id();

    game.select_piece(sq("e2")).unwrap();
    let outcome = game.move_selected_to(sq("e4")).unwrap();

    assert_eq!(outcome.played.kind, MoveKind::TwoSquareOpening);
    assert_eq!(game.occupant(sq("e4")).map(|p| p.id()), Some(pawn));
    assert!(game.occupant(sq("e2")).is_none());
    assert_eq!(game.piece(pawn).two_square_opening_turn(), Some(1));
    assert_eq!(game.current_side(), Side::Red);
}

#[test]
fn en_passant_on_the_next_turn() {
    let mut game = pawn_on_d4();
    game.play("Pe4").unwrap();
    let victim = game.occupant(sq("e4")).unwrap().id();
    let mover = game.occupant(sq("d4")).unwrap().id();

    game.select_piece(sq("d4")).unwrap();
    let outcome = game.move_selected_to(sq("e3")).unwrap();

    assert_eq!(outcome.played.kind, MoveKind::EnPassant);
    assert_eq!(outcome.played.captured, Some(victim));
    assert!(!game.piece(victim).is_active());
    assert!(game.occupant(sq("e4")).is_none());
    assert!(game.occupant(sq("d4")).is_none());
    assert_eq!(game.occupant(sq("e3")).map(|p| p.id()), Some(mover));
    assert_eq!(game.captured(Side::Green).len(), 1);
}

#[test]
fn en_passant_through_notation() {
    let mut game = pawn_on_d4();
    game.play("Pe4").unwrap();
    let outcome = game.play("Pe3").unwrap();
    assert_eq!(outcome.played.from, sq("d4"));
    assert_eq!(
        outcome.to_string(),
        "Red's Pawn moved from d4 to e3, capturing a Pawn en passant."
    );
}

#[test]
fn en_passant_expires_after_one_turn() {
    let mut game = pawn_on_d4();
    play_all(&mut game, &["Pe4", "Pa6", "Pa3"]);
    let before = game.clone();

    assert!(matches!(game.play("Pe3"), Err(Error::IllegalMove)));
    game.select_piece(sq("d4")).unwrap();
    assert!(matches!(
        game.move_selected_to(sq("e3")),
        Err(Error::IllegalMove)
    ));
    game.clear_selection();
    assert_eq!(game, before);
}

#[test]
fn single_step_pawn_cannot_be_taken_en_passant() {
    let mut game = pawn_on_d4();
    play_all(&mut game, &["Pe3", "Pa6", "Pe4"]);
    assert!(matches!(game.play("Pe3"), Err(Error::IllegalMove)));
}

#[test]
fn king_capture_ends_the_game() {
    let mut game = Game::new();
    play_all(&mut game, &["Pe4", "Pf6", "Qh5", "Pa6"]);
    assert_eq!(game.check_winner(), None);

    let outcome = game.play("Qe8").unwrap();
    assert_eq!(outcome.captured_kind, Some(PieceKind::King));
    assert_eq!(game.check_winner(), Some(Side::Green));
    assert_eq!(game.winner(), Some(Side::Green));
    assert!(game.king(Side::Green).is_active());
    assert!(!game.king(Side::Red).is_active());

    let frozen = game.clone();
    assert!(matches!(game.play("Pa5"), Err(Error::GameOver)));
    assert!(matches!(game.select_piece(sq("a6")), Err(Error::GameOver)));
    assert!(matches!(game.move_selected_to(sq("a5")), Err(Error::GameOver)));
    assert_eq!(game, frozen);
    assert_eq!(game.check_winner(), Some(Side::Green));
}

#[test]
fn king_may_walk_into_attack() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["Pe4", "Pe5", "Ke2", "Qh4", "Kf3", "Pa6", "Kg4"],
    );
    assert_eq!(game.king(Side::Green).square(), Some(sq("g4")));
    assert_eq!(game.winner(), None);

    game.play("Qg4").unwrap();
    assert_eq!(game.winner(), Some(Side::Red));
}
