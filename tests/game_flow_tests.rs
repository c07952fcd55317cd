//! End-to-end game flow tests.
//!
//! These drive complete games through the intent boundary exactly the
//! way an input adapter would: select, confirm, select, confirm.

use quatter_core::{
    Coords, GameConfig, GameEvent, GameStatus, Intent, LineKind, Phase, PieceId, PieceState,
    Player, RuleError, TurnController,
};

fn game() -> TurnController {
    TurnController::new(GameConfig::new())
}

/// Drive one full turn: pick `piece`, place it at `(row, col)`.
fn place(game: &mut TurnController, piece: u8, row: i32, col: i32) {
    game.handle_intent(Intent::SelectPiece(PieceId::new(piece))).unwrap();
    game.handle_intent(Intent::Confirm).unwrap();
    game.handle_intent(Intent::SelectSquare(Coords::new(row, col))).unwrap();
    game.handle_intent(Intent::Confirm).unwrap();
}

/// A full-board position with no winning line anywhere: every row,
/// column, diagonal and 2x2 block mixes both values of every attribute.
/// Piece ids are their attribute bit patterns.
const DRAWN_GRID: [[u8; 4]; 4] = [
    [0, 14, 3, 13],
    [7, 9, 4, 10],
    [12, 2, 15, 1],
    [11, 5, 8, 6],
];

// =============================================================================
// Turn and phase flow
// =============================================================================

#[test]
fn test_pick_then_place_is_one_turn() {
    let mut game = game();

    // Player 1 confirms a selected piece: same player moves to placing.
    game.handle_intent(Intent::SelectPiece(PieceId::new(6))).unwrap();
    game.handle_intent(Intent::Confirm).unwrap();
    assert_eq!(game.active_player(), Player::One);
    assert_eq!(game.phase(), Phase::Placing);
    assert_eq!(
        game.pieces().get(PieceId::new(6)).unwrap().state(),
        PieceState::Picked
    );

    // Placing hands the turn to player 2's picking phase.
    game.handle_intent(Intent::SelectSquare(Coords::new(1, 3))).unwrap();
    game.handle_intent(Intent::Confirm).unwrap();
    assert_eq!(game.active_player(), Player::Two);
    assert_eq!(game.phase(), Phase::Picking);
}

#[test]
fn test_players_alternate_placements() {
    let mut game = game();

    place(&mut game, 0, 0, 0);
    assert_eq!(game.active_player(), Player::Two);
    place(&mut game, 8, 3, 3);
    assert_eq!(game.active_player(), Player::One);
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_row_of_tall_pieces_wins_on_fourth_placement() {
    let mut game = game();

    // Pieces 1, 3, 5 and 15 all carry attribute 0 ("tall") and nothing
    // else in common.
    place(&mut game, 1, 0, 0);
    place(&mut game, 3, 0, 1);
    place(&mut game, 5, 0, 2);
    // Not before the fourth piece.
    assert_eq!(game.status(), GameStatus::InProgress);

    place(&mut game, 15, 0, 3);

    // The fourth placement was player 2's.
    assert_eq!(game.status(), GameStatus::Won(Player::Two));
    assert!(game.is_over());
}

#[test]
fn test_win_event_carries_the_line() {
    let mut game = game();

    place(&mut game, 1, 0, 0);
    place(&mut game, 3, 0, 1);
    place(&mut game, 5, 0, 2);
    game.drain_events();
    place(&mut game, 15, 0, 3);

    let events = game.drain_events();
    let line = events
        .iter()
        .find_map(|e| match e {
            GameEvent::WinDetected { line } => Some(line),
            _ => None,
        })
        .expect("win event");

    assert_eq!(line.kind, LineKind::Row);
    assert_eq!(line.matching.matched_indices().as_slice(), &[0]);
    assert!(line.squares.contains(&Coords::new(0, 3)));

    assert!(events.contains(&GameEvent::StatusChanged {
        status: GameStatus::Won(Player::Two)
    }));
}

#[test]
fn test_column_win() {
    let mut game = game();

    // 4, 5, 6, 7 share attribute 2.
    place(&mut game, 4, 0, 1);
    place(&mut game, 5, 1, 1);
    place(&mut game, 6, 2, 1);
    place(&mut game, 7, 3, 1);

    assert_eq!(game.status(), GameStatus::Won(Player::Two));
}

#[test]
fn test_diagonal_win() {
    let mut game = game();

    // 8, 9, 10, 11 share attribute 3.
    place(&mut game, 8, 0, 0);
    place(&mut game, 9, 1, 1);
    place(&mut game, 10, 2, 2);
    place(&mut game, 11, 3, 3);

    assert_eq!(game.status(), GameStatus::Won(Player::Two));
}

#[test]
fn test_block_of_round_pieces_wins() {
    let mut game = game();

    // 2, 3, 6, 7 share attribute 1 ("round").
    place(&mut game, 2, 1, 1);
    place(&mut game, 3, 1, 2);
    place(&mut game, 6, 2, 1);
    assert_eq!(game.status(), GameStatus::InProgress);

    place(&mut game, 7, 2, 2);

    assert_eq!(game.status(), GameStatus::Won(Player::Two));
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_full_board_without_win_is_drawn() {
    let mut game = game();

    // Fill everything except the centre 2x2 block.
    for (row, ids) in DRAWN_GRID.iter().enumerate() {
        for (col, &id) in ids.iter().enumerate() {
            let centre = (1..=2).contains(&row) && (1..=2).contains(&col);
            if !centre {
                place(&mut game, id, row as i32, col as i32);
            }
        }
    }
    assert_eq!(game.status(), GameStatus::InProgress);

    // The centre block's pieces share no attribute, so filling it ends
    // the game in a draw rather than a win.
    place(&mut game, DRAWN_GRID[1][1], 1, 1);
    place(&mut game, DRAWN_GRID[1][2], 1, 2);
    place(&mut game, DRAWN_GRID[2][1], 2, 1);
    assert_eq!(game.status(), GameStatus::InProgress);

    place(&mut game, DRAWN_GRID[2][2], 2, 2);

    assert_eq!(game.status(), GameStatus::Drawn);
    assert!(game.board().is_full());
    assert!(game.is_over());
}

// =============================================================================
// Refusals
// =============================================================================

#[test]
fn test_placement_on_occupied_square_refused_without_mutation() {
    let mut game = game();
    place(&mut game, 0, 2, 2);

    game.handle_intent(Intent::SelectPiece(PieceId::new(1))).unwrap();
    game.handle_intent(Intent::Confirm).unwrap();
    game.handle_intent(Intent::SelectSquare(Coords::new(2, 2))).unwrap();

    let err = game.handle_intent(Intent::Confirm).unwrap_err();
    assert_eq!(
        err,
        RuleError::IllegalPlacement {
            coords: Coords::new(2, 2)
        }
    );

    // Nothing moved: the square keeps its piece, the picked piece stays
    // picked, and the turn did not pass.
    assert_eq!(game.board().piece_at(Coords::new(2, 2)), Some(PieceId::new(0)));
    assert_eq!(
        game.pieces().get(PieceId::new(1)).unwrap().state(),
        PieceState::Picked
    );
    assert_eq!(game.active_player(), Player::Two);
    assert_eq!(game.phase(), Phase::Placing);

    // Recovering by choosing a free square works.
    game.handle_intent(Intent::SelectSquare(Coords::new(0, 0))).unwrap();
    game.handle_intent(Intent::Confirm).unwrap();
    assert_eq!(game.active_player(), Player::One);
}

#[test]
fn test_terminal_states_absorb_play_intents() {
    let mut game = game();
    place(&mut game, 1, 0, 0);
    place(&mut game, 3, 0, 1);
    place(&mut game, 5, 0, 2);
    place(&mut game, 15, 0, 3);
    assert!(game.is_over());

    assert_eq!(
        game.handle_intent(Intent::SelectPiece(PieceId::new(8))),
        Err(RuleError::GameOver)
    );
    assert_eq!(
        game.handle_intent(Intent::SelectSquare(Coords::new(3, 3))),
        Err(RuleError::GameOver)
    );
    assert_eq!(game.handle_intent(Intent::Confirm), Err(RuleError::GameOver));
    assert_eq!(
        game.handle_intent(Intent::Step(quatter_core::Direction::Up)),
        Err(RuleError::GameOver)
    );

    // The board did not change.
    assert_eq!(game.status(), GameStatus::Won(Player::Two));
    assert_eq!(game.board().free_squares().count(), 12);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_after_win_restores_initial_state() {
    let mut game = game();
    place(&mut game, 1, 0, 0);
    place(&mut game, 3, 0, 1);
    place(&mut game, 5, 0, 2);
    place(&mut game, 15, 0, 3);
    assert!(game.is_over());

    game.handle_intent(Intent::Reset).unwrap();

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.active_player(), Player::One);
    assert_eq!(game.phase(), Phase::Picking);
    assert!(game.board().is_empty());
    assert!(game.pieces().iter().all(|p| p.state() == PieceState::Free));

    // The game is playable again.
    place(&mut game, 1, 0, 0);
    assert_eq!(game.board().piece_at(Coords::new(0, 0)), Some(PieceId::new(1)));
}

#[test]
fn test_reset_mid_turn_drops_held_piece() {
    let mut game = game();
    game.handle_intent(Intent::SelectPiece(PieceId::new(12))).unwrap();
    game.handle_intent(Intent::Confirm).unwrap();
    assert_eq!(game.picked(), Some(PieceId::new(12)));

    game.handle_intent(Intent::Reset).unwrap();

    assert_eq!(game.picked(), None);
    assert!(game.pieces().get(PieceId::new(12)).unwrap().is_free());
    assert_eq!(game.phase(), Phase::Picking);
}

// =============================================================================
// Rule variants
// =============================================================================

#[test]
fn test_smaller_variant_plays_out() {
    // A 2-attribute game on a 2x2 board: lines are only two squares
    // long, so any two non-complementary pieces on a line win.
    let config = GameConfig::new()
        .with_board_size(2, 2)
        .with_attribute_count(2);
    let mut game = TurnController::new(config);
    assert_eq!(game.pieces().len(), 4);

    // 0 (00) and 3 (11) are complements: a full row, no win.
    place(&mut game, 0, 0, 0);
    place(&mut game, 3, 0, 1);
    assert_eq!(game.status(), GameStatus::InProgress);

    // 1 (01) under 0 (00) completes a column sharing attribute 1.
    place(&mut game, 1, 1, 0);
    assert_eq!(game.status(), GameStatus::Won(Player::One));
}
