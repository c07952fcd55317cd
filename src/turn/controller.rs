//! The turn controller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::board::{Board, Coords, Position};
use crate::core::{
    Direction, GameConfig, Intent, PieceId, PiecePool, Player, RuleError, StepLimiter,
};
use crate::cursor::{SelectionCursor, YawQuadrant};
use crate::events::GameEvent;

/// Which half of a turn is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active player is choosing a piece.
    Picking,
    /// The active player is choosing a square for the picked piece.
    Placing,
}

/// Overall game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game is ongoing.
    InProgress,
    /// Four matching pieces lined up; the placing player won.
    Won(Player),
    /// The board filled with no winning line.
    Drawn,
}

/// The turn/phase state machine and intent dispatcher.
///
/// Owns the board, the piece pool and the cursor outright - explicit
/// dependency passing, no ambient globals. It is the sole authority over
/// phase transitions and the only writer of piece state beyond
/// select/deselect; `Won`/`Drawn` are absorbing until a reset intent.
///
/// Single-threaded and tick-driven: `tick` advances timers once per
/// frame, `handle_intent` applies one intent synchronously, and
/// collaborators read the resulting [`GameEvent`]s via `drain_events`.
#[derive(Debug)]
pub struct TurnController {
    config: GameConfig,
    board: Board,
    pieces: PiecePool,
    cursor: SelectionCursor,
    active_player: Player,
    phase: Phase,
    status: GameStatus,
    picked: Option<PieceId>,
    step_limiter: StepLimiter,
    idle_time: f32,
    idle: bool,
    events: Vec<GameEvent>,
}

impl TurnController {
    /// Create a controller for a fresh game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.board_width, config.board_height);
        let pieces = PiecePool::new(config.attribute_count);
        let step_limiter = StepLimiter::new(config.step_interval);

        Self {
            config,
            board,
            pieces,
            cursor: SelectionCursor::new(),
            active_player: Player::One,
            phase: Phase::Picking,
            status: GameStatus::InProgress,
            picked: None,
            step_limiter,
            idle_time: 0.0,
            idle: false,
            events: Vec::new(),
        }
    }

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece pool.
    #[must_use]
    pub fn pieces(&self) -> &PiecePool {
        &self.pieces
    }

    /// The selection cursor.
    #[must_use]
    pub fn cursor(&self) -> &SelectionCursor {
        &self.cursor
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Which half of the turn is active.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Overall game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The piece held by the active player, if any.
    #[must_use]
    pub fn picked(&self) -> Option<PieceId> {
        self.picked
    }

    /// True once the game has been won or drawn.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Whether the engine currently considers the player idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// Camera collaborator input: the current yaw quadrant, so discrete
    /// steps track the screen.
    pub fn set_camera_quadrant(&mut self, quadrant: YawQuadrant) {
        self.cursor.set_camera_quadrant(quadrant);
    }

    /// Camera collaborator input: the current focus point, used as the
    /// reference for nearest-square fallbacks.
    pub fn set_camera_focus(&mut self, focus: Position) {
        self.cursor.set_camera_focus(focus);
    }

    /// Advance frame timers: step pacing and the idle clock.
    ///
    /// Crossing the idle threshold deselects any selected piece (the
    /// highlight fades while nobody is playing) and reports the idle
    /// state; any subsequent intent wakes the engine again.
    pub fn tick(&mut self, dt: f32) {
        self.step_limiter.tick(dt);
        self.idle_time += dt;

        if !self.idle && self.idle_time > self.config.idle_threshold {
            self.idle = true;
            debug!("engine idle");
            if let Some(id) = self.pieces.deselect() {
                self.push_piece_event(id);
            }
            self.events.push(GameEvent::IdleChanged { idle: true });
        }
    }

    /// Take the queued outbound events. Calling without using the
    /// result simply clears the queue.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Validate and apply one intent.
    ///
    /// Any intent counts as activity for the idle clock, accepted or
    /// not. Refusals leave every piece of state untouched.
    pub fn handle_intent(&mut self, intent: Intent) -> Result<(), RuleError> {
        trace!(?intent, "intent received");
        self.wake();

        let result = match intent {
            Intent::SelectPiece(id) => self.select_piece(id),
            Intent::SelectSquare(coords) => self.select_square(coords),
            Intent::Step(direction) => self.step(direction),
            Intent::Confirm => self.confirm(),
            Intent::CancelSelection => {
                self.cancel_selection();
                Ok(())
            }
            Intent::Reset => {
                self.reset();
                Ok(())
            }
        };

        if let Err(error) = &result {
            debug!(?intent, %error, "intent refused");
        }
        debug_assert!(self.held_piece_invariant());
        result
    }

    // === Intent handlers ===

    fn select_piece(&mut self, id: PieceId) -> Result<(), RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        let piece = self
            .pieces
            .get(id)
            .ok_or(RuleError::UnknownPiece { piece: id })?;

        // Re-selecting the selected piece is an accepted no-op.
        if piece.is_selected() {
            return Ok(());
        }
        // Selection is a picking-phase capability, and only free pieces
        // qualify.
        if self.phase != Phase::Picking || !piece.is_free() {
            return Err(RuleError::InvalidPieceTransition {
                piece: id,
                from: piece.state(),
            });
        }

        if let Some(previous) = self.pieces.select(id) {
            self.push_piece_event(previous);
        }
        self.push_piece_event(id);
        debug!(piece = %id, "piece selected");
        Ok(())
    }

    fn select_square(&mut self, coords: Coords) -> Result<(), RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        self.apply_square_selection(coords)
    }

    fn step(&mut self, direction: Direction) -> Result<(), RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        // Pacing: a step arriving before the repeat interval has elapsed
        // is dropped without effect.
        if !self.step_limiter.try_accept() {
            trace!(?direction, "step dropped by repeat limiter");
            return Ok(());
        }

        match self.phase {
            Phase::Picking => {
                if let Some(id) = self.cursor.step_piece(&self.pieces, direction) {
                    if let Some(previous) = self.pieces.select(id) {
                        self.push_piece_event(previous);
                    }
                    self.push_piece_event(id);
                    debug!(piece = %id, ?direction, "selection stepped");
                }
            }
            Phase::Placing => {
                if let Some(coords) = self.cursor.step_square(&self.board, direction) {
                    self.apply_square_selection(coords)?;
                    debug!(%coords, ?direction, "selection stepped");
                }
            }
        }
        Ok(())
    }

    fn confirm(&mut self) -> Result<(), RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        match self.phase {
            Phase::Picking => self.confirm_pick(),
            Phase::Placing => self.confirm_place(),
        }
    }

    /// Picking-phase confirm: the selected piece becomes picked and the
    /// same player moves on to placing it.
    fn confirm_pick(&mut self) -> Result<(), RuleError> {
        let id = self.pieces.selected().ok_or(RuleError::NoSelection)?;
        let player = self.active_player;

        if let Some(piece) = self.pieces.get_mut(id) {
            piece.pick(player);
        }
        self.picked = Some(id);
        self.phase = Phase::Placing;
        self.push_piece_event(id);
        debug!(piece = %id, %player, "piece picked");
        Ok(())
    }

    /// Placing-phase confirm: the picked piece goes onto the selected
    /// square, then the scanner decides whether the game continues.
    fn confirm_place(&mut self) -> Result<(), RuleError> {
        let coords = self.board.selected().ok_or(RuleError::NoSelection)?;
        let id = self.picked.ok_or(RuleError::NoSelection)?;
        let piece = self
            .pieces
            .get_mut(id)
            .ok_or(RuleError::UnknownPiece { piece: id })?;

        self.board.place_piece(piece, coords)?;
        self.picked = None;

        // Placement cleared the square highlight.
        self.events.push(GameEvent::SquareDeselected { coords });
        if let Some(piece) = self.pieces.get(id) {
            self.events.push(GameEvent::piece_placed(piece, coords));
        }
        self.push_piece_event(id);

        if let Some(line) = self.board.check_win(&self.pieces) {
            let winner = self.active_player;
            self.status = GameStatus::Won(winner);
            info!(%winner, kind = %line.kind, "game won");
            self.events.push(GameEvent::WinDetected { line });
            self.events.push(GameEvent::StatusChanged {
                status: self.status,
            });
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
            info!("game drawn");
            self.events.push(GameEvent::StatusChanged {
                status: self.status,
            });
        } else {
            self.active_player = self.active_player.opponent();
            self.phase = Phase::Picking;
            debug!(player = %self.active_player, "turn passed");
        }
        Ok(())
    }

    /// Drop piece and square selection without touching the phase.
    /// Accepted in any state; a picked piece stays picked.
    fn cancel_selection(&mut self) {
        if let Some(id) = self.pieces.deselect() {
            self.push_piece_event(id);
        }
        if let Some(coords) = self.board.selected() {
            self.board.deselect();
            self.events.push(GameEvent::SquareDeselected { coords });
        }
    }

    /// Full reset: empty board, free pieces, player 1 picking. Accepted
    /// from any state, including won and drawn.
    fn reset(&mut self) {
        debug!("game reset");

        if let Some(coords) = self.board.selected() {
            self.events.push(GameEvent::SquareDeselected { coords });
        }
        self.board.reset();

        for id in self.pieces.reset_all() {
            self.push_piece_event(id);
        }

        self.picked = None;
        self.active_player = Player::One;
        self.phase = Phase::Picking;
        self.status = GameStatus::InProgress;
        self.events.push(GameEvent::StatusChanged {
            status: GameStatus::InProgress,
        });
    }

    // === Internals ===

    /// Move the board highlight, emitting selection events.
    fn apply_square_selection(&mut self, coords: Coords) -> Result<(), RuleError> {
        let previous = self.board.selected();
        if previous == Some(coords) {
            return Ok(());
        }

        self.board.select(coords)?;
        if let Some(previous) = previous {
            self.events.push(GameEvent::SquareDeselected { coords: previous });
        }
        self.events.push(GameEvent::SquareSelected { coords });
        Ok(())
    }

    fn push_piece_event(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get(id) {
            self.events.push(GameEvent::piece_changed(piece));
        }
    }

    fn wake(&mut self) {
        self.idle_time = 0.0;
        if self.idle {
            self.idle = false;
            self.events.push(GameEvent::IdleChanged { idle: false });
        }
    }

    /// At most one piece is held at any moment: selected or picked,
    /// never both, never more than one.
    fn held_piece_invariant(&self) -> bool {
        let selected = self.pieces.iter().filter(|p| p.is_selected()).count();
        let picked = self.pieces.iter().filter(|p| p.is_picked()).count();
        selected + picked <= 1 && self.picked == self.pieces.picked()
    }
}
