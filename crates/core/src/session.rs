//! Session module - drives one game from first spawn to game over
//!
//! A [`Session`] owns the grid, the live piece, the random source and the
//! gravity timer. The outer loop feeds it elapsed time through
//! [`Session::tick`] and player input through [`Session::apply_action`];
//! every call runs to completion before returning.
//!
//! Per piece: falling, then (gravity step fails) locked and rows cleared,
//! then either the next piece spawns or, if no anchor fits, the game ends.
//! After game over the gravity timer is cancelled and every call is a no-op.

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, SessionEvent};

/// Periodic gravity timer, cancelled once at game over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    cancelled: bool,
}

impl GravityTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            cancelled: false,
        }
    }

    /// Add elapsed time and return how many full intervals fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let fired = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fired
    }

    /// Stop the timer. Returns true only for the call that cancelled it.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        self.elapsed_ms = 0;
        true
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated towards the next step
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// One game session
#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = SimpleRng> {
    config: GameConfig,
    grid: Grid,
    active: Option<Piece>,
    rng: R,
    gravity: GravityTimer,
    /// Events not yet consumed by the outer loop
    events: Vec<SessionEvent>,
}

impl Session<SimpleRng> {
    /// Session on the seeded LCG (seed 1 when the config has none)
    pub fn seeded(config: GameConfig) -> Self {
        let rng = SimpleRng::new(config.seed.unwrap_or(1));
        Self::new(config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// Build the grid and spawn the first piece.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let config = config.normalized();
        let grid = Grid::with_palette(config.rows, config.cols, config.palette);
        let gravity = GravityTimer::new(config.gravity_ms);

        let mut session = Self {
            config,
            grid,
            active: None,
            rng,
            gravity,
            events: Vec::new(),
        };
        session.spawn_piece();
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    pub fn score(&self) -> u32 {
        self.grid.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.grid.is_game_over()
    }

    /// Take all events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build a random piece and place it; ends the game if it cannot spawn.
    pub fn spawn_piece(&mut self) -> bool {
        let mut piece = Piece::random(&self.config.palette, self.grid.cols(), &mut self.rng);
        if self.grid.place_spawn(&mut piece) {
            self.active = Some(piece);
            return true;
        }
        self.active = None;
        self.end_game();
        false
    }

    fn end_game(&mut self) {
        if self.gravity.cancel() {
            self.events.push(SessionEvent::GameOver {
                score: self.grid.score(),
            });
        }
    }

    /// Advance the gravity timer; each full interval is one gravity step.
    ///
    /// Returns true if anything changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.is_game_over() {
            return false;
        }
        let steps = self.gravity.advance(elapsed_ms);
        let mut changed = false;
        for _ in 0..steps {
            if !self.gravity_step() {
                break;
            }
            changed = true;
        }
        changed
    }

    /// Move the live piece down one row, locking it if it cannot move.
    pub fn gravity_step(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if self.grid.move_piece(piece, |p, g| p.try_move(0, 1, g)) {
            return true;
        }

        self.lock_piece();
        true
    }

    /// Commit the live piece, clear rows, then spawn the next piece.
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        // The piece's cells are already in the matrix; locking just drops the handle.
        let clear = self.grid.clear_completed_rows();
        self.events.push(SessionEvent::Locked {
            kind: piece.kind(),
            rows_cleared: clear.count() as u32,
            points: clear.points,
            score: clear.score,
        });

        self.spawn_piece();
    }

    /// Apply a player action to the live piece.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        match action {
            GameAction::MoveLeft => self.grid.move_piece(piece, |p, g| p.try_move(-1, 0, g)),
            GameAction::MoveRight => self.grid.move_piece(piece, |p, g| p.try_move(1, 0, g)),
            GameAction::MoveDown => self.grid.move_piece(piece, |p, g| p.try_move(0, 1, g)),
            GameAction::Rotate => self.grid.move_piece(piece, |p, g| p.rotate(g)),
            // Rests on the stack; the next gravity step locks it.
            GameAction::HardDrop => self.grid.move_piece(piece, |p, g| p.drop_to_bottom(g) > 0),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = self.active.as_ref().map(Piece::kind);
        out.score = self.grid.score();
        out.game_over = self.grid.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
