//! Game module - orchestrates the board, the falling piece, and scoring
//!
//! The game owns one active and one queued piece at all times, drives
//! gravity from host-supplied timestamps, and applies player commands.
//! Every command funnels through [`Game::apply`], which holds the single
//! Playing-phase guard; illegal moves are reverted in place and are never
//! observable to the caller.

use gridfall_types::{GameCommand, GamePhase};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{fall_interval_ms, level_for_lines, score_for_clear};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Piece,
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    lines_cleared: u32,
    level: u32,
    fall_interval_ms: u32,
    /// Timestamp of the last automatic gravity step; unarmed until the
    /// first tick in Playing so the engine needs no ambient clock.
    last_tick_ms: Option<u64>,
    paused: bool,
    game_over: bool,
}

impl Game {
    /// New game on a standard board with a seeded uniform generator
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::standard(), PieceGenerator::random(seed))
    }

    /// New game on a standard board with an injected generator
    pub fn with_generator(generator: PieceGenerator) -> Self {
        Self::with_board(Board::standard(), generator)
    }

    /// New game on the given board with an injected generator. A board
    /// whose spawn area is already blocked is immediately game over.
    pub fn with_board(board: Board, mut generator: PieceGenerator) -> Self {
        let active = Piece::new(generator.draw(), board.columns());
        let next = Piece::new(generator.draw(), board.columns());
        let game_over = !board.is_valid_placement(&active);
        Self {
            board,
            active,
            next,
            generator,
            score: 0,
            lines_cleared: 0,
            level: 1,
            fall_interval_ms: fall_interval_ms(1),
            last_tick_ms: None,
            paused: false,
            game_over,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Current phase; `GameOver` wins over `Paused`
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Playing
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece
    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The queued piece, shown as the preview
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Drive gravity. Call once per frame with a monotonic timestamp in
    /// milliseconds; when the fall interval has elapsed since the last
    /// step the piece falls one row. The first call after (re)spawn arms
    /// the timer without stepping. No-op outside Playing.
    pub fn tick(&mut self, now_ms: u64) {
        if self.phase() != GamePhase::Playing {
            return;
        }
        match self.last_tick_ms {
            None => self.last_tick_ms = Some(now_ms),
            Some(last) => {
                if now_ms.saturating_sub(last) > self.fall_interval_ms as u64 {
                    self.step_down();
                    self.last_tick_ms = Some(now_ms);
                }
            }
        }
    }

    /// Apply a player command. This is the single dispatch point: movement
    /// and drop commands only run in Playing, pause is rejected once the
    /// game is over, restart works from any phase.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::TogglePause => {
                if !self.game_over {
                    self.paused = !self.paused;
                }
            }
            GameCommand::Restart => self.do_restart(),
            _ if self.phase() != GamePhase::Playing => {}
            GameCommand::MoveLeft => self.shift_active(-1),
            GameCommand::MoveRight => self.shift_active(1),
            GameCommand::SoftDrop => self.do_soft_drop(),
            GameCommand::Rotate => self.do_rotate(),
            GameCommand::HardDrop => self.do_hard_drop(),
        }
    }

    pub fn move_left(&mut self) {
        self.apply(GameCommand::MoveLeft);
    }

    pub fn move_right(&mut self) {
        self.apply(GameCommand::MoveRight);
    }

    pub fn soft_drop(&mut self) {
        self.apply(GameCommand::SoftDrop);
    }

    pub fn rotate(&mut self) {
        self.apply(GameCommand::Rotate);
    }

    pub fn hard_drop(&mut self) {
        self.apply(GameCommand::HardDrop);
    }

    pub fn toggle_pause(&mut self) {
        self.apply(GameCommand::TogglePause);
    }

    pub fn restart(&mut self) {
        self.apply(GameCommand::Restart);
    }

    /// One gravity step: move down, or lock if the row below is illegal
    fn step_down(&mut self) {
        self.active.y += 1;
        if !self.board.is_valid_placement(&self.active) {
            self.active.y -= 1;
            self.lock_active();
        }
    }

    /// Fix the active piece, clear and score lines, promote the queued
    /// piece, and detect the end of the game.
    fn lock_active(&mut self) {
        self.board.fix_piece(&self.active);
        let cleared = self.board.clear_completed_lines();
        if cleared > 0 {
            self.award_clear(cleared);
        }
        self.active = self.next;
        self.next = Piece::new(self.generator.draw(), self.board.columns());
        self.last_tick_ms = None;
        if self.board.is_overflowed() || !self.board.is_valid_placement(&self.active) {
            self.game_over = true;
        }
    }

    /// Score a clear event at the current level, then update lines, level,
    /// and fall speed. Score and lines never decrease.
    fn award_clear(&mut self, lines: u32) {
        self.score += score_for_clear(lines, self.level);
        self.lines_cleared += lines;
        let new_level = level_for_lines(self.lines_cleared);
        if new_level > self.level {
            self.level = new_level;
            self.fall_interval_ms = fall_interval_ms(new_level);
        }
    }

    fn shift_active(&mut self, dx: i8) {
        self.active.x += dx;
        if !self.board.is_valid_placement(&self.active) {
            self.active.x -= dx;
        }
    }

    /// Manual gravity step; disarms the timer so the next tick re-arms
    /// instead of immediately double-stepping
    fn do_soft_drop(&mut self) {
        self.step_down();
        self.last_tick_ms = None;
    }

    /// Rotate clockwise with wall kicks: try in place, then one column
    /// left, then one column right of the original; otherwise undo both
    /// the shift and the rotation.
    fn do_rotate(&mut self) {
        self.active.rotate_clockwise();
        if self.board.is_valid_placement(&self.active) {
            return;
        }
        self.active.x -= 1;
        if self.board.is_valid_placement(&self.active) {
            return;
        }
        self.active.x += 2;
        if self.board.is_valid_placement(&self.active) {
            return;
        }
        self.active.x -= 1;
        self.active.rotate_counter_clockwise();
    }

    /// Fall to the lowest legal row, then lock immediately
    fn do_hard_drop(&mut self) {
        while self.board.is_valid_placement(&self.active) {
            self.active.y += 1;
        }
        self.active.y -= 1;
        self.lock_active();
    }

    /// Re-initialize everything except the injected generator, which keeps
    /// its stream so a seeded session stays reproducible across restarts.
    fn do_restart(&mut self) {
        self.board.reset();
        self.active = Piece::new(self.generator.draw(), self.board.columns());
        self.next = Piece::new(self.generator.draw(), self.board.columns());
        self.score = 0;
        self.lines_cleared = 0;
        self.level = 1;
        self.fall_interval_ms = fall_interval_ms(1);
        self.last_tick_ms = None;
        self.paused = false;
        self.game_over = false;
    }

    /// Write the once-per-frame read model into `out`, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.columns = self.board.columns();
        out.rows = self.board.rows();
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(&self.active);
        out.next = self.next.kind;
        out.score = self.score;
        out.level = self.level;
        out.lines_cleared = self.lines_cleared;
        out.fall_interval_ms = self.fall_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    /// Allocate and fill a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
