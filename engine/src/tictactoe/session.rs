use std::time::Duration;

use crate::config::GameConfig;
use crate::session_rng::SessionRng;
use crate::{debug_log, log};
use super::bot_controller::{BotInput, calculate_move};
use super::error::GameError;
use super::game_state::GameState;
use super::scoreboard::Scoreboard;
use super::snapshot::SessionSnapshot;
use super::turn_timer::TurnTimer;
use super::types::{BoardSize, Difficulty, GameOutcome, Mark, SessionPhase, WinningLine};

pub struct SessionSettings {
    pub board_size: BoardSize,
    pub difficulty: Difficulty,
    pub max_search_depth: Option<usize>,
    pub computer_move_delay: Duration,
    pub turn_timer_enabled: bool,
    pub turn_timer_seconds: u32,
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub fn new(board_size: BoardSize, difficulty: Difficulty) -> Self {
        Self::from(&GameConfig {
            board_size,
            difficulty,
            ..GameConfig::default()
        })
    }
}

impl From<&GameConfig> for SessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            board_size: config.board_size,
            difficulty: config.difficulty,
            max_search_depth: config.max_search_depth,
            computer_move_delay: Duration::from_millis(config.computer_move_delay_ms),
            turn_timer_enabled: config.turn_timer.enabled,
            turn_timer_seconds: config.turn_timer.seconds,
            seed: config.seed,
        }
    }
}

/// A computer move waiting out the artificial delay. Only valid for the generation it was
/// scheduled under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingComputerMove {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerTick {
    Idle,
    Running(u32),
    /// The player ran out of time and the computer has already moved in their place.
    Expired(SessionSnapshot),
}

/// One human-vs-computer match: the live game plus configuration and running scores.
pub struct Session {
    game_state: GameState,
    phase: SessionPhase,
    board_size: BoardSize,
    difficulty: Difficulty,
    max_search_depth: Option<usize>,
    computer_move_delay: Duration,
    scoreboard: Scoreboard,
    generation: u64,
    rng: SessionRng,
    timer: TurnTimer,
}

impl Session {
    pub fn new(board_size: BoardSize, difficulty: Difficulty) -> Self {
        Self::with_settings(SessionSettings::new(board_size, difficulty))
    }

    pub fn with_settings(settings: SessionSettings) -> Self {
        let rng = SessionRng::from_optional_seed(settings.seed);
        log!(
            "[session] new {} game on {} (seed {})",
            settings.difficulty,
            settings.board_size,
            rng.seed()
        );

        let mut session = Self {
            game_state: GameState::new(settings.board_size),
            phase: SessionPhase::AwaitingPlayerMove,
            board_size: settings.board_size,
            difficulty: settings.difficulty,
            max_search_depth: settings.max_search_depth,
            computer_move_delay: settings.computer_move_delay,
            scoreboard: Scoreboard::default(),
            generation: 0,
            rng,
            timer: TurnTimer::new(settings.turn_timer_enabled, settings.turn_timer_seconds),
        };
        session.timer.start();
        session
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn scores(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    /// Only `Some` once the game has been won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.game_state.winning_line()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board_size: self.board_size,
            cells: self.game_state.board.cells().to_vec(),
            to_move: self.game_state.current_mark,
            outcome: self.game_state.outcome,
            phase: self.phase,
            last_move: self.game_state.last_move,
            winning_line: self.winning_line(),
            timer_remaining: self.timer.remaining(),
            generation: self.generation,
        }
    }

    /// Invalid input leaves the session untouched.
    pub fn submit_player_move(&mut self, index: usize) -> SessionSnapshot {
        if let Err(e) = self.try_player_move(index) {
            debug_log!("[session] ignored player move at {}: {}", index, e);
        }
        self.snapshot()
    }

    pub fn run_computer_move(&mut self) -> SessionSnapshot {
        if let Err(e) = self.try_computer_move() {
            match e {
                GameError::InvalidStateTransition { .. } => {
                    debug_log!("[session] ignored computer move: {}", e);
                }
                _ => log!("[session] computer failed to move: {}", e),
            }
        }
        self.snapshot()
    }

    /// Returns a token for the presentation layer to hold over the artificial delay.
    pub fn schedule_computer_move(&self) -> Option<PendingComputerMove> {
        (self.phase == SessionPhase::AwaitingComputerMove).then_some(PendingComputerMove {
            generation: self.generation,
            delay: self.computer_move_delay,
        })
    }

    /// Drops the move if the session was reset or resized after it was scheduled.
    pub fn run_scheduled(&mut self, pending: PendingComputerMove) -> Option<SessionSnapshot> {
        if pending.generation != self.generation {
            log!(
                "[session] discarding stale computer move from generation {} (now {})",
                pending.generation,
                self.generation
            );
            return None;
        }
        if self.phase != SessionPhase::AwaitingComputerMove {
            debug_log!("[session] scheduled computer move no longer needed");
            return None;
        }
        Some(self.run_computer_move())
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.game_state = GameState::new(self.board_size);
        self.phase = SessionPhase::AwaitingPlayerMove;
        self.timer.start();
        log!(
            "[session] reset to {} (generation {})",
            self.board_size,
            self.generation
        );
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log!("[session] difficulty {} -> {}", self.difficulty, difficulty);
            self.difficulty = difficulty;
        }
    }

    /// A new size rebuilds the board, so it always resets the current game.
    pub fn set_board_size(&mut self, board_size: BoardSize) {
        if self.board_size == board_size {
            return;
        }
        self.board_size = board_size;
        self.reset();
    }

    pub fn set_max_search_depth(&mut self, max_search_depth: Option<usize>) {
        self.max_search_depth = max_search_depth;
    }

    pub fn set_turn_timer(&mut self, enabled: bool, seconds: u32) {
        self.timer.configure(enabled, seconds);
        if enabled && self.phase == SessionPhase::AwaitingPlayerMove && !self.timer.is_running() {
            self.timer.start();
        }
    }

    /// Advances the turn timer by one second. Expiry forces the computer's move.
    pub fn tick_timer(&mut self) -> TimerTick {
        if self.phase != SessionPhase::AwaitingPlayerMove {
            self.timer.stop();
            return TimerTick::Idle;
        }

        match self.timer.tick() {
            None => TimerTick::Idle,
            Some(0) => {
                self.timer.stop();
                log!("[session] turn timer expired, computer moves instead");
                if let Err(e) = self.game_state.pass_turn() {
                    log!("[session] could not pass turn: {}", e);
                    return TimerTick::Idle;
                }
                self.phase = SessionPhase::AwaitingComputerMove;
                TimerTick::Expired(self.run_computer_move())
            }
            Some(remaining) => TimerTick::Running(remaining),
        }
    }

    fn try_player_move(&mut self, index: usize) -> Result<(), GameError> {
        self.expect_phase(SessionPhase::AwaitingPlayerMove)?;
        let outcome = self.game_state.place_mark(Mark::PLAYER, index)?;
        debug_log!("[session] player X at {}", index);
        self.finish_turn(outcome, SessionPhase::AwaitingComputerMove);
        Ok(())
    }

    fn try_computer_move(&mut self) -> Result<(), GameError> {
        self.expect_phase(SessionPhase::AwaitingComputerMove)?;

        let bot_input = BotInput::from_game_state(&self.game_state, self.max_search_depth);
        let index = calculate_move(self.difficulty, &bot_input, &mut self.rng)
            .ok_or(GameError::NoMoveAvailable)?;

        let outcome = self.game_state.place_mark(Mark::COMPUTER, index)?;
        debug_log!("[session] computer O at {}", index);
        self.finish_turn(outcome, SessionPhase::AwaitingPlayerMove);
        Ok(())
    }

    fn expect_phase(&self, expected: SessionPhase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::InvalidStateTransition {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn finish_turn(&mut self, outcome: GameOutcome, next: SessionPhase) {
        if outcome.is_terminal() {
            self.phase = SessionPhase::Terminal;
            self.timer.stop();
            self.scoreboard.record(outcome);
            log!("[session] game over: {:?} ({})", outcome, self.scoreboard);
            return;
        }

        self.phase = next;
        if next == SessionPhase::AwaitingPlayerMove {
            self.timer.start();
        } else {
            self.timer.stop();
        }
    }
}
