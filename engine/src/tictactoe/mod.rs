mod board;
mod bot_controller;
mod error;
mod game_state;
mod scoreboard;
mod session;
mod snapshot;
mod turn_timer;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, calculate_heuristic_move, calculate_minimax_move, calculate_move,
    calculate_random_move,
};
pub use error::{BoardError, GameError, ParseError};
pub use game_state::GameState;
pub use scoreboard::Scoreboard;
pub use session::{PendingComputerMove, Session, SessionSettings, TimerTick};
pub use snapshot::{SessionSnapshot, StatusMessage};
pub use turn_timer::TurnTimer;
pub use types::{BoardSize, Difficulty, GameOutcome, LastMove, Mark, SessionPhase, WinningLine};
pub use win_detector::{WinningLineSet, check_win, has_won, is_draw, winning_line};
