use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardSize, Difficulty};
use super::Validate;

pub const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 10_000;
pub const MAX_TURN_TIMER_SECONDS: u32 = 120;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: BoardSize,
    pub difficulty: Difficulty,
    pub computer_move_delay_ms: u64,
    pub turn_timer: TurnTimerConfig,
    /// Caps the hard opponent's search; unset searches every line to the end.
    pub max_search_depth: Option<usize>,
    pub seed: Option<u64>,
    pub debug_logging: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::Three,
            difficulty: Difficulty::Medium,
            computer_move_delay_ms: 500,
            turn_timer: TurnTimerConfig::default(),
            max_search_depth: None,
            seed: None,
            debug_logging: false,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        if self.max_search_depth == Some(0) {
            return Err("max_search_depth must be at least 1 when set".to_string());
        }
        self.turn_timer.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TurnTimerConfig {
    pub enabled: bool,
    pub seconds: u32,
}

impl Default for TurnTimerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            seconds: 10,
        }
    }
}

impl Validate for TurnTimerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.seconds == 0 || self.seconds > MAX_TURN_TIMER_SECONDS {
            return Err(format!(
                "turn_timer.seconds must be between 1 and {}",
                MAX_TURN_TIMER_SECONDS
            ));
        }
        Ok(())
    }
}
