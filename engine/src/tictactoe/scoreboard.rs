use std::fmt;

use super::types::GameOutcome;

/// Totals kept across resets for as long as the session lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::PlayerWin => self.player_wins += 1,
            GameOutcome::ComputerWin => self.computer_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.player_wins + self.computer_wins + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player {} | computer {} | draws {}",
            self.player_wins, self.computer_wins, self.draws
        )
    }
}
