use std::fmt;

use super::types::{BoardSize, GameOutcome, LastMove, Mark, SessionPhase, WinningLine};

/// Plain copy of what the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board_size: BoardSize,
    pub cells: Vec<Option<Mark>>,
    pub to_move: Mark,
    pub outcome: GameOutcome,
    pub phase: SessionPhase,
    pub last_move: Option<LastMove>,
    pub winning_line: Option<WinningLine>,
    pub timer_remaining: Option<u32>,
    pub generation: u64,
}

impl SessionSnapshot {
    pub fn status(&self) -> StatusMessage {
        match self.outcome {
            GameOutcome::PlayerWin => StatusMessage::PlayerWon,
            GameOutcome::ComputerWin => StatusMessage::ComputerWon,
            GameOutcome::Draw => StatusMessage::Draw,
            GameOutcome::InProgress => match self.phase {
                SessionPhase::AwaitingComputerMove => StatusMessage::ComputerThinking,
                _ => StatusMessage::YourMove,
            },
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(index))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    YourMove,
    ComputerThinking,
    PlayerWon,
    ComputerWon,
    Draw,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusMessage::YourMove => "Your move! You are playing X",
            StatusMessage::ComputerThinking => "Computer is thinking...",
            StatusMessage::PlayerWon => "You won!",
            StatusMessage::ComputerWon => "Computer won!",
            StatusMessage::Draw => "Draw!",
        };
        f.write_str(text)
    }
}
