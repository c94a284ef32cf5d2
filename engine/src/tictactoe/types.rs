use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The human always plays X.
    pub const PLAYER: Mark = Mark::X;
    pub const COMPUTER: Mark = Mark::O;

    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    #[default]
    Three,
    Four,
}

impl BoardSize {
    pub fn side(&self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.side() * self.side()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ParseError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            other => Err(ParseError::UnsupportedBoardSize(other)),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

impl FromStr for BoardSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let side = match trimmed.split_once(['x', 'X']) {
            Some((rows, cols)) if rows == cols => rows.parse::<usize>(),
            Some(_) => return Err(ParseError::UnsupportedBoardSize(0)),
            None => trimmed.parse::<usize>(),
        };
        side.map_err(|_| ParseError::UnsupportedBoardSize(0))
            .and_then(BoardSize::try_from)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    PlayerWin,
    ComputerWin,
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::PlayerWin => Some(Mark::PLAYER),
            GameOutcome::ComputerWin => Some(Mark::COMPUTER),
            _ => None,
        }
    }

    pub(crate) fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => GameOutcome::PlayerWin,
            Mark::O => GameOutcome::ComputerWin,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    AwaitingPlayerMove,
    AwaitingComputerMove,
    Terminal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub index: usize,
    pub mark: Mark,
}

/// A completed line, borrowed from the precomputed line set for the board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: &'static [usize],
}

impl WinningLine {
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_parses_plain_and_square_forms() {
        assert_eq!("3".parse::<BoardSize>(), Ok(BoardSize::Three));
        assert_eq!("4x4".parse::<BoardSize>(), Ok(BoardSize::Four));
        assert!("5".parse::<BoardSize>().is_err());
        assert!("3x4".parse::<BoardSize>().is_err());
    }

    #[test]
    fn test_board_size_try_from_rejects_other_sides() {
        assert_eq!(BoardSize::try_from(2), Err(ParseError::UnsupportedBoardSize(2)));
        assert_eq!(BoardSize::Four.cell_count(), 16);
    }

    #[test]
    fn test_difficulty_from_str_is_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_outcome_winner_matches_fixed_mark_assignment() {
        assert_eq!(GameOutcome::won_by(Mark::X), GameOutcome::PlayerWin);
        assert_eq!(GameOutcome::ComputerWin.winner(), Some(Mark::O));
        assert_eq!(GameOutcome::Draw.winner(), None);
        assert!(!GameOutcome::InProgress.is_terminal());
    }
}
