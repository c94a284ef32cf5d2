use thiserror::Error;

use super::types::{Mark, SessionPhase};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {index} is out of range for a board of {len} cells")]
    OutOfRange { index: usize, len: usize },

    #[error("cell {index} is already marked")]
    CellOccupied { index: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("expected {expected:?}, session is {actual:?}")]
    InvalidStateTransition {
        expected: SessionPhase,
        actual: SessionPhase,
    },

    #[error("it is not {mark}'s turn")]
    NotYourTurn { mark: Mark },

    #[error("game is already over")]
    GameOver,

    #[error("no empty cell left to play")]
    NoMoveAvailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unsupported board size {0} (expected 3 or 4)")]
    UnsupportedBoardSize(usize),

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}
