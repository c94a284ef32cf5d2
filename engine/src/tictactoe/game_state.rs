use super::board::Board;
use super::error::GameError;
use super::types::{BoardSize, GameOutcome, LastMove, Mark, WinningLine};
use super::win_detector::{check_win_at, winning_line};

/// Board plus turn and outcome bookkeeping for a single game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: GameOutcome,
    pub last_move: Option<LastMove>,
}

impl GameState {
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            current_mark: Mark::PLAYER,
            outcome: GameOutcome::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<GameOutcome, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        if mark != self.current_mark {
            return Err(GameError::NotYourTurn { mark });
        }

        self.board.place(index, mark)?;
        self.last_move = Some(LastMove { index, mark });

        self.check_game_over(index);

        if !self.outcome.is_terminal() {
            self.switch_turn();
        }

        Ok(self.outcome)
    }

    /// Hands the move to the other side without placing anything.
    pub fn pass_turn(&mut self) -> Result<(), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.switch_turn();
        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    /// A win through the last cell is checked before a full board is called a draw.
    fn check_game_over(&mut self, last_index: usize) {
        if let Some(winner_mark) = check_win_at(&self.board, last_index) {
            self.outcome = GameOutcome::won_by(winner_mark);
            return;
        }

        if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome
            .winner()
            .and_then(|mark| winning_line(&self.board, mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::error::BoardError;

    fn play(state: &mut GameState, moves: &[usize]) {
        for &index in moves {
            let mark = state.current_mark;
            state.place_mark(mark, index).unwrap();
        }
    }

    #[test]
    fn test_new_state_has_x_to_move() {
        let state = GameState::new(BoardSize::Three);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.outcome, GameOutcome::InProgress);
        assert!(state.last_move.is_none());
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let mut state = GameState::new(BoardSize::Three);
        play(&mut state, &[0]);
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(LastMove { index: 0, mark: Mark::X }));
    }

    #[test]
    fn test_wrong_mark_is_rejected() {
        let mut state = GameState::new(BoardSize::Three);
        assert_eq!(
            state.place_mark(Mark::O, 0),
            Err(GameError::NotYourTurn { mark: Mark::O })
        );
        assert_eq!(state.board.is_empty(0), Ok(true));
    }

    #[test]
    fn test_occupied_cell_is_rejected_and_turn_kept() {
        let mut state = GameState::new(BoardSize::Three);
        play(&mut state, &[4]);
        assert_eq!(
            state.place_mark(Mark::O, 4),
            Err(GameError::Board(BoardError::CellOccupied { index: 4 }))
        );
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_player_win_sets_outcome_and_line() {
        let mut state = GameState::new(BoardSize::Three);
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.outcome, GameOutcome::PlayerWin);
        assert_eq!(state.winning_line().unwrap().cells, &[0, 1, 2]);
        assert_eq!(state.place_mark(Mark::O, 5), Err(GameError::GameOver));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // Ends as X O X / X O O / O X X.
        let mut state = GameState::new(BoardSize::Three);
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.outcome, GameOutcome::Draw);
        assert!(state.winning_line().is_none());
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let mut state = GameState::new(BoardSize::Three);
        play(&mut state, &[0, 1, 4, 2, 5, 3, 6, 7, 8]);
        assert_eq!(state.outcome, GameOutcome::PlayerWin);
    }

    #[test]
    fn test_pass_turn_switches_mark() {
        let mut state = GameState::new(BoardSize::Four);
        state.pass_turn().unwrap();
        assert_eq!(state.current_mark, Mark::O);
    }
}
