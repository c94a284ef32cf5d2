use std::sync::OnceLock;

use super::board::Board;
use super::types::{BoardSize, Mark, WinningLine};

/// Rows, then columns, then the two main diagonals, for one board size.
pub struct WinningLineSet {
    lines: Vec<Vec<usize>>,
    lines_by_cell: Vec<Vec<usize>>,
}

static THREE: OnceLock<WinningLineSet> = OnceLock::new();
static FOUR: OnceLock<WinningLineSet> = OnceLock::new();

impl WinningLineSet {
    pub fn for_size(size: BoardSize) -> &'static WinningLineSet {
        match size {
            BoardSize::Three => THREE.get_or_init(|| WinningLineSet::build(size)),
            BoardSize::Four => FOUR.get_or_init(|| WinningLineSet::build(size)),
        }
    }

    fn build(size: BoardSize) -> Self {
        let n = size.side();
        let mut lines: Vec<Vec<usize>> = Vec::with_capacity(2 * n + 2);

        for row in 0..n {
            lines.push((0..n).map(|col| row * n + col).collect());
        }
        for col in 0..n {
            lines.push((0..n).map(|row| row * n + col).collect());
        }
        lines.push((0..n).map(|i| i * n + i).collect());
        lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

        let mut lines_by_cell: Vec<Vec<usize>> = vec![Vec::new(); n * n];
        for (line_index, line) in lines.iter().enumerate() {
            for &cell in line {
                lines_by_cell[cell].push(line_index);
            }
        }

        Self {
            lines,
            lines_by_cell,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &[usize]> {
        self.lines.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn through(&self, cell: usize) -> impl Iterator<Item = &[usize]> {
        self.lines_by_cell[cell]
            .iter()
            .map(|&line_index| self.lines[line_index].as_slice())
    }
}

fn line_is(board: &Board, line: &[usize], mark: Mark) -> bool {
    line.iter().all(|&index| board.mark_at(index) == Some(mark))
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    WinningLineSet::for_size(board.size())
        .lines()
        .any(|line| line_is(board, line, mark))
}

/// A full board counts as a draw only when nobody holds a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_won(board, Mark::X) && !has_won(board, Mark::O)
}

pub fn winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    WinningLineSet::for_size(board.size())
        .lines()
        .find(|line| line_is(board, line, mark))
        .map(|cells| WinningLine { mark, cells })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}

/// Only lines through `index` can have been completed by the mark placed there.
pub(crate) fn check_win_at(board: &Board, index: usize) -> Option<Mark> {
    let mark = board.mark_at(index)?;
    WinningLineSet::for_size(board.size())
        .through(index)
        .any(|line| line_is(board, line, mark))
        .then_some(mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::board_from_str;

    #[test]
    fn test_line_set_sizes() {
        assert_eq!(WinningLineSet::for_size(BoardSize::Three).len(), 8);
        assert_eq!(WinningLineSet::for_size(BoardSize::Four).len(), 10);
    }

    #[test]
    fn test_line_set_enumeration_order() {
        let lines: Vec<&[usize]> = WinningLineSet::for_size(BoardSize::Three).lines().collect();
        assert_eq!(lines[0], &[0, 1, 2]);
        assert_eq!(lines[3], &[0, 3, 6]);
        assert_eq!(lines[6], &[0, 4, 8]);
        assert_eq!(lines[7], &[2, 4, 6]);
    }

    #[test]
    fn test_four_by_four_anti_diagonal() {
        let lines: Vec<&[usize]> = WinningLineSet::for_size(BoardSize::Four).lines().collect();
        assert_eq!(lines[9], &[3, 6, 9, 12]);
    }

    #[test]
    fn test_has_won_for_every_line_on_both_sizes() {
        for size in [BoardSize::Three, BoardSize::Four] {
            for line in WinningLineSet::for_size(size).lines() {
                let mut board = Board::new(size);
                for &index in line {
                    board.place(index, Mark::O).unwrap();
                }
                assert!(has_won(&board, Mark::O), "line {:?} on {}", line, size);
                assert!(!has_won(&board, Mark::X));
            }
        }
    }

    #[test]
    fn test_has_won_requires_complete_line() {
        let board = board_from_str(BoardSize::Four, "XXX. .... .... ....");
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from_str(BoardSize::Three, "XOX OXO OXO");
        assert!(board.is_full());
        assert!(check_win(&board).is_none());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = board_from_str(BoardSize::Three, "XXX OOX XOO");
        assert!(!is_draw(&board));
        assert_eq!(check_win(&board), Some(Mark::X));
    }

    #[test]
    fn test_winning_line_prefers_rows_over_columns_and_diagonals() {
        let board = board_from_str(BoardSize::Three, "XXX XOO XOO");
        let line = winning_line(&board, Mark::X).unwrap();
        assert_eq!(line.cells, &[0, 1, 2]);
        assert_eq!(line.mark, Mark::X);
    }

    #[test]
    fn test_winning_line_absent_without_win() {
        let board = board_from_str(BoardSize::Three, "XO. ... ...");
        assert!(winning_line(&board, Mark::X).is_none());
    }

    #[test]
    fn test_check_win_at_only_considers_lines_through_cell() {
        let board = board_from_str(BoardSize::Three, "OOO X.X ...");
        assert_eq!(check_win_at(&board, 1), Some(Mark::O));
        assert_eq!(check_win_at(&board, 3), None);
        assert_eq!(check_win_at(&board, 4), None);
    }
}
