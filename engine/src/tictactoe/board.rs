use super::error::BoardError;
use super::types::{BoardSize, Mark};

/// Row-major grid of `side * side` cells. The length never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![None; size.cell_count()],
        }
    }

    pub fn from_cells(size: BoardSize, cells: Vec<Option<Mark>>) -> Result<Self, BoardError> {
        if cells.len() != size.cell_count() {
            return Err(BoardError::OutOfRange {
                index: cells.len(),
                len: size.cell_count(),
            });
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self, index: usize) -> Result<bool, BoardError> {
        self.get(index).map(|cell| cell.is_none())
    }

    pub fn get(&self, index: usize) -> Result<Option<Mark>, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::OutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfRange { index, len })?;

        if cell.is_some() {
            return Err(BoardError::CellOccupied { index });
        }

        *cell = Some(mark);
        Ok(())
    }

    /// Speculative placement for search; `index` comes from `empty_cells`.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    /// Undo for speculative search. Callers only clear cells they just placed.
    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = None;
        }
    }

    pub(crate) fn mark_at(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }
}

#[cfg(test)]
pub(crate) fn board_from_str(size: BoardSize, layout: &str) -> Board {
    let cells: Vec<Option<Mark>> = layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        })
        .collect();
    Board::from_cells(size, cells).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_empty() {
        let board = Board::new(BoardSize::Four);
        assert_eq!(board.len(), 16);
        assert_eq!(board.empty_cells(), (0..16).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_marks_cell_and_removes_it_from_empty_cells() {
        let mut board = Board::new(BoardSize::Three);
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Ok(Some(Mark::X)));
        assert_eq!(board.is_empty(4), Ok(false));
        assert!(!board.empty_cells().contains(&4));
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut board = Board::new(BoardSize::Three);
        board.place(0, Mark::X).unwrap();
        assert_eq!(
            board.place(0, Mark::O),
            Err(BoardError::CellOccupied { index: 0 })
        );
        assert_eq!(board.get(0), Ok(Some(Mark::X)));
    }

    #[test]
    fn test_out_of_range_is_rejected_not_clamped() {
        let mut board = Board::new(BoardSize::Three);
        assert_eq!(
            board.place(9, Mark::X),
            Err(BoardError::OutOfRange { index: 9, len: 9 })
        );
        assert_eq!(
            board.is_empty(42),
            Err(BoardError::OutOfRange { index: 42, len: 9 })
        );
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_clear_restores_empty_cell() {
        let mut board = Board::new(BoardSize::Three);
        board.place(2, Mark::O).unwrap();
        board.clear(2);
        assert_eq!(board.is_empty(2), Ok(true));
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(Board::from_cells(BoardSize::Three, vec![None; 16]).is_err());
    }

    #[test]
    fn test_board_from_str_reads_row_major_layout() {
        let board = board_from_str(BoardSize::Three, "XX. OO. ...");
        assert_eq!(board.empty_cells(), vec![2, 5, 6, 7, 8]);
        assert_eq!(board.get(3), Ok(Some(Mark::O)));
    }
}
