use tictactoe_engine::tictactoe::{Scoreboard, SessionSnapshot};

/// Empty cells show their 1-based number so the player knows what to type.
pub fn render_board(snapshot: &SessionSnapshot) -> String {
    let side = snapshot.board_size.side();
    let width = snapshot.cells.len().to_string().len();
    let separator = vec!["-".repeat(width + 2); side].join("+");

    let mut out = String::new();
    for (row_index, row) in snapshot.cells.chunks(side).enumerate() {
        if row_index > 0 {
            out.push_str(&separator);
            out.push('\n');
        }
        let row = row
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                let index = row_index * side + column;
                let text = match cell {
                    Some(mark) => mark.symbol().to_string(),
                    None => (index + 1).to_string(),
                };
                if snapshot.is_highlighted(index) {
                    format!("[{:^width$}]", text)
                } else {
                    format!(" {:^width$} ", text)
                }
            })
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&row);
        out.push('\n');
    }
    out
}

pub fn render_frame(snapshot: &SessionSnapshot) -> String {
    let mut out = render_board(snapshot);
    out.push_str(&snapshot.status().to_string());
    if let Some(remaining) = snapshot.timer_remaining {
        out.push_str(&format!(" ({}s left)", remaining));
    }
    out
}

pub fn render_scores(scores: &Scoreboard) -> String {
    format!("Scores: {}", scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::tictactoe::{
        Board, BoardSize, Difficulty, Mark, Session, SessionPhase, winning_line,
    };

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let session = Session::new(BoardSize::Three, Difficulty::Easy);
        let board = render_board(&session.snapshot());
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " 1 | 2 | 3 ");
        assert_eq!(lines[1], "---+---+---");
        assert_eq!(lines[4], " 7 | 8 | 9 ");
    }

    #[test]
    fn test_four_by_four_pads_to_two_digits() {
        let session = Session::new(BoardSize::Four, Difficulty::Easy);
        let board = render_board(&session.snapshot());
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], " 1  | 2  | 3  | 4  ");
        assert_eq!(lines[6], " 13 | 14 | 15 | 16 ");
    }

    #[test]
    fn test_marks_and_status_are_rendered() {
        let mut session = Session::new(BoardSize::Three, Difficulty::Easy);
        let snapshot = session.submit_player_move(4);
        assert_eq!(snapshot.phase, SessionPhase::AwaitingComputerMove);

        let frame = render_frame(&snapshot);
        assert!(frame.contains(" X "));
        assert!(frame.ends_with("Computer is thinking..."));
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut snapshot = Session::new(BoardSize::Three, Difficulty::Easy).snapshot();
        for index in [0, 1, 2] {
            snapshot.cells[index] = Some(Mark::X);
        }
        let board = Board::from_cells(BoardSize::Three, snapshot.cells.clone()).unwrap();
        snapshot.winning_line = winning_line(&board, Mark::X);

        let rendered = render_board(&snapshot);
        assert_eq!(rendered.lines().next(), Some("[X]|[X]|[X]"));
        assert_eq!(rendered.lines().nth(2), Some(" 4 | 5 | 6 "));
    }
}
