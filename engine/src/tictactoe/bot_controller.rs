use crate::debug_log;
use crate::session_rng::SessionRng;
use super::board::Board;
use super::game_state::GameState;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win_at;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    /// `None` searches to the end of the game.
    pub max_depth: Option<usize>,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self {
            board,
            bot_mark,
            max_depth: None,
        }
    }

    pub fn from_game_state(state: &GameState, max_depth: Option<usize>) -> Self {
        Self {
            board: state.board.clone(),
            bot_mark: Mark::COMPUTER,
            max_depth,
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => calculate_heuristic_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.empty_cells())
}

/// One ply: take a win, else block the opponent's win, else play randomly.
pub fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();

    if let Some(index) = find_winning_move(&mut board, input.bot_mark, &available_moves) {
        debug_log!("[bot] heuristic takes win at {}", index);
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut board, input.bot_mark.opponent(), &available_moves)
    {
        debug_log!("[bot] heuristic blocks at {}", index);
        return Some(index);
    }

    rng.choose(&available_moves)
}

/// Exhaustive alpha-beta search. Ties keep the lowest index.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let available_moves = input.board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        let score = score_root_move(&mut board, input, index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    debug_log!("[bot] minimax picks {:?} with score {}", best_move, best_score);
    best_move
}

fn score_root_move(board: &mut Board, input: &BotInput, index: usize) -> i32 {
    board.set(index, input.bot_mark);
    let score = minimax(
        board,
        0,
        input.max_depth,
        false,
        input.bot_mark,
        i32::MIN,
        i32::MAX,
        index,
    );
    board.clear(index);
    score
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.set(index, mark);
        let winner = check_win_at(board, index);
        board.clear(index);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

fn minimax(
    board: &mut Board,
    depth: usize,
    max_depth: Option<usize>,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
    last_index: usize,
) -> i32 {
    if let Some(winner) = check_win_at(board, last_index) {
        return if winner == bot_mark {
            WIN_SCORE - depth as i32
        } else {
            depth as i32 - WIN_SCORE
        };
    }

    if board.is_full() {
        return 0;
    }

    if max_depth.is_some_and(|limit| depth >= limit) {
        return 0;
    }

    let moves = board.empty_cells();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, bot_mark);
            let eval = minimax(
                board,
                depth + 1,
                max_depth,
                false,
                bot_mark,
                alpha,
                beta,
                index,
            );
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let opponent_mark = bot_mark.opponent();
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, opponent_mark);
            let eval = minimax(
                board,
                depth + 1,
                max_depth,
                true,
                bot_mark,
                alpha,
                beta,
                index,
            );
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
