use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::tictactoe::{Board, BoardSize, BotInput, Mark, calculate_minimax_move};

fn board_with(size: BoardSize, moves: &[(usize, Mark)]) -> Board {
    let mut board = Board::new(size);
    for &(index, mark) in moves {
        board
            .place(index, mark)
            .expect("bench fixture places on an empty cell");
    }
    board
}

fn bench_minimax_full_game_3x3() {
    let mut board = Board::new(BoardSize::Three);
    let mut mark = Mark::X;
    while let Some(index) = calculate_minimax_move(&BotInput::new(board.clone(), mark)) {
        if board.place(index, mark).is_err() {
            break;
        }
        if tictactoe_engine::tictactoe::check_win(&board).is_some() {
            break;
        }
        mark = mark.opponent();
    }
}

fn bench_minimax_first_reply_3x3() {
    let board = board_with(BoardSize::Three, &[(0, Mark::X)]);
    calculate_minimax_move(&BotInput::new(board, Mark::O));
}

fn bench_minimax_mid_game_4x4() {
    let board = board_with(
        BoardSize::Four,
        &[
            (0, Mark::X), (5, Mark::O), (10, Mark::X), (15, Mark::O),
            (3, Mark::X), (6, Mark::O), (12, Mark::X),
        ],
    );
    calculate_minimax_move(&BotInput::new(board, Mark::O));
}

fn bench_minimax_capped_empty_4x4() {
    let input = BotInput {
        board: Board::new(BoardSize::Four),
        bot_mark: Mark::O,
        max_depth: Some(4),
    };
    calculate_minimax_move(&input);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(60));

    group.bench_function("full_game_3x3", |b| {
        b.iter(|| black_box(bench_minimax_full_game_3x3()))
    });

    group.bench_function("first_reply_3x3", |b| {
        b.iter(|| black_box(bench_minimax_first_reply_3x3()))
    });

    group.bench_function("mid_game_4x4", |b| {
        b.iter(|| black_box(bench_minimax_mid_game_4x4()))
    });

    group.bench_function("capped_empty_4x4", |b| {
        b.iter(|| black_box(bench_minimax_capped_empty_4x4()))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
