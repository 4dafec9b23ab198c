use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ghhs_chess::{Board, Color, Game, Square};

fn count_legal_moves(board: &Board, side: Color) -> usize {
    let mut total = 0;
    for row in 0..8 {
        for col in 0..8 {
            total += board.legal_moves(Square::new(row, col), side).len();
        }
    }
    total
}

fn random_game(max_plies: usize) -> Game {
    let mut game = Game::new(false);
    for _ in 0..max_plies {
        if game.outcome().is_terminal() {
            break;
        }
        game.make_random_move();
    }
    game
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("legal moves, opening", |b| {
        let board = Board::default();
        b.iter(|| count_legal_moves(black_box(&board), Color::White))
    });
    c.bench_function("check scan, opening", |b| {
        let board = Board::default();
        b.iter(|| black_box(&board).in_check(Color::White))
    });
    c.bench_function("mate evaluation", |b| {
        let mate = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1").unwrap();
        b.iter(|| black_box(&mate).is_checkmate(Color::Black))
    });
    c.bench_function("random game 100", |b| b.iter(|| random_game(100)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
