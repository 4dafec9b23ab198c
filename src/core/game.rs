use std::time::Duration;

use log::{debug, info};

use super::algorithms::{Opponent, RandomBot};
use super::definitions::Outcome;
use super::engine::{Board, Color, Square};

/// Base countdown per side.
pub const GAME_CLOCK: Duration = Duration::from_secs(180);

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Color,
    selected: Option<Square>,
    valid_moves: Vec<Square>,
    outcome: Outcome,
    white_time: Duration,
    black_time: Duration,
    vs_computer: bool,
}

impl Game {
    /// Fresh match from the standard position, White to move.
    pub fn new(vs_computer: bool) -> Game {
        let mut game = Game::with_board(Board::default(), Color::White);
        game.vs_computer = vs_computer;
        game
    }

    /// Start from an arbitrary position. The position is judged right away,
    /// so a handed-in mate or stalemate reports itself without a move.
    pub fn with_board(board: Board, current_player: Color) -> Game {
        let mut game = Game {
            board,
            current_player,
            selected: None,
            valid_moves: Vec::new(),
            outcome: Outcome::InProgress,
            white_time: GAME_CLOCK,
            black_time: GAME_CLOCK,
            vs_computer: false,
        };
        game.outcome = game.evaluate_position();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Cached legal destinations of the selected piece.
    pub fn valid_moves(&self) -> &[Square] {
        &self.valid_moves
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn remaining_time(&self, side: Color) -> Duration {
        match side {
            Color::White => self.white_time,
            Color::Black => self.black_time,
        }
    }

    /// One square click: select, reselect, move or drop the selection.
    /// Finished games ignore clicks entirely.
    pub fn handle_click(&mut self, square: Square) {
        if self.outcome.is_terminal() {
            return;
        }
        match self.selected {
            Some(from) if self.valid_moves.contains(&square) => {
                self.apply_move(from, square);
                if self.vs_computer
                    && self.current_player == Color::Black
                    && !self.outcome.is_terminal()
                {
                    self.make_random_move();
                }
            }
            _ if self.owns(square) => self.select(square),
            Some(_) => self.clear_selection(),
            None => {}
        }
    }

    /// Let the random bot play for the side to move.
    pub fn make_random_move(&mut self) {
        if self.outcome.is_terminal() {
            return;
        }
        if let Some(_move) = RandomBot.choose_move(self) {
            self.apply_move(_move.from, _move.to);
        }
    }

    /// Run down the active side's clock. Hitting zero forfeits.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.outcome.is_terminal() {
            return;
        }
        let clock = match self.current_player {
            Color::White => &mut self.white_time,
            Color::Black => &mut self.black_time,
        };
        *clock = clock.saturating_sub(elapsed);
        if clock.is_zero() {
            self.outcome = Outcome::TimeForfeit(self.current_player.opposite());
            info!("{} wins on time!", self.current_player.opposite());
        }
    }

    fn owns(&self, square: Square) -> bool {
        self.board
            .get(square)
            .is_some_and(|piece| piece.color == self.current_player)
    }

    fn select(&mut self, square: Square) {
        self.valid_moves = self.board.legal_moves(square, self.current_player);
        self.selected = Some(square);
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    fn apply_move(&mut self, from: Square, to: Square) {
        debug!("{} plays {}{}", self.current_player, from, to);
        self.board.apply_move(from, to);
        self.clear_selection();
        self.current_player = self.current_player.opposite();
        self.outcome = self.evaluate_position();
        match self.outcome {
            Outcome::Check(side) => debug!("{side} is in check"),
            Outcome::Checkmate(winner) => info!("checkmate, {winner} wins!"),
            Outcome::Stalemate => info!("stalemate"),
            _ => {}
        }
    }

    // Order matters: mate outranks stalemate outranks a plain check.
    fn evaluate_position(&self) -> Outcome {
        let side = self.current_player;
        if self.board.is_checkmate(side) {
            Outcome::Checkmate(side.opposite())
        } else if self.board.is_stalemate(side) {
            Outcome::Stalemate
        } else if self.board.in_check(side) {
            Outcome::Check(side)
        } else {
            Outcome::InProgress
        }
    }
}
