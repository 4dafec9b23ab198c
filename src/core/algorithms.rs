use rand::seq::IteratorRandom;

use super::engine::Move;
use super::game::Game;

// Offline opponents only; nothing here searches.
pub trait Opponent {
    fn choose_move(&self, game: &Game) -> Option<Move>;
}

/// Picks uniformly among every legal move of the side to move.
pub struct RandomBot;

impl Opponent for RandomBot {
    fn choose_move(&self, game: &Game) -> Option<Move> {
        let side = game.current_player();
        let board = game.board();
        board
            .pieces(side)
            .flat_map(|from| {
                board
                    .legal_moves(from, side)
                    .into_iter()
                    .map(move |to| Move { from, to })
            })
            .choose(&mut rand::thread_rng())
    }
}
