mod core;

pub use crate::core::algorithms::{Opponent, RandomBot};
pub use crate::core::definitions::Outcome;
pub use crate::core::engine::{Board, Color, FenError, Move, Piece, PieceKind, Square, START_FEN};
pub use crate::core::game::{Game, GAME_CLOCK};
