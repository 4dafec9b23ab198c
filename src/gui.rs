use std::time::Duration;

use eframe::egui::{Color32, RichText};
use ghhs_chess::{Color, Piece, PieceKind, Square};

const LIGHT_SQUARE: Color32 = Color32::from_rgb(232, 237, 249);
const DARK_SQUARE: Color32 = Color32::from_rgb(183, 192, 216);
const SELECTED_SQUARE: Color32 = Color32::from_rgb(186, 202, 68);
const TARGET_SQUARE: Color32 = Color32::from_rgb(140, 184, 116);

pub fn background_color(square: Square, selected: bool, target: bool) -> Color32 {
    if selected {
        SELECTED_SQUARE
    } else if target {
        TARGET_SQUARE
    } else if (square.row + square.col) % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}

/// Text glyphs need no image assets, so a missing font glyph shows up
/// as a plain box instead of taking the app down.
pub fn piece_text(piece: Option<Piece>, cell_size: f32) -> RichText {
    let glyph = match piece {
        None => "",
        Some(Piece {
            color: Color::White,
            kind,
        }) => match kind {
            PieceKind::Pawn => "\u{2659}",
            PieceKind::Rook => "\u{2656}",
            PieceKind::Knight => "\u{2658}",
            PieceKind::Bishop => "\u{2657}",
            PieceKind::Queen => "\u{2655}",
            PieceKind::King => "\u{2654}",
        },
        Some(Piece {
            color: Color::Black,
            kind,
        }) => match kind {
            PieceKind::Pawn => "\u{265F}",
            PieceKind::Rook => "\u{265C}",
            PieceKind::Knight => "\u{265E}",
            PieceKind::Bishop => "\u{265D}",
            PieceKind::Queen => "\u{265B}",
            PieceKind::King => "\u{265A}",
        },
    };
    RichText::new(glyph)
        .size(cell_size * 0.62)
        .color(Color32::BLACK)
}

pub fn format_clock(remaining: Duration) -> String {
    let seconds = remaining.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
