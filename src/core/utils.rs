use super::engine::Square;

/// All 64 squares, row by row from Black's back rank.
pub fn squares() -> impl Iterator<Item = Square> {
    (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
}

pub struct Ray {
    current: Option<Square>,
    direction: (i8, i8),
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.current?.offset(self.direction.0, self.direction.1);
        self.current
    }
}

/// Squares reached by repeatedly stepping `direction` from `from`,
/// excluding `from` itself, until the board edge.
pub fn ray(from: Square, direction: (i8, i8)) -> Ray {
    Ray {
        current: Some(from),
        direction,
    }
}
