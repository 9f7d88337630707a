/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Direction pawns of this color advance along the rank axis.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank pawns of this color start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Rank pawns of this color promote on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Home rank of this color's king and rooks.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}
