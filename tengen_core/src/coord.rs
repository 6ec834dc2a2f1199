// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board coordinates, players, and moves.

use core::fmt;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// The black player.
    Black,
    /// The white player.
    White,
}

impl Player {
    /// Returns the other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

/// A board intersection, addressed by zero-based row and column.
///
/// Array-valued [`Position`](crate::position::Position) fields are indexed
/// row-major: `row * size + col`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// Zero-based row, counted from the top edge.
    pub row: u8,
    /// Zero-based column, counted from the left edge.
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate from row and column.
    #[inline]
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row-major cell index for a board of the given size.
    #[inline]
    #[must_use]
    pub const fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Reconstructs a coordinate from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size²` or if `size` is zero.
    #[inline]
    #[must_use]
    pub fn from_index(index: usize, size: u8) -> Self {
        let s = size as usize;
        assert!(index < s * s, "cell index {index} out of range for size {size}");
        #[expect(
            clippy::cast_possible_truncation,
            reason = "index < size² and size fits in u8, so both quotient and remainder fit"
        )]
        let (row, col) = ((index / s) as u8, (index % s) as u8);
        Self { row, col }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row, self.col)
    }
}

/// A move in a game or variation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// A stone played at a board intersection.
    Play(Coord),
    /// The player passed.
    Pass,
    /// The player resigned.
    Resign,
}

impl Move {
    /// Returns the board point of a played move, or `None` for pass/resign.
    #[inline]
    #[must_use]
    pub const fn point(self) -> Option<Coord> {
        match self {
            Self::Play(at) => Some(at),
            Self::Pass | Self::Resign => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent().opponent(), Player::Black);
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(Coord::new(0, 0).index(9), 0);
        assert_eq!(Coord::new(0, 8).index(9), 8);
        assert_eq!(Coord::new(1, 0).index(9), 9);
        assert_eq!(Coord::new(8, 8).index(9), 80);
    }

    #[test]
    fn from_index_round_trips() {
        for index in 0..81 {
            let at = Coord::from_index(index, 9);
            assert_eq!(at.index(9), index);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn from_index_out_of_range_panics() {
        let _ = Coord::from_index(81, 9);
    }

    #[test]
    fn move_point() {
        let at = Coord::new(3, 4);
        assert_eq!(Move::Play(at).point(), Some(at));
        assert_eq!(Move::Pass.point(), None);
        assert_eq!(Move::Resign.point(), None);
    }
}
