// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable position snapshot published by the game/search process.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::color::Rgba;
use crate::coord::{Coord, Move, Player};

/// A realized game-tree child of a position.
///
/// Realized children are lines the user can actually navigate into, as
/// opposed to moves that are merely tracked statistically in
/// [`Position::child_n`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Child {
    /// The move that leads from the parent position to this child.
    pub last_move: Move,
}

/// The kind of mark an annotation requests.
///
/// Only [`Dot`](Self::Dot) currently has defined rendering; the other kinds
/// participate in grouping so renderers can be extended without data-model
/// changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    /// A small filled dot centered on the point.
    Dot,
    /// A triangle mark.
    Triangle,
    /// A square mark.
    Square,
}

/// A free-form mark attached to a board point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annotation {
    /// The marked intersection.
    pub at: Coord,
    /// The requested mark shape.
    pub shape: Shape,
    /// The mark color.
    pub color: Rgba,
}

/// An immutable-per-version snapshot of a game position with search
/// statistics.
///
/// Array-valued fields, when present, have exactly `size²` entries indexed
/// row-major (see [`Coord::index`]). Statistics fields are `None` until the
/// search process has produced them; absence is a legitimate "not yet
/// available" state, not an error.
///
/// The rendering layers never mutate a `Position`; they only derive
/// presentation state from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    /// Board size (9, 13, 19, ...).
    pub size: u8,
    /// One entry per cell: the stone occupying it, if any.
    pub stones: Vec<Option<Player>>,
    /// The player to move in this position.
    pub to_play: Player,
    /// Visit count of this node.
    pub n: u32,
    /// Value estimate of this node, signed from Black's perspective.
    pub q: f64,
    /// Per-cell visit count of the hypothetical child reached by playing
    /// there, or `None` if the search has not reported child statistics.
    pub child_n: Option<Vec<u32>>,
    /// Per-cell value estimate of the hypothetical child reached by playing
    /// there, or `None` if the search has not reported child statistics.
    pub child_q: Option<Vec<f64>>,
    /// Realized game-tree children.
    pub children: Vec<Child>,
    /// Named variations: an ordered move sequence per name.
    pub variations: BTreeMap<String, Vec<Move>>,
    /// Free-form annotations.
    pub annotations: Vec<Annotation>,
}

impl Position {
    /// Creates an empty position: no stones, Black to move, no statistics.
    #[must_use]
    pub fn empty(size: u8) -> Self {
        Self {
            size,
            stones: vec![None; size as usize * size as usize],
            to_play: Player::Black,
            n: 0,
            q: 0.0,
            child_n: None,
            child_q: None,
            children: Vec::new(),
            variations: BTreeMap::new(),
            annotations: Vec::new(),
        }
    }

    /// Number of cells on the board.
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Returns the stone at a coordinate, if any.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board.
    #[inline]
    #[must_use]
    pub fn stone_at(&self, at: Coord) -> Option<Player> {
        self.stones[at.index(self.size)]
    }
}
