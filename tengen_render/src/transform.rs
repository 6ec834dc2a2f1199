// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from board cells to surface points.
//!
//! A [`GridTransform`] is bound to a [`BoardView`](crate::board::BoardView)
//! at construction and is valid for the lifetime of the attachment; layers
//! receive it on every draw call and never store it.

use kurbo::{Point, Rect};
use tengen_core::coord::Coord;

/// Maps (row, col) board cells to surface pixels.
///
/// `origin` is the surface position of the top-left intersection; `spacing`
/// is the distance between adjacent intersections. Cells grow rightwards
/// with columns and downwards with rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    origin: Point,
    spacing: f64,
    size: u8,
}

impl GridTransform {
    /// Creates a transform for a board of `size` lines.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `spacing` is not strictly positive.
    #[must_use]
    pub fn new(origin: Point, spacing: f64, size: u8) -> Self {
        assert!(size > 0, "board size must be nonzero");
        assert!(spacing > 0.0, "cell spacing must be positive");
        Self {
            origin,
            spacing,
            size,
        }
    }

    /// The board size this transform was built for.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Distance between adjacent intersections, in surface pixels.
    #[inline]
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Surface position of an intersection.
    #[inline]
    #[must_use]
    pub fn point(&self, at: Coord) -> Point {
        Point::new(
            self.origin.x + f64::from(at.col) * self.spacing,
            self.origin.y + f64::from(at.row) * self.spacing,
        )
    }

    /// One cell-sized rectangle centered on an intersection.
    #[inline]
    #[must_use]
    pub fn cell_rect(&self, at: Coord) -> Rect {
        let c = self.point(at);
        let half = self.spacing / 2.0;
        Rect::new(c.x - half, c.y - half, c.x + half, c.y + half)
    }

    /// Stone radius, slightly under half a cell so neighbors do not touch.
    #[inline]
    #[must_use]
    pub fn stone_radius(&self) -> f64 {
        self.spacing * 0.48
    }
}
