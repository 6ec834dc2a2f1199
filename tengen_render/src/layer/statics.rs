// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed board furniture: grid lines, coordinate labels, captions.

use alloc::format;
use alloc::string::String;

use kurbo::Point;
use tengen_core::color::Rgba;
use tengen_core::coord::Coord;
use tengen_core::field::FieldSet;
use tengen_core::position::Position;

use super::Layer;
use crate::canvas::Canvas;
use crate::transform::GridTransform;

/// Board ink for lines, star points, and labels.
const INK: Rgba = Rgba::new(0.2, 0.2, 0.2, 1.0);

/// Column letters, skipping `I` per Go convention.
const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// What a [`StaticLayer`] renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StaticContent {
    /// Board lines and star points.
    Grid,
    /// Column letters above and row numbers left of the grid.
    Coordinates,
    /// A fixed string centered under the board.
    Caption(String),
}

/// A layer whose content is fixed for its lifetime.
///
/// `update` always reports no change and `clear` discards nothing; the
/// content is chosen at construction and drawn as-is.
#[derive(Debug)]
pub struct StaticLayer {
    content: StaticContent,
}

impl StaticLayer {
    /// Creates a layer rendering the given fixed content.
    #[must_use]
    pub const fn new(content: StaticContent) -> Self {
        Self { content }
    }

    fn draw_grid(canvas: &mut dyn Canvas, xf: &GridTransform) {
        let last = xf.size() - 1;
        for i in 0..xf.size() {
            canvas.stroke_line(
                xf.point(Coord::new(i, 0)),
                xf.point(Coord::new(i, last)),
                1.0,
                INK,
            );
            canvas.stroke_line(
                xf.point(Coord::new(0, i)),
                xf.point(Coord::new(last, i)),
                1.0,
                INK,
            );
        }
        let radius = xf.spacing() * 0.09;
        for at in star_points(xf.size()) {
            canvas.fill_circle(xf.point(at), radius, INK);
        }
    }

    fn draw_coordinates(canvas: &mut dyn Canvas, xf: &GridTransform) {
        let size = xf.spacing() * 0.4;
        for col in 0..xf.size() {
            let mut at = xf.point(Coord::new(0, col));
            at.y -= xf.spacing();
            let letter = [COLUMN_LETTERS[col as usize]];
            let text = core::str::from_utf8(&letter).unwrap_or("?");
            canvas.fill_text(text, at, size, INK);
        }
        for row in 0..xf.size() {
            let mut at = xf.point(Coord::new(row, 0));
            at.x -= xf.spacing();
            let label = format!("{}", xf.size() - row);
            canvas.fill_text(&label, at, size, INK);
        }
    }

    fn draw_caption(canvas: &mut dyn Canvas, xf: &GridTransform, caption: &str) {
        let last = xf.size() - 1;
        let left = xf.point(Coord::new(last, 0));
        let right = xf.point(Coord::new(last, last));
        let at = Point::new((left.x + right.x) / 2.0, left.y + xf.spacing());
        canvas.fill_text(caption, at, xf.spacing() * 0.4, INK);
    }
}

impl Layer for StaticLayer {
    fn interest(&self) -> FieldSet {
        FieldSet::EMPTY
    }

    fn clear(&mut self) -> bool {
        false
    }

    fn update(&mut self, _position: &Position, _changed: FieldSet) -> bool {
        false
    }

    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, _position: &Position) {
        match &self.content {
            StaticContent::Grid => Self::draw_grid(canvas, transform),
            StaticContent::Coordinates => Self::draw_coordinates(canvas, transform),
            StaticContent::Caption(text) => Self::draw_caption(canvas, transform, text),
        }
    }
}

/// Star-point (hoshi) coordinates for a board size.
///
/// Boards of 13 lines and up use the 4-4 points, smaller boards the 3-3
/// points; odd-sized boards additionally mark the center.
fn star_points(size: u8) -> impl Iterator<Item = Coord> {
    let edge: u8 = if size >= 13 { 3 } else { 2 };
    let far = (size - 1).saturating_sub(edge);
    let center = if size % 2 == 1 { Some(size / 2) } else { None };

    let corners = [
        Coord::new(edge, edge),
        Coord::new(edge, far),
        Coord::new(far, edge),
        Coord::new(far, far),
    ];
    corners
        .into_iter()
        .chain(center.map(|c| Coord::new(c, c)))
        .filter(move |at| at.row < size && at.col < size)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use tengen_core::field::Field;

    use super::*;

    #[test]
    fn static_layer_never_updates() {
        let mut layer = StaticLayer::new(StaticContent::Grid);
        let pos = Position::empty(9);
        assert!(!layer.update(&pos, FieldSet::ALL));
        assert!(!layer.update(&pos, FieldSet::from(Field::Stones)));
        assert!(!layer.clear());
        assert!(layer.interest().is_empty());
    }

    #[test]
    fn star_points_nineteen() {
        let points: Vec<_> = star_points(19).collect();
        assert_eq!(points.len(), 5);
        assert!(points.contains(&Coord::new(3, 3)));
        assert!(points.contains(&Coord::new(3, 15)));
        assert!(points.contains(&Coord::new(15, 15)));
        assert!(points.contains(&Coord::new(9, 9)));
    }

    #[test]
    fn star_points_nine() {
        let points: Vec<_> = star_points(9).collect();
        assert!(points.contains(&Coord::new(2, 2)));
        assert!(points.contains(&Coord::new(4, 4)));
    }
}
