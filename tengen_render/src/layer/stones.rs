// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live position's stones, plus the shared stone-painting routine.

use alloc::vec::Vec;

use tengen_core::color::Rgba;
use tengen_core::coord::{Coord, Player};
use tengen_core::field::{Field, FieldSet};
use tengen_core::position::Position;

use super::Layer;
use crate::canvas::Canvas;
use crate::transform::GridTransform;

/// The fill color of a stone.
#[inline]
pub(crate) const fn stone_color(player: Player) -> Rgba {
    match player {
        Player::Black => Rgba::BLACK,
        Player::White => Rgba::WHITE,
    }
}

/// A text color contrasting with a stone of the given color.
#[inline]
pub(crate) const fn contrast_color(player: Player) -> Rgba {
    stone_color(player.opponent())
}

/// Paints one circle per point in the given player's color.
///
/// Shared by the stone, variation, and search layers so stones look the
/// same everywhere; only the opacity differs per caller.
pub(crate) fn paint_stones(
    canvas: &mut dyn Canvas,
    xf: &GridTransform,
    points: &[Coord],
    player: Player,
    alpha: f64,
) {
    let color = stone_color(player).with_alpha(alpha);
    for &at in points {
        canvas.fill_circle(xf.point(at), xf.stone_radius(), color);
    }
}

/// Renders the stones of the live position, fully opaque.
#[derive(Debug, Default)]
pub struct StoneLayer {
    black: Vec<Coord>,
    white: Vec<Coord>,
}

impl StoneLayer {
    /// Creates an empty stone layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The black stone points derived from the last accepted update.
    #[must_use]
    pub fn black(&self) -> &[Coord] {
        &self.black
    }

    /// The white stone points derived from the last accepted update.
    #[must_use]
    pub fn white(&self) -> &[Coord] {
        &self.white
    }
}

impl Layer for StoneLayer {
    fn interest(&self) -> FieldSet {
        FieldSet::from(Field::Stones)
    }

    fn clear(&mut self) -> bool {
        let had = !self.black.is_empty() || !self.white.is_empty();
        self.black.clear();
        self.white.clear();
        had
    }

    fn update(&mut self, position: &Position, changed: FieldSet) -> bool {
        if !changed.intersects(self.interest()) {
            return false;
        }
        self.black.clear();
        self.white.clear();
        for (index, stone) in position.stones.iter().enumerate() {
            match stone {
                Some(Player::Black) => self.black.push(Coord::from_index(index, position.size)),
                Some(Player::White) => self.white.push(Coord::from_index(index, position.size)),
                None => {}
            }
        }
        true
    }

    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, _position: &Position) {
        paint_stones(canvas, transform, &self.black, Player::Black, 1.0);
        paint_stones(canvas, transform, &self.white, Player::White, 1.0);
    }
}
