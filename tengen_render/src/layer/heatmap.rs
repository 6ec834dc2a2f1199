// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cell heat maps over search statistics.
//!
//! Both heat-map layers share [`HeatMap`]: one RGBA color per board cell
//! plus a draw routine that paints a translucent cell-sized rectangle per
//! cell. Cells with nothing to show carry [`Rgba::TRANSPARENT`] as a shared
//! sentinel, and cells occupied by a stone are skipped at draw time.
//!
//! The color array is rebuilt wholesale on every accepted update; an absent
//! statistics field clears the map instead (not yet available, not an
//! error).

use alloc::vec::Vec;

use tengen_core::color::Rgba;
use tengen_core::coord::Coord;
use tengen_core::field::{Field, FieldSet};
use tengen_core::position::Position;

use super::Layer;
use crate::canvas::Canvas;
use crate::transform::GridTransform;

/// Per-cell color storage and the shared cell-rectangle draw routine.
#[derive(Debug, Default)]
struct HeatMap {
    /// One color per cell, row-major; empty when cleared.
    colors: Vec<Rgba>,
}

impl HeatMap {
    /// Discards all cell colors. Returns `true` if any were stored.
    fn clear(&mut self) -> bool {
        let had = !self.colors.is_empty();
        self.colors.clear();
        had
    }

    /// Paints one filled rectangle per colored, unoccupied cell.
    fn draw(&self, canvas: &mut dyn Canvas, xf: &GridTransform, position: &Position) {
        for (index, &color) in self.colors.iter().enumerate() {
            if color.is_transparent() || position.stones[index].is_some() {
                continue;
            }
            let at = Coord::from_index(index, position.size);
            canvas.fill_rect(xf.cell_rect(at), color);
        }
    }
}

/// Heat map of child visit counts.
///
/// Cell intensity is `0.1 + 0.9 · min(√(c/n), 0.6)` for visit count `c`
/// against the node total `n` (floored to 1), so any nonzero signal stays
/// visibly distinguishable from zero and saturates at 0.64. Opacity channel
/// only; the color is fixed black.
#[derive(Debug, Default)]
pub struct VisitCountLayer {
    map: HeatMap,
}

impl VisitCountLayer {
    /// Creates an empty visit-count heat map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored per-cell colors (empty when cleared).
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.map.colors
    }
}

impl Layer for VisitCountLayer {
    fn interest(&self) -> FieldSet {
        FieldSet::from(Field::ChildVisits)
    }

    fn clear(&mut self) -> bool {
        self.map.clear()
    }

    fn update(&mut self, position: &Position, changed: FieldSet) -> bool {
        if !changed.intersects(self.interest()) {
            return false;
        }
        let Some(child_n) = &position.child_n else {
            return self.clear();
        };

        let total = f64::from(position.n.max(1));
        self.map.colors.clear();
        self.map.colors.reserve(child_n.len());
        for &c in child_n {
            let color = if c == 0 {
                Rgba::TRANSPARENT
            } else {
                let a = libm::sqrt(f64::from(c) / total).min(0.6);
                Rgba::BLACK.with_alpha(0.1 + 0.9 * a)
            };
            self.map.colors.push(color);
        }
        true
    }

    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, position: &Position) {
        self.map.draw(canvas, transform, position);
    }
}

/// Heat map of child value deltas.
///
/// For each empty cell, `dq = child_q[cell] - q`: black where the child
/// improves on the node value (`dq > 0`), white otherwise, with opacity
/// `min(|dq|, 0.6)`. Occupied cells carry the transparent sentinel.
#[derive(Debug, Default)]
pub struct DeltaQLayer {
    map: HeatMap,
}

impl DeltaQLayer {
    /// Creates an empty value-delta heat map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored per-cell colors (empty when cleared).
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.map.colors
    }
}

impl Layer for DeltaQLayer {
    fn interest(&self) -> FieldSet {
        FieldSet::from(Field::ChildValues)
    }

    fn clear(&mut self) -> bool {
        self.map.clear()
    }

    fn update(&mut self, position: &Position, changed: FieldSet) -> bool {
        if !changed.intersects(self.interest()) {
            return false;
        }
        let Some(child_q) = &position.child_q else {
            return self.clear();
        };

        self.map.colors.clear();
        self.map.colors.reserve(child_q.len());
        for (index, &cq) in child_q.iter().enumerate() {
            let color = if position.stones[index].is_some() {
                Rgba::TRANSPARENT
            } else {
                let dq = cq - position.q;
                let base = if dq > 0.0 { Rgba::BLACK } else { Rgba::WHITE };
                base.with_alpha(libm::fabs(dq).min(0.6))
            };
            self.map.colors.push(color);
        }
        true
    }

    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, position: &Position) {
        self.map.draw(canvas, transform, position);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use tengen_core::coord::Player;

    use super::*;

    fn with_child_n(size: u8, n: u32, child_n: Vec<u32>) -> Position {
        let mut pos = Position::empty(size);
        pos.n = n;
        pos.child_n = Some(child_n);
        pos
    }

    #[test]
    fn disjoint_update_is_a_noop() {
        let mut layer = VisitCountLayer::new();
        let pos = with_child_n(3, 10, vec![5; 9]);
        assert!(layer.update(&pos, FieldSet::ALL));
        let before = layer.colors().to_vec();

        assert!(!layer.update(&pos, Field::Stones | Field::Value));
        assert_eq!(layer.colors(), before.as_slice());
    }

    #[test]
    fn zero_count_is_transparent() {
        let mut layer = VisitCountLayer::new();
        let pos = with_child_n(3, 100, vec![0; 9]);
        assert!(layer.update(&pos, FieldSet::from(Field::ChildVisits)));
        assert!(layer.colors().iter().all(|c| *c == Rgba::TRANSPARENT));
    }

    #[test]
    fn intensity_saturates_at_high_visit_ratio() {
        // c/n = 0.36 puts sqrt at exactly the 0.6 cap: alpha = 0.1 + 0.9·0.6.
        let mut layer = VisitCountLayer::new();
        let mut counts = vec![0; 9];
        counts[4] = 36;
        let pos = with_child_n(3, 100, counts);
        assert!(layer.update(&pos, FieldSet::from(Field::ChildVisits)));
        let alpha = layer.colors()[4].a;
        assert!((alpha - 0.64).abs() < 1e-12);

        // Higher ratios stay capped.
        let mut counts = vec![0; 9];
        counts[4] = 81;
        let pos = with_child_n(3, 100, counts);
        assert!(layer.update(&pos, FieldSet::from(Field::ChildVisits)));
        assert!((layer.colors()[4].a - 0.64).abs() < 1e-12);
    }

    #[test]
    fn nonzero_signal_is_lifted_off_zero() {
        let mut counts = vec![0; 9];
        counts[0] = 1;
        let mut layer = VisitCountLayer::new();
        let pos = with_child_n(3, 10_000, counts);
        assert!(layer.update(&pos, FieldSet::from(Field::ChildVisits)));
        assert!(layer.colors()[0].a >= 0.1);
    }

    #[test]
    fn visit_total_is_floored_to_one() {
        let mut counts = vec![0; 9];
        counts[0] = 1;
        let mut layer = VisitCountLayer::new();
        let pos = with_child_n(3, 0, counts);
        assert!(layer.update(&pos, FieldSet::from(Field::ChildVisits)));
        // c/n = 1/1; sqrt = 1 capped to 0.6.
        assert!((layer.colors()[0].a - 0.64).abs() < 1e-12);
    }

    #[test]
    fn absent_child_visits_clears() {
        let mut layer = VisitCountLayer::new();
        let pos = with_child_n(3, 10, vec![5; 9]);
        assert!(layer.update(&pos, FieldSet::from(Field::ChildVisits)));
        assert!(!layer.colors().is_empty());

        let empty = Position::empty(3);
        assert!(layer.update(&empty, FieldSet::from(Field::ChildVisits)));
        assert!(layer.colors().is_empty());

        // Clearing an already-empty layer needs no redraw.
        assert!(!layer.update(&empty, FieldSet::from(Field::ChildVisits)));
    }

    #[test]
    fn zero_delta_selects_white_at_zero_opacity() {
        let mut pos = Position::empty(3);
        pos.q = 0.25;
        pos.child_q = Some(vec![0.25; 9]);
        let mut layer = DeltaQLayer::new();
        assert!(layer.update(&pos, FieldSet::from(Field::ChildValues)));
        let c = layer.colors()[0];
        assert_eq!((c.r, c.g, c.b), (1.0, 1.0, 1.0));
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn delta_sign_selects_color_and_magnitude_caps() {
        let mut pos = Position::empty(2);
        pos.q = 0.0;
        pos.child_q = Some(vec![0.3, -0.3, 0.9, -0.9]);
        let mut layer = DeltaQLayer::new();
        assert!(layer.update(&pos, FieldSet::from(Field::ChildValues)));

        let colors = layer.colors();
        assert_eq!(colors[0], Rgba::BLACK.with_alpha(0.3));
        assert_eq!(colors[1], Rgba::WHITE.with_alpha(0.3));
        assert!((colors[2].a - 0.6).abs() < 1e-12);
        assert!((colors[3].a - 0.6).abs() < 1e-12);
    }

    #[test]
    fn occupied_cells_get_the_sentinel() {
        let mut pos = Position::empty(2);
        pos.stones[0] = Some(Player::Black);
        pos.q = 0.0;
        pos.child_q = Some(vec![0.5; 4]);
        let mut layer = DeltaQLayer::new();
        assert!(layer.update(&pos, FieldSet::from(Field::ChildValues)));
        assert_eq!(layer.colors()[0], Rgba::TRANSPARENT);
        assert_ne!(layer.colors()[1], Rgba::TRANSPARENT);
    }
}
