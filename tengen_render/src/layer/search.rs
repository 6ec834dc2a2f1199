// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Best-response candidates selected from search statistics.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::vec::Vec;

use tengen_core::coord::{Coord, Player};
use tengen_core::field::{Field, FieldSet};
use tengen_core::position::Position;

use super::stones::{contrast_color, stone_color};
use super::Layer;
use crate::canvas::Canvas;
use crate::transform::GridTransform;

/// A candidate move selected for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// The candidate's intersection.
    pub at: Coord,
    /// Child visit count.
    pub n: u32,
    /// Child value estimate, signed from Black's perspective.
    pub q: f64,
    /// Display intensity in `0.0..=1.0`.
    pub alpha: f64,
}

/// Selects and ranks candidate best-response moves from search statistics.
///
/// Candidates come from two passes over the child statistics:
///
/// 1. Cell indices sorted descending by child visit count are scanned from
///    the top until the first cell falls below the significance floor
///    (`n <= 1` or `n < total/100`). This is an early exit, not a filter:
///    cells after the first disqualification are never considered.
/// 2. Every *realized* game-tree child whose move is a board point is
///    force-added regardless of statistics, so every line the user can
///    navigate into is shown even if search judged it weak.
///
/// Display intensity is `(ln n / ln max_n)²`, sharpening the contrast
/// between strong and weak candidates beyond what raw counts give.
#[derive(Debug, Default)]
pub struct SearchLayer {
    candidates: BTreeMap<usize, Candidate>,
    /// Distinguishes "statistics seen but all-zero" from "never computed".
    computed: bool,
}

impl SearchLayer {
    /// Creates an empty search overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected candidates in cell-index order.
    #[must_use]
    pub fn candidates(&self) -> Vec<Candidate> {
        self.candidates.values().copied().collect()
    }

    /// The candidate at a given point, if selected.
    #[must_use]
    pub fn candidate_at(&self, at: Coord, size: u8) -> Option<Candidate> {
        self.candidates.get(&at.index(size)).copied()
    }
}

impl Layer for SearchLayer {
    fn interest(&self) -> FieldSet {
        Field::ChildVisits | Field::ChildValues
    }

    fn clear(&mut self) -> bool {
        let had = !self.candidates.is_empty();
        self.candidates.clear();
        self.computed = false;
        had
    }

    fn update(&mut self, position: &Position, changed: FieldSet) -> bool {
        if !changed.intersects(self.interest()) {
            return false;
        }
        let (Some(child_n), Some(child_q)) = (&position.child_n, &position.child_q) else {
            return self.clear();
        };

        self.candidates.clear();
        self.computed = true;

        // Stable descending sort keeps equal counts in cell-index order for
        // reproducible rendering.
        let mut order: Vec<usize> = (0..position.cells()).collect();
        order.sort_by(|&a, &b| child_n[b].cmp(&child_n[a]));

        let max_n = child_n[order[0]];
        if max_n == 0 {
            // No reads yet: computed but empty, and stale candidates (if
            // any) were just discarded, so a redraw is needed either way.
            return true;
        }
        let log_max_n = libm::log(f64::from(max_n));
        let floor = f64::from(position.n) / 100.0;

        for &index in &order {
            let n = child_n[index];
            if n <= 1 || f64::from(n) < floor {
                break;
            }
            self.candidates.insert(
                index,
                Candidate {
                    at: Coord::from_index(index, position.size),
                    n,
                    q: child_q[index],
                    alpha: 0.0,
                },
            );
        }

        for child in &position.children {
            let Some(at) = child.last_move.point() else {
                continue;
            };
            let index = at.index(position.size);
            self.candidates.entry(index).or_insert(Candidate {
                at,
                n: child_n[index],
                q: child_q[index],
                alpha: 0.0,
            });
        }

        for candidate in self.candidates.values_mut() {
            candidate.alpha = if log_max_n > 0.0 {
                let l = libm::log(f64::from(candidate.n.max(1))) / log_max_n;
                l * l
            } else {
                0.0
            };
        }
        true
    }

    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, position: &Position) {
        if self.candidates.is_empty() {
            return;
        }

        // Suggestions are drawn as the opponent's color, reading as "if you
        // play here"; the label contrasts with that at fixed opacity.
        let suggestion = position.to_play.opponent();
        let fill = stone_color(suggestion);
        for candidate in self.candidates.values() {
            canvas.fill_circle(
                transform.point(candidate.at),
                transform.stone_radius(),
                fill.with_alpha(candidate.alpha),
            );
        }

        let sign = match position.to_play {
            Player::Black => 1.0,
            Player::White => -1.0,
        };
        let text_color = contrast_color(suggestion);
        let size = transform.spacing() * 0.33;
        for candidate in self.candidates.values() {
            let win_rate = 50.0 + 50.0 * sign * candidate.q;
            canvas.fill_text(
                &format!("{win_rate:.1}"),
                transform.point(candidate.at),
                size,
                text_color,
            );
        }
    }
}
