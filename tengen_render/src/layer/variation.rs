// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A selected variation rendered as translucent numbered stones.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use tengen_core::coord::{Coord, Move, Player};
use tengen_core::field::{Field, FieldSet};
use tengen_core::position::Position;

use super::stones::{contrast_color, paint_stones};
use super::Layer;
use crate::canvas::Canvas;
use crate::transform::GridTransform;

/// Default opacity for variation stones.
const DEFAULT_STONE_ALPHA: f64 = 0.4;

/// A move-order label attached to a variation stone.
#[derive(Clone, Debug, PartialEq, Eq)]
struct OrderLabel {
    /// The labeled intersection.
    at: Coord,
    /// 1-based move number, with a trailing `*` if the point is replayed.
    text: String,
    /// The color of the stone the label sits on.
    on: Player,
}

/// Renders the moves of one named variation.
///
/// The layer tracks a selectable variation name. The normal path is the
/// change-notification one (`variations` field changed); selecting a
/// different name re-derives synchronously via [`select`](Self::select),
/// bypassing that path.
///
/// Stones alternate color starting with the position's mover and are drawn
/// translucent; each distinct point carries a 1-based order label. A point
/// played twice keeps its first stone and gets a `*` appended to its label.
/// Occurrences beyond the second are not marked further (documented source
/// policy).
#[derive(Debug)]
pub struct VariationLayer {
    name: String,
    stone_alpha: f64,
    /// The move sequence most recently rendered, for cheap no-op detection.
    moves: Vec<Move>,
    black: Vec<Coord>,
    white: Vec<Coord>,
    labels: Vec<OrderLabel>,
}

impl VariationLayer {
    /// Creates a layer tracking the given variation name, with the default
    /// stone opacity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stone_alpha(name, DEFAULT_STONE_ALPHA)
    }

    /// Creates a layer with an explicit stone opacity.
    #[must_use]
    pub fn with_stone_alpha(name: impl Into<String>, stone_alpha: f64) -> Self {
        Self {
            name: name.into(),
            stone_alpha,
            moves: Vec::new(),
            black: Vec::new(),
            white: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// The currently selected variation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selects a different variation and re-derives immediately.
    ///
    /// Returns whether a redraw is needed. This bypasses the normal
    /// change-notification path, so the caller is responsible for
    /// repainting when `true` is returned.
    pub fn select(&mut self, name: impl Into<String>, position: &Position) -> bool {
        self.name = name.into();
        self.rebuild(position)
    }

    /// Stone points per color, for inspection.
    #[must_use]
    pub fn stones(&self) -> (&[Coord], &[Coord]) {
        (&self.black, &self.white)
    }

    /// The rendered labels as `(point, text)` pairs.
    #[must_use]
    pub fn labels(&self) -> Vec<(Coord, &str)> {
        self.labels.iter().map(|l| (l.at, l.text.as_str())).collect()
    }

    fn rebuild(&mut self, position: &Position) -> bool {
        let Some(sequence) = position.variations.get(&self.name) else {
            return self.clear();
        };
        if *sequence == self.moves {
            return false;
        }

        self.moves = sequence.clone();
        self.black.clear();
        self.white.clear();
        self.labels.clear();

        // `to_play` describes the mover of the position the sequence starts
        // from, so the first variation move is played by `to_play` itself:
        // start one flip behind and flip before consuming each move.
        let mut color = position.to_play.opponent();
        let mut played = vec![0_u32; position.cells()];
        for (i, mv) in sequence.iter().enumerate() {
            color = color.opponent();
            let Some(at) = mv.point() else {
                continue;
            };
            let index = at.index(position.size);
            played[index] += 1;
            match played[index] {
                1 => {
                    match color {
                        Player::Black => self.black.push(at),
                        Player::White => self.white.push(at),
                    }
                    self.labels.push(OrderLabel {
                        at,
                        text: (i + 1).to_string(),
                        on: color,
                    });
                }
                2 => {
                    // Mark the first occurrence's label; no second stone.
                    if let Some(label) = self.labels.iter_mut().find(|l| l.at == at) {
                        label.text.push('*');
                    }
                }
                _ => {}
            }
        }
        true
    }
}

impl Layer for VariationLayer {
    fn interest(&self) -> FieldSet {
        FieldSet::from(Field::Variations)
    }

    fn clear(&mut self) -> bool {
        let had = !self.moves.is_empty()
            || !self.black.is_empty()
            || !self.white.is_empty()
            || !self.labels.is_empty();
        self.moves.clear();
        self.black.clear();
        self.white.clear();
        self.labels.clear();
        had
    }

    fn update(&mut self, position: &Position, changed: FieldSet) -> bool {
        if !changed.intersects(self.interest()) {
            return false;
        }
        self.rebuild(position)
    }

    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, _position: &Position) {
        paint_stones(canvas, transform, &self.black, Player::Black, self.stone_alpha);
        paint_stones(canvas, transform, &self.white, Player::White, self.stone_alpha);

        let size = transform.spacing() * 0.4;
        for label in &self.labels {
            canvas.fill_text(
                &label.text,
                transform.point(label.at),
                size,
                contrast_color(label.on),
            );
        }
    }
}
