// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layer contract and the closed set of concrete layers.
//!
//! A *layer* is one renderable, independently updatable visual element
//! overlaid on the board. Each layer owns derived presentation state
//! (color arrays, stone lists, labels) that is rebuilt wholesale from a
//! [`Position`] snapshot whenever one of the layer's subscribed fields
//! changes, and discarded on [`clear`](Layer::clear).
//!
//! # The update/draw contract
//!
//! - [`interest`](Layer::interest) — the fields the layer subscribes to,
//!   fixed per layer kind.
//! - [`update`](Layer::update) — must early-return `false` without touching
//!   derived state when the changed set is disjoint from the interest set;
//!   otherwise recomputes derived state and returns whether a redraw is
//!   needed. Never draws.
//! - [`clear`](Layer::clear) — idempotent reset; returns `true` exactly
//!   when non-empty state was discarded, which the caller must treat as a
//!   redraw request.
//! - [`draw`](Layer::draw) — paints current derived state; a no-op when
//!   the state is empty.
//!
//! Layers form a closed set: [`BoardLayer`] enumerates every kind and
//! dispatches the contract, so a [`BoardView`](crate::board::BoardView)
//! stores them without boxing.
//!
//! [`Position`]: tengen_core::position::Position

mod annotations;
mod heatmap;
mod search;
mod statics;
mod stones;
mod variation;

pub use annotations::AnnotationLayer;
pub use heatmap::{DeltaQLayer, VisitCountLayer};
pub use search::{Candidate, SearchLayer};
pub use statics::{StaticContent, StaticLayer};
pub use stones::StoneLayer;
pub use variation::VariationLayer;

use tengen_core::field::FieldSet;
use tengen_core::position::Position;

use crate::canvas::Canvas;
use crate::transform::GridTransform;

/// One renderable, independently updatable visual element.
pub trait Layer {
    /// The position fields this layer subscribes to.
    fn interest(&self) -> FieldSet;

    /// Discards derived visual state.
    ///
    /// Returns `true` if non-empty state was discarded (the surface must
    /// repaint to erase it). Idempotent: a second call returns `false`.
    fn clear(&mut self) -> bool;

    /// Offers a changed-field set to the layer.
    ///
    /// Returns whether the layer's visual state changed. Must not draw.
    fn update(&mut self, position: &Position, changed: FieldSet) -> bool;

    /// Paints current derived state onto the canvas.
    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, position: &Position);
}

/// The closed set of board layers.
#[derive(Debug)]
pub enum BoardLayer {
    /// Fixed board furniture (grid, coordinates, caption).
    Static(StaticLayer),
    /// Child-visit-count heat map.
    VisitCount(VisitCountLayer),
    /// Child-value-delta heat map.
    DeltaQ(DeltaQLayer),
    /// The live position's stones.
    Stones(StoneLayer),
    /// A selected variation rendered as translucent numbered stones.
    Variation(VariationLayer),
    /// Free-form position annotations.
    Annotations(AnnotationLayer),
    /// Best-response candidates from search statistics.
    Search(SearchLayer),
}

impl Layer for BoardLayer {
    fn interest(&self) -> FieldSet {
        match self {
            Self::Static(l) => l.interest(),
            Self::VisitCount(l) => l.interest(),
            Self::DeltaQ(l) => l.interest(),
            Self::Stones(l) => l.interest(),
            Self::Variation(l) => l.interest(),
            Self::Annotations(l) => l.interest(),
            Self::Search(l) => l.interest(),
        }
    }

    fn clear(&mut self) -> bool {
        match self {
            Self::Static(l) => l.clear(),
            Self::VisitCount(l) => l.clear(),
            Self::DeltaQ(l) => l.clear(),
            Self::Stones(l) => l.clear(),
            Self::Variation(l) => l.clear(),
            Self::Annotations(l) => l.clear(),
            Self::Search(l) => l.clear(),
        }
    }

    fn update(&mut self, position: &Position, changed: FieldSet) -> bool {
        match self {
            Self::Static(l) => l.update(position, changed),
            Self::VisitCount(l) => l.update(position, changed),
            Self::DeltaQ(l) => l.update(position, changed),
            Self::Stones(l) => l.update(position, changed),
            Self::Variation(l) => l.update(position, changed),
            Self::Annotations(l) => l.update(position, changed),
            Self::Search(l) => l.update(position, changed),
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, position: &Position) {
        match self {
            Self::Static(l) => l.draw(canvas, transform, position),
            Self::VisitCount(l) => l.draw(canvas, transform, position),
            Self::DeltaQ(l) => l.draw(canvas, transform, position),
            Self::Stones(l) => l.draw(canvas, transform, position),
            Self::Variation(l) => l.draw(canvas, transform, position),
            Self::Annotations(l) => l.draw(canvas, transform, position),
            Self::Search(l) => l.draw(canvas, transform, position),
        }
    }
}
