// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition surface owning the layer list and the render pass.
//!
//! A [`BoardView`] owns its layers, their z-order (insertion order), and a
//! per-layer visibility flag. One render pass is:
//!
//! 1. [`update`](BoardView::update) — the changed-field set is offered to
//!    *every* attached layer, visible or not; each decides independently
//!    whether it is affected and rebuilds its derived state if so.
//! 2. [`draw`](BoardView::draw) — all *visible* layers paint in z-order.
//!
//! Passes are single-threaded and run to completion: a change notification
//! is fully processed before the next one is accepted. The booleans
//! returned by `update`, [`set_visible`](BoardView::set_visible), and layer
//! access methods are the redraw protocol — `true` means the caller must
//! repaint the surface.

use alloc::vec::Vec;

use core::fmt;

use tengen_core::field::FieldSet;
use tengen_core::position::Position;

use crate::canvas::Canvas;
use crate::layer::{BoardLayer, Layer};
use crate::trace::{
    DrawBeginEvent, DrawEndEvent, LayerUpdateEvent, Tracer, UpdateBeginEvent, UpdateEndEvent,
};
use crate::transform::GridTransform;

/// A handle to a layer attached to a [`BoardView`].
///
/// Handles are stable for the lifetime of the view; layers are never
/// removed once attached.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerHandle(usize);

impl fmt::Debug for LayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerHandle({})", self.0)
    }
}

#[derive(Debug)]
struct Slot {
    layer: BoardLayer,
    visible: bool,
}

/// The composition surface: owns layers, z-order, and visibility.
#[derive(Debug)]
pub struct BoardView {
    transform: GridTransform,
    slots: Vec<Slot>,
}

impl BoardView {
    /// Creates an empty view bound to a coordinate transform.
    ///
    /// The transform is captured once and stays valid for the lifetime of
    /// the view.
    #[must_use]
    pub fn new(transform: GridTransform) -> Self {
        Self {
            transform,
            slots: Vec::new(),
        }
    }

    /// The bound coordinate transform.
    #[inline]
    #[must_use]
    pub const fn transform(&self) -> &GridTransform {
        &self.transform
    }

    /// Attaches a layer on top of the existing ones (highest z-order) and
    /// returns its handle. The layer starts visible.
    pub fn push(&mut self, layer: BoardLayer) -> LayerHandle {
        self.slots.push(Slot {
            layer,
            visible: true,
        });
        LayerHandle(self.slots.len() - 1)
    }

    /// Number of attached layers.
    #[inline]
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns a layer by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this view.
    #[must_use]
    pub fn layer(&self, handle: LayerHandle) -> &BoardLayer {
        self.validate(handle);
        &self.slots[handle.0].layer
    }

    /// Returns a layer mutably, for synchronous operations outside the
    /// change-notification path (e.g.
    /// [`VariationLayer::select`](crate::layer::VariationLayer::select)).
    /// The caller owns any redraw such operations request.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this view.
    #[must_use]
    pub fn layer_mut(&mut self, handle: LayerHandle) -> &mut BoardLayer {
        self.validate(handle);
        &mut self.slots[handle.0].layer
    }

    /// Returns whether a layer is visible.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this view.
    #[must_use]
    pub fn is_visible(&self, handle: LayerHandle) -> bool {
        self.validate(handle);
        self.slots[handle.0].visible
    }

    /// Shows or hides a layer.
    ///
    /// Returns whether a full repaint is needed: `true` exactly when the
    /// value changed. Setting the current value is a no-op. This is the
    /// only mutation that bypasses the update/draw cycle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this view.
    pub fn set_visible(&mut self, handle: LayerHandle, visible: bool) -> bool {
        self.validate(handle);
        let slot = &mut self.slots[handle.0];
        if slot.visible == visible {
            return false;
        }
        slot.visible = visible;
        true
    }

    /// Offers a change notification to every attached layer.
    ///
    /// Hidden layers update too, so their state is current when unhidden.
    /// Returns whether any layer reported a visual-state change (the
    /// caller should then [`draw`](Self::draw)).
    pub fn update(&mut self, position: &Position, changed: FieldSet) -> bool {
        self.update_traced(position, changed, &mut Tracer::none())
    }

    /// Like [`update`](Self::update), emitting trace events.
    pub fn update_traced(
        &mut self,
        position: &Position,
        changed: FieldSet,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        tracer.update_begin(&UpdateBeginEvent { changed });
        let mut redraw = false;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let layer_redraw = slot.layer.update(position, changed);
            redraw |= layer_redraw;
            #[expect(
                clippy::cast_possible_truncation,
                reason = "layer counts are tiny; u32 is ample"
            )]
            let layer_index = index as u32;
            tracer.layer_update(&LayerUpdateEvent {
                layer_index,
                redraw: layer_redraw,
            });
        }
        tracer.update_end(&UpdateEndEvent { redraw });
        redraw
    }

    /// Draws all visible layers in z-order.
    pub fn draw(&self, canvas: &mut dyn Canvas, position: &Position) {
        self.draw_traced(canvas, position, &mut Tracer::none());
    }

    /// Like [`draw`](Self::draw), emitting trace events.
    pub fn draw_traced(
        &self,
        canvas: &mut dyn Canvas,
        position: &Position,
        tracer: &mut Tracer<'_>,
    ) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "layer counts are tiny; u32 is ample"
        )]
        let layer_count = self.slots.len() as u32;
        tracer.draw_begin(&DrawBeginEvent { layer_count });
        let mut drawn = 0;
        for slot in &self.slots {
            if slot.visible {
                slot.layer.draw(canvas, &self.transform, position);
                drawn += 1;
            }
        }
        tracer.draw_end(&DrawEndEvent {
            layers_drawn: drawn,
        });
    }

    /// Runs one full render pass: update, then draw if anything changed.
    ///
    /// Returns whether a draw happened.
    pub fn apply(
        &mut self,
        position: &Position,
        changed: FieldSet,
        canvas: &mut dyn Canvas,
    ) -> bool {
        let redraw = self.update(position, changed);
        if redraw {
            self.draw(canvas, position);
        }
        redraw
    }

    fn validate(&self, handle: LayerHandle) {
        assert!(
            handle.0 < self.slots.len(),
            "foreign LayerHandle: {handle:?} (view has {} layers)",
            self.slots.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Point;
    use tengen_core::coord::{Coord, Player};
    use tengen_core::field::Field;
    use tengen_core::position::Position;

    use super::*;
    use crate::layer::{SearchLayer, StoneLayer, VisitCountLayer};

    fn view() -> BoardView {
        BoardView::new(GridTransform::new(Point::new(0.0, 0.0), 10.0, 3))
    }

    #[test]
    fn update_fans_out_to_all_layers() {
        let mut view = view();
        let stones = view.push(BoardLayer::Stones(StoneLayer::new()));
        let _search = view.push(BoardLayer::Search(SearchLayer::new()));

        let mut pos = Position::empty(3);
        pos.stones[0] = Some(Player::Black);
        assert!(view.update(&pos, FieldSet::from(Field::Stones)));

        let BoardLayer::Stones(layer) = view.layer(stones) else {
            panic!("expected stone layer");
        };
        assert_eq!(layer.black(), &[Coord::new(0, 0)]);
    }

    #[test]
    fn disjoint_change_reports_no_redraw() {
        let mut view = view();
        view.push(BoardLayer::Stones(StoneLayer::new()));
        view.push(BoardLayer::VisitCount(VisitCountLayer::new()));

        let pos = Position::empty(3);
        assert!(!view.update(&pos, FieldSet::from(Field::Annotations)));
    }

    #[test]
    fn hidden_layers_still_update() {
        let mut view = view();
        let handle = view.push(BoardLayer::Stones(StoneLayer::new()));
        assert!(view.set_visible(handle, false));

        let mut pos = Position::empty(3);
        pos.stones[4] = Some(Player::White);
        assert!(view.update(&pos, FieldSet::from(Field::Stones)));

        let BoardLayer::Stones(layer) = view.layer(handle) else {
            panic!("expected stone layer");
        };
        assert_eq!(layer.white(), &[Coord::new(1, 1)]);
    }

    #[test]
    fn visibility_toggle_reports_repaint_only_on_change() {
        let mut view = view();
        let handle = view.push(BoardLayer::Stones(StoneLayer::new()));
        assert!(view.is_visible(handle));

        assert!(!view.set_visible(handle, true));
        assert!(view.set_visible(handle, false));
        assert!(!view.set_visible(handle, false));
        assert!(view.set_visible(handle, true));
    }

    #[test]
    #[should_panic(expected = "foreign LayerHandle")]
    fn foreign_handle_panics() {
        let mut other = view();
        let handle = other.push(BoardLayer::Stones(StoneLayer::new()));
        let _ = other.push(BoardLayer::Stones(StoneLayer::new()));

        let empty = view();
        let _ = empty.layer(handle);
    }

    #[test]
    fn update_with_stats_produces_candidates() {
        let mut view = view();
        let handle = view.push(BoardLayer::Search(SearchLayer::new()));

        let mut pos = Position::empty(3);
        pos.n = 100;
        let mut child_n = vec![0; 9];
        child_n[2] = 100;
        pos.child_n = Some(child_n);
        pos.child_q = Some(vec![0.0; 9]);

        assert!(view.update(&pos, FieldSet::from(Field::ChildVisits)));
        let BoardLayer::Search(layer) = view.layer(handle) else {
            panic!("expected search layer");
        };
        assert_eq!(layer.candidates().len(), 1);
    }
}
