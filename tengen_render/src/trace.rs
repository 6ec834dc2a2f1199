// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the update/draw pass.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`BoardView`](crate::board::BoardView) calls at each stage of a render
//! pass. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use tengen_core::field::FieldSet;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a change notification enters the update pass.
#[derive(Clone, Copy, Debug)]
pub struct UpdateBeginEvent {
    /// The changed-field set delivered by the position source.
    pub changed: FieldSet,
}

/// Emitted once per layer during the update pass.
#[derive(Clone, Copy, Debug)]
pub struct LayerUpdateEvent {
    /// Z-order index of the layer.
    pub layer_index: u32,
    /// Whether the layer reported a visual-state change.
    pub redraw: bool,
}

/// Emitted when the update pass completes.
#[derive(Clone, Copy, Debug)]
pub struct UpdateEndEvent {
    /// Whether any layer reported a visual-state change.
    pub redraw: bool,
}

/// Emitted when a draw pass begins.
#[derive(Clone, Copy, Debug)]
pub struct DrawBeginEvent {
    /// Number of attached layers (visible or not).
    pub layer_count: u32,
}

/// Emitted when a draw pass completes.
#[derive(Clone, Copy, Debug)]
pub struct DrawEndEvent {
    /// Number of visible layers actually drawn.
    pub layers_drawn: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the render pass.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an update pass begins.
    fn on_update_begin(&mut self, e: &UpdateBeginEvent) {
        _ = e;
    }

    /// Called after each layer's update.
    fn on_layer_update(&mut self, e: &LayerUpdateEvent) {
        _ = e;
    }

    /// Called when an update pass completes.
    fn on_update_end(&mut self, e: &UpdateEndEvent) {
        _ = e;
    }

    /// Called when a draw pass begins.
    fn on_draw_begin(&mut self, e: &DrawBeginEvent) {
        _ = e;
    }

    /// Called when a draw pass completes.
    fn on_draw_end(&mut self, e: &DrawEndEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`UpdateBeginEvent`].
    #[inline]
    pub fn update_begin(&mut self, e: &UpdateBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_update_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerUpdateEvent`].
    #[inline]
    pub fn layer_update(&mut self, e: &LayerUpdateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_update(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`UpdateEndEvent`].
    #[inline]
    pub fn update_end(&mut self, e: &UpdateEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_update_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DrawBeginEvent`].
    #[inline]
    pub fn draw_begin(&mut self, e: &DrawBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_draw_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DrawEndEvent`].
    #[inline]
    pub fn draw_end(&mut self, e: &DrawEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_draw_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
