// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface contract for rendering backends.
//!
//! Tengen splits pixel-level work into *backend* crates (2D canvas, GPU,
//! terminal, test recorder). A backend provides one thing: an
//! implementation of the [`Canvas`] trait, a handful of filled/stroked
//! primitives with explicit colors.
//!
//! Every call carries its full paint state (color, width, text size), so
//! sequential draws share no implicit state and layer draw order imposes
//! no paint-attribute contract between layers.
//!
//! # Crate boundaries
//!
//! `tengen_render` owns the layer model, the update/draw pass, and this
//! contract module. Backend crates depend on `tengen_render` and provide
//! the pixels. Application code depends on both and wires them together
//! around a position source.

use kurbo::{Point, Rect};
use tengen_core::color::Rgba;

/// Receives draw primitives from the visualization layers.
///
/// Coordinates are in surface pixels, produced by a
/// [`GridTransform`](crate::transform::GridTransform). Implementations
/// must tolerate overlapping primitives; layers paint back-to-front.
pub trait Canvas {
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Strokes a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba);

    /// Draws text centered (horizontally and vertically) on `center`.
    ///
    /// `size` is the em height in surface pixels.
    fn fill_text(&mut self, text: &str, center: Point, size: f64, color: Rgba);
}
