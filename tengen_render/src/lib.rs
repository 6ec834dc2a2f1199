// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental board-visualization layers for tengen.
//!
//! `tengen_render` turns [`Position`] snapshots into draw calls on an
//! abstract [`Canvas`], re-rendering only the visual elements whose
//! underlying data changed.
//!
//! # Architecture
//!
//! The crate is organized around a change-driven update/draw pass:
//!
//! ```text
//!   Position source (external)
//!       │  snapshot + FieldSet of changed fields
//!       ▼
//!   BoardView::update() ──► each layer: interest ∩ changed?
//!       │                        └─ yes: rebuild derived state
//!       ▼  any layer changed
//!   BoardView::draw() ──► visible layers, in z-order ──► Canvas
//! ```
//!
//! **[`layer`]** — The [`Layer`](layer::Layer) contract and the closed set
//! of concrete layers: static board furniture, heat maps, live stones, a
//! selectable variation, annotations, and the search overlay.
//!
//! **[`board`]** — [`BoardView`](board::BoardView), the composition surface
//! that owns the layer list, z-order, and visibility slots.
//!
//! **[`canvas`]** — The [`Canvas`](canvas::Canvas) trait that drawing
//! backends implement. Pixel-level rendering lives outside this crate.
//!
//! **[`transform`]** — [`GridTransform`](transform::GridTransform) mapping
//! (row, col) cells to surface points.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for update/draw-pass instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).
//!
//! [`Position`]: tengen_core::position::Position
//! [`Canvas`]: canvas::Canvas

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod board;
pub mod canvas;
pub mod layer;
pub mod trace;
pub mod transform;
