// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board position snapshots and change-channel types for tengen.
//!
//! `tengen_core` owns the data model that the rendering layers consume: board
//! coordinates and moves, the immutable-per-version [`Position`] snapshot
//! with its search statistics, and the enumerated [`FieldSet`] describing
//! which position fields changed between two snapshots.
//!
//! The crate is deliberately passive. Nothing here draws, searches, or
//! applies game rules — a `Position` is produced by an external game/search
//! process and is only ever *read* by the visualization layers in
//! `tengen_render`. The one piece of protocol this crate defines is change
//! notification: alongside each new snapshot the producer supplies a
//! [`FieldSet`] naming the fields that differ from the previous snapshot,
//! and each layer intersects that set with its own interest set to decide
//! whether it must recompute.
//!
//! [`Position`]: position::Position
//! [`FieldSet`]: field::FieldSet

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod color;
pub mod coord;
pub mod field;
pub mod position;
