// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-form position annotations, grouped by shape for batched drawing.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use tengen_core::field::{Field, FieldSet};
use tengen_core::position::{Annotation, Position, Shape};

use super::Layer;
use crate::canvas::Canvas;
use crate::transform::GridTransform;

/// Renders position annotations.
///
/// Annotations are regrouped by shape on every accepted update so each
/// shape kind draws as one batch; insertion order within a group is not
/// significant. Only [`Shape::Dot`] currently has defined rendering; other
/// shapes participate in grouping but draw nothing.
#[derive(Debug, Default)]
pub struct AnnotationLayer {
    groups: BTreeMap<Shape, Vec<Annotation>>,
}

impl AnnotationLayer {
    /// Creates an empty annotation layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The annotations of one shape group (empty slice if none).
    #[must_use]
    pub fn group(&self, shape: Shape) -> &[Annotation] {
        self.groups.get(&shape).map_or(&[], Vec::as_slice)
    }
}

impl Layer for AnnotationLayer {
    fn interest(&self) -> FieldSet {
        FieldSet::from(Field::Annotations)
    }

    fn clear(&mut self) -> bool {
        let had = self.groups.values().any(|g| !g.is_empty());
        self.groups.clear();
        had
    }

    fn update(&mut self, position: &Position, changed: FieldSet) -> bool {
        if !changed.intersects(self.interest()) {
            return false;
        }
        self.groups.clear();
        for &annotation in &position.annotations {
            self.groups
                .entry(annotation.shape)
                .or_default()
                .push(annotation);
        }
        true
    }

    fn draw(&self, canvas: &mut dyn Canvas, transform: &GridTransform, _position: &Position) {
        for (shape, group) in &self.groups {
            match shape {
                Shape::Dot => {
                    let radius = transform.spacing() * 0.16;
                    for annotation in group {
                        canvas.fill_circle(
                            transform.point(annotation.at),
                            radius,
                            annotation.color,
                        );
                    }
                }
                // Recognized as grouping keys; rendering not yet defined.
                Shape::Triangle | Shape::Square => {}
            }
        }
    }
}
