// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal straight-alpha RGBA color.
//!
//! This type covers what the visualization layers actually need (a handful of
//! named constants, alpha substitution, equality) without pulling in a full
//! color-management crate. Channels are `f64` in `0.0..=1.0`, matching the
//! float geometry the drawing surface consumes.

use core::fmt;

/// An RGBA color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel, `0.0..=1.0`.
    pub r: f64,
    /// Green channel, `0.0..=1.0`.
    pub g: f64,
    /// Blue channel, `0.0..=1.0`.
    pub b: f64,
    /// Alpha channel, `0.0` transparent to `1.0` opaque.
    pub a: f64,
}

impl Rgba {
    /// Fully transparent. Shared sentinel for "nothing to paint" cells.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with the alpha channel replaced.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Returns `true` if the color paints nothing.
    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0.0
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Rgba::WHITE.with_alpha(0.4);
        assert_eq!(c, Rgba::new(1.0, 1.0, 1.0, 0.4));
    }

    #[test]
    fn transparent_sentinel() {
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(!Rgba::BLACK.is_transparent());
        assert!(Rgba::BLACK.with_alpha(0.0).is_transparent());
    }
}
