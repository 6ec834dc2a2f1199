// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerated change channels for position snapshots.
//!
//! When the position source publishes a new snapshot it also publishes a
//! [`FieldSet`] naming the fields that differ from the previous snapshot.
//! Each rendering layer declares an *interest set* once at construction and
//! checks relevance by set intersection, so a layer whose inputs did not
//! change skips its O(board size) recomputation entirely.
//!
//! `FieldSet` is a plain bitmask rather than a keyed dirty tracker: change
//! sets arrive already aggregated per snapshot, there is nothing to
//! propagate between layers.

use core::fmt;
use core::ops::BitOr;

/// One independently-invalidated field of a
/// [`Position`](crate::position::Position).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Field {
    /// The `stones` array.
    Stones = 0,
    /// The player to move.
    ToPlay = 1,
    /// The node visit count `n`.
    VisitCount = 2,
    /// The node value estimate `q`.
    Value = 3,
    /// The per-cell child visit counts.
    ChildVisits = 4,
    /// The per-cell child value estimates.
    ChildValues = 5,
    /// The realized game-tree children.
    Children = 6,
    /// The named variations.
    Variations = 7,
    /// The free-form annotations.
    Annotations = 8,
}

impl Field {
    const ALL: [Self; 9] = [
        Self::Stones,
        Self::ToPlay,
        Self::VisitCount,
        Self::Value,
        Self::ChildVisits,
        Self::ChildValues,
        Self::Children,
        Self::Variations,
        Self::Annotations,
    ];

    #[inline]
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A set of [`Field`]s, used both for change notification and for per-layer
/// interest declarations.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldSet(u16);

impl FieldSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set of all fields.
    pub const ALL: Self = Self((1 << Field::ALL.len()) - 1);

    /// Creates a set from a slice of fields.
    #[must_use]
    pub const fn of(fields: &[Field]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < fields.len() {
            bits |= fields[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Returns `true` if the set contains `field`.
    #[inline]
    #[must_use]
    pub const fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    /// Returns `true` if the two sets share at least one field.
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Field> for FieldSet {
    #[inline]
    fn from(field: Field) -> Self {
        Self(field.bit())
    }
}

impl BitOr for FieldSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Field> for FieldSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Field) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOr for Field {
    type Output = FieldSet;

    #[inline]
    fn bitor(self, rhs: Self) -> FieldSet {
        FieldSet(self.bit() | rhs.bit())
    }
}

impl fmt::Debug for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for field in Field::ALL {
            if self.contains(field) {
                set.entry(&field);
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_contains_nothing() {
        for field in Field::ALL {
            assert!(!FieldSet::EMPTY.contains(field));
        }
        assert!(FieldSet::EMPTY.is_empty());
    }

    #[test]
    fn of_and_contains() {
        let set = FieldSet::of(&[Field::Stones, Field::Variations]);
        assert!(set.contains(Field::Stones));
        assert!(set.contains(Field::Variations));
        assert!(!set.contains(Field::ChildVisits));
    }

    #[test]
    fn intersection() {
        let a = Field::ChildVisits | Field::ChildValues;
        let b = FieldSet::from(Field::ChildValues);
        let c = FieldSet::from(Field::Stones);
        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
        assert!(!FieldSet::EMPTY.intersects(a));
    }

    #[test]
    fn union_operators() {
        let set = FieldSet::EMPTY | Field::Stones | Field::ToPlay;
        assert_eq!(set, Field::Stones | Field::ToPlay);
        assert_eq!(set | set, set);
    }

    #[test]
    fn all_covers_every_field() {
        for field in Field::ALL {
            assert!(FieldSet::ALL.contains(field));
        }
    }
}
