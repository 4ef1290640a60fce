//! Named relation kinds and the fixed-width flag set stored on each edge

use serde::{Deserialize, Serialize};

/// A relation kind a typed edge can carry.
///
/// Kinds form a small closed set; each kind occupies one flag bit in a
/// [`RelMask`]. Multiple kinds between the same ordered node pair are
/// folded into a single mask rather than stored as separate edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RelKind {
    /// Structural co-membership (fields of the same table, members of the
    /// same record)
    Schema = 0,
    /// Name/structure similarity
    SchemaSim = 1,
    /// Value-distribution similarity
    ContentSim = 2,
    /// Entity-level similarity
    EntitySim = 3,
    /// Primary-key / foreign-key candidate
    Pkfk = 4,
    /// Inclusion dependency
    Inclusion = 5,
}

impl RelKind {
    /// All kinds, in bit order.
    pub const ALL: [RelKind; 6] = [
        RelKind::Schema,
        RelKind::SchemaSim,
        RelKind::ContentSim,
        RelKind::EntitySim,
        RelKind::Pkfk,
        RelKind::Inclusion,
    ];

    /// The flag bit this kind occupies.
    pub fn bit(self) -> u8 {
        1u8 << (self as u8)
    }
}

/// A set of relation kinds, stored as a fixed-width bitmask.
///
/// Set algebra is exposed through explicit operations (`union`,
/// `intersect`, `intersects`, `contains`) rather than raw bitwise
/// operators, so call sites read as set manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelMask(u8);

impl RelMask {
    /// The empty set.
    pub const EMPTY: RelMask = RelMask(0);

    /// The set of every known kind.
    pub const ALL: RelMask = RelMask(0b0011_1111);

    /// Build a mask from raw bits, rejecting bits outside the known kinds.
    pub fn from_bits(bits: u8) -> Option<RelMask> {
        if bits & !Self::ALL.0 != 0 {
            return None;
        }
        Some(RelMask(bits))
    }

    /// The raw bit representation (persisted form).
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Set union.
    pub fn union(self, other: RelMask) -> RelMask {
        RelMask(self.0 | other.0)
    }

    /// Set intersection.
    pub fn intersect(self, other: RelMask) -> RelMask {
        RelMask(self.0 & other.0)
    }

    /// True when the two sets share at least one kind.
    pub fn intersects(self, other: RelMask) -> bool {
        self.0 & other.0 != 0
    }

    /// True when this set includes the given kind.
    pub fn contains(self, kind: RelKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Add a kind to the set.
    pub fn insert(&mut self, kind: RelKind) {
        self.0 |= kind.bit();
    }

    /// Number of kinds in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the kinds present in this set, in bit order.
    pub fn kinds(self) -> impl Iterator<Item = RelKind> {
        RelKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl From<RelKind> for RelMask {
    fn from(kind: RelKind) -> Self {
        RelMask(kind.bit())
    }
}

impl Default for RelMask {
    fn default() -> Self {
        RelMask::EMPTY
    }
}

impl std::fmt::Display for RelMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#08b}", self.0)
    }
}
