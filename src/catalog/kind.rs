//! Identity of the closed set of record kinds.
//!
//! A kind names one record schema and owns one numeric wire tag, the first
//! `;`-chunk of every encoded line. The set is closed on purpose: adding a
//! kind means one new variant here, one record shape with its binding table,
//! and one dispatch arm; nothing else changes.

/// One of the static-data schemas the catalog can hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Kind {
    Type1,
    Type2,
}

impl Kind {
    /// Every kind, in wire-tag order. `save` sweeps this to serialize the
    /// whole catalog deterministically.
    pub const ALL: [Kind; 2] = [Kind::Type1, Kind::Type2];

    /// Numeric tag leading every encoded line of this kind.
    pub fn tag(self) -> i32 {
        match self {
            Kind::Type1 => 0,
            Kind::Type2 => 1,
        }
    }

    /// Resolve a wire tag, if it names a known kind.
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(Kind::Type1),
            1 => Some(Kind::Type2),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Type1 => "type1",
            Kind::Type2 => "type2",
        }
    }
}
