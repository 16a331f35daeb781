//! Closed catalog of connector tile shapes.
//!
//! Connector art in the tree UI is tile-granular: one sprite per straight or
//! turn segment, with a distinct "lit" sprite per combination of neighboring
//! active directions. When paths cross or fan out, several partial segments
//! occupy the same grid position; [`ConnectorShape::merge`] reconciles two
//! such observations into the single composite shape. Only locally-adjacent
//! combinations are enumerated — three-way and four-way shapes are reached
//! by merging progressively (straight + turn → three-way, three-way +
//! straight → four-way).

use std::sync::OnceLock;

use ahash::AHashMap;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Which neighboring directions a connector tile lights up towards.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionMask: u8 {
        const UP = 1;
        const RIGHT = 1 << 1;
        const DOWN = 1 << 2;
        const LEFT = 1 << 3;
    }
}

const U: u8 = DirectionMask::UP.bits();
const R: u8 = DirectionMask::RIGHT.bits();
const D: u8 = DirectionMask::DOWN.bits();
const L: u8 = DirectionMask::LEFT.bits();

const fn mask(bits: u8) -> DirectionMask {
    DirectionMask::from_bits_truncate(bits)
}

/// Error raised when two connector shapes that cannot legally coexist at
/// one grid position are merged. Well-formed scan input never triggers
/// this; it indicates a scan desync or corrupted catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("invalid connector combination: {first:?} and {second:?} cannot share a cell")]
    InvalidCombination {
        first: ConnectorShape,
        second: ConnectorShape,
    },
}

/// The eleven connector shapes, in canonical (declaration) order.
///
/// Each shape owns a base identity code (the unlit rendering), a table
/// mapping activation masks to lit identity codes, and the unordered shape
/// pairs it composes from. Identity codes are globally unique across all
/// shapes, forming the bijection [`ConnectorShape::from_code`] inverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ConnectorShape {
    Vertical,
    Horizontal,
    TurnDownLeft,
    TurnDownRight,
    // The two upward turns never appear on their own in real trees, but
    // they take part in merges, so the catalog keeps them.
    TurnUpLeft,
    TurnUpRight,
    ThreeWayUp,
    ThreeWayRight,
    ThreeWayDown,
    ThreeWayLeft,
    FourWay,
}

struct VariantSpec {
    base: i32,
    lit: &'static [(DirectionMask, i32)],
    merges: &'static [(ConnectorShape, ConnectorShape)],
}

static VERTICAL: VariantSpec = VariantSpec {
    base: 41,
    lit: &[(mask(U | D), 42)],
    merges: &[],
};

static HORIZONTAL: VariantSpec = VariantSpec {
    base: 43,
    lit: &[(mask(R | L), 44)],
    merges: &[],
};

static TURN_DOWN_LEFT: VariantSpec = VariantSpec {
    base: 37,
    lit: &[(mask(R | D), 38)],
    merges: &[],
};

static TURN_DOWN_RIGHT: VariantSpec = VariantSpec {
    base: 39,
    lit: &[(mask(D | L), 40)],
    merges: &[],
};

static TURN_UP_LEFT: VariantSpec = VariantSpec {
    base: 33,
    lit: &[(mask(U | L), 34)],
    merges: &[],
};

static TURN_UP_RIGHT: VariantSpec = VariantSpec {
    base: 35,
    lit: &[(mask(U | R), 36)],
    merges: &[],
};

static THREE_WAY_UP: VariantSpec = VariantSpec {
    base: 13,
    lit: &[
        (mask(U | R | L), 14),
        (mask(U | L), 15),
        (mask(U | R), 16),
        (mask(R | L), 17),
    ],
    merges: &[],
};

static THREE_WAY_RIGHT: VariantSpec = VariantSpec {
    base: 18,
    lit: &[
        (mask(U | R | D), 19),
        (mask(U | R), 20),
        (mask(R | D), 21),
        (mask(U | D), 22),
    ],
    merges: &[],
};

static THREE_WAY_DOWN: VariantSpec = VariantSpec {
    base: 23,
    lit: &[
        (mask(R | D | L), 24),
        (mask(D | L), 25),
        (mask(R | D), 26),
        (mask(R | L), 27),
    ],
    merges: &[
        (ConnectorShape::Horizontal, ConnectorShape::TurnUpLeft),
        (ConnectorShape::Horizontal, ConnectorShape::TurnUpRight),
        (ConnectorShape::TurnUpLeft, ConnectorShape::TurnUpRight),
    ],
};

static THREE_WAY_LEFT: VariantSpec = VariantSpec {
    base: 28,
    lit: &[
        (mask(U | D | L), 29),
        (mask(U | L), 30),
        (mask(D | L), 31),
        (mask(U | D), 32),
    ],
    merges: &[
        (ConnectorShape::Vertical, ConnectorShape::TurnDownLeft),
        (ConnectorShape::Vertical, ConnectorShape::TurnUpLeft),
        (ConnectorShape::TurnDownLeft, ConnectorShape::TurnUpLeft),
    ],
};

static FOUR_WAY: VariantSpec = VariantSpec {
    base: 1,
    lit: &[
        (mask(U | R | D | L), 2),
        (mask(U | R | L), 3),
        (mask(U | R | D), 4),
        (mask(R | D | L), 5),
        (mask(U | D | L), 6),
        (mask(U | L), 7),
        (mask(U | R), 8),
        (mask(R | D), 9),
        (mask(D | L), 10),
        (mask(U | D), 11),
        (mask(R | L), 12),
    ],
    merges: &[
        (ConnectorShape::Vertical, ConnectorShape::Horizontal),
        (ConnectorShape::TurnDownLeft, ConnectorShape::TurnUpRight),
        (ConnectorShape::TurnDownRight, ConnectorShape::TurnUpLeft),
        (ConnectorShape::Vertical, ConnectorShape::ThreeWayUp),
        (ConnectorShape::Horizontal, ConnectorShape::ThreeWayRight),
        (ConnectorShape::Vertical, ConnectorShape::ThreeWayDown),
        (ConnectorShape::Horizontal, ConnectorShape::ThreeWayLeft),
    ],
};

impl ConnectorShape {
    /// Every shape, in canonical order.
    pub const ALL: [ConnectorShape; 11] = [
        ConnectorShape::Vertical,
        ConnectorShape::Horizontal,
        ConnectorShape::TurnDownLeft,
        ConnectorShape::TurnDownRight,
        ConnectorShape::TurnUpLeft,
        ConnectorShape::TurnUpRight,
        ConnectorShape::ThreeWayUp,
        ConnectorShape::ThreeWayRight,
        ConnectorShape::ThreeWayDown,
        ConnectorShape::ThreeWayLeft,
        ConnectorShape::FourWay,
    ];

    fn spec(self) -> &'static VariantSpec {
        match self {
            ConnectorShape::Vertical => &VERTICAL,
            ConnectorShape::Horizontal => &HORIZONTAL,
            ConnectorShape::TurnDownLeft => &TURN_DOWN_LEFT,
            ConnectorShape::TurnDownRight => &TURN_DOWN_RIGHT,
            ConnectorShape::TurnUpLeft => &TURN_UP_LEFT,
            ConnectorShape::TurnUpRight => &TURN_UP_RIGHT,
            ConnectorShape::ThreeWayUp => &THREE_WAY_UP,
            ConnectorShape::ThreeWayRight => &THREE_WAY_RIGHT,
            ConnectorShape::ThreeWayDown => &THREE_WAY_DOWN,
            ConnectorShape::ThreeWayLeft => &THREE_WAY_LEFT,
            ConnectorShape::FourWay => &FOUR_WAY,
        }
    }

    /// Identity code of the unlit rendering.
    pub fn base_code(self) -> i32 {
        self.spec().base
    }

    /// Identity code for the given activation mask, falling back to the
    /// base code for masks this shape has no lit rendering for. Total.
    pub fn lookup_code(self, active: DirectionMask) -> i32 {
        self.spec()
            .lit
            .iter()
            .find(|(m, _)| *m == active)
            .map(|(_, code)| *code)
            .unwrap_or(self.spec().base)
    }

    /// Recover a shape and activation mask from an observed identity code.
    /// Base codes map to the empty mask. Returns `None` for codes outside
    /// the catalog.
    pub fn from_code(code: i32) -> Option<(ConnectorShape, DirectionMask)> {
        static CODE_TABLE: OnceLock<AHashMap<i32, (ConnectorShape, DirectionMask)>> =
            OnceLock::new();
        let table = CODE_TABLE.get_or_init(|| {
            let mut table = AHashMap::new();
            for shape in ConnectorShape::ALL {
                let spec = shape.spec();
                let prev = table.insert(spec.base, (shape, DirectionMask::empty()));
                debug_assert!(prev.is_none(), "duplicate base code {}", spec.base);
                for &(mask, code) in spec.lit {
                    let prev = table.insert(code, (shape, mask));
                    debug_assert!(prev.is_none(), "duplicate lit code {code}");
                }
            }
            table
        });
        table.get(&code).copied()
    }

    /// Combine two shapes observed at the same grid position.
    ///
    /// Self-merge is the identity; otherwise the pair is normalized to
    /// canonical order and looked up in the pair-lists. A pair absent from
    /// every pair-list cannot legally coexist and is an invariant
    /// violation, never a silent guess.
    pub fn merge(first: Self, second: Self) -> Result<Self, ConnectionError> {
        if first == second {
            return Ok(first);
        }

        let (a, b) = if second < first {
            (second, first)
        } else {
            (first, second)
        };

        for shape in ConnectorShape::ALL {
            if shape.spec().merges.iter().any(|&pair| pair == (a, b)) {
                return Ok(shape);
            }
        }

        Err(ConnectionError::InvalidCombination { first, second })
    }
}
