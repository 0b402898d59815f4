//! Defines the `Band` and `BandColor` types produced by the band classifier.

use serde::Serialize;
use std::fmt;

/// Colour token attached to a severity band. The presentation layer decides how
/// to apply it; [`BandColor::hex`] gives the dashboard's palette value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandColor {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Brown,
}

impl BandColor {
    /// CSS hex colour for this token.
    pub fn hex(&self) -> &'static str {
        match self {
            BandColor::Blue => "#42a5f5",
            BandColor::Green => "#4caf50",
            BandColor::Yellow => "#ffeb3b",
            BandColor::Orange => "#ff9800",
            BandColor::Red => "#f44336",
            BandColor::Purple => "#9c27b0",
            BandColor::Brown => "#795548",
        }
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// One edge of a band and whether the edge value itself belongs to the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Edge {
    Inclusive(f64),
    Exclusive(f64),
}

impl Edge {
    pub fn value(&self) -> f64 {
        match self {
            Edge::Inclusive(edge) | Edge::Exclusive(edge) => *edge,
        }
    }

    /// The same edge seen from the neighbouring band.
    pub fn flipped(&self) -> Edge {
        match self {
            Edge::Inclusive(edge) => Edge::Exclusive(*edge),
            Edge::Exclusive(edge) => Edge::Inclusive(*edge),
        }
    }
}

/// A contiguous value range mapped to one colour.
///
/// `lower` is `None` for the first band of a table (open towards negative
/// infinity) and `upper` is `None` for the last one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub lower: Option<Edge>,
    pub upper: Option<Edge>,
    pub color: BandColor,
}

impl Band {
    /// Whether `value` falls inside this band.
    pub fn contains(&self, value: f64) -> bool {
        let above = match self.lower {
            None => true,
            Some(Edge::Inclusive(lower)) => value >= lower,
            Some(Edge::Exclusive(lower)) => value > lower,
        };
        let below = match self.upper {
            None => true,
            Some(Edge::Inclusive(upper)) => value <= upper,
            Some(Edge::Exclusive(upper)) => value < upper,
        };
        above && below
    }
}
