//! Defines the 16-point `CompassDirection` used for wind headings.

use serde::Serialize;
use std::fmt;

/// Angular width of one compass sector, in degrees.
pub const SECTOR_DEGREES: f64 = 22.5;

/// One of the 16 points of a compass rose, clockwise from north in 22.5° steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompassDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassDirection {
    /// All directions in clockwise order, starting at north.
    pub const ALL: [CompassDirection; 16] = [
        CompassDirection::N,
        CompassDirection::NNE,
        CompassDirection::NE,
        CompassDirection::ENE,
        CompassDirection::E,
        CompassDirection::ESE,
        CompassDirection::SE,
        CompassDirection::SSE,
        CompassDirection::S,
        CompassDirection::SSW,
        CompassDirection::SW,
        CompassDirection::WSW,
        CompassDirection::W,
        CompassDirection::WNW,
        CompassDirection::NW,
        CompassDirection::NNW,
    ];

    /// The abbreviation shown on the dashboard, e.g. `"NNE"`.
    pub fn label(&self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NNE => "NNE",
            CompassDirection::NE => "NE",
            CompassDirection::ENE => "ENE",
            CompassDirection::E => "E",
            CompassDirection::ESE => "ESE",
            CompassDirection::SE => "SE",
            CompassDirection::SSE => "SSE",
            CompassDirection::S => "S",
            CompassDirection::SSW => "SSW",
            CompassDirection::SW => "SW",
            CompassDirection::WSW => "WSW",
            CompassDirection::W => "W",
            CompassDirection::WNW => "WNW",
            CompassDirection::NW => "NW",
            CompassDirection::NNW => "NNW",
        }
    }

    /// Position of this direction in [`CompassDirection::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The heading at the centre of this sector.
    pub fn degrees(&self) -> f64 {
        self.index() as f64 * SECTOR_DEGREES
    }

    /// Looks up a label case-insensitively, ignoring surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use skydeck::CompassDirection;
    ///
    /// assert_eq!(CompassDirection::from_label("sw"), Some(CompassDirection::SW));
    /// assert_eq!(CompassDirection::from_label(" Nne "), Some(CompassDirection::NNE));
    /// assert_eq!(CompassDirection::from_label("north"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|direction| direction.label().eq_ignore_ascii_case(label))
    }

    /// Nearest compass point for an arbitrary heading in degrees.
    ///
    /// Halfway cases round towards the next clockwise point, and headings
    /// outside `[0, 360)` wrap around with a non-negative (Euclidean) modulo,
    /// so `-22.5` is `NNW` and `382.5` is `NNE`.
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = (degrees / SECTOR_DEGREES + 0.5).floor();
        let index = sector.rem_euclid(16.0) as usize;
        // NaN casts to 0
        Self::ALL[index.min(15)]
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_round_trips_through_degrees() {
        for direction in CompassDirection::ALL {
            let degrees = direction.degrees();
            assert_eq!(
                CompassDirection::from_degrees(degrees),
                direction,
                "{} at {}° did not round trip",
                direction,
                degrees
            );
            assert_eq!(CompassDirection::from_label(direction.label()), Some(direction));
        }
    }

    #[test]
    fn test_from_degrees_wraps_out_of_range_headings() {
        assert_eq!(CompassDirection::from_degrees(360.0), CompassDirection::N);
        assert_eq!(CompassDirection::from_degrees(382.5), CompassDirection::NNE);
        assert_eq!(CompassDirection::from_degrees(-22.5), CompassDirection::NNW);
        assert_eq!(CompassDirection::from_degrees(-90.0), CompassDirection::W);
        assert_eq!(CompassDirection::from_degrees(720.0 + 180.0), CompassDirection::S);
    }

    #[test]
    fn test_from_degrees_rounds_half_up() {
        assert_eq!(CompassDirection::from_degrees(11.24), CompassDirection::N);
        assert_eq!(CompassDirection::from_degrees(11.25), CompassDirection::NNE);
        assert_eq!(CompassDirection::from_degrees(-11.25), CompassDirection::N);
        assert_eq!(CompassDirection::from_degrees(348.75), CompassDirection::N);
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(CompassDirection::from_label(""), None);
        assert_eq!(CompassDirection::from_label("NNNE"), None);
        assert_eq!(CompassDirection::from_label("45"), None);
    }
}
