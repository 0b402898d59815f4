//! Wind normalisation: speed in km/h, heading in degrees and the matching
//! 16-point compass label.

use crate::types::compass::CompassDirection;
use crate::types::reading::WindHeading;
use log::warn;
use serde::Serialize;

/// Metres per second to kilometres per hour.
pub const MPS_TO_KMH: f64 = 3.6;

/// Wind values ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindReading {
    /// Heading in degrees, as reported (numeric headings are not wrapped).
    pub degrees: f64,
    /// Compass point nearest to `degrees`.
    pub compass: CompassDirection,
    pub speed_kmh: f64,
}

/// Converts a raw wind reading into display values.
///
/// Numeric headings are kept as given, so the needle can be rotated by the
/// exact reported angle. Compass labels are matched case-insensitively and
/// mapped to the centre of their sector. An unrecognised label is treated as
/// north (0°) and logged.
///
/// # Examples
///
/// ```
/// use skydeck::{normalize_wind, CompassDirection, WindHeading};
///
/// let wind = normalize_wind(10.0, &WindHeading::Label("NE".into()));
/// assert_eq!(wind.speed_kmh, 36.0);
/// assert_eq!(wind.degrees, 45.0);
/// assert_eq!(wind.compass, CompassDirection::NE);
///
/// let wind = normalize_wind(2.5, &WindHeading::Degrees(400.0));
/// assert_eq!(wind.degrees, 400.0);
/// assert_eq!(wind.compass, CompassDirection::NE);
/// ```
pub fn normalize_wind(speed_mps: f64, direction: &WindHeading) -> WindReading {
    let degrees = match direction {
        WindHeading::Degrees(degrees) if degrees.is_finite() => *degrees,
        WindHeading::Degrees(degrees) => {
            warn!("Non-finite wind heading {}, using north", degrees);
            0.0
        }
        WindHeading::Label(label) => match CompassDirection::from_label(label) {
            Some(direction) => direction.degrees(),
            None => {
                warn!("Unknown wind direction label '{}', using north", label);
                0.0
            }
        },
    };

    WindReading {
        degrees,
        compass: CompassDirection::from_degrees(degrees),
        speed_kmh: speed_mps * MPS_TO_KMH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_northeast_at_ten_metres_per_second() {
        let wind = normalize_wind(10.0, &WindHeading::Label("NE".to_string()));
        assert_eq!(wind.speed_kmh, 36.0);
        assert_eq!(wind.degrees, 45.0);
        assert_eq!(wind.compass, CompassDirection::NE);
        assert_eq!(wind.compass.label(), "NE");
    }

    #[test]
    fn test_every_label_round_trips() {
        for direction in CompassDirection::ALL {
            let lower = direction.label().to_lowercase();
            let wind = normalize_wind(1.0, &WindHeading::Label(lower));
            assert_eq!(wind.compass, direction);
            assert_eq!(wind.degrees, direction.index() as f64 * 22.5);
        }
    }

    #[test]
    fn test_speed_conversion_is_exact_multiplication() {
        for s in [0.0, 0.1, 1.0, 2.75, 7.3, 33.333, 120.0] {
            let wind = normalize_wind(s, &WindHeading::default());
            assert_eq!(wind.speed_kmh, s * 3.6);
        }
    }

    #[test]
    fn test_numeric_heading_is_not_wrapped() {
        let wind = normalize_wind(3.0, &WindHeading::Degrees(-45.0));
        assert_eq!(wind.degrees, -45.0);
        assert_eq!(wind.compass, CompassDirection::NW);

        let wind = normalize_wind(3.0, &WindHeading::Degrees(200.0));
        assert_eq!(wind.degrees, 200.0);
        assert_eq!(wind.compass, CompassDirection::SSW);
    }

    #[test]
    fn test_wind_reading_serializes_with_compass_label() -> Result<(), serde_json::Error> {
        let wind = normalize_wind(10.0, &WindHeading::Label("sw".to_string()));
        let value = serde_json::to_value(wind)?;
        assert_eq!(value["compass"], "SW");
        assert_eq!(value["degrees"], 225.0);
        assert_eq!(value["speed_kmh"], 36.0);
        Ok(())
    }

    #[test]
    fn test_unknown_label_is_clamped_to_north() {
        let wind = normalize_wind(4.0, &WindHeading::Label("Variable".to_string()));
        assert_eq!(wind.degrees, 0.0);
        assert_eq!(wind.compass, CompassDirection::N);
    }
}
