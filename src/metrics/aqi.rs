//! Composite Air Quality Index from PM2.5, PM10 and carbon monoxide.
//!
//! Each pollutant is mapped onto the common 0–500 index scale with its own
//! breakpoint table; the overall index is the worst of the three sub-indices.

use crate::metrics::error::TableError;
use crate::metrics::interpolate::BreakpointTable;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Index values shared by every built-in pollutant table.
pub const AQI_SCALE: [f64; 7] = [0.0, 50.0, 100.0, 200.0, 300.0, 400.0, 500.0];
/// PM2.5 breakpoints in µg/m³.
pub const PM25_BREAKPOINTS: [f64; 6] = [0.0, 30.0, 60.0, 90.0, 120.0, 250.0];
/// PM10 breakpoints in µg/m³.
pub const PM10_BREAKPOINTS: [f64; 6] = [0.0, 50.0, 100.0, 250.0, 350.0, 430.0];
/// Carbon monoxide breakpoints in ppm.
pub const CO_BREAKPOINTS: [f64; 6] = [0.0, 1.0, 2.0, 10.0, 17.0, 34.0];

static STANDARD: LazyLock<AqiEstimator> = LazyLock::new(|| {
    AqiEstimator::new(
        standard_table(&PM25_BREAKPOINTS),
        standard_table(&PM10_BREAKPOINTS),
        standard_table(&CO_BREAKPOINTS),
    )
});

fn standard_table(breakpoints: &[f64]) -> BreakpointTable {
    match BreakpointTable::new(breakpoints, &AQI_SCALE) {
        Ok(table) => table,
        Err(e) => panic!("built-in AQI table is malformed: {e}"),
    }
}

/// The pollutant a sub-index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
        })
    }
}

/// Every sub-index behind one AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AqiBreakdown {
    pub pm25: f64,
    pub pm10: f64,
    pub co: f64,
    /// The maximum of the three sub-indices.
    pub aqi: f64,
    /// Pollutant with the highest sub-index. Ties go to PM2.5, then PM10.
    pub dominant: Pollutant,
}

/// Computes AQI values from a set of pollutant breakpoint tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AqiEstimator {
    pm25: BreakpointTable,
    pm10: BreakpointTable,
    co: BreakpointTable,
}

impl AqiEstimator {
    pub fn new(pm25: BreakpointTable, pm10: BreakpointTable, co: BreakpointTable) -> Self {
        Self { pm25, pm10, co }
    }

    /// Builds an estimator from raw breakpoint arrays on the standard index
    /// scale.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if any of the arrays is malformed.
    pub fn from_breakpoints(pm25: &[f64], pm10: &[f64], co: &[f64]) -> Result<Self, TableError> {
        Ok(Self::new(
            BreakpointTable::new(pm25, &AQI_SCALE)?,
            BreakpointTable::new(pm10, &AQI_SCALE)?,
            BreakpointTable::new(co, &AQI_SCALE)?,
        ))
    }

    /// The estimator with the dashboard's built-in tables.
    pub fn standard() -> &'static AqiEstimator {
        &STANDARD
    }

    pub fn breakdown(&self, pm25: f64, pm10: f64, co: f64) -> AqiBreakdown {
        let pm25 = self.pm25.interpolate(pm25);
        let pm10 = self.pm10.interpolate(pm10);
        let co = self.co.interpolate(co);

        let (dominant, aqi) = [(Pollutant::Pm25, pm25), (Pollutant::Pm10, pm10), (Pollutant::Co, co)]
            .into_iter()
            .fold((Pollutant::Pm25, pm25), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            });

        AqiBreakdown {
            pm25,
            pm10,
            co,
            aqi,
            dominant,
        }
    }

    pub fn estimate(&self, pm25: f64, pm10: f64, co: f64) -> f64 {
        self.breakdown(pm25, pm10, co).aqi
    }
}

impl Default for AqiEstimator {
    fn default() -> Self {
        STANDARD.clone()
    }
}

/// AQI for the given concentrations using the built-in tables: PM2.5 and PM10
/// in µg/m³, CO in ppm. The result is a non-negative whole number.
///
/// # Examples
///
/// ```
/// use skydeck::estimate_aqi;
///
/// assert_eq!(estimate_aqi(60.0, 100.0, 2.0), 100.0);
/// assert_eq!(estimate_aqi(15.0, 10.0, 0.2), 25.0);
/// ```
pub fn estimate_aqi(pm25: f64, pm10: f64, co: f64) -> f64 {
    STANDARD.estimate(pm25, pm10, co)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pollutants_at_breakpoint_give_exactly_100() {
        let breakdown = AqiEstimator::standard().breakdown(60.0, 100.0, 2.0);
        assert_eq!(breakdown.pm25, 100.0);
        assert_eq!(breakdown.pm10, 100.0);
        assert_eq!(breakdown.co, 100.0);
        assert_eq!(breakdown.aqi, 100.0);
        assert_eq!(estimate_aqi(60.0, 100.0, 2.0), 100.0);
    }

    #[test]
    fn test_worst_pollutant_dominates() {
        let breakdown = AqiEstimator::standard().breakdown(10.0, 20.0, 12.0);
        assert_eq!(breakdown.dominant, Pollutant::Co);
        assert_eq!(breakdown.aqi, breakdown.co);
        assert!(breakdown.aqi > breakdown.pm25 && breakdown.aqi > breakdown.pm10);

        let breakdown = AqiEstimator::standard().breakdown(300.0, 0.0, 0.0);
        assert_eq!(breakdown.dominant, Pollutant::Pm25);
        assert_eq!(breakdown.aqi, 500.0);
    }

    #[test]
    fn test_clean_air_is_zero() {
        assert_eq!(estimate_aqi(0.0, 0.0, 0.0), 0.0);
        assert_eq!(estimate_aqi(-3.0, -1.0, -0.5), 0.0);
    }

    #[test]
    fn test_monotonic_in_each_pollutant() {
        let fixed = [(5.0, 40.0, 0.4), (45.0, 120.0, 3.0), (200.0, 400.0, 20.0)];
        for (pm25, pm10, co) in fixed {
            let mut previous = [0.0_f64; 3];
            for step in 0..=600 {
                let x = step as f64;
                let current = [
                    estimate_aqi(x, pm10, co),
                    estimate_aqi(pm25, x, co),
                    estimate_aqi(pm25, pm10, x / 10.0),
                ];
                for (axis, (now, before)) in current.iter().zip(previous.iter()).enumerate() {
                    assert!(
                        now >= before,
                        "axis {} decreased at {}: {} < {}",
                        axis,
                        x,
                        now,
                        before
                    );
                }
                previous = current;
            }
        }
    }

    #[test]
    fn test_custom_tables_are_validated() {
        assert!(AqiEstimator::from_breakpoints(
            &PM25_BREAKPOINTS,
            &PM10_BREAKPOINTS,
            &[0.0, 1.0, 1.0, 10.0, 17.0, 34.0]
        )
        .is_err());

        let lenient = AqiEstimator::from_breakpoints(
            &[0.0, 60.0, 120.0, 180.0, 240.0, 500.0],
            &PM10_BREAKPOINTS,
            &CO_BREAKPOINTS,
        )
        .unwrap();
        assert_eq!(lenient.estimate(60.0, 0.0, 0.0), 50.0);
    }
}
