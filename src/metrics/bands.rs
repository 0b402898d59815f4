//! Severity colour bands for AQI, UV index and temperature.

use crate::metrics::error::TableError;
use crate::types::band::{Band, BandColor, Edge};
use std::sync::LazyLock;

/// Which side of a threshold the threshold value itself belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdSide {
    /// A value equal to the threshold stays in the lower band (`<=`).
    Lower,
    /// A value equal to the threshold moves into the upper band (`<`).
    Upper,
}

/// An ordered set of bands covering the whole real line.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    bands: Vec<Band>,
}

static AQI_BANDS: LazyLock<BandTable> = LazyLock::new(|| {
    builtin(
        &[50.0, 100.0, 200.0, 300.0, 400.0],
        &[
            BandColor::Green,
            BandColor::Yellow,
            BandColor::Orange,
            BandColor::Red,
            BandColor::Purple,
            BandColor::Brown,
        ],
        ThresholdSide::Upper,
    )
});

static UV_BANDS: LazyLock<BandTable> = LazyLock::new(|| {
    builtin(
        &[3.0, 6.0, 8.0, 11.0],
        &[
            BandColor::Green,
            BandColor::Yellow,
            BandColor::Orange,
            BandColor::Red,
            BandColor::Purple,
        ],
        ThresholdSide::Upper,
    )
});

static TEMPERATURE_BANDS: LazyLock<BandTable> = LazyLock::new(|| {
    builtin(
        &[10.0, 25.0, 35.0],
        &[
            BandColor::Blue,
            BandColor::Green,
            BandColor::Orange,
            BandColor::Red,
        ],
        ThresholdSide::Upper,
    )
});

fn builtin(thresholds: &[f64], colors: &[BandColor], side: ThresholdSide) -> BandTable {
    match BandTable::from_thresholds(thresholds, colors, side) {
        Ok(table) => table,
        Err(e) => panic!("built-in band table is malformed: {e}"),
    }
}

impl BandTable {
    /// Builds contiguous bands from `thresholds`, one colour per band.
    ///
    /// `colors` must hold exactly one entry more than `thresholds`; the last
    /// colour is the open-ended top band.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the counts don't line up or the thresholds
    /// are not finite and strictly increasing.
    pub fn from_thresholds(
        thresholds: &[f64],
        colors: &[BandColor],
        side: ThresholdSide,
    ) -> Result<Self, TableError> {
        if colors.len() != thresholds.len() + 1 {
            return Err(TableError::BandCountMismatch {
                thresholds: thresholds.len(),
                colors: colors.len(),
            });
        }
        if let Some(position) = thresholds.iter().position(|t| !t.is_finite()) {
            return Err(TableError::NonFinite {
                table: "Threshold",
                position,
            });
        }
        if let Some(position) = thresholds.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(TableError::NotStrictlyIncreasing {
                table: "Threshold",
                position: position + 1,
            });
        }

        let edge = |threshold: f64| match side {
            ThresholdSide::Lower => Edge::Inclusive(threshold),
            ThresholdSide::Upper => Edge::Exclusive(threshold),
        };

        let mut lower: Option<Edge> = None;
        let mut bands = Vec::with_capacity(colors.len());
        for (i, color) in colors.iter().enumerate() {
            let upper = thresholds.get(i).map(|t| edge(*t));
            bands.push(Band {
                lower,
                upper,
                color: *color,
            });
            lower = upper.map(|e| e.flipped());
        }
        Ok(Self { bands })
    }

    /// AQI: below 50 good, then 100, 200, 300, 400, with 400 and above
    /// hazardous. Each threshold starts the next band.
    pub fn aqi() -> &'static BandTable {
        &AQI_BANDS
    }

    /// UV index: below 3 low, then 6, 8, 11, with 11 and above extreme.
    pub fn uv() -> &'static BandTable {
        &UV_BANDS
    }

    /// Temperature in °C: below 10 cold, then 25, 35, with 35 and above hot.
    pub fn temperature() -> &'static BandTable {
        &TEMPERATURE_BANDS
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Band for `value`. Bands are checked in order and the first match wins;
    /// NaN falls into the first band.
    pub fn classify(&self, value: f64) -> &Band {
        let first = &self.bands[0];
        if value.is_nan() {
            return first;
        }
        self.bands
            .iter()
            .find(|band| band.contains(value))
            .unwrap_or(first)
    }
}

/// Classifies `value` against `table`; see [`BandTable::classify`].
pub fn classify(value: f64, table: &BandTable) -> &Band {
    table.classify(value)
}

/// Temperature at which the thermometer column is full, in °C.
pub const THERMOMETER_FULL_SCALE: f64 = 50.0;

/// Height of the thermometer column in percent: 0 °C is empty, 50 °C full.
pub fn thermometer_level(temperature: f64) -> f64 {
    if temperature.is_nan() {
        return 0.0;
    }
    (temperature / THERMOMETER_FULL_SCALE * 100.0).clamp(0.0, 100.0)
}
