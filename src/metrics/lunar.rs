//! Moon phase from a mean synodic month counted from a known new moon.
//!
//! Accuracy is that of a mean-motion model: the named phase can be off by
//! up to about a day, which is plenty for a dashboard icon.

use crate::types::moon_phase::{MoonPhase, MoonPhaseResult, PhaseStage};
use chrono::{DateTime, Utc};
use std::f64::consts::TAU;
use std::sync::LazyLock;

/// Mean length of a synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

const MS_PER_DAY: f64 = 86_400_000.0;

const REFERENCE_NEW_MOON_SECS: i64 = 947_182_440;

/// New moon of 2000-01-06 18:14 UTC.
pub static REFERENCE_NEW_MOON: LazyLock<DateTime<Utc>> = LazyLock::new(|| {
    DateTime::from_timestamp(REFERENCE_NEW_MOON_SECS, 0)
        .expect("reference new moon timestamp is in range")
});

/// `(upper bound, phase, stage)`; each interval starts where the previous one
/// ends, the first at 0.
const PHASE_TABLE: [(f64, MoonPhase, Option<PhaseStage>); 17] = [
    (0.03, MoonPhase::NewMoon, None),
    (0.10, MoonPhase::WaxingCrescent, Some(PhaseStage::Early)),
    (0.17, MoonPhase::WaxingCrescent, Some(PhaseStage::Mid)),
    (0.22, MoonPhase::WaxingCrescent, Some(PhaseStage::Late)),
    (0.28, MoonPhase::FirstQuarter, None),
    (0.35, MoonPhase::WaxingGibbous, Some(PhaseStage::Early)),
    (0.42, MoonPhase::WaxingGibbous, Some(PhaseStage::Mid)),
    (0.47, MoonPhase::WaxingGibbous, Some(PhaseStage::Late)),
    (0.53, MoonPhase::FullMoon, None),
    (0.60, MoonPhase::WaningGibbous, Some(PhaseStage::Early)),
    (0.67, MoonPhase::WaningGibbous, Some(PhaseStage::Mid)),
    (0.72, MoonPhase::WaningGibbous, Some(PhaseStage::Late)),
    (0.78, MoonPhase::LastQuarter, None),
    (0.85, MoonPhase::WaningCrescent, Some(PhaseStage::Early)),
    (0.92, MoonPhase::WaningCrescent, Some(PhaseStage::Mid)),
    (0.97, MoonPhase::WaningCrescent, Some(PhaseStage::Late)),
    (1.00, MoonPhase::NewMoon, None),
];

/// Fraction of the synodic month elapsed at `instant`, in `[0, 1)`.
///
/// Instants before the reference new moon count backwards, so the result is
/// non-negative for any date.
pub fn phase_fraction(instant: DateTime<Utc>) -> f64 {
    let month_ms = SYNODIC_MONTH_DAYS * MS_PER_DAY;
    let elapsed_ms = (instant - *REFERENCE_NEW_MOON).num_milliseconds() as f64;
    let fraction = elapsed_ms.rem_euclid(month_ms) / month_ms;
    // rem_euclid may round up to the divisor for tiny negative inputs
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Illuminated share of the disc, in percent with one decimal.
pub fn illumination_percent(fraction: f64) -> f64 {
    let illumination = 100.0 * (1.0 - (TAU * fraction).cos()) / 2.0;
    (illumination * 10.0).round() / 10.0
}

fn named_phase(fraction: f64) -> (MoonPhase, Option<PhaseStage>) {
    let mut lower = 0.0;
    for (upper, phase, stage) in PHASE_TABLE {
        if lower <= fraction && fraction < upper {
            return (phase, stage);
        }
        lower = upper;
    }
    (MoonPhase::NewMoon, None)
}

/// Moon phase at `instant`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use skydeck::{phase_at, MoonPhase};
///
/// let result = phase_at(Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap());
/// assert_eq!(result.phase, MoonPhase::FullMoon);
/// assert!(result.illumination_percent > 99.0);
/// ```
pub fn phase_at(instant: DateTime<Utc>) -> MoonPhaseResult {
    let fraction = phase_fraction(instant);
    let (phase, stage) = named_phase(fraction);
    MoonPhaseResult {
        phase_fraction: fraction,
        illumination_percent: illumination_percent(fraction),
        phase,
        stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn month() -> Duration {
        Duration::milliseconds((SYNODIC_MONTH_DAYS * MS_PER_DAY) as i64)
    }

    #[test]
    fn test_reference_instant() {
        assert_eq!(
            *REFERENCE_NEW_MOON,
            Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap()
        );
    }

    #[test]
    fn test_reference_is_new_moon() {
        let result = phase_at(*REFERENCE_NEW_MOON);
        assert!(result.phase_fraction.abs() < 1e-12);
        assert_eq!(result.illumination_percent, 0.0);
        assert_eq!(result.phase, MoonPhase::NewMoon);
        assert_eq!(result.icon(), "🌑");
    }

    #[test]
    fn test_half_a_month_later_is_full() {
        let full = *REFERENCE_NEW_MOON + month() / 2;
        let result = phase_at(full);
        assert!((result.phase_fraction - 0.5).abs() < 1e-8);
        assert_eq!(result.illumination_percent, 100.0);
        assert_eq!(result.phase, MoonPhase::FullMoon);
        assert_eq!(result.name(), "Full Moon");
    }

    #[test]
    fn test_dates_before_reference_are_non_negative() {
        let earlier = *REFERENCE_NEW_MOON - month() / 4;
        let fraction = phase_fraction(earlier);
        assert!((fraction - 0.75).abs() < 1e-8, "got {}", fraction);
        assert_eq!(phase_at(earlier).phase, MoonPhase::LastQuarter);

        let long_ago = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap();
        let fraction = phase_fraction(long_ago);
        assert!((0.0..1.0).contains(&fraction));
    }

    #[test]
    fn test_fraction_stays_in_range_over_many_months() {
        let mut instant = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2040, 1, 1, 0, 0, 0).unwrap();
        while instant < end {
            let result = phase_at(instant);
            assert!((0.0..1.0).contains(&result.phase_fraction));
            assert!((0.0..=100.0).contains(&result.illumination_percent));
            instant += Duration::hours(37);
        }
    }

    #[test]
    fn test_phase_table_covers_unit_interval() {
        let mut lower = 0.0;
        for (upper, _, _) in PHASE_TABLE {
            assert!(upper > lower);
            lower = upper;
        }
        assert_eq!(lower, 1.0);
        assert_eq!(named_phase(0.0), (MoonPhase::NewMoon, None));
        assert_eq!(named_phase(0.999_999), (MoonPhase::NewMoon, None));
        assert_eq!(
            named_phase(0.10),
            (MoonPhase::WaxingCrescent, Some(PhaseStage::Mid))
        );
        assert_eq!(
            named_phase(0.9),
            (MoonPhase::WaningCrescent, Some(PhaseStage::Mid))
        );
    }

    #[test]
    fn test_stage_names() {
        let result = phase_at(*REFERENCE_NEW_MOON + Duration::days(2));
        assert_eq!(result.phase, MoonPhase::WaxingCrescent);
        assert_eq!(result.stage, Some(PhaseStage::Early));
        assert_eq!(result.name(), "Early Waxing Crescent");
        assert_eq!(result.icon(), "🌒");
    }

    #[test]
    fn test_illumination_rounding() {
        assert_eq!(illumination_percent(0.25), 50.0);
        assert_eq!(illumination_percent(0.0), 0.0);
        assert_eq!(illumination_percent(0.1), 9.5);
    }
}
