//! Offline sunrise / sunset estimate, used when the sunrise-sunset service
//! cannot be reached.
//!
//! Follows the NOAA general solar position equations
//! (<https://gml.noaa.gov/grad/solcalc/solareqns.PDF>) evaluated at noon of the
//! requested day, with the usual 90.833° zenith for the upper limb plus
//! refraction. Results are within a couple of minutes outside polar latitudes.

use crate::metrics::error::SolarError;
use crate::types::solar::SolarWindow;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use std::f64::consts::PI;

const ZENITH_DEGREES: f64 = 90.833;

/// Sunrise and sunset (UTC) on `date` at the given coordinates.
///
/// Longitude is positive east. For eastern longitudes sunrise may fall on the
/// previous UTC calendar day; the window is still the one for local `date`.
///
/// # Errors
///
/// Returns [`SolarError::NoRiseOrSet`] during polar day or night.
pub fn riseset(date: NaiveDate, latitude: f64, longitude: f64) -> Result<SolarWindow, SolarError> {
    let year = date.year();
    let leap_year = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_year = if leap_year { 366.0 } else { 365.0 };
    // fractional year, radians
    let gamma = 2.0 * PI * f64::from(date.ordinal0()) / days_in_year;

    // minutes
    let equation_of_time = 229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin());

    // radians
    let declination = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();

    let lat = latitude.to_radians();
    let cos_hour_angle = ZENITH_DEGREES.to_radians().cos() / (lat.cos() * declination.cos())
        - lat.tan() * declination.tan();
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return Err(SolarError::NoRiseOrSet { latitude, date });
    }
    let hour_angle = cos_hour_angle.acos().to_degrees();

    // minutes after UTC midnight
    let solar_noon = 720.0 - 4.0 * longitude - equation_of_time;
    let rise = solar_noon - 4.0 * hour_angle;
    let set = solar_noon + 4.0 * hour_angle;

    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let at = |minutes: f64| midnight + Duration::seconds((minutes * 60.0).round() as i64);
    SolarWindow::new(at(rise), at(set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn assert_close(actual: chrono::DateTime<Utc>, expected: chrono::DateTime<Utc>) {
        let delta = (actual - expected).num_seconds().abs();
        assert!(delta <= 5 * 60, "{} is {}s away from {}", actual, delta, expected);
    }

    #[test]
    fn test_london_midsummer() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let window = riseset(date, 51.5074, -0.1278).unwrap();
        assert_close(window.sunrise(), Utc.with_ymd_and_hms(2024, 6, 21, 3, 43, 0).unwrap());
        assert_close(window.sunset(), Utc.with_ymd_and_hms(2024, 6, 21, 20, 21, 0).unwrap());
    }

    #[test]
    fn test_london_midwinter_is_short() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let window = riseset(date, 51.5074, -0.1278).unwrap();
        assert!(window.day_length() < Duration::hours(8));
        assert!(window.day_length() > Duration::hours(7));
    }

    #[test]
    fn test_eastern_longitude_rises_early_in_utc() {
        // New Delhi, sunrise around 06:23 IST
        let date = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();
        let window = riseset(date, 28.6139, 77.2090).unwrap();
        assert_close(window.sunrise(), Utc.with_ymd_and_hms(2024, 10, 19, 0, 53, 0).unwrap());
        assert_close(window.sunset(), Utc.with_ymd_and_hms(2024, 10, 19, 12, 18, 0).unwrap());
    }

    #[test]
    fn test_polar_night_has_no_window() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        assert!(matches!(
            riseset(date, 78.22, 15.65),
            Err(SolarError::NoRiseOrSet { .. })
        ));
    }
}
