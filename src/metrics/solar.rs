//! Projects the current time onto a semicircular sun arc.

use crate::types::solar::{SolarWindow, SunPosition};
use chrono::{DateTime, Utc};
use std::f64::consts::PI;

/// Centre of the arc, in percent of the drawing area.
pub const ARC_CENTER: (f64, f64) = (50.0, 50.0);
/// Radius of the arc, in percent of the drawing area.
pub const ARC_RADIUS: f64 = 40.0;

/// Where the sun marker sits at `now`.
///
/// The marker travels from the left end of the arc at sunrise, over the top
/// at solar midday, to the right end at sunset. Outside the window the
/// position is clamped to the nearest end and `visible` is `false`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use skydeck::{project, SolarWindow};
///
/// let window = SolarWindow::new(
///     Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap(),
/// ).unwrap();
///
/// let noon = project(Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap(), &window);
/// assert!(noon.visible && !noon.warm);
/// assert!((noon.progress - 0.5).abs() < 1e-12);
/// assert!((noon.y - 10.0).abs() < 1e-9);
/// ```
pub fn project(now: DateTime<Utc>, window: &SolarWindow) -> SunPosition {
    let elapsed = (now - window.sunrise()).num_milliseconds() as f64;
    let length = window.day_length().num_milliseconds() as f64;
    let progress = (elapsed / length).clamp(0.0, 1.0);

    let angle = progress * PI;
    SunPosition {
        visible: window.contains(now),
        progress,
        x: ARC_CENTER.0 + ARC_RADIUS * angle.cos(),
        y: ARC_CENTER.1 - ARC_RADIUS * angle.sin(),
        warm: !(0.25..=0.75).contains(&progress),
    }
}
