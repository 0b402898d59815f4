//! Periodic driver that keeps a [`DashboardSink`] up to date.

use crate::config::Schedule;
use crate::dashboard::Dashboard;
use crate::types::moon_phase::MoonPhaseResult;
use crate::types::snapshot::WeatherSnapshot;
use crate::types::solar::{SolarWindow, SunPosition};
use chrono::{DateTime, Local, NaiveDate, Utc};
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Receives every value the dashboard displays, as it changes.
pub trait DashboardSink {
    fn clock(&mut self, now: DateTime<Local>);

    fn weather(&mut self, snapshot: &WeatherSnapshot);

    fn sun(&mut self, position: SunPosition);

    fn moon(&mut self, phase: &MoonPhaseResult);

    /// Called whenever a new sunrise/sunset window is in effect.
    fn sun_window(&mut self, _window: &SolarWindow) {}
}

fn ticker(period: Duration) -> Interval {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    schedule: Schedule,
}

impl Scheduler {
    pub fn new(schedule: Schedule) -> Self {
        Self { schedule }
    }

    /// Runs until `token` is cancelled.
    ///
    /// Every timer fires once immediately, so the sink is fully populated
    /// right after start. A slow tick delays the others; ticks missed
    /// meanwhile are dropped rather than replayed.
    pub async fn run<S: DashboardSink + ?Sized>(
        &self,
        dashboard: &Dashboard,
        sink: &mut S,
        token: CancellationToken,
    ) {
        let mut clock = ticker(self.schedule.clock());
        let mut weather = ticker(self.schedule.weather());
        let mut sun = ticker(self.schedule.sun_position());
        let mut moon = ticker(self.schedule.moon());
        let mut sun_times = ticker(self.schedule.sun_times());

        let mut window: Option<(NaiveDate, SolarWindow)> = None;
        info!("Dashboard scheduler started");

        loop {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    info!("Dashboard scheduler stopped");
                    break;
                }
                _ = sun_times.tick() => {
                    let today = Local::now().date_naive();
                    window = refresh_window(dashboard, sink, today).await.or(window);
                }
                _ = weather.tick() => {
                    let snapshot = dashboard.refresh_weather(Utc::now()).await;
                    sink.weather(&snapshot);
                }
                _ = clock.tick() => {
                    sink.clock(Local::now());
                }
                _ = sun.tick() => {
                    let today = Local::now().date_naive();
                    if needs_refresh(&window, today) {
                        window = refresh_window(dashboard, sink, today).await.or(window);
                    }
                    match window {
                        Some((_, current)) => sink.sun(dashboard.sun_position(Utc::now(), &current)),
                        None => debug!("No sun window yet, skipping sun position"),
                    }
                }
                _ = moon.tick() => {
                    sink.moon(&dashboard.moon_phase(Utc::now()));
                }
            }
        }
    }
}

/// The window is tied to the local date it was fetched for.
fn needs_refresh(window: &Option<(NaiveDate, SolarWindow)>, today: NaiveDate) -> bool {
    !matches!(window, Some((date, _)) if *date == today)
}

async fn refresh_window<S: DashboardSink + ?Sized>(
    dashboard: &Dashboard,
    sink: &mut S,
    date: NaiveDate,
) -> Option<(NaiveDate, SolarWindow)> {
    match dashboard.refresh_sun_window(date).await {
        Ok(window) => {
            sink.sun_window(&window);
            Some((date, window))
        }
        Err(e) => {
            warn!("No sun window for {}: {}", date, e);
            None
        }
    }
}
