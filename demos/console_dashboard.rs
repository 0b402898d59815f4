//! Runs the dashboard in a terminal, logging each update.
//!
//! ```sh
//! RUST_LOG=info cargo run --example console_dashboard -- [config.json]
//! ```
//!
//! Stop it with Ctrl-C.

use chrono::{DateTime, Local};
use log::info;
use skydeck::{
    clock_label, Dashboard, DashboardConfig, DashboardError, DashboardSink, MoonPhaseResult,
    Scheduler, SolarWindow, SunPosition, WeatherSnapshot,
};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

struct ConsoleSink {
    last_minute: Option<String>,
}

impl DashboardSink for ConsoleSink {
    fn clock(&mut self, now: DateTime<Local>) {
        // one line per minute
        let minute = now.format("%Y-%m-%d %H:%M").to_string();
        if self.last_minute.as_deref() != Some(minute.as_str()) {
            println!("{}", clock_label(now));
            self.last_minute = Some(minute);
        }
    }

    fn weather(&mut self, snapshot: &WeatherSnapshot) {
        let r = &snapshot.reading;
        println!(
            "[{:?}] {:.1}°C ({}) high {:.1} low {:.1} | humidity {:.0}% | {:.0} hPa",
            snapshot.source,
            r.temperature,
            snapshot.temperature_band.color,
            r.high_temperature,
            r.low_temperature,
            r.humidity,
            r.pressure
        );
        println!(
            "  AQI {:.0} ({}) | UV {:.0} ({}) | CO {:.1} ppm | PM2.5 {:.1} | PM10 {:.1}",
            snapshot.aqi,
            snapshot.aqi_band.color,
            r.uv_index,
            snapshot.uv_band.color,
            r.co,
            r.pm25,
            r.pm10
        );
        println!(
            "  Wind {:.1} km/h {} {:.0}° | rain {:.1} mm | thermometer {:.0}%",
            snapshot.wind.speed_kmh,
            snapshot.wind.compass,
            snapshot.wind.degrees,
            r.rainfall,
            snapshot.thermometer_level
        );
    }

    fn sun(&mut self, position: SunPosition) {
        if position.visible {
            println!(
                "Sun at {:.0}% of the day ({:.1}, {:.1}){}",
                position.progress * 100.0,
                position.x,
                position.y,
                if position.warm { ", golden hour" } else { "" }
            );
        } else {
            println!("Sun is down");
        }
    }

    fn moon(&mut self, phase: &MoonPhaseResult) {
        println!(
            "Moon: {} {} ({:.1}% lit)",
            phase.icon(),
            phase.name(),
            phase.illumination_percent
        );
    }

    fn sun_window(&mut self, window: &SolarWindow) {
        println!(
            "Sunrise {} | Sunset {}",
            window.sunrise().with_timezone(&Local).format("%H:%M"),
            window.sunset().with_timezone(&Local).format("%H:%M")
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    env_logger::init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => DashboardConfig::load(&path).await?,
        None => DashboardConfig::default(),
    };
    let schedule = config.schedule;
    let dashboard = Dashboard::builder().config(config).build()?;

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, shutting down");
        }
        ctrl_c.cancel();
    });

    let mut sink = ConsoleSink { last_minute: None };
    Scheduler::new(schedule)
        .run(&dashboard, &mut sink, token)
        .await;
    Ok(())
}
