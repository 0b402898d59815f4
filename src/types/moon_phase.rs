//! Defines the named lunar phases and the result of a phase calculation.

use serde::Serialize;
use std::fmt;

/// The eight conventional phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Emoji icon for the phase.
    pub fn icon(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Subdivision of the four long phases (crescents and gibbouses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStage {
    Early,
    Mid,
    Late,
}

impl fmt::Display for PhaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhaseStage::Early => "Early",
            PhaseStage::Mid => "Mid",
            PhaseStage::Late => "Late",
        })
    }
}

/// Where the Moon is in its synodic cycle at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhaseResult {
    /// Fraction of the synodic month elapsed since new moon, in `[0, 1)`.
    pub phase_fraction: f64,
    /// Illuminated share of the disc in percent, rounded to one decimal.
    pub illumination_percent: f64,
    pub phase: MoonPhase,
    /// Set for crescents and gibbouses only.
    pub stage: Option<PhaseStage>,
}

impl MoonPhaseResult {
    /// Display name including the stage, e.g. `"Early Waxing Crescent"`.
    pub fn name(&self) -> String {
        match self.stage {
            Some(stage) => format!("{} {}", stage, self.phase),
            None => self.phase.name().to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        self.phase.icon()
    }
}
