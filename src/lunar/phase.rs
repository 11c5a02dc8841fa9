//! Phase math
//!
//! Phase is the Moon's elongation from the Sun as a percentage of a full
//! cycle: 0 is new, 50 is full, and values stay in [0, 100).

use serde::Serialize;

/// Mean synodic month in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(100.0);
    if wrapped >= 100.0 {
        0.0
    } else {
        wrapped
    }
}

/// Phase percentage from Moon and Sun ecliptic longitudes (degrees)
pub fn phase_percentage(moon_longitude: f64, sun_longitude: f64) -> f64 {
    let elongation = (moon_longitude - sun_longitude).rem_euclid(360.0);
    wrap_phase(elongation / 360.0 * 100.0)
}

/// Illuminated fraction as a percentage
///
/// Rises linearly from 0 at new moon to 100 at full and falls back
/// symmetrically. Input outside [0, 100] is clamped.
pub fn illumination(phase: f64) -> f64 {
    let p = phase.clamp(0.0, 100.0);
    if p <= 50.0 {
        p * 2.0
    } else {
        (100.0 - p) * 2.0
    }
}

/// Days since the last new moon
pub fn moon_age_days(phase: f64) -> f64 {
    wrap_phase(phase) / 100.0 * SYNODIC_MONTH_DAYS
}

/// Named phase band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhaseName {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl PhaseName {
    /// Band containing `phase`; out-of-range input is wrapped into [0, 100)
    pub fn from_phase(phase: f64) -> Self {
        let p = wrap_phase(phase);
        if p < 6.25 || p >= 93.75 {
            PhaseName::NewMoon
        } else if p < 18.75 {
            PhaseName::WaxingCrescent
        } else if p < 31.25 {
            PhaseName::FirstQuarter
        } else if p < 43.75 {
            PhaseName::WaxingGibbous
        } else if p < 56.25 {
            PhaseName::FullMoon
        } else if p < 68.75 {
            PhaseName::WaningGibbous
        } else if p < 81.25 {
            PhaseName::LastQuarter
        } else {
            PhaseName::WaningCrescent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
