//! Lunar snapshot for a point in time

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use super::ephemeris::{julian_day, Body, Ephemeris, EphemerisError, LowPrecisionEphemeris};
use super::phase::{illumination, moon_age_days, phase_percentage, PhaseName};

pub const FALLBACK_PHASE: f64 = 25.0;
pub const FALLBACK_ILLUMINATION: f64 = 65.0;
pub const FALLBACK_AGE_DAYS: f64 = 7.4;

/// Where a snapshot's values came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseSource {
    Ephemeris,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LunarSnapshot {
    pub phase: f64,
    pub illumination: f64,
    pub phase_name: PhaseName,
    pub age_days: f64,
    pub computed_at: DateTime<Utc>,
    pub source: PhaseSource,
}

impl LunarSnapshot {
    fn fallback(at: DateTime<Utc>) -> Self {
        Self {
            phase: FALLBACK_PHASE,
            illumination: FALLBACK_ILLUMINATION,
            phase_name: PhaseName::from_phase(FALLBACK_PHASE),
            age_days: FALLBACK_AGE_DAYS,
            computed_at: at,
            source: PhaseSource::Fallback,
        }
    }
}

/// Computes lunar snapshots from an [`Ephemeris`]
pub struct LunarCalculator<E: Ephemeris = LowPrecisionEphemeris> {
    ephemeris: E,
}

impl Default for LunarCalculator<LowPrecisionEphemeris> {
    fn default() -> Self {
        Self::new(LowPrecisionEphemeris)
    }
}

impl<E: Ephemeris> LunarCalculator<E> {
    pub fn new(ephemeris: E) -> Self {
        Self { ephemeris }
    }

    /// Phase percentage at `at`
    pub fn phase_at(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let jd = julian_day(at);
        let moon = self.ephemeris.body_longitude(jd, Body::Moon)?;
        let sun = self.ephemeris.body_longitude(jd, Body::Sun)?;
        Ok(phase_percentage(moon, sun))
    }

    /// Snapshot at `at`; fixed fallback values when the ephemeris fails
    pub fn snapshot(&self, at: DateTime<Utc>) -> LunarSnapshot {
        match self.phase_at(at) {
            Ok(phase) => {
                debug!("Lunar phase at {}: {:.2}%", at, phase);
                LunarSnapshot {
                    phase,
                    illumination: illumination(phase),
                    phase_name: PhaseName::from_phase(phase),
                    age_days: moon_age_days(phase),
                    computed_at: at,
                    source: PhaseSource::Ephemeris,
                }
            }
            Err(e) => {
                warn!("Ephemeris failed at {}, using fallback values: {}", at, e);
                LunarSnapshot::fallback(at)
            }
        }
    }

    pub fn snapshot_now(&self) -> LunarSnapshot {
        self.snapshot(Utc::now())
    }
}
