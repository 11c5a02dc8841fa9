//! Lunar phase module
//!
//! Moon phase, illumination, and age derived from Sun and Moon longitudes.

pub mod calculator;
pub mod ephemeris;
pub mod phase;

pub use calculator::{
    LunarCalculator, LunarSnapshot, PhaseSource, FALLBACK_AGE_DAYS, FALLBACK_ILLUMINATION,
    FALLBACK_PHASE,
};
pub use ephemeris::{julian_day, Body, Ephemeris, EphemerisError, LowPrecisionEphemeris};
pub use phase::{illumination, moon_age_days, phase_percentage, PhaseName, SYNODIC_MONTH_DAYS};
