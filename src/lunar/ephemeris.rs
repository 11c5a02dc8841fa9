//! Ephemeris
//!
//! Source of geocentric ecliptic longitudes for the Sun and Moon. A precise
//! library can be plugged in through [`Ephemeris`]; the built-in
//! [`LowPrecisionEphemeris`] uses truncated analytic series (about 0.01° for
//! the Sun, a few tenths of a degree for the Moon), which is plenty for phase
//! display.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Julian day of the Unix epoch
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Julian day of J2000.0
const J2000_JD: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Body whose longitude is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
}

/// Ephemeris error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    #[error("Julian day {0} is not finite")]
    InvalidJulianDay(f64),

    #[error("Longitude of {body:?} could not be computed: {reason}")]
    Computation { body: Body, reason: String },
}

/// Provider of ecliptic longitudes
pub trait Ephemeris: Send + Sync {
    /// Geocentric ecliptic longitude of `body` in degrees, [0, 360)
    fn body_longitude(&self, julian_day: f64, body: Body) -> Result<f64, EphemerisError>;
}

/// Julian day (UT) for a timestamp
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    let seconds = at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1e9;
    seconds / 86_400.0 + UNIX_EPOCH_JD
}

/// Normalize an angle to [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Truncated analytic series for the Sun and Moon
#[derive(Debug, Clone, Copy, Default)]
pub struct LowPrecisionEphemeris;

impl LowPrecisionEphemeris {
    /// Apparent longitude of the Sun
    fn sun_longitude(t: f64) -> f64 {
        let l0 = 280.46646 + 36_000.76983 * t + 0.000_3032 * t * t;
        let m = (357.52911 + 35_999.05029 * t - 0.000_1537 * t * t).to_radians();

        let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
            + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin();

        let omega = (125.04 - 1_934.136 * t).to_radians();
        l0 + center - 0.005_69 - 0.004_78 * omega.sin()
    }

    /// Longitude of the Moon from its largest periodic terms
    fn moon_longitude(t: f64) -> f64 {
        let l = 218.316_4477 + 481_267.881_234_21 * t;
        let d = (297.850_1921 + 445_267.111_4034 * t).to_radians();
        let m = (357.529_1092 + 35_999.050_2909 * t).to_radians();
        let mp = (134.963_3964 + 477_198.867_5055 * t).to_radians();
        let f = (93.272_0950 + 483_202.017_5233 * t).to_radians();

        // (coefficient, D, M, M', F)
        const TERMS: [(f64, f64, f64, f64, f64); 14] = [
            (6.288_774, 0.0, 0.0, 1.0, 0.0),
            (1.274_027, 2.0, 0.0, -1.0, 0.0),
            (0.658_314, 2.0, 0.0, 0.0, 0.0),
            (0.213_618, 0.0, 0.0, 2.0, 0.0),
            (-0.185_116, 0.0, 1.0, 0.0, 0.0),
            (-0.114_332, 0.0, 0.0, 0.0, 2.0),
            (0.058_793, 2.0, 0.0, -2.0, 0.0),
            (0.057_066, 2.0, -1.0, -1.0, 0.0),
            (0.053_322, 2.0, 0.0, 1.0, 0.0),
            (0.045_758, 2.0, -1.0, 0.0, 0.0),
            (-0.040_923, 0.0, 1.0, -1.0, 0.0),
            (-0.034_720, 1.0, 0.0, 0.0, 0.0),
            (-0.030_383, 0.0, 1.0, 1.0, 0.0),
            (0.015_327, 2.0, 0.0, 0.0, -2.0),
        ];

        let perturbation: f64 = TERMS
            .iter()
            .map(|&(coef, cd, cm, cmp, cf)| coef * (cd * d + cm * m + cmp * mp + cf * f).sin())
            .sum();

        l + perturbation
    }
}

impl Ephemeris for LowPrecisionEphemeris {
    fn body_longitude(&self, julian_day: f64, body: Body) -> Result<f64, EphemerisError> {
        if !julian_day.is_finite() {
            return Err(EphemerisError::InvalidJulianDay(julian_day));
        }

        let t = (julian_day - J2000_JD) / DAYS_PER_CENTURY;
        let longitude = match body {
            Body::Sun => Self::sun_longitude(t),
            Body::Moon => Self::moon_longitude(t),
        };

        if !longitude.is_finite() {
            return Err(EphemerisError::Computation {
                body,
                reason: format!("non-finite longitude at JD {}", julian_day),
            });
        }

        Ok(normalize_degrees(longitude))
    }
}
