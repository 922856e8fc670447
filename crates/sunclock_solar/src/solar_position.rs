//! Low-precision solar coordinates as polynomials in Julian centuries.
//!
//! Each function takes `t`, Julian centuries since J2000.0 (see
//! [`sunclock_time::julian_century`]), and is independent of the others
//! apart from explicit composition. Angles are returned in degrees; every
//! trigonometric argument is converted to radians at the call site.
//!
//! Sources: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 25 and 28;
//! NOAA Solar Calculator. Accuracy is about 0.01 deg in longitude, which is
//! ample for minute-level sunrise/sunset times.

use crate::error::SolarError;
use crate::util::normalize_360;

/// Longitude of the Moon's ascending node used by the nutation and
/// aberration corrections, in degrees.
fn omega_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the Sun, normalized to [0, 360).
///
/// `L0 = 280.46646 + 36000.76983·T + 0.0003032·T²`
pub fn geom_mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.46646 + t * (36000.76983 + t * 0.0003032))
}

/// Geometric mean anomaly of the Sun in degrees.
///
/// `M = 357.52911 + 35999.05029·T − 0.0001537·T²`
///
/// Not normalized: only ever consumed through sin/cos.
pub fn geom_mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit (unitless).
pub fn eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Sun's equation of center in degrees.
pub fn equation_of_center_deg(t: f64) -> f64 {
    let m = geom_mean_anomaly_deg(t).to_radians();
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// Sun's true geometric longitude in degrees (`L0 + C`).
///
/// Not re-normalized, so values slightly above 360 are possible.
pub fn true_longitude_deg(t: f64) -> f64 {
    geom_mean_longitude_deg(t) + equation_of_center_deg(t)
}

/// Sun's apparent longitude in degrees, corrected for nutation and
/// aberration.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    true_longitude_deg(t) - 0.00569 - 0.00478 * omega_deg(t).to_radians().sin()
}

/// Mean obliquity of the ecliptic in degrees (Laskar's cubic, Meeus 22.2).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity corrected for nutation, in degrees.
pub fn corrected_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + 0.00256 * omega_deg(t).to_radians().cos()
}

/// Sun's apparent declination in degrees, in [-90, 90].
///
/// `δ = asin(sin ε · sin λ)`
///
/// Returns [`SolarError::Numeric`] if the `asin` argument is not within
/// [-1, 1], which only happens for non-finite `t`.
pub fn declination_deg(t: f64) -> Result<f64, SolarError> {
    let epsilon = corrected_obliquity_deg(t).to_radians();
    let lambda = apparent_longitude_deg(t).to_radians();
    let sin_dec = epsilon.sin() * lambda.sin();
    if !(-1.0..=1.0).contains(&sin_dec) {
        return Err(SolarError::Numeric("declination asin argument outside [-1, 1]"));
    }
    Ok(sin_dec.asin().to_degrees())
}

/// Equation of time in minutes (apparent minus mean solar time).
///
/// Meeus eq. 28.3 with `y = tan²(ε/2)`:
///
/// `E = y·sin2L0 − 2e·sinM + 4ey·sinM·cos2L0 − ½y²·sin4L0 − 1.25e²·sin2M`
///
/// E is in radians; converted to degrees and scaled by 4 min/deg.
pub fn equation_of_time_min(t: f64) -> f64 {
    let epsilon = corrected_obliquity_deg(t);
    let l0 = geom_mean_longitude_deg(t).to_radians();
    let e = eccentricity(t);
    let m = geom_mean_anomaly_deg(t).to_radians();

    let y = (epsilon.to_radians() / 2.0).tan();
    let y = y * y;

    let sin2l0 = (2.0 * l0).sin();
    let sinm = m.sin();
    let cos2l0 = (2.0 * l0).cos();
    let sin4l0 = (4.0 * l0).sin();
    let sin2m = (2.0 * m).sin();

    let etime = y * sin2l0 - 2.0 * e * sinm + 4.0 * e * y * sinm * cos2l0
        - 0.5 * y * y * sin4l0
        - 1.25 * e * e * sin2m;
    etime.to_degrees() * 4.0
}

/// All solar parameters at one instant, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarParameters {
    /// Julian centuries since J2000.0 these values were computed for.
    pub t: f64,
    pub geom_mean_longitude_deg: f64,
    pub geom_mean_anomaly_deg: f64,
    pub eccentricity: f64,
    pub equation_of_center_deg: f64,
    pub true_longitude_deg: f64,
    pub apparent_longitude_deg: f64,
    pub mean_obliquity_deg: f64,
    pub corrected_obliquity_deg: f64,
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
}

impl SolarParameters {
    /// Evaluate every parameter at `t` Julian centuries.
    pub fn at(t: f64) -> Result<Self, SolarError> {
        Ok(Self {
            t,
            geom_mean_longitude_deg: geom_mean_longitude_deg(t),
            geom_mean_anomaly_deg: geom_mean_anomaly_deg(t),
            eccentricity: eccentricity(t),
            equation_of_center_deg: equation_of_center_deg(t),
            true_longitude_deg: true_longitude_deg(t),
            apparent_longitude_deg: apparent_longitude_deg(t),
            mean_obliquity_deg: mean_obliquity_deg(t),
            corrected_obliquity_deg: corrected_obliquity_deg(t),
            declination_deg: declination_deg(t)?,
            equation_of_time_min: equation_of_time_min(t),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Meeus example 25.a: 1992-10-13 0h TD, JDE 2448908.5.
    const T_MEEUS_25A: f64 = -0.072_183_436;

    fn sample_centuries() -> impl Iterator<Item = f64> {
        (-500..=500).map(|i| i as f64 * 0.1 + 0.0137 * (i % 7) as f64)
    }

    #[test]
    fn mean_longitude_meeus() {
        let l0 = geom_mean_longitude_deg(T_MEEUS_25A);
        assert!((l0 - 201.80720).abs() < 1e-3, "L0 = {l0}");
    }

    #[test]
    fn mean_anomaly_meeus() {
        let m = geom_mean_anomaly_deg(T_MEEUS_25A);
        assert!((m - (-2241.00603)).abs() < 1e-3, "M = {m}");
    }

    #[test]
    fn eccentricity_meeus() {
        let e = eccentricity(T_MEEUS_25A);
        assert!((e - 0.016711668).abs() < 1e-8, "e = {e}");
    }

    #[test]
    fn equation_of_center_meeus() {
        let c = equation_of_center_deg(T_MEEUS_25A);
        assert!((c - (-1.89732)).abs() < 1e-3, "C = {c}");
    }

    #[test]
    fn true_longitude_meeus() {
        let o = true_longitude_deg(T_MEEUS_25A);
        assert!((o - 199.90988).abs() < 1e-3, "true lon = {o}");
    }

    #[test]
    fn apparent_longitude_meeus() {
        let lambda = apparent_longitude_deg(T_MEEUS_25A);
        assert!((lambda - 199.90895).abs() < 1e-3, "lambda = {lambda}");
    }

    #[test]
    fn mean_obliquity_meeus() {
        let eps0 = mean_obliquity_deg(T_MEEUS_25A);
        // 23° 26' 24.83"
        assert!((eps0 - 23.44023).abs() < 1e-3, "eps0 = {eps0}");
    }

    #[test]
    fn corrected_obliquity_meeus() {
        let eps = corrected_obliquity_deg(T_MEEUS_25A);
        assert!((eps - 23.43999).abs() < 1e-3, "eps = {eps}");
    }

    #[test]
    fn declination_meeus() {
        let dec = declination_deg(T_MEEUS_25A).unwrap();
        // -7° 47' 01"
        assert!((dec - (-7.78507)).abs() < 1e-3, "dec = {dec}");
    }

    #[test]
    fn equation_of_time_meeus_28b() {
        // Meeus example 28.b: 1992-10-13 0h TD, E = 13m 42.6s
        let e = equation_of_time_min(T_MEEUS_25A);
        assert!((e - 13.71).abs() < 0.05, "E = {e}");
    }

    #[test]
    fn mean_longitude_always_normalized() {
        for t in sample_centuries().chain([1e6, -1e6, 123.456, -0.5e-12]) {
            let l0 = geom_mean_longitude_deg(t);
            assert!((0.0..360.0).contains(&l0), "L0({t}) = {l0}");
        }
    }

    #[test]
    fn declination_within_bounds() {
        for t in sample_centuries() {
            let dec = declination_deg(t).unwrap();
            assert!((-90.0..=90.0).contains(&dec), "dec({t}) = {dec}");
            // obliquity caps |dec| well below 25 deg for these epochs
            assert!(dec.abs() < 25.0, "dec({t}) = {dec}");
        }
    }

    #[test]
    fn declination_non_finite_is_numeric_error() {
        assert_eq!(
            declination_deg(f64::NAN),
            Err(SolarError::Numeric("declination asin argument outside [-1, 1]"))
        );
    }

    #[test]
    fn equation_of_time_bounded() {
        for t in sample_centuries() {
            let e = equation_of_time_min(t);
            assert!(e.abs() < 20.0, "E({t}) = {e}");
        }
    }

    #[test]
    fn equation_of_time_changes_sign_within_year() {
        // Over one year the equation of time crosses zero four times.
        let year = 1.0 / 100.0;
        let mut crossings = 0;
        let mut prev = equation_of_time_min(0.0);
        for i in 1..=365 {
            let cur = equation_of_time_min(i as f64 * year / 365.0);
            if prev.signum() != cur.signum() {
                crossings += 1;
            }
            prev = cur;
        }
        assert_eq!(crossings, 4);
    }

    #[test]
    fn parameters_bundle_matches_functions() {
        let p = SolarParameters::at(T_MEEUS_25A).unwrap();
        assert_eq!(p.t, T_MEEUS_25A);
        assert_eq!(p.geom_mean_longitude_deg, geom_mean_longitude_deg(T_MEEUS_25A));
        assert_eq!(p.declination_deg, declination_deg(T_MEEUS_25A).unwrap());
        assert_eq!(p.equation_of_time_min, equation_of_time_min(T_MEEUS_25A));
    }

    #[test]
    fn parameters_are_deterministic() {
        let a = SolarParameters::at(0.24).unwrap();
        let b = SolarParameters::at(0.24).unwrap();
        assert_eq!(a, b);
    }
}
