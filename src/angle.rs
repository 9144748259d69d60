/*!
 * Angle normalization.
 *
 * Every angle is in radians and may lie anywhere on the real line.
 * The normalizers map it to a canonical representative of its class modulo 2π:
 * - `normalize_symmetric` into (-π, π]
 * - `normalize_unsigned` into [0, 2π)
 *
 * Non-finite input (NaN, ±∞) comes back as NaN from the plain functions.
 * The `try_` variants reject it with `AngleError::InvalidArgument` instead.
 */

mod proc_errors;
pub mod ranges;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

// Re-export errors
pub use proc_errors::{
    AngleError,
    AngleResult,
    err_str,
};
// Re-export range conventions
pub use ranges::{
    CanonicalRange,
    RangeChoice,
    Symmetric,
    Unsigned,
};

/// Angle type (alias for f64), in radians.
pub type Angle = f64;

/// Normalize an angle to the range (-π, π].
pub fn normalize_symmetric(angle: Angle) -> Angle {
    // Truncating remainder, keeps the sign of `angle`
    let mut value = angle % TAU;
    if value > PI {
        value -= TAU;
    }
    // -π itself is outside the range and maps to π
    if value <= -PI {
        value += TAU;
    }
    value
}

/// Normalize an angle to the range [0, 2π).
pub fn normalize_unsigned(angle: Angle) -> Angle {
    let mut value = (angle + TAU) % TAU;
    // Only negative for angles below -2π
    if value < 0.0 {
        value += TAU;
    }
    if value >= TAU {
        value = 0.0;
    }
    value
}

/// Normalize an angle to (-π, π], rejecting NaN and infinities.
pub fn try_normalize_symmetric(angle: Angle) -> AngleResult<Angle> {
    check_finite("angle", angle)?;
    Ok(normalize_symmetric(angle))
}

/// Normalize an angle to [0, 2π), rejecting NaN and infinities.
pub fn try_normalize_unsigned(angle: Angle) -> AngleResult<Angle> {
    check_finite("angle", angle)?;
    Ok(normalize_unsigned(angle))
}

/// Heading of `heading` as seen from `reference`, in (-π, π].
/// Positive when `heading` lies counter-clockwise of `reference`.
pub fn relative_heading(heading: Angle, reference: Angle) -> Angle {
    normalize_symmetric(heading - reference)
}

/// Convert a compass heading (clockwise from North) to a yaw angle (counter-clockwise from East).
/// The result is in (-π, π].
pub fn compass_to_yaw(heading: Angle) -> Angle {
    let yaw = normalize_symmetric(FRAC_PI_2 - heading);
    log::debug!("Compass heading {heading} -> yaw {yaw}");
    yaw
}

/// Lower and upper headings of a wave spectrum spread ±π/2 around `predominant`.
/// Both limits are in [0, 2π), so the lower limit may be numerically larger than the upper one.
pub fn spectral_heading_limits(predominant: Angle) -> (Angle, Angle) {
    (
        normalize_unsigned(predominant - FRAC_PI_2),
        normalize_unsigned(predominant + FRAC_PI_2),
    )
}

/// Smallest unsigned angle between `a` and `b`, in [0, π].
pub fn angular_distance(a: Angle, b: Angle) -> Angle {
    normalize_symmetric(a - b).abs()
}

/// Check that a value is usable as an angle.
pub(crate) fn check_finite(name: &str, value: Angle) -> AngleResult<()> {
    if !value.is_finite() {
        log::warn!("Rejected non-finite {name}: {value}");
        return Err(AngleError::InvalidArgument{name: name.to_string(), value});
    }
    Ok(())
}
