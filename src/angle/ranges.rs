/*!
 * Canonical range conventions.
 * Each convention maps any angle into one sub-interval of length 2π.
 *
 * New conventions need:
 * - A struct implementing `CanonicalRange`
 * - An enum variant containing that struct in `RangeChoice`
 * - A constructor name and function in `RANGE_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;
use strum::EnumIter;
use std::f64::consts::{PI, TAU};

use crate::angle::{
    self,
    Angle,
    AngleResult,
};

/// Canonical range trait.
/// Implemented by every range convention an angle can be normalized into.
#[enum_dispatch] // enum dispatch allows us to use the enum as a kind of trait object
pub trait CanonicalRange {
    /// Get the name of the range convention.
    fn get_range_name(&self) -> &'static str;

    /// Lower and upper bound of the range, in radians.
    fn bounds(&self) -> (Angle, Angle);

    /// Check if an angle is already in canonical form.
    fn contains(&self, angle: Angle) -> bool;

    /// Map an angle into the range. Non-finite input gives NaN.
    fn normalize(&self, angle: Angle) -> Angle;

    /// Map an angle into the range, rejecting non-finite input.
    fn try_normalize(&self, angle: Angle) -> AngleResult<Angle> {
        angle::check_finite("angle", angle)?;
        Ok(self.normalize(angle))
    }
}

/// The (-π, π] convention.
#[derive(Debug, Default, Clone, Copy)]
pub struct Symmetric;
impl CanonicalRange for Symmetric {
    fn get_range_name(&self) -> &'static str {
        "symmetric"
    }

    fn bounds(&self) -> (Angle, Angle) {
        (-PI, PI)
    }

    fn contains(&self, angle: Angle) -> bool {
        angle > -PI && angle <= PI
    }

    fn normalize(&self, angle: Angle) -> Angle {
        angle::normalize_symmetric(angle)
    }
}

/// The [0, 2π) convention.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsigned;
impl CanonicalRange for Unsigned {
    fn get_range_name(&self) -> &'static str {
        "unsigned"
    }

    fn bounds(&self) -> (Angle, Angle) {
        (0.0, TAU)
    }

    fn contains(&self, angle: Angle) -> bool {
        angle >= 0.0 && angle < TAU
    }

    fn normalize(&self, angle: Angle) -> Angle {
        angle::normalize_unsigned(angle)
    }
}

/// Range conventions enum.
/// To add a new convention:
/// implement the `CanonicalRange` trait for it,
/// include it here,
/// and add handling for its constructor in `RANGE_CONSTRUCTION`.
#[derive(Debug, Clone, Copy, EnumIter)]
#[enum_dispatch(CanonicalRange)]
pub enum RangeChoice {
    /// Angles in (-π, π], used for attitudes and relative headings.
    Symmetric(Symmetric),
    /// Angles in [0, 2π), used for wave headings.
    Unsigned(Unsigned),
}

/// Range construction array -- Laid out here for easy modification.
const RANGE_CONSTRUCTION: &[RangeConstructor] = &[
    RangeConstructor{
        name: "symmetric",
        aliases: &["pi", "signed"],
        constructor: || RangeChoice::Symmetric(Symmetric),
    },
    RangeConstructor{
        name: "unsigned",
        aliases: &["2pi", "positive"],
        constructor: || RangeChoice::Unsigned(Unsigned),
    },
];

//
// ----------------------------------
// Private functions and structs, no modifications needed
//      |
//      V
//

/// Range constructor struct. Used to construct the range conventions from the name string.
struct RangeConstructor {
    name: &'static str,
    aliases: &'static [&'static str],
    constructor: fn() -> RangeChoice,
}

impl RangeChoice {
    /// Construct a range convention from its name or one of its aliases.
    pub fn from_name(name: &str) -> AngleResult<Self> {
        let name = name.trim().to_lowercase();
        for constructor in RANGE_CONSTRUCTION.iter() {
            if constructor.name == name || constructor.aliases.contains(&name.as_str()) {
                return Ok((constructor.constructor)());
            }
        }

        // If the name is not found, return an error with the available conventions
        let mut error_str = format!("Range convention not found: {name}\n");
        error_str.push_str("Available conventions:\n");
        for constructor in RANGE_CONSTRUCTION.iter() {
            error_str.push_str(&format!("    {} (aliases: {})\n", constructor.name, constructor.aliases.join(", ")));
        }
        angle::err_str(&error_str)
    }

    /// Names of all registered range conventions.
    pub fn names() -> Vec<&'static str> {
        RANGE_CONSTRUCTION.iter().map(|constructor| constructor.name).collect()
    }
}
