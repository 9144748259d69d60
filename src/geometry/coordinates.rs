use std::ops::{Index, IndexMut};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::angle::normalize_symmetric;

/// Number of dimensions in 3D space.
pub const COUNT_COORDINATES: usize = 3;

/// Cartesian coordinates in 3D space.
/// Components can be read by name (`x`, `y`, `z`), by index (0, 1, 2) or by iterating.
/// When used as an attitude, x, y and z hold roll, pitch and yaw in radians.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Coordinates3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Coordinates3D {
    /// Create new coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Coordinates3D{x, y, z}
    }

    /// Create new zero coordinates.
    pub fn zero() -> Self {
        Coordinates3D{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Iterate over the components in x, y, z order.
    pub fn iter(&self) -> std::array::IntoIter<f64, COUNT_COORDINATES> {
        [self.x, self.y, self.z].into_iter()
    }

    /// Get the attitude with every component in (-π, π].
    pub fn normalized_attitude(&self) -> Self {
        Coordinates3D{
            x: normalize_symmetric(self.x),
            y: normalize_symmetric(self.y),
            z: normalize_symmetric(self.z),
        }
    }

    /// Rotate an attitude by a per-axis deflection.
    /// Both the deflection and the result are kept in (-π, π].
    pub fn advance_attitude(&mut self, delta: &Coordinates3D) {
        for i in 0..COUNT_COORDINATES {
            self[i] = normalize_symmetric(self[i] + normalize_symmetric(delta[i]));
        }
    }
}
impl Index<usize> for Coordinates3D {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index {} out of range for Coordinates3D", idx),
        }
    }
}
impl IndexMut<usize> for Coordinates3D {
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index {} out of range for Coordinates3D", idx),
        }
    }
}
impl IntoIterator for Coordinates3D {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, COUNT_COORDINATES>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl From<[f64; COUNT_COORDINATES]> for Coordinates3D {
    fn from(array: [f64; COUNT_COORDINATES]) -> Self {
        Coordinates3D{x: array[0], y: array[1], z: array[2]}
    }
}
impl From<Coordinates3D> for [f64; COUNT_COORDINATES] {
    fn from(coordinates: Coordinates3D) -> Self {
        [coordinates.x, coordinates.y, coordinates.z]
    }
}
impl fmt::Display for Coordinates3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
