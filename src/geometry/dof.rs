use std::ops::{Index, IndexMut};
use serde::{Serialize, Deserialize};

use crate::angle::normalize_symmetric;
use crate::geometry::Coordinates3D;

/// Number of degrees of freedom for a rigid body in 3D space.
pub const COUNT_DOF: usize = 6;

/// Six degrees of freedom of a rigid body.
/// Translations (surge, sway, heave) along x, y, z and rotations (roll, pitch, yaw) about them.
/// Index order is surge, sway, heave, roll, pitch, yaw.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct RigidBodyDof {
    pub surge: f64,
    pub sway: f64,
    pub heave: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}
impl RigidBodyDof {
    pub fn new(surge: f64, sway: f64, heave: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        RigidBodyDof{surge, sway, heave, roll, pitch, yaw}
    }

    pub fn zero() -> Self {
        RigidBodyDof::default()
    }

    /// Iterate over the components in index order.
    pub fn iter(&self) -> std::array::IntoIter<f64, COUNT_DOF> {
        [self.surge, self.sway, self.heave, self.roll, self.pitch, self.yaw].into_iter()
    }

    /// Surge, sway and heave as coordinates.
    pub fn translation(&self) -> Coordinates3D {
        Coordinates3D::new(self.surge, self.sway, self.heave)
    }

    /// Roll, pitch and yaw as coordinates.
    pub fn rotation(&self) -> Coordinates3D {
        Coordinates3D::new(self.roll, self.pitch, self.yaw)
    }

    /// Copy with roll, pitch and yaw in (-π, π]. Translations are untouched.
    pub fn normalized(&self) -> Self {
        RigidBodyDof{
            roll: normalize_symmetric(self.roll),
            pitch: normalize_symmetric(self.pitch),
            yaw: normalize_symmetric(self.yaw),
            ..*self
        }
    }
}
impl Index<usize> for RigidBodyDof {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        match idx {
            0 => &self.surge,
            1 => &self.sway,
            2 => &self.heave,
            3 => &self.roll,
            4 => &self.pitch,
            5 => &self.yaw,
            _ => panic!("Index {} out of range for RigidBodyDof", idx),
        }
    }
}
impl IndexMut<usize> for RigidBodyDof {
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        match idx {
            0 => &mut self.surge,
            1 => &mut self.sway,
            2 => &mut self.heave,
            3 => &mut self.roll,
            4 => &mut self.pitch,
            5 => &mut self.yaw,
            _ => panic!("Index {} out of range for RigidBodyDof", idx),
        }
    }
}
impl IntoIterator for RigidBodyDof {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, COUNT_DOF>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl From<[f64; COUNT_DOF]> for RigidBodyDof {
    fn from(array: [f64; COUNT_DOF]) -> Self {
        RigidBodyDof::new(array[0], array[1], array[2], array[3], array[4], array[5])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn keys_getters() {
        let dof = RigidBodyDof::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(dof.surge, 1.0);
        assert_eq!(dof.sway, 2.0);
        assert_eq!(dof.heave, 3.0);
        assert_eq!(dof.roll, 4.0);
        assert_eq!(dof.pitch, 5.0);
        assert_eq!(dof.yaw, 6.0);
    }

    #[test]
    fn array_setters() {
        let mut dof = RigidBodyDof::zero();
        for i in 0..COUNT_DOF {
            dof[i] = (i + 1) as f64;
        }
        assert_eq!(dof, RigidBodyDof::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
        assert_eq!(dof.yaw, 6.0);
    }

    #[test]
    fn iterates_in_order() {
        let dof = RigidBodyDof::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        for (i, item) in dof.into_iter().enumerate() {
            assert_eq!(item, (i + 1) as f64);
        }
    }

    #[test]
    fn split_into_coordinates() {
        let dof = RigidBodyDof::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(dof.translation(), Coordinates3D::new(1.0, 2.0, 3.0));
        assert_eq!(dof.rotation(), Coordinates3D::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn normalized_only_touches_rotations() {
        let dof = RigidBodyDof::new(10.0, -10.0, 7.5, 1.5 * PI, -PI, 2.5 * PI).normalized();
        assert_eq!(dof.translation(), Coordinates3D::new(10.0, -10.0, 7.5));
        assert_relative_eq!(dof.roll, -FRAC_PI_2);
        assert_eq!(dof.pitch, PI);
        assert_relative_eq!(dof.yaw, FRAC_PI_2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range() {
        let mut dof = RigidBodyDof::zero();
        dof[6] = 1.0;
    }
}
