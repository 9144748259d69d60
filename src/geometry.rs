mod coordinates;
mod dof;

pub use coordinates::{
    Coordinates3D,
    COUNT_COORDINATES,
};
pub use dof::{
    RigidBodyDof,
    COUNT_DOF,
};

/// A position in 3D space.
pub type Point = Coordinates3D;

/// Lengths along x, y and z.
pub type Dimensions = Coordinates3D;
