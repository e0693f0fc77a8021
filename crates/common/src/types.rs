use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Rigid transform: position and orientation relative to the parent frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            rotation: DQuat::IDENTITY,
        }
    }

    /// Advance this pose by one explicit-Euler step of the given linear
    /// and angular velocity over `dt` seconds.
    ///
    /// With `dt == 0` or zero velocities the pose is returned bit-exact.
    pub fn integrate(&self, linear: DVec3, angular: DVec3, dt: f64) -> Pose {
        let position = self.position + linear * dt;
        let rotation = if dt == 0.0 || angular == DVec3::ZERO {
            self.rotation
        } else {
            // dq/dt = 0.5 * omega * q, renormalized after the step
            let omega = DQuat::from_xyzw(angular.x, angular.y, angular.z, 0.0);
            (self.rotation + omega * self.rotation * (0.5 * dt)).normalize()
        };
        Pose { position, rotation }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// The degenerate box at the origin.
    pub const ZERO: Aabb = Aabb {
        min: DVec3::ZERO,
        max: DVec3::ZERO,
    };

    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Box spanning `[-half, half]` on each axis.
    pub fn from_half_extents(half: DVec3) -> Self {
        Self { min: -half, max: half }
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Both corners multiplied componentwise by `scale`.
    pub fn scaled(&self, scale: DVec3) -> Aabb {
        Self {
            min: self.min * scale,
            max: self.max * scale,
        }
    }
}
