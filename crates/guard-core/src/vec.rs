//! 3-D vector type and the spatial helpers the perception and behavior
//! layers are built on.
//!
//! `Vec3` uses `f32` throughout — simulation-scale positions (tens of units)
//! need nowhere near double precision, and the type stays 12 bytes so poses
//! copy for free.
//!
//! Angles are expressed in **degrees** at this API surface because every
//! perception tuning constant (vision cone, rear-approach cone) is a degree
//! value; radians appear only inside the rotation math.

use std::fmt;

/// A point or direction in simulation space.  `y` is up.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    /// Unit vector along +z — the conventional "forward" facing.
    pub const FORWARD: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (other - self).magnitude()
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Unit-length copy, or `Vec3::ZERO` if the vector is (near-)zero.
    pub fn normalized(self) -> Vec3 {
        let m = self.magnitude();
        if m <= f32::EPSILON {
            Vec3::ZERO
        } else {
            self * (1.0 / m)
        }
    }

    /// Copy with the vertical component removed.  Used when only the
    /// ground-plane direction matters (e.g. facing a target while shooting).
    #[inline]
    pub fn horizontal(self) -> Vec3 {
        Vec3 { x: self.x, y: 0.0, z: self.z }
    }

    /// Unsigned angle in **degrees** between `self` and `other`, in
    /// `[0, 180]`.  Returns `0.0` if either vector is (near-)zero.
    pub fn angle_between_deg(self, other: Vec3) -> f32 {
        let denom = self.magnitude() * other.magnitude();
        if denom <= f32::EPSILON {
            return 0.0;
        }
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }

    /// Spherically interpolate this direction toward `target` by fraction
    /// `t` (clamped to `[0, 1]`).  Both inputs are normalized first; the
    /// result is unit length.
    ///
    /// This is the facing-rotation primitive: calling it each tick with
    /// `t = rate * dt` turns a forward vector toward a target direction at a
    /// fixed angular rate.
    pub fn rotate_toward(self, target: Vec3, t: f32) -> Vec3 {
        let from = self.normalized();
        let to = target.normalized();
        if from == Vec3::ZERO {
            return to;
        }
        if to == Vec3::ZERO {
            return from;
        }

        let t = t.clamp(0.0, 1.0);
        let cos = from.dot(to).clamp(-1.0, 1.0);
        let theta = cos.acos();

        // Nearly aligned (or anti-parallel, where the rotation axis is
        // undefined): fall back to normalized linear interpolation.
        if theta < 1e-4 || (std::f32::consts::PI - theta) < 1e-4 {
            return (from + (to - from) * t).normalized();
        }

        let sin = theta.sin();
        let a = ((1.0 - t) * theta).sin() / sin;
        let b = (t * theta).sin() / sin;
        (from * a + to * b).normalized()
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
