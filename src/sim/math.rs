use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// 3D vector with f32 components, Z up.
/// C-compatible layout for FFI.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 0.0, 1.0);
    pub const FORWARD: Self = Self::new(1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(0.0, 1.0, 0.0);

    pub fn size_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f32 {
        self.size_squared().sqrt()
    }

    /// Unit vector in the same direction, or zero for degenerate input.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag < f32::EPSILON {
            return Self::ZERO;
        }
        self * (1.0 / mag)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Component along `normal`, which must be unit length (or zero).
    pub fn project_onto_normal(self, normal: Self) -> Self {
        normal * self.dot(normal)
    }

    /// Ground-plane part of the vector.
    pub fn horizontal(self) -> Self {
        Self::new(self.x, self.y, 0.0)
    }

    pub fn with_z(self, z: f32) -> Self {
        Self::new(self.x, self.y, z)
    }

    pub fn is_nearly_zero(self, tolerance: f32) -> bool {
        self.x.abs() <= tolerance && self.y.abs() <= tolerance && self.z.abs() <= tolerance
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).magnitude()
    }

    /// Distance in the ground plane, ignoring height.
    pub fn distance_2d(self, other: Self) -> f32 {
        (other - self).horizontal().magnitude()
    }

    /// Heading of the vector in the ground plane, in degrees.
    pub fn yaw_degrees(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Linear interpolation; `alpha` outside `[0, 1]` extrapolates.
pub fn lerp(a: f32, b: f32, alpha: f32) -> f32 {
    a + (b - a) * alpha
}
