// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::math::{Mat4, Real, Scalar, Vec3};

/// Quaternion stored as `(x, y, z, w)`, `w` being the scalar part.
///
/// * All angles are expressed in radians.
/// * Rotation use requires unit length; the axis-angle and Euler constructors
///   produce unit quaternions (given a non-zero axis).
/// * Right-handed: a positive angle about `+Y` takes `+X` towards `-Z`.
///
/// # Examples
/// ```
/// use gem_core::math::{deg_to_rad, Quat, Vec3};
/// let q: Quat = Quat::from_axis_angle(Vec3::UNIT_Y, deg_to_rad(90.0));
/// let v = q.to_mat4().transform_direction(&Vec3::UNIT_X);
/// assert!((v.z() + 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Quat<T = Real> {
    data: [T; 4],
}

impl<T: Scalar> Quat<T> {
    /// All components zero (not a rotation).
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the quaternion as an array.
    #[must_use]
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// X component of the vector part.
    #[must_use]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component of the vector part.
    #[must_use]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component of the vector part.
    #[must_use]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Scalar part.
    #[must_use]
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    #[must_use]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is normalized first. A zero axis stays zero, giving
    /// `(0, 0, 0, cos(angle / 2))`, which is not a unit quaternion.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let (sin_half, cos_half) = (angle * T::HALF).sin_cos();
        let scaled = axis.normalized() * sin_half;
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Builds a quaternion from Euler angles `(roll, pitch, yaw)` in radians.
    ///
    /// Ordering: `q = RotationZ(yaw) * RotationY(pitch) * RotationX(roll)`,
    /// i.e. roll is applied first and yaw last. Inverse of
    /// [`Quat::to_euler_angles`] away from gimbal lock.
    #[must_use]
    pub fn from_euler_angles(euler: Vec3<T>) -> Self {
        let (sx, cx) = (euler.x() * T::HALF).sin_cos();
        let (sy, cy) = (euler.y() * T::HALF).sin_cos();
        let (sz, cz) = (euler.z() * T::HALF).sin_cos();

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Rotation of `radians` about the X axis.
    #[must_use]
    pub fn rotation_x(radians: T) -> Self {
        let (s, c) = (radians * T::HALF).sin_cos();
        Self::new(s, T::ZERO, T::ZERO, c)
    }

    /// Rotation of `radians` about the Y axis.
    #[must_use]
    pub fn rotation_y(radians: T) -> Self {
        let (s, c) = (radians * T::HALF).sin_cos();
        Self::new(T::ZERO, s, T::ZERO, c)
    }

    /// Rotation of `radians` about the Z axis.
    #[must_use]
    pub fn rotation_z(radians: T) -> Self {
        let (s, c) = (radians * T::HALF).sin_cos();
        Self::new(T::ZERO, T::ZERO, s, c)
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: the result rotates by `other` first and then by
    /// `self`, matching `Mat4` products on column vectors. Quaternion
    /// multiplication is non‑commutative.
    ///
    /// Inputs need not be normalized; for unit operands the result stays unit
    /// up to floating‑point error (re‑normalize over long chains).
    ///
    /// # Examples
    /// ```
    /// use gem_core::math::{deg_to_rad, Quat, Vec3};
    /// let yaw: Quat = Quat::rotation_y(deg_to_rad(90.0));
    /// let pitch: Quat = Quat::rotation_x(deg_to_rad(90.0));
    /// // pitch first, then yaw: +Y -> +Z -> +X
    /// let v = yaw.multiply(&pitch).rotate(&Vec3::UNIT_Y);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Four-dimensional dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        ax * bx + ay * by + az * bz + aw * bw
    }

    /// Quaternion norm.
    #[must_use]
    pub fn magnitude(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Normalises in place; no-op when the magnitude is zero.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag > T::ZERO {
            let inv = T::ONE / mag;
            for c in &mut self.data {
                *c *= inv;
            }
        }
        self
    }

    /// Normalised copy; a zero quaternion is returned unchanged.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Negates the vector part in place.
    ///
    /// For a **unit** quaternion this is the inverse rotation; for any other
    /// quaternion it is not (the inverse is `conjugate / |q|²`).
    pub fn conjugate(&mut self) -> &mut Self {
        self.data[0] = -self.data[0];
        self.data[1] = -self.data[1];
        self.data[2] = -self.data[2];
        self
    }

    /// Conjugated copy; see [`Quat::conjugate`] for the unit-length precondition.
    #[must_use]
    pub fn conjugated(&self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], self.data[3])
    }

    /// Rotates a vector by this quaternion (assumed unit length).
    ///
    /// Equivalent to `self.to_mat4().transform_direction(v)` for unit
    /// quaternions.
    #[must_use]
    pub fn rotate(&self, v: &Vec3<T>) -> Vec3<T> {
        let u = self.xyz();
        let t = u.cross(v) * T::TWO;
        *v + t * self.w() + u.cross(&t)
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    ///
    /// A normalized copy is used; `self` is not modified.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4<T> {
        let [x, y, z, w] = self.normalized().data;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        let one = T::ONE;
        let two = T::TWO;
        let zero = T::ZERO;
        Mat4::new([
            one - two * (yy + zz),
            two * (xy + wz),
            two * (xz - wy),
            zero,
            two * (xy - wz),
            one - two * (xx + zz),
            two * (yz + wx),
            zero,
            two * (xz + wy),
            two * (yz - wx),
            one - two * (xx + yy),
            zero,
            zero,
            zero,
            zero,
            one,
        ])
    }

    /// Extracts Euler angles `(roll, pitch, yaw)` in radians.
    ///
    /// Inverse of [`Quat::from_euler_angles`]. Near gimbal lock, when
    /// `|sin(pitch)| ≥ 1 - EPSILON`, pitch is clamped to exactly `±π/2`
    /// (sign preserved) instead of taking `asin` of an out-of-domain value.
    #[must_use]
    pub fn to_euler_angles(&self) -> Vec3<T> {
        let [x, y, z, w] = self.data;
        let one = T::ONE;
        let two = T::TWO;

        let sinr_cosp = two * (w * x + y * z);
        let cosr_cosp = one - two * (x * x + y * y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        let sinp = two * (w * y - z * x);
        let pitch = if sinp.abs() >= one - T::EPSILON {
            T::FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        let siny_cosp = two * (w * z + x * y);
        let cosy_cosp = one - two * (y * y + z * z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        Vec3::new(roll, pitch, yaw)
    }

    /// `true` when every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }
}

/// Converts a 4‑element `[T; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl<T: Scalar> From<[T; 4]> for Quat<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> core::ops::Add for Quat<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = rhs.data;
        Self::new(ax + bx, ay + by, az + bz, aw + bw)
    }
}

impl<T: Scalar> core::ops::Sub for Quat<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = rhs.data;
        Self::new(ax - bx, ay - by, az - bz, aw - bw)
    }
}

impl<T: Scalar> core::ops::Mul for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> core::ops::MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

/// Formats as `(x, y, z, w)`.
impl<T: Scalar> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "({x}, {y}, {z}, {w})")
    }
}
