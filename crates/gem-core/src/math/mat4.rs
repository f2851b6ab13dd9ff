// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::math::{deg_to_rad, Quat, Real, Scalar, Vec3, Vec4};

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order (`data[col * 4 + row]`) to align with GPU
///   uploads. Columns are computed on demand by [`Mat4::col`]; there is no
///   second view over the storage.
/// - Column-vector convention: points transform as `M * p`, so translation
///   occupies the last column and `A * B` applies `B` first.
/// - Right-handed rotations, consistent with [`Quat::to_mat4`].
///
/// # Examples
/// Basic transformations:
/// ```
/// use gem_core::math::{Mat4, Vec3};
/// let t: Mat4 = Mat4::translation(Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Degenerate input
/// Nothing here checks its input. [`Mat4::invert`] on a singular matrix and
/// [`Mat4::perspective`] with a 0° or 180° field of view produce
/// infinities/NaNs; use [`crate::checked`] at an API boundary when that
/// matters.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat4<T = Real> {
    data: [T; 16],
}

impl<T: Scalar> Mat4<T> {
    /// Returns the identity matrix.
    ///
    /// Column-major layout with ones on the diagonal.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_diagonal(T::ONE)
    }

    /// Matrix with `diagonal` on the main diagonal and zeros elsewhere.
    #[must_use]
    pub fn from_diagonal(diagonal: T) -> Self {
        let mut data = [T::ZERO; 16];
        data[0] = diagonal;
        data[5] = diagonal;
        data[10] = diagonal;
        data[15] = diagonal;
        Self { data }
    }

    /// Creates a matrix from column-major array data.
    #[must_use]
    pub const fn new(data: [T; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from four columns.
    #[must_use]
    pub fn from_cols(cols: [Vec4<T>; 4]) -> Self {
        let mut data = [T::ZERO; 16];
        for (c, col) in cols.iter().enumerate() {
            for r in 0..4 {
                data[c * 4 + r] = col.component(r);
            }
        }
        Self { data }
    }

    /// Returns the matrix as a column‑major array.
    #[must_use]
    pub fn to_array(self) -> [T; 16] {
        self.data
    }

    /// Element at `row`, `col`.
    ///
    /// # Panics
    /// Panics when either index is greater than 3.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> T {
        assert!(row < 4 && col < 4, "Mat4 index out of range: ({row}, {col})");
        self.data[col * 4 + row]
    }

    /// Column `i` as a vector (copy of four consecutive elements).
    ///
    /// # Panics
    /// Panics when `i` is greater than 3.
    #[must_use]
    pub fn col(&self, i: usize) -> Vec4<T> {
        let base = i * 4;
        Vec4::new(
            self.data[base],
            self.data[base + 1],
            self.data[base + 2],
            self.data[base + 3],
        )
    }

    /// All four columns.
    #[must_use]
    pub fn cols(&self) -> [Vec4<T>; 4] {
        [self.col(0), self.col(1), self.col(2), self.col(3)]
    }

    /// Row `i` as a vector.
    #[must_use]
    pub fn row(&self, i: usize) -> Vec4<T> {
        Vec4::new(self.at(i, 0), self.at(i, 1), self.at(i, 2), self.at(i, 3))
    }

    /// Swaps rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = [T::ZERO; 16];
        for col in 0..4 {
            for row in 0..4 {
                data[row * 4 + col] = self.data[col * 4 + row];
            }
        }
        Self { data }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    #[must_use]
    pub fn translation(offset: Vec3<T>) -> Self {
        let mut m = Self::identity();
        m.data[12] = offset.x();
        m.data[13] = offset.y();
        m.data[14] = offset.z();
        m
    }

    /// Builds a non-uniform scale matrix.
    #[must_use]
    pub fn scale(factors: Vec3<T>) -> Self {
        let mut m = Self::identity();
        m.data[0] = factors.x();
        m.data[5] = factors.y();
        m.data[10] = factors.z();
        m
    }

    /// Builds a rotation of `angle_degrees` about `axis` (Rodrigues' formula).
    ///
    /// The angle is in **degrees**. The axis is normalized first; a zero axis
    /// is left as is, which yields `cos(angle)` on the upper diagonal rather
    /// than a rotation.
    ///
    /// Agrees with `Quat::from_axis_angle(axis, radians).to_mat4()` for any
    /// non-zero axis.
    #[must_use]
    pub fn rotation(axis: Vec3<T>, angle_degrees: T) -> Self {
        let (s, c) = deg_to_rad(angle_degrees).sin_cos();
        let omc = T::ONE - c;
        let [x, y, z] = axis.normalized().to_array();

        let mut m = Self::identity();
        // col 0
        m.data[0] = x * x * omc + c;
        m.data[1] = y * x * omc + z * s;
        m.data[2] = z * x * omc - y * s;
        // col 1
        m.data[4] = x * y * omc - z * s;
        m.data[5] = y * y * omc + c;
        m.data[6] = z * y * omc + x * s;
        // col 2
        m.data[8] = x * z * omc + y * s;
        m.data[9] = y * z * omc - x * s;
        m.data[10] = z * z * omc + c;
        m
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[must_use]
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity();
        m.data[5] = c;
        m.data[6] = s;
        m.data[9] = -s;
        m.data[10] = c;
        m
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[must_use]
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity();
        m.data[0] = c;
        m.data[2] = -s;
        m.data[8] = s;
        m.data[10] = c;
        m
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[must_use]
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity();
        m.data[0] = c;
        m.data[1] = s;
        m.data[4] = -s;
        m.data[5] = c;
        m
    }

    /// Constructs a matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    #[must_use]
    pub fn from_quat(q: &Quat<T>) -> Self {
        q.to_mat4()
    }

    /// Orthographic projection mapping the box
    /// `[left, right] × [bottom, top] × [-near, -far]` to clip space `[-1, 1]³`.
    ///
    /// Symmetric bounds produce no translation: `orthographic(-1, 1, -1, 1, -1, 1)`
    /// has diagonal `{1, 1, -1, 1}`.
    #[must_use]
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let mut m = Self::identity();
        m.data[0] = T::TWO / (right - left);
        m.data[5] = T::TWO / (top - bottom);
        m.data[10] = -T::TWO / (far - near);
        m.data[12] = -(right + left) / (right - left);
        m.data[13] = -(top + bottom) / (top - bottom);
        m.data[14] = -(far + near) / (far - near);
        m
    }

    /// [`Mat4::orthographic`] with the default depth range `near = -1`,
    /// `far = 1`.
    ///
    /// # Examples
    /// ```
    /// use gem_core::math::Mat4;
    /// let m: Mat4 = Mat4::orthographic_2d(-1.0, 1.0, -1.0, 1.0);
    /// assert_eq!([m.at(0, 0), m.at(1, 1), m.at(2, 2), m.at(3, 3)], [1.0, 1.0, -1.0, 1.0]);
    /// ```
    #[must_use]
    pub fn orthographic_2d(left: T, right: T, bottom: T, top: T) -> Self {
        Self::orthographic(left, right, bottom, top, -T::ONE, T::ONE)
    }

    /// Right-handed perspective projection from a vertical field of view in
    /// **degrees**, mapping view-space depth `[-z_near, -z_far]` to NDC
    /// `[-1, 1]`.
    ///
    /// Uses `1 / tan(fov / 2)`; `fov_degrees` of `0` or `180` divides by zero
    /// or by ~0 and is not guarded.
    #[must_use]
    pub fn perspective(fov_degrees: T, aspect_ratio: T, z_near: T, z_far: T) -> Self {
        let f = T::ONE / deg_to_rad(fov_degrees * T::HALF).tan();
        let range = z_near - z_far;

        let mut m = Self::from_diagonal(T::ZERO);
        m.data[0] = f / aspect_ratio;
        m.data[5] = f;
        m.data[10] = (z_far + z_near) / range;
        m.data[11] = -T::ONE;
        m.data[14] = T::TWO * z_far * z_near / range;
        m
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Multiplication follows column‑major semantics (`self` on the left,
    /// `rhs` on the right): the product applies `rhs` first.
    ///
    /// # Examples
    /// ```
    /// use gem_core::math::{Mat4, Vec3};
    /// let a: Mat4 = Mat4::identity();
    /// let b = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [T::ZERO; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = T::ZERO;
                for k in 0..4 {
                    sum += self.data[k * 4 + row] * rhs.data[col * 4 + k];
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Upper/lower 2×2 minors shared by [`Mat4::determinant`] and
    /// [`Mat4::invert`].
    ///
    /// Reads the storage as `a[i][j] = data[i * 4 + j]` (the transpose);
    /// both callers are invariant under that choice.
    fn minors(&self) -> ([T; 6], [T; 6]) {
        let a = |i: usize, j: usize| self.data[i * 4 + j];
        let s = [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ];
        let c = [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ];
        (s, c)
    }

    /// Determinant by closed-form cofactor expansion.
    ///
    /// Pure; the matrix is not modified.
    #[must_use]
    pub fn determinant(&self) -> T {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Inverts the matrix in place: adjugate divided by the determinant.
    ///
    /// A zero determinant is **not** guarded; every element becomes
    /// `±inf` or NaN. See [`crate::checked::try_inverse`] for the checked form.
    pub fn invert(&mut self) -> &mut Self {
        let (s, c) = self.minors();
        let a = |i: usize, j: usize| self.data[i * 4 + j];

        let adj = [
            a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
            -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
            a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
            -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
            a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
            -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
            a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
            -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
            a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
            -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
            a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
            -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
            a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
        ];
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];

        let inv_det = T::ONE / det;
        for (dst, src) in self.data.iter_mut().zip(adj) {
            *dst = src * inv_det;
        }
        self
    }

    /// Returns the inverse; see [`Mat4::invert`] for the singular case.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut m = *self;
        m.invert();
        m
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Translation components are applied and the resulting vector is returned
    /// with `w` implicitly equal to `1`.
    #[must_use]
    pub fn transform_point(&self, point: &Vec3<T>) -> Vec3<T> {
        (*self * point.extend(T::ONE)).xyz()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    #[must_use]
    pub fn transform_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        (*self * direction.extend(T::ZERO)).xyz()
    }

    /// `true` when every element is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|e| e.is_finite())
    }
}

impl<T: Scalar> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> From<[T; 16]> for Mat4<T> {
    fn from(value: [T; 16]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> core::ops::Mul for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> core::ops::Mul<&Mat4<T>> for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Scalar> core::ops::MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> core::ops::MulAssign<&Mat4<T>> for Mat4<T> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

impl<T: Scalar> core::ops::Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;
    fn mul(self, rhs: Vec4<T>) -> Vec4<T> {
        let mut out = [T::ZERO; 4];
        for (row, o) in out.iter_mut().enumerate() {
            for k in 0..4 {
                *o += self.data[k * 4 + row] * rhs.component(k);
            }
        }
        Vec4::from(out)
    }
}

/// Four newline-separated column strings, each `(x, y, z, w)`.
impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}\n{}", self.col(0), self.col(1), self.col(2), self.col(3))
    }
}
