// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared element-wise machinery for `Vec2`, `Vec3` and `Vec4`.
//!
//! Each vector type stores its components as a private `[T; N]` array; the
//! macro below generates everything that only depends on that layout.

macro_rules! impl_vector {
    ($name:ident, $n:literal) => {
        impl<T: $crate::math::Scalar> $name<T> {
            /// All components zero.
            pub const ZERO: Self = Self { data: [T::ZERO; $n] };

            /// All components one.
            pub const ONE: Self = Self { data: [T::ONE; $n] };

            /// Creates a vector with every component set to `scalar`.
            #[must_use]
            pub const fn splat(scalar: T) -> Self {
                Self { data: [scalar; $n] }
            }

            /// Returns the components as an array.
            #[must_use]
            pub fn to_array(self) -> [T; $n] {
                self.data
            }

            /// Component by index (`0` is `x`).
            ///
            /// # Panics
            /// Panics when `idx` is out of range, like slice indexing.
            #[must_use]
            pub fn component(&self, idx: usize) -> T {
                self.data[idx]
            }

            fn map(self, f: impl Fn(T) -> T) -> Self {
                let mut data = self.data;
                for c in &mut data {
                    *c = f(*c);
                }
                Self { data }
            }

            fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
                let mut data = self.data;
                for (c, r) in data.iter_mut().zip(rhs.data) {
                    *c = f(*c, r);
                }
                Self { data }
            }

            /// Dot product with another vector.
            #[must_use]
            pub fn dot(&self, other: &Self) -> T {
                let mut sum = T::ZERO;
                for (a, b) in self.data.iter().zip(other.data.iter()) {
                    sum += *a * *b;
                }
                sum
            }

            /// Squared magnitude.
            #[must_use]
            pub fn magnitude_squared(&self) -> T {
                self.dot(self)
            }

            /// Vector length (magnitude).
            #[must_use]
            pub fn magnitude(&self) -> T {
                self.magnitude_squared().sqrt()
            }

            /// Rescales the vector to unit length in place.
            ///
            /// No-op when the magnitude is zero (or NaN), so a zero vector
            /// stays zero instead of turning into NaNs.
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

            /// Returns a unit-length copy; a zero vector is returned unchanged.
            #[must_use]
            pub fn normalized(&self) -> Self {
                let mut v = *self;
                v.normalize();
                v
            }

            /// Euclidean distance to `other`.
            #[must_use]
            pub fn distance(&self, other: &Self) -> T {
                (*self - *other).magnitude()
            }

            /// Angle to `other` in radians; NaN if either vector is zero.
            #[must_use]
            pub fn angle(&self, other: &Self) -> T {
                (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
            }

            /// Linear interpolation, `self + (other - self) * t`.
            #[must_use]
            pub fn lerp(&self, other: &Self, t: T) -> Self {
                *self + (*other - *self) * t
            }
        }

        impl<T: $crate::math::Scalar> $crate::math::Vector for $name<T> {
            type Component = T;

            fn dot(&self, other: &Self) -> T {
                $name::dot(self, other)
            }

            fn magnitude(&self) -> T {
                $name::magnitude(self)
            }

            fn normalize(&mut self) {
                $name::normalize(self);
            }

            fn distance(&self, other: &Self) -> T {
                $name::distance(self, other)
            }
        }

        impl<T: $crate::math::Scalar> From<[T; $n]> for $name<T> {
            fn from(data: [T; $n]) -> Self {
                Self { data }
            }
        }

        impl<T: $crate::math::Scalar> From<$name<T>> for [T; $n] {
            fn from(v: $name<T>) -> Self {
                v.data
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Add for $name<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a + b)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Sub for $name<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a - b)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Mul for $name<T> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a * b)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Div for $name<T> {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a / b)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Add<T> for $name<T> {
            type Output = Self;
            fn add(self, rhs: T) -> Self {
                self.map(|a| a + rhs)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Sub<T> for $name<T> {
            type Output = Self;
            fn sub(self, rhs: T) -> Self {
                self.map(|a| a - rhs)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                self.map(|a| a * rhs)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Div<T> for $name<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                self.map(|a| a / rhs)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self {
                self.map(|a| -a)
            }
        }

        impl<T: $crate::math::Scalar> core::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: $crate::math::Scalar> core::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: $crate::math::Scalar> core::ops::MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: $crate::math::Scalar> core::ops::DivAssign for $name<T> {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<T: $crate::math::Scalar> core::ops::AddAssign<T> for $name<T> {
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }

        impl<T: $crate::math::Scalar> core::ops::SubAssign<T> for $name<T> {
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }

        impl<T: $crate::math::Scalar> core::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: $crate::math::Scalar> core::ops::DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl core::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;
            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs * self
            }
        }

        impl core::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;
            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs * self
            }
        }

        /// Formats as `(c0, c1, ...)` using the scalar's default `Display`.
        impl<T: $crate::math::Scalar> core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("(")?;
                for (i, c) in self.data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str(")")
            }
        }
    };
}
