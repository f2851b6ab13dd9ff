// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Color space helpers.
//!
//! Colors travel as [`Color3`] / [`Color4`] (aliases of `Vec3` / `Vec4`):
//! - "RGB" means channels in `0..=255` stored as floats.
//! - "normalized" means channels in `0..=1`.
//! - HSV triples use `h` in degrees `[0, 360)` and `s`, `v` in `[0, 1]`.
//!
//! Inputs are not clamped; out-of-range channels scale through unchanged.

use gem_core::math::{max3, min3, Color3, Color4, Scalar};

fn channel_max<T: Scalar>() -> T {
    T::from_f32(255.0)
}

/// Maps 0–255 channels to `[0, 1]`.
#[must_use]
pub fn rgb_to_normalized<T: Scalar>(color: Color3<T>) -> Color3<T> {
    color / channel_max::<T>()
}

/// Maps 0–255 channels (alpha included) to `[0, 1]`.
#[must_use]
pub fn rgba_to_normalized<T: Scalar>(color: Color4<T>) -> Color4<T> {
    color / channel_max::<T>()
}

/// Maps `[0, 1]` channels to 0–255.
#[must_use]
pub fn normalized_to_rgb<T: Scalar>(color: Color3<T>) -> Color3<T> {
    color * channel_max::<T>()
}

/// Maps `[0, 1]` channels (alpha included) to 0–255.
#[must_use]
pub fn normalized_to_rgba<T: Scalar>(color: Color4<T>) -> Color4<T> {
    color * channel_max::<T>()
}

/// Converts a 0–255 RGB color to HSV.
///
/// Greys (all channels equal) have hue 0; black also has saturation 0.
///
/// # Examples
/// ```
/// use gem_core::math::Color3;
/// use gem_geom::color::rgb_to_hsv;
/// let hsv = rgb_to_hsv(Color3::<f32>::new(0.0, 255.0, 0.0));
/// assert_eq!((hsv.h(), hsv.s(), hsv.v()), (120.0, 1.0, 1.0));
/// ```
#[must_use]
pub fn rgb_to_hsv<T: Scalar>(color: Color3<T>) -> Color3<T> {
    let norm = rgb_to_normalized(color);
    let (r, g, b) = (norm.r(), norm.g(), norm.b());
    let cmin = min3(r, g, b);
    let cmax = max3(r, g, b);
    let delta = cmax - cmin;

    let v = cmax;
    let s = if v == T::ZERO { T::ZERO } else { delta / v };

    let sector = if delta == T::ZERO {
        T::ZERO
    } else if cmax == r {
        (g - b) / delta
    } else if cmax == g {
        T::TWO + (b - r) / delta
    } else {
        T::from_f32(4.0) + (r - g) / delta
    };

    let full_turn = T::from_f32(360.0);
    let mut h = sector * T::from_f32(60.0);
    if h < T::ZERO {
        h += full_turn;
    }
    // A tiny negative hue can round up to a full turn.
    if h >= full_turn {
        h = T::ZERO;
    }
    Color3::new(h, s, v)
}

/// Converts an HSV color back to 0–255 RGB.
///
/// - `s ≤ 0` yields a grey of value `v`.
/// - A hue outside `[0, 360)` is treated as 0.
///
/// # Examples
/// ```
/// use gem_core::math::Color3;
/// use gem_geom::color::hsv_to_rgb;
/// let rgb = hsv_to_rgb(Color3::<f32>::new(240.0, 1.0, 1.0));
/// assert_eq!(rgb, Color3::new(0.0, 0.0, 255.0));
/// ```
#[must_use]
pub fn hsv_to_rgb<T: Scalar>(color: Color3<T>) -> Color3<T> {
    let (h, s, v) = (color.h(), color.s(), color.v());
    if s <= T::ZERO {
        return normalized_to_rgb(Color3::splat(v));
    }

    let full_turn = T::from_f32(360.0);
    let hue = if h >= T::ZERO && h < full_turn { h } else { T::ZERO };
    let hh = hue / T::from_f32(60.0);
    let sector = hh.floor();
    let ff = hh - sector;

    let p = v * (T::ONE - s);
    let q = v * (T::ONE - s * ff);
    let t = v * (T::ONE - s * (T::ONE - ff));

    let rgb = if sector < T::ONE {
        Color3::new(v, t, p)
    } else if sector < T::TWO {
        Color3::new(q, v, p)
    } else if sector < T::from_f32(3.0) {
        Color3::new(p, v, t)
    } else if sector < T::from_f32(4.0) {
        Color3::new(p, q, v)
    } else if sector < T::from_f32(5.0) {
        Color3::new(t, p, v)
    } else {
        Color3::new(v, p, q)
    };
    normalized_to_rgb(rgb)
}
