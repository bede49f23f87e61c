use super::{convert, ColorSpace};
use crate::{Bits, Float};

/// The factor determining rounding precision for equality comparisons.
///
/// Coordinates are multiplied by this factor and rounded, which keeps nine
/// digits after the decimal. For coordinates on the order of 100, as they are
/// for all four color spaces, that comfortably absorbs floating point error.
const ROUNDING_FACTOR: Float = 1e9;

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, wrapping and scaling the hue of
/// HSV, reducing resolution, and dropping the sign of negative zeros before
/// comparing the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

/// Test macro for asserting that two coordinate arrays are within some
/// absolute tolerance of each other.
///
/// Round trips through XYZ accumulate error from the seven-digit matrix
/// coefficients, which is far larger than the resolution used by
/// [`assert_same_coordinates`]. Hence those tests use this macro instead.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// tolerance.
#[cfg(test)]
macro_rules! assert_within {
    ($cs1:expr , $cs2:expr , $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance) = ($cs1, $cs2, $tolerance);
        assert!(
            $crate::core::is_within(cs1, cs2, tolerance),
            "color coordinates differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            cs1,
            cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_within;

/// Test macro for asserting the equality of colors.
///
/// This macro tests the color objects for equality using the `Eq` trait,
/// which normalizes coordinates before comparing them.
///
/// # Panics
///
/// This macro panics if the colors differ. Its message places either color
/// spaces or the coordinates below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = ($c1, $c2);
        if c1.space() != c2.space() {
            assert_eq!(
                c1,
                c2,
                "color spaces differ:\n{:?}\n{:?}",
                c1.space(),
                c2.space()
            );
        }

        assert_eq!(
            c1,
            c2,
            "color coordinates differ:\n{:?}\n{:?}",
            c1.as_ref(),
            c2.as_ref()
        );
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function replaces not-a-number coordinates with zero. It does not
/// touch any other coordinates, since out-of-range coordinates are
/// meaningful.
#[inline]
pub(crate) fn normalize(_space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [c1, c2, c3] = *coordinates;
    let zero_nan = |c: Float| if c.is_nan() { 0.0 } else { c };
    [zero_nan(c1), zero_nan(c2), zero_nan(c3)]
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    // Zero out not-a-numbers.
    let [c1, c2, c3] = normalize(space, coordinates);

    // Normalize rotation and scale to unit range.
    let c1 = if space.is_polar() {
        c1.rem_euclid(360.0) / 360.0
    } else {
        c1
    };

    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Determine whether the coordinates are within the absolute tolerance of
/// each other.
#[cfg(test)]
pub(crate) fn is_within(cs1: &[Float; 3], cs2: &[Float; 3], tolerance: Float) -> bool {
    cs1.iter()
        .zip(cs2.iter())
        .all(|(c1, c2)| (c1 - c2).abs() <= tolerance)
}

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the color is achromatic, i.e., a gray tone.
///
/// This function determines whether the saturation in HSV is zero,
/// converting the coordinates if necessary. Conversions through XYZ do not
/// round-trip exactly, so the saturation is compared after reducing its
/// precision.
pub(crate) fn is_achromatic(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    let [_, s, _] = match space {
        ColorSpace::Hsv => normalize(space, coordinates),
        _ => convert(space, ColorSpace::Hsv, coordinates),
    };

    (s * 1e3).round() == 0.0
}
