use crate::{ColorSpace, Float};

/// Determine whether the coordinates are in gamut for their color space.
///
/// Coordinates are in gamut if they fall into the color space's nominal
/// ranges. Since hues wrap around, the hue of HSV is always in gamut.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    space
        .nominal_ranges()
        .iter()
        .zip(coordinates.iter())
        .enumerate()
        .all(|(index, (range, c))| (space.is_polar() && index == 0) || range.contains(c))
}

/// Clip the coordinates to the gamut of their color space.
///
/// This function clamps each coordinate to its nominal range, with exception
/// of the hue of HSV, which is wrapped into `0..360` instead. Not-a-number
/// coordinates are left as is.
pub(crate) fn clip(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [r1, r2, r3] = space.nominal_ranges();
    let [c1, c2, c3] = *coordinates;

    let c1 = if space.is_polar() {
        c1.rem_euclid(360.0)
    } else {
        c1.clamp(*r1.start(), *r1.end())
    };

    [
        c1,
        c2.clamp(*r2.start(), *r2.end()),
        c3.clamp(*r3.start(), *r3.end()),
    ]
}

/// The absolute error tolerated by [`is_rgb_in_range`].
const RGB_TOLERANCE: Float = 1e-3;

/// Determine whether the RGB coordinates are within `0..=255`, give or take
/// floating point error.
///
/// Unlike [`in_gamut`], this predicate tolerates coordinates that are out of
/// range by at most 0.001. Colors that went through XYZ accumulate a small
/// error on the way. White, for example, converted to L\*a\*b\* and back has
/// a green coordinate of 255.000017. Anything further out, e.g., the 255.255
/// produced by HSV with a value of 100.1, is out of range.
pub(crate) fn is_rgb_in_range(coordinates: &[Float; 3]) -> bool {
    coordinates
        .iter()
        .all(|c| -RGB_TOLERANCE <= *c && *c <= 255.0 + RGB_TOLERANCE)
}

/// Convert the RGB coordinates to 24-bit representation.
///
/// This function clamps coordinates to `0..=255` before rounding them to the
/// nearest integer. Not-a-number becomes zero.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    // Float-to-int casts saturate and map not-a-number to zero.
    let [r, g, b] = *coordinates;
    [
        r.clamp(0.0, 255.0).round() as u8,
        g.clamp(0.0, 255.0).round() as u8,
        b.clamp(0.0, 255.0).round() as u8,
    ]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{clip, in_gamut, is_rgb_in_range, to_24bit};
    use crate::core::{assert_same_coordinates, convert, ColorSpace::*};
    use crate::Float;

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(Rgb, &[0.0, 128.0, 255.0]));
        assert!(!in_gamut(Rgb, &[-0.1, 128.0, 255.0]));
        assert!(!in_gamut(Rgb, &[0.0, 128.0, 255.1]));
        assert!(in_gamut(Hsv, &[720.5, 100.0, 0.0]));
        assert!(!in_gamut(Hsv, &[10.0, 100.5, 0.0]));
        assert!(in_gamut(Lab, &[100.0, -128.0, 127.0]));
        assert!(!in_gamut(Lab, &[100.0, 127.5, 0.0]));
        assert!(!in_gamut(Rgb, &[Float::NAN, 0.0, 0.0]));
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip(Rgb, &[-12.0, 300.0, 17.5]), [0.0, 255.0, 17.5]);
        assert_eq!(clip(Hsv, &[-10.0, 150.0, -3.0]), [350.0, 100.0, 0.0]);
        assert_eq!(clip(Lab, &[101.0, -200.0, 200.0]), [100.0, -128.0, 127.0]);
        assert_eq!(
            clip(Xyz, &[100.0, 100.0, 100.0]),
            [95.047, 100.0, 100.0]
        );
    }

    #[test]
    fn test_gamut() {
        // A very saturated L*a*b* color is out of gamut for RGB.
        let rgb = convert(Lab, Rgb, &[100.0, 127.0, 127.0]);
        assert!(!in_gamut(Rgb, &rgb));
        assert!(!is_rgb_in_range(&rgb));

        let clipped = clip(Rgb, &rgb);
        assert!(in_gamut(Rgb, &clipped));
        assert_same_coordinates!(Rgb, &clipped, &[255.0, 70.17326498654981, 0.0]);
        assert_eq!(to_24bit(&rgb), [255, 70, 0]);

        // White survives the round trip through L*a*b*, if barely.
        let white = convert(Lab, Rgb, &convert(Rgb, Lab, &[255.0, 255.0, 255.0]));
        assert!(!in_gamut(Rgb, &white));
        assert!(is_rgb_in_range(&white));
        assert_eq!(to_24bit(&white), [255, 255, 255]);
    }

    #[test]
    fn test_rgb_in_range() {
        // A value just above 100% pushes red above 255, if only by a little.
        let rgb = convert(Hsv, Rgb, &[0.0, 100.0, 100.1]);
        assert!(rgb[0] > 255.0);
        assert!(!in_gamut(Rgb, &rgb));
        assert!(!is_rgb_in_range(&rgb));

        assert!(is_rgb_in_range(&[0.0, 255.0, 255.0005]));
        assert!(is_rgb_in_range(&[-0.0005, 128.0, 255.0]));
        assert!(!is_rgb_in_range(&[-0.01, 128.0, 255.0]));
        assert!(!is_rgb_in_range(&[0.0, 255.4, 0.0]));
        assert!(!is_rgb_in_range(&[Float::NAN, 0.0, 0.0]));
    }

    #[test]
    fn test_to_24bit() {
        assert_eq!(to_24bit(&[-127.5, 127.5, 306.0]), [0, 128, 255]);
        assert_eq!(to_24bit(&[Float::NAN, 0.49, 254.5]), [0, 0, 255]);
    }
}
