use super::{normalize, ColorSpace};
use crate::Float;

/// The X coordinate of the D65 reference white (2º observer).
pub const REF_X: Float = 95.047;
/// The Y coordinate of the D65 reference white (2º observer).
pub const REF_Y: Float = 100.000;
/// The Z coordinate of the D65 reference white (2º observer).
pub const REF_Z: Float = 108.883;

/// The D65 reference white used for conversions between XYZ and L\*a\*b\*.
pub const D65_WHITE: [Float; 3] = [REF_X, REF_Y, REF_Z];

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
///
/// The products are summed left to right without fused multiply-add, so that
/// results agree with other implementations of the same formulae.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0] * vector[0] + row1[1] * vector[1] + row1[2] * vector[2],
        row2[0] * vector[0] + row2[1] * vector[1] + row2[2] * vector[2],
        row3[0] * vector[0] + row3[1] * vector[1] + row3[2] * vector[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB coordinates to HSV. This is a one-hop, direct conversion.
///
/// The RGB coordinates nominally range `0..=255`. The resulting hue is in
/// degrees `0..360`, saturation and value are percentages `0..=100`. For
/// achromatic colors, the hue is zero. Neither input nor output is clamped.
///
/// ```
/// # use colorlab::rgb_to_hsv;
/// assert_eq!(rgb_to_hsv(&[255.0, 0.0, 0.0]), [0.0, 100.0, 100.0]);
/// assert_eq!(rgb_to_hsv(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
/// ```
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = [value[0] / 255.0, value[1] / 255.0, value[2] / 255.0];

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if max == min {
        0.0
    } else if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    // A negligible negative hue rounds up to a full turn.
    let h = if h >= 1.0 { 0.0 } else { h };

    [h * 360.0, s * 100.0, max * 100.0]
}

/// Convert HSV coordinates to RGB. This is a one-hop, direct conversion.
///
/// The hue may have any magnitude and wraps around, with negative hues
/// wrapping forward. Saturation and value are percentages. The resulting RGB
/// coordinates nominally range `0..=255` but are not clamped: A saturation or
/// value outside `0..=100` produces out-of-range coordinates, which callers
/// can use to detect out-of-gamut input.
///
/// ```
/// # use colorlab::hsv_to_rgb;
/// assert_eq!(hsv_to_rgb(&[370.0, 50.0, 80.0]), hsv_to_rgb(&[10.0, 50.0, 80.0]));
/// assert_eq!(hsv_to_rgb(&[-10.0, 50.0, 80.0]), hsv_to_rgb(&[350.0, 50.0, 80.0]));
/// ```
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let h = value[0].rem_euclid(360.0);
    let s = value[1] / 100.0;
    let v = value[2] / 100.0;

    // rem_euclid may round up to 360.0 for tiny negative hues, which lands in
    // sector 6 with fraction 0. That is the same color as sector 0.
    let h60 = h / 60.0;
    let sector = h60.floor();
    let f = h60 - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let [r, g, b] = match sector as i64 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    [r * 255.0, g * 255.0, b * 255.0]
}

// --------------------------------------------------------------------------------------------------------------------

/// Remove sRGB's gamma from unit-range coordinates.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value > 0.04045 {
            ((value + 0.055) / 1.055).powf(2.4)
        } else {
            value / 12.92
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Apply sRGB's gamma to unit-range linear coordinates.
///
/// Negative linear coordinates are clamped to zero first, since the power
/// function is undefined for them.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let value = value.max(0.0);
        if value > 0.0031308 {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        } else {
            12.92 * value
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.0721750 ],
    [ 0.0193339, 0.1191920, 0.9503041 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert RGB coordinates to XYZ. This is a one-hop conversion, even though
/// it removes the gamma before the linear transform.
///
/// The RGB coordinates nominally range `0..=255`, the resulting XYZ
/// coordinates are scaled so that white has a Y of 100.
///
/// ```
/// # use colorlab::rgb_to_xyz;
/// let [x, y, z] = rgb_to_xyz(&[255.0, 0.0, 0.0]);
/// assert!((x - 41.24564).abs() < 1e-9);
/// assert!((y - 21.26729).abs() < 1e-9);
/// assert!((z - 1.93339).abs() < 1e-9);
/// ```
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear = rgb_to_linear_rgb(&[value[0] / 255.0, value[1] / 255.0, value[2] / 255.0]);
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &linear);
    [x * 100.0, y * 100.0, z * 100.0]
}

/// Convert XYZ coordinates to RGB. This is a one-hop conversion, even though
/// it applies the gamma after the linear transform.
///
/// Linear coordinates are clamped to be non-negative before applying the
/// gamma. The resulting RGB coordinates are *not* clamped to `0..=255`, so
/// that XYZ coordinates outside the sRGB gamut produce detectably
/// out-of-range results.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn xyz_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let linear = multiply(
        &XYZ_TO_LINEAR_SRGB,
        &[value[0] / 100.0, value[1] / 100.0, value[2] / 100.0],
    );
    let [r, g, b] = linear_rgb_to_rgb(&linear);
    [r * 255.0, g * 255.0, b * 255.0]
}

// --------------------------------------------------------------------------------------------------------------------

mod cielab {
    use crate::Float;

    /// The threshold between the linear segment and the cube root.
    pub(super) const EPSILON: Float = 0.008856;
    /// The slope of the linear segment.
    pub(super) const KAPPA: Float = 7.787;
    /// The offset of the linear segment.
    pub(super) const OFFSET: Float = 16.0 / 116.0;

    /// The forward nonlinearity.
    #[inline]
    pub(super) fn f(t: Float) -> Float {
        if t > EPSILON {
            t.powf(1.0 / 3.0)
        } else {
            KAPPA * t + OFFSET
        }
    }

    /// The inverse nonlinearity.
    #[inline]
    pub(super) fn f_inverse(t: Float) -> Float {
        let t3 = t * t * t;
        if t3 > EPSILON {
            t3
        } else {
            (t - OFFSET) / KAPPA
        }
    }
}

/// Convert XYZ coordinates to L\*a\*b\*. This is a one-hop, direct conversion.
///
/// The conversion is relative to the [D65 reference white](D65_WHITE), which
/// maps to L=100, a=0, b=0. Near zero, it uses the CIE's linear approximation
/// of the cube root.
///
/// ```
/// # use colorlab::{xyz_to_lab, D65_WHITE};
/// let [l, a, b] = xyz_to_lab(&D65_WHITE);
/// assert!((l - 100.0).abs() < 1e-9);
/// assert!(a.abs() < 1e-9 && b.abs() < 1e-9);
/// ```
#[allow(non_snake_case)]
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let fx = cielab::f(value[0] / REF_X);
    let fy = cielab::f(value[1] / REF_Y);
    let fz = cielab::f(value[2] / REF_Z);

    let L = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [L, a, b]
}

/// Convert L\*a\*b\* coordinates to XYZ. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let fy = (L + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    [
        REF_X * cielab::f_inverse(fx),
        REF_Y * cielab::f_inverse(fy),
        REF_Z * cielab::f_inverse(fz),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB coordinates to L\*a\*b\*. This is a two-hop conversion through
/// XYZ.
///
/// ```
/// # use colorlab::rgb_to_lab;
/// let [l, a, b] = rgb_to_lab(&[0.0, 0.0, 0.0]);
/// assert!(l.abs() < 1e-9 && a.abs() < 1e-9 && b.abs() < 1e-9);
/// ```
#[inline]
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn rgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let xyz = rgb_to_xyz(value);
    xyz_to_lab(&xyz)
}

/// Convert L\*a\*b\* coordinates to RGB. This is a two-hop conversion through
/// XYZ.
///
/// There is no clamping between the two hops and the result is not clamped
/// either. L\*a\*b\* coordinates outside the sRGB gamut hence produce RGB
/// coordinates outside `0..=255`.
///
/// ```
/// # use colorlab::lab_to_rgb;
/// let [r, g, b] = lab_to_rgb(&[100.0, 127.0, 127.0]);
/// assert!(255.0 < r);
/// ```
#[inline]
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn lab_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let xyz = lab_to_xyz(value);
    xyz_to_rgb(&xyz)
}

/// Convert HSV coordinates to XYZ. This is a two-hop conversion through RGB.
#[inline]
fn hsv_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let rgb = hsv_to_rgb(value);
    rgb_to_xyz(&rgb)
}

/// Convert XYZ coordinates to HSV. This is a two-hop conversion through RGB.
#[inline]
fn xyz_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let rgb = xyz_to_rgb(value);
    rgb_to_hsv(&rgb)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to the targeted color space, which may be the same as the original
/// color space. This function does not check whether the result is in gamut for
/// the targeted color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root XYZ
    match (from_space, to_space) {
        (Rgb, Hsv) => return rgb_to_hsv(&coordinates),
        (Hsv, Rgb) => return hsv_to_rgb(&coordinates),
        _ => (),
    };

    // 3a. Convert from source color space to root XYZ
    let intermediate = match from_space {
        Rgb => rgb_to_xyz(&coordinates),
        Hsv => hsv_to_xyz(&coordinates),
        Lab => lab_to_xyz(&coordinates),
        Xyz => coordinates,
    };

    // 3b. Convert from root XYZ to target color space on different branch
    match to_space {
        Rgb => xyz_to_rgb(&intermediate),
        Hsv => xyz_to_hsv(&intermediate),
        Lab => xyz_to_lab(&intermediate),
        Xyz => intermediate,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, assert_within, ColorSpace::*};
    use crate::Float;

    struct Representations {
        rgb: [Float; 3],
        hsv: [Float; 3],
        xyz: [Float; 3],
        lab: [Float; 3],
    }

    const BLACK: Representations = Representations {
        // #000000
        rgb: [0.0, 0.0, 0.0],
        hsv: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
        lab: [0.0, 0.0, 0.0],
    };

    const RED: Representations = Representations {
        // #ff0000
        rgb: [255.0, 0.0, 0.0],
        hsv: [0.0, 100.0, 100.0],
        xyz: [41.24564, 21.26729, 1.93339],
        lab: [53.24079414130722, 80.09245959641109, 67.20319651585301],
    };

    const STEEL_BLUE: Representations = Representations {
        // #3399cc
        rgb: [51.0, 153.0, 204.0],
        hsv: [200.0, 75.0, 80.0],
        xyz: [23.65120828869133, 27.84311540714085, 61.24278676310075],
        lab: [59.74673745110421, -12.00349334124029, -34.495034241056445],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        rgb: [255.0, 255.0, 255.0],
        hsv: [0.0, 0.0, 100.0],
        xyz: [95.047, 100.00001, 108.883],
        lab: [
            100.00000386666655,
            -1.6666666158293708e-05,
            6.666666463317483e-06,
        ],
    };

    #[test]
    fn test_conversions() {
        for &color in [&BLACK, &RED, &STEEL_BLUE, &WHITE].iter() {
            let hsv = rgb_to_hsv(&color.rgb);
            assert_same_coordinates!(Hsv, &hsv, &color.hsv);

            let rgb = hsv_to_rgb(&hsv);
            assert_same_coordinates!(Rgb, &rgb, &color.rgb);

            let xyz = rgb_to_xyz(&color.rgb);
            assert_same_coordinates!(Xyz, &xyz, &color.xyz);

            let lab = xyz_to_lab(&xyz);
            assert_same_coordinates!(Lab, &lab, &color.lab);

            let also_xyz = lab_to_xyz(&lab);
            assert_within!(&also_xyz, &xyz, 1e-9);

            let also_rgb = xyz_to_rgb(&xyz);
            assert_within!(&also_rgb, &color.rgb, 1e-3);

            assert_same_coordinates!(Lab, &rgb_to_lab(&color.rgb), &color.lab);
            assert_within!(&lab_to_rgb(&color.lab), &color.rgb, 1e-3);
        }
    }

    #[test]
    fn test_fixed_points() {
        assert_same_coordinates!(Hsv, &rgb_to_hsv(&[255.0, 255.0, 255.0]), &[0.0, 0.0, 100.0]);
        assert_same_coordinates!(Hsv, &rgb_to_hsv(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0]);
        assert_same_coordinates!(Hsv, &rgb_to_hsv(&[255.0, 0.0, 0.0]), &[0.0, 100.0, 100.0]);
        assert_same_coordinates!(Hsv, &rgb_to_hsv(&[0.0, 255.0, 0.0]), &[120.0, 100.0, 100.0]);
        assert_same_coordinates!(Hsv, &rgb_to_hsv(&[0.0, 0.0, 255.0]), &[240.0, 100.0, 100.0]);

        assert_within!(&xyz_to_lab(&D65_WHITE), &[100.0, 0.0, 0.0], 1e-9);
        assert_within!(&rgb_to_lab(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0], 1e-9);
        assert_within!(&lab_to_rgb(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0], 1e-9);
    }

    #[test]
    fn test_hue_with_blue_below_green_and_red_maximum() {
        // Magenta-ish red, where g < b adds a full turn.
        assert_same_coordinates!(Hsv, &rgb_to_hsv(&[255.0, 0.0, 51.0]), &[348.0, 100.0, 100.0]);

        // So little blue that adding the full turn yields exactly 360º.
        let [h, s, v] = rgb_to_hsv(&[255.0, 0.0, 1e-14]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 100.0);
        assert_eq!(v, 100.0);
    }

    #[test]
    fn test_hue_wraparound() {
        assert_eq!(hsv_to_rgb(&[370.0, 50.0, 80.0]), hsv_to_rgb(&[10.0, 50.0, 80.0]));
        assert_eq!(hsv_to_rgb(&[-10.0, 50.0, 80.0]), hsv_to_rgb(&[350.0, 50.0, 80.0]));
        assert_eq!(hsv_to_rgb(&[720.0, 50.0, 80.0]), hsv_to_rgb(&[0.0, 50.0, 80.0]));
        assert_same_coordinates!(Rgb, &hsv_to_rgb(&[10.0, 50.0, 80.0]), &[204.0, 119.0, 102.0]);
        assert_same_coordinates!(Rgb, &hsv_to_rgb(&[350.0, 50.0, 80.0]), &[204.0, 102.0, 119.0]);

        // A tiny negative hue wraps to just about 360º, i.e., red.
        assert_within!(&hsv_to_rgb(&[-1e-20, 100.0, 100.0]), &[255.0, 0.0, 0.0], 1e-9);
    }

    #[test]
    fn test_unclamped_results() {
        // Saturation above 100% pushes components below zero.
        assert_same_coordinates!(Rgb, &hsv_to_rgb(&[0.0, 150.0, 100.0]), &[255.0, -127.5, -127.5]);

        // Value above 100% pushes components above 255.
        assert_same_coordinates!(Rgb, &hsv_to_rgb(&[30.0, 100.0, 120.0]), &[306.0, 153.0, 0.0]);

        // Out-of-gamut L*a*b* and XYZ, with negative linear values clamped before gamma.
        let [r, g, b] = lab_to_rgb(&[100.0, 127.0, 127.0]);
        assert!(255.0 < r, "red {} should exceed 255", r);
        assert_eq!(b, 0.0);
        assert!((0.0..=255.0).contains(&g));

        let [r, g, _] = xyz_to_rgb(&[150.0, 10.0, 10.0]);
        assert!(255.0 < r, "red {} should exceed 255", r);
        assert_eq!(g, 0.0);
    }

    #[test]
    fn test_linear_segments() {
        // Below the gamma threshold, the transfer functions are linear.
        let [r, _, _] = rgb_to_linear_rgb(&[0.04, 0.0, 0.0]);
        assert_eq!(r, 0.04 / 12.92);
        let [r, _, _] = linear_rgb_to_rgb(&[0.003, 0.0, 0.0]);
        assert_eq!(r, 12.92 * 0.003);
        let [r, _, _] = linear_rgb_to_rgb(&[-0.5, 0.0, 0.0]);
        assert_eq!(r, 0.0);

        // Below the CIE threshold, the cube root is approximated linearly.
        assert_eq!(cielab::f(0.008), 7.787 * 0.008 + 16.0 / 116.0);
        assert_eq!(cielab::f(0.0), 16.0 / 116.0);
        assert_eq!(cielab::f_inverse(16.0 / 116.0), 0.0);
    }

    #[test]
    fn test_convert() {
        let rgb = STEEL_BLUE.rgb;
        assert_eq!(convert(Rgb, Rgb, &rgb), rgb);
        assert_eq!(convert(Rgb, Hsv, &rgb), rgb_to_hsv(&rgb));
        assert_eq!(convert(Rgb, Xyz, &rgb), rgb_to_xyz(&rgb));
        assert_eq!(convert(Rgb, Lab, &rgb), rgb_to_lab(&rgb));

        let hsv = STEEL_BLUE.hsv;
        assert_eq!(convert(Hsv, Rgb, &hsv), hsv_to_rgb(&hsv));
        assert_eq!(convert(Hsv, Lab, &hsv), rgb_to_lab(&hsv_to_rgb(&hsv)));
        assert_eq!(convert(Hsv, Xyz, &hsv), rgb_to_xyz(&hsv_to_rgb(&hsv)));

        let lab = STEEL_BLUE.lab;
        assert_eq!(convert(Lab, Rgb, &lab), lab_to_rgb(&lab));
        assert_eq!(convert(Lab, Hsv, &lab), rgb_to_hsv(&lab_to_rgb(&lab)));
        assert_eq!(convert(Lab, Xyz, &lab), lab_to_xyz(&lab));
        assert_eq!(convert(Xyz, Lab, &STEEL_BLUE.xyz), xyz_to_lab(&STEEL_BLUE.xyz));

        // Not-a-number is treated as zero.
        assert_eq!(convert(Rgb, Hsv, &[Float::NAN, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }
}
