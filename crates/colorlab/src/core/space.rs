use std::ops::RangeInclusive;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::conversion::{REF_X, REF_Y, REF_Z};
use crate::error::ColorFormatError;
use crate::Float;

/// The enumeration of supported color spaces.
///
/// The four color spaces form a small tree rooted in XYZ. RGB and L\*a\*b\*
/// convert to and from XYZ directly, whereas HSV is a cylindrical
/// reparametrization of RGB and hence reaches XYZ through RGB.
///
/// # RGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) with gamma-corrected red,
/// green, and blue coordinates. In-gamut coordinates range `0..=255`, just
/// like 24-bit colors, but they are floating point numbers and hence need not
/// be integral.
///
/// # HSV
///
/// Hue, saturation, and value, i.e., the familiar color picker coordinates.
/// The hue is an angle in degrees and wraps around, so that 370º is the same
/// as 10º and -10º is the same as 350º. Saturation and value are percentages
/// ranging `0..=100`. For gray tones, the hue is meaningless and, by
/// convention, zero.
///
/// # XYZ
///
/// The [CIE 1931](https://en.wikipedia.org/wiki/CIE_1931_color_space)
/// tristimulus values for the D65 standard illuminant and the 2º standard
/// observer, scaled so that the reference white has a Y of 100.
///
/// # L\*a\*b\*
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) relative to
/// the D65 reference white. Lightness L ranges `0..=100`, whereas the a and b
/// coordinates nominally range `-128..=127`.
///
/// None of the conversions enforce these ranges. They only become relevant
/// when displaying colors, as determined by [`ColorSpace::nominal_ranges`].
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorlab")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsv,
    Xyz,
    Lab,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// HSV is the only polar color space, with its hue as the angle.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsv)
    }

    /// Determine whether this color space is RGB.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Rgb)
    }

    /// Determine whether this color space is XYZ.
    pub const fn is_xyz(&self) -> bool {
        matches!(*self, Self::Xyz)
    }

    /// Determine whether this color space is L\*a\*b\*.
    pub const fn is_lab(&self) -> bool {
        matches!(*self, Self::Lab)
    }

    /// Determine whether this color space is bounded.
    ///
    /// RGB and HSV describe colors a display can actually show. Hence,
    /// coordinates outside their nominal ranges are out of gamut. XYZ and
    /// L\*a\*b\* are *unbounded* and can model any color, even if their
    /// nominal ranges are used for display purposes.
    pub const fn is_bounded(&self) -> bool {
        matches!(*self, Self::Rgb | Self::Hsv)
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorSpace {
    /// Get the nominal ranges for this color space's coordinates.
    ///
    /// The conversion functions do not check these ranges. They serve the
    /// caller when it comes to clamping coordinates for display or detecting
    /// out-of-gamut colors.
    ///
    /// ```
    /// # use colorlab::ColorSpace;
    /// let [l, a, b] = ColorSpace::Lab.nominal_ranges();
    /// assert_eq!(l, 0.0..=100.0);
    /// assert_eq!(a, -128.0..=127.0);
    /// assert_eq!(b, -128.0..=127.0);
    /// ```
    pub const fn nominal_ranges(&self) -> [RangeInclusive<Float>; 3] {
        match *self {
            Self::Rgb => [0.0..=255.0, 0.0..=255.0, 0.0..=255.0],
            Self::Hsv => [0.0..=360.0, 0.0..=100.0, 0.0..=100.0],
            Self::Xyz => [0.0..=REF_X, 0.0..=REF_Y, 0.0..=REF_Z],
            Self::Lab => [0.0..=100.0, -128.0..=127.0, -128.0..=127.0],
        }
    }

    /// Get the lowercase name used by the functional color notation.
    pub const fn prefix(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Xyz => "XYZ",
            Self::Lab => "L*a*b*",
        };

        f.write_str(s)
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ColorFormatError;

    /// Parse the name of a color space.
    ///
    /// This method recognizes the lowercase names used by the functional
    /// notation, i.e., `rgb`, `hsv`, `xyz`, and `lab`, ignoring ASCII case and
    /// surrounding white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.trim().to_ascii_lowercase();
        [Self::Rgb, Self::Hsv, Self::Xyz, Self::Lab]
            .into_iter()
            .find(|space| space.prefix() == lowercase)
            .ok_or(ColorFormatError::UnknownColorSpace)
    }
}
