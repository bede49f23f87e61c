use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clip, convert, format, in_gamut, is_achromatic, is_rgb_in_range, normalize, parse, to_24bit,
    to_eq_coordinates, ColorSpace,
};
use crate::error::{ColorFormatError, OutOfGamutError};
use crate::Float;

/// Create a new RGB color from integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. Unlike that function, it also is safe to use in const
/// expressions, since it only casts the coordinates before handing them to the
/// const constructor.
///
/// ```
/// # use colorlab::{rgb, Color, ColorSpace};
/// const TANGERINE: Color = rgb!(0xff, 0x93, 0x00);
/// assert_eq!(TANGERINE.space(), ColorSpace::Rgb);
/// assert_eq!(TANGERINE.as_ref(), &[255.0, 147.0, 0.0]);
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Rgb,
            [$r as $crate::Float, $g as $crate::Float, $b as $crate::Float],
        )
    };
}

/// A color object.
///
/// Every color object has a [color space](ColorSpace) and three coordinates.
/// Color objects are immutable values. Conversions and the other
/// transformations all return new color objects.
///
/// # Color Coordinates
///
/// For RGB and HSV, the coordinates of in-gamut colors fall into the nominal
/// ranges documented for [`ColorSpace`]. XYZ and L\*a\*b\* have no gamut
/// bounds. Conversions never clamp, so that converting a highly saturated
/// L\*a\*b\* color to RGB may very well produce coordinates larger than 255.
/// [`Color::in_gamut`], [`Color::clip`], and [`Color::to_24bit_checked`] help
/// with detecting and correcting such colors.
///
/// # Equality Testing and Hashing
///
/// Equal colors must have equal hashes. Hence this class prepares coordinates
/// for either operation by replacing not-a-numbers with zero, wrapping the
/// hue of HSV into `0..360` and scaling it to unit range, rounding to nine
/// digits past the decimal, and replacing negative with positive zero.
///
/// # Coordinate Access
///
/// Both Rust and Python code can access individual coordinates by indexing a
/// color object with integers `0..2`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "colorlab")
)]
#[derive(Clone, Copy)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // The constructors come in pairs, once for pyffi and once without, since
    // the #[new] and #[staticmethod] attributes do not work with #[cfg_attr()].

    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Hsv, [330.0, 60.0, 100.0]);
    /// assert_eq!(pink.as_ref(), &[330.0, 60.0, 100.0]);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Hsv, [330.0, 60.0, 100.0]);
    /// assert_eq!(pink.as_ref(), &[330.0, 60.0, 100.0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as `Color`'s [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, ColorFormatError> {
        Color::from_str(s)
    }

    /// Instantiate a new RGB color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn rgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Rgb, [r, g, b])
    }

    /// Instantiate a new HSV color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn hsv(h: Float, s: Float, v: Float) -> Self {
        Self::new(ColorSpace::Hsv, [h, s, v])
    }

    /// Instantiate a new XYZ color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn xyz(x: Float, y: Float, z: Float) -> Self {
        Self::new(ColorSpace::Xyz, [x, y, z])
    }

    /// Instantiate a new L\*a\*b\* color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn lab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Lab, [l, a, b])
    }

    /// Instantiate a new RGB color from its 24-bit representation.
    ///
    /// The [`rgb`] macro does the same thing but is safe to use inside const
    /// expressions.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::rgb(255, 147, 0));
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Rgb, [r as Float, g as Float, b as Float])
    }

    /// Instantiate a new RGB color from its 24-bit representation.
    ///
    /// The [`rgb`] macro does the same thing but is safe to use inside const
    /// expressions.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::rgb(255, 147, 0));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Rgb, [r as Float, g as Float, b as Float])
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    ///
    /// Unlike [`AsRef<[Float;3]> as Color`](struct.Color.html), this method
    /// returns the coordinates by value instead of reference.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        3
    }

    /// Read coordinates by index. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -3..=-1 => Ok(self.coordinates[(3 + index) as usize]),
            0..=2 => Ok(self.coordinates[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Determine whether this color is achromatic, i.e., a gray tone.
    ///
    /// A color is achromatic if its saturation in HSV is zero. Since
    /// conversions through XYZ do not round-trip exactly, this method tolerates
    /// a minuscule saturation.
    ///
    /// ```
    /// # use colorlab::Color;
    /// assert!(Color::rgb(128, 128, 128).is_achromatic());
    /// assert!(Color::lab(50, 0, 0).is_achromatic());
    /// assert!(!Color::lab(50, 20, 0).is_achromatic());
    /// ```
    pub fn is_achromatic(&self) -> bool {
        is_achromatic(self.space, &self.coordinates)
    }

    /// Normalize this color by replacing not-a-number coordinates with zero.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self::new(self.space, normalize(self.space, &self.coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to the target color space.
    ///
    /// Conversions between RGB and HSV are direct. All other conversions go
    /// through XYZ, the root of the conversion tree. Not-a-number coordinates
    /// are treated as zero. The result is neither clamped nor rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let crimson = Color::rgb(255, 0, 51);
    /// assert_eq!(crimson.to(ColorSpace::Hsv), Color::hsv(348, 100, 100));
    ///
    /// let white = Color::rgb(255, 255, 255).to(ColorSpace::Xyz);
    /// assert!((white[1] - 100.0).abs() < 1e-3);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    /// Determine whether this color is in-gamut for its color space.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let red = Color::rgb(255, 0, 0);
    /// assert!(red.in_gamut());
    ///
    /// let hot = Color::lab(100, 127, 127);
    /// assert!(hot.in_gamut());
    /// assert!(!hot.to(ColorSpace::Rgb).in_gamut());
    /// ```
    #[inline]
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space, &self.coordinates)
    }

    /// Clip this color to the gamut of its color space.
    ///
    /// The very saturated L\*a\*b\* color in the example is out of gamut for
    /// RGB. Clipping the converted color brings it into gamut, though the
    /// result is only a rough match for the original color.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let too_hot = Color::lab(100, 127, 127).to(ColorSpace::Rgb);
    /// assert!(!too_hot.in_gamut());
    ///
    /// let hot = too_hot.clip();
    /// assert!(hot.in_gamut());
    /// assert_eq!(hot[0], 255.0);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        Self::new(self.space, clip(self.space, &self.coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to RGB before clamping each coordinate
    /// to `0..=255` and rounding it to the nearest `u8`.
    ///
    /// ```
    /// # use colorlab::Color;
    /// assert_eq!(Color::hsv(200, 75, 80).to_24bit(), [51, 153, 204]);
    /// assert_eq!(Color::lab(100, 127, 127).to_24bit(), [255, 70, 0]);
    /// ```
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(self.to(ColorSpace::Rgb).as_ref())
    }

    /// Convert this color to 24-bit RGB representation, detecting
    /// out-of-gamut colors.
    ///
    /// Like [`Color::to_24bit`], this method converts the color to RGB before
    /// clamping and rounding its coordinates. However, if any RGB coordinate
    /// falls outside `0..=255`, this method returns an [`OutOfGamutError`]
    /// instead. The error still carries the corrected color. Coordinates that
    /// are out of range by no more than 0.001 count as floating point error
    /// and are accepted.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// assert_eq!(Color::rgb(255, 255, 255).to(ColorSpace::Lab).to_24bit_checked(),
    ///     Ok([255, 255, 255]));
    ///
    /// let error = Color::hsv(0, 100, 100.1).to_24bit_checked().unwrap_err();
    /// assert_eq!(error.clamped, [255, 0, 0]);
    ///
    /// let error = Color::lab(100, 127, 127).to_24bit_checked().unwrap_err();
    /// assert_eq!(error.space, ColorSpace::Lab);
    /// assert_eq!(error.clamped, [255, 70, 0]);
    /// ```
    pub fn to_24bit_checked(&self) -> Result<[u8; 3], OutOfGamutError> {
        let rgb = self.to(ColorSpace::Rgb);
        let clamped = to_24bit(rgb.as_ref());

        if is_rgb_in_range(rgb.as_ref()) {
            Ok(clamped)
        } else {
            Err(OutOfGamutError {
                space: self.space,
                rgb: rgb.coordinates,
                clamped,
            })
        }
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal
    /// representation.
    ///
    /// ```
    /// # use colorlab::Color;
    /// assert_eq!(Color::rgb(51, 153, 204).to_hex_format(), "#3399cc");
    /// ```
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Use separate block, so that methods are not exposed to Python.
// Use cfg(), so that methods are not documented again.
#[cfg(not(feature = "pyffi"))]
impl Color {
    /// Instantiate a new RGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let fire_brick = Color::rgb(177, 31, 36);
    /// assert_eq!(fire_brick.space(), ColorSpace::Rgb);
    /// ```
    pub fn rgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Rgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new HSV color with the given hue, saturation, and value.
    pub fn hsv(h: impl Into<Float>, s: impl Into<Float>, v: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Hsv, [h.into(), s.into(), v.into()])
    }

    /// Instantiate a new XYZ color.
    pub fn xyz(x: impl Into<Float>, y: impl Into<Float>, z: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Xyz, [x.into(), y.into(), z.into()])
    }

    /// Instantiate a new L\*a\*b\* color with the given lightness and a/b
    /// coordinates.
    pub fn lab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Lab, [l.into(), a.into(), b.into()])
    }
}

impl Default for Color {
    /// Create an instance of the default color.
    ///
    /// The chosen default is the origin in XYZ, i.e., pitch black.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// let default = Color::default();
    /// assert_eq!(default.space(), ColorSpace::Xyz);
    /// assert_eq!(default.as_ref(), &[0.0, 0.0, 0.0]);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Xyz, [0.0, 0.0, 0.0])
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// This method recognizes the *hashed notation* for RGB colors familiar
    /// from the web, with three or six hexadecimal digits, e.g., `#123` or
    /// `#cafe00`. The three digit version is a short form of the six digit
    /// version with every digit repeated. It also recognizes the *functional
    /// notation* `rgb()`, `hsv()`, `xyz()`, and `lab()` with three unitless
    /// coordinates separated by white space or commas.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// # use colorlab::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::rgb(1, 20, 128));
    ///
    /// let rose: Color = str::parse("HSV(15, 20, 100)")?;
    /// assert_eq!(rose, Color::hsv(15, 20, 100));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates)| Self::new(space, coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Colors in different color spaces are never equal, even if they describe
    /// the same color. Within the same color space, this method compares the
    /// normalized bit strings also used for hashing.
    ///
    /// ```
    /// # use colorlab::{Color, Float};
    /// assert_eq!(Color::rgb(Float::NAN, 0.1 + 0.2, 12), Color::rgb(0, 0.3, 12));
    /// assert_eq!(Color::hsv(370, 50, 50), Color::hsv(10, 50, 50));
    /// assert_ne!(Color::rgb(0, 0, 0), Color::default());
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in functional notation with three
    /// space-separated coordinates. It respects the formatter's precision,
    /// defaulting to 5 digits past the decimal, but omits trailing zeros.
    /// Not-a-number coordinates are formatted as `none`.
    ///
    /// ```
    /// # use colorlab::{Color, ColorSpace};
    /// # use colorlab::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let steel = Color::from_str("#3399cc")?;
    /// assert_eq!(format!("{}", steel), "rgb(51 153 204)");
    /// assert_eq!(format!("{}", steel.to(ColorSpace::Hsv)), "hsv(200 75 80)");
    /// assert_eq!(format!("{:.1}", steel.to(ColorSpace::Lab)), "lab(59.7 -12 -34.5)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================
