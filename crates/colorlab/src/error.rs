//! Utility module with colorlab's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{ColorSpace, Float};

/// An erroneous color format.
///
/// The variants carry no further state, since PyO3 only supports unit
/// variants. The attendant loss of information is rather limited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that starts with neither `#` nor the name of a known
    /// color space, e.g., `oklab(1 2 3)`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A functional color format without the opening parenthesis. For
    /// example, `rgb 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For
    /// example, `lab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// The name of an unknown color space, e.g., `cmyk`.
    UnknownColorSpace,

    /// A color format that is missing a coordinate. For example, `hsv(10 20)`
    /// is missing the third coordinate.
    MissingCoordinate,

    /// A hashed color format with a malformed hexadecimal number, e.g.,
    /// `#efg`.
    MalformedHex,

    /// A functional color format with a malformed floating point number, e.g.,
    /// `xyz(1.0 0..1 0.0)`.
    MalformedFloat,

    /// A functional color format with more than three coordinates, e.g.,
    /// `rgb(1 2 3 4)`.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `rgb()`, `hsv()`, `xyz()`, or `lab()`",
            ),
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace => f.write_str(
                "color space should be one of `rgb`, `hsv`, `xyz`, or `lab` but is not",
            ),
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates but has more")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An out-of-gamut error.
///
/// This error indicates that a color converted to RGB has at least one
/// coordinate outside `0..=255` and hence cannot be displayed without loss.
/// Since the corrected, i.e., clamped and rounded, 24-bit color is usually
/// good enough, the error includes it along with the raw RGB coordinates and
/// the original color space.
#[derive(Clone, Debug, PartialEq)]
pub struct OutOfGamutError {
    pub space: ColorSpace,
    pub rgb: [Float; 3],
    pub clamped: [u8; 3],
}

impl std::fmt::Display for OutOfGamutError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [r, g, b] = self.clamped;
        f.write_fmt(format_args!(
            "{} → RGB: value out of range [0,255], corrected to #{:02x}{:02x}{:02x}",
            self.space, r, g, b
        ))
    }
}

impl std::error::Error for OutOfGamutError {}

#[cfg(feature = "pyffi")]
impl From<OutOfGamutError> for PyErr {
    fn from(value: OutOfGamutError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, OutOfGamutError};
    use crate::ColorSpace;

    #[test]
    fn test_messages() {
        let error = OutOfGamutError {
            space: ColorSpace::Lab,
            rgb: [489.9, 70.2, 0.0],
            clamped: [255, 70, 0],
        };
        assert_eq!(
            error.to_string(),
            "L*a*b* → RGB: value out of range [0,255], corrected to #ff4600"
        );

        assert!(ColorFormatError::UnknownColorSpace
            .to_string()
            .contains("`lab`"));
    }
}
