use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let width = s.len() / 3;
        let t = s
            .get(1 + width * index..1 + width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if width == 1 { 16 * n + n } else { n })
    }

    Ok([
        parse_coordinate(s, 0)?,
        parse_coordinate(s, 1)?,
        parse_coordinate(s, 2)?,
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in functional notation, e.g., `hsv(210 40 75)` or `lab(50,
/// -20, 30)`. Coordinates are unitless and separated by white space or
/// commas.
fn parse_functional(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    // Munge function name
    let (space, rest) = [
        ColorSpace::Rgb,
        ColorSpace::Hsv,
        ColorSpace::Xyz,
        ColorSpace::Lab,
    ]
    .into_iter()
    .find_map(|space| s.strip_prefix(space.prefix()).map(|rest| (space, rest)))
    .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading white space
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    #[inline]
    fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
        s.ok_or(ColorFormatError::MissingCoordinate)
            .and_then(|t| t.parse().map_err(|_| ColorFormatError::MalformedFloat))
    }

    // Munge coordinates. A comma is just another separator.
    let mut iter = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok((space, [c1, c2, c3]))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes the three and six digit hashed hexadecimal
/// formats for RGB as well as the functional notation `rgb()`, `hsv()`,
/// `xyz()`, and `lab()` with three unitless coordinates. Before parsing, it
/// trims leading and trailing white space and converts ASCII letters to
/// lowercase.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let [c1, c2, c3] = parse_hashed(s)?;
        Ok((
            ColorSpace::Rgb,
            [c1 as Float, c2 as Float, c3 as Float],
        ))
    } else {
        parse_functional(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The largest number of digits past the decimal honored by [`format`].
const MAX_PRECISION: usize = 15;

/// Format the color as a string.
///
/// This function formats the given coordinates for the given color space in
/// functional notation with space-separated arguments. It respects the
/// formatter's precision, defaulting to 5 digits past the decimal, but omits
/// trailing zeros. Precisions larger than 15 are treated as 15.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(space.prefix())?;
    f.write_str("(")?;

    let precision = f.precision().unwrap_or(5).min(MAX_PRECISION);
    let factor = (10.0 as Float).powi(precision as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            f.write_str("none")?;
        } else {
            // Formatting floats with a precision produces trailing zeros.
            // Rounding avoids them, for the most part. If fractional part is
            // zero, we do need an explicit precision---of zero!
            let mut c = (coordinate * factor).round() / factor;
            if c == 0.0 {
                c = 0.0; // No negative zero
            }
            if c == c.trunc() {
                f.write_fmt(format_args!("{:.0}", c))?;
            } else {
                f.write_fmt(format_args!("{}", c))?;
            }
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================
