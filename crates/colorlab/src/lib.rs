//! # Colorlab
//!
//! Colorlab converts colors between four color spaces, sRGB, HSV, CIE XYZ,
//! and CIE L\*a\*b\*.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature to also document the Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Colorlab offers two complementary interfaces:
//!
//!   * Eight **conversion functions**, [`rgb_to_hsv`], [`hsv_to_rgb`],
//!     [`rgb_to_xyz`], [`xyz_to_rgb`], [`xyz_to_lab`], [`lab_to_xyz`],
//!     [`rgb_to_lab`], and [`lab_to_rgb`], which map a coordinate triple to
//!     another coordinate triple. They are pure, total, and deterministic.
//!     They neither clamp nor round their results, with one exception: when
//!     converting from XYZ to RGB, negative linear components become zero.
//!   * [`Color`] combines a [`ColorSpace`] with three [`Float`] coordinates.
//!     Its methods convert between color spaces, detect and correct
//!     out-of-gamut colors, and parse and format colors as strings.
//!
//! All conversions share the D65 reference white [`D65_WHITE`].
//!
//! ```
//! # use colorlab::{rgb_to_hsv, Color, ColorSpace};
//! let [h, s, v] = rgb_to_hsv(&[255.0, 0.0, 51.0]);
//! assert_eq!((h, s, v), (348.0, 100.0, 100.0));
//!
//! let steel = Color::rgb(51, 153, 204);
//! assert_eq!(steel.to(ColorSpace::Hsv), Color::hsv(200, 75, 80));
//! assert_eq!(steel.to_hex_format(), "#3399cc");
//! ```
//!
//!
//! ## 2. Coordinate Ranges
//!
//! | Space  | Coordinate 1      | Coordinate 2       | Coordinate 3       |
//! |--------|-------------------|--------------------|--------------------|
//! | RGB    | r `0..=255`       | g `0..=255`        | b `0..=255`        |
//! | HSV    | h `0..360`, wraps | s `0..=100`        | v `0..=100`        |
//! | XYZ    | x `0..≈95.047`    | y `0..≈100`        | z `0..≈108.883`    |
//! | L\*a\*b\* | L `0..=100`    | a `≈-128..=127`    | b `≈-128..=127`    |
//!
//! Only RGB and HSV are bounded. Callers decide what to do with out-of-range
//! results, e.g., with [`Color::clip`] or [`Color::to_24bit_checked`].
//!
//!
//! ## 3. Optional Features
//!
//!   - **`pyffi`** controls colorlab's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Python
//! are decorated with <i class=python-only>Python only!</i>.

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod core;
pub mod error;
mod object;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{
    hsv_to_rgb, lab_to_rgb, lab_to_xyz, rgb_to_hsv, rgb_to_lab, rgb_to_xyz, xyz_to_lab,
    xyz_to_rgb, ColorSpace, D65_WHITE, REF_X, REF_Y, REF_Z,
};
pub use object::Color;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[cfg(feature = "pyffi")]
mod pyffi {
    //! The eight conversion functions, wrapped for Python. They accept and
    //! return 3-tuples.
    use pyo3::prelude::*;

    use crate::Float;

    type Triple = (Float, Float, Float);

    macro_rules! wrap_conversion {
        ($($name:ident => $target:path),* $(,)?) => {
            $(
                #[pyfunction]
                pub fn $name(value: Triple) -> Triple {
                    let [c1, c2, c3] = $target(&[value.0, value.1, value.2]);
                    (c1, c2, c3)
                }
            )*
        };
    }

    wrap_conversion!(
        rgb_to_hsv => crate::rgb_to_hsv,
        hsv_to_rgb => crate::hsv_to_rgb,
        rgb_to_xyz => crate::rgb_to_xyz,
        xyz_to_rgb => crate::xyz_to_rgb,
        xyz_to_lab => crate::xyz_to_lab,
        lab_to_xyz => crate::lab_to_xyz,
        rgb_to_lab => crate::rgb_to_lab,
        lab_to_rgb => crate::lab_to_rgb,
    );
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorlab(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;

    m.add_function(wrap_pyfunction!(pyffi::rgb_to_hsv, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::hsv_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::rgb_to_xyz, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::xyz_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::xyz_to_lab, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::lab_to_xyz, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::rgb_to_lab, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::lab_to_rgb, m)?)?;

    m.add("D65_WHITE", (REF_X, REF_Y, REF_Z))?;

    Ok(())
}
