mod conversion;
mod equality;
mod gamut;
mod space;
mod string;

// conversion
pub(crate) use conversion::convert;
pub use conversion::{
    hsv_to_rgb, lab_to_rgb, lab_to_xyz, rgb_to_hsv, rgb_to_lab, rgb_to_xyz, xyz_to_lab,
    xyz_to_rgb, D65_WHITE, REF_X, REF_Y, REF_Z,
};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, assert_within, is_within};
pub use equality::to_eq_bits;
pub(crate) use equality::{is_achromatic, normalize, to_eq_coordinates};

// gamut
pub(crate) use gamut::{clip, in_gamut, is_rgb_in_range, to_24bit};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
