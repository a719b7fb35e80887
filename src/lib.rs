//! # zenppm
//!
//! Strict binary PPM (P6) decoder and encoder, plus a small set of in-place
//! pixel transforms.
//!
//! ## Format
//!
//! Only the binary full-color flavor is handled: the `P6` magic, width,
//! height and maximum sample value as decimal tokens separated by
//! whitespace or `#` comments, a single whitespace byte, then exactly
//! `3 * width * height` bytes of row-major R,G,B samples. The maximum
//! sample value must be in `1..=255`.
//!
//! Encoding always writes the canonical header `P6\n{w} {h}\n{max}\n`, so a
//! decode/encode round trip reproduces the samples byte for byte and
//! normalizes header whitespace and comments.
//!
//! ## Transforms
//!
//! [`Transform`] mutates a [`PixelBuffer`] in place: negate, channel
//! rotate, grayscale, contrast scaling, and 180° rotation. Grayscale and
//! contrast truncate toward zero rather than rounding.
//!
//! ## Non-Goals
//!
//! - ASCII PNM, P5/P7, 16-bit samples
//! - Streaming decode of images larger than memory
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! # #[cfg(feature = "std")]
//! # {
//! use zenppm::{Operation, Transform};
//!
//! let mut image = zenppm::load("in.ppm")?;
//! Transform::new(Operation::Contrast, Some(1.4))?.apply(&mut image);
//! zenppm::save("out.ppm", &image)?;
//! # }
//! # Ok::<(), zenppm::PpmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod pixel;
mod ppm;
mod transform;

#[cfg(feature = "std")]
mod io;

use alloc::vec::Vec;

// Re-exports
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{ErrorKind, PpmError};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{CHANNELS, PixelBuffer};
pub use transform::{CONTRAST_GUIDANCE, Operation, Transform};

#[cfg(feature = "std")]
pub use io::{load, load_with_limits, read_from, save, write_to};

/// Decode P6 bytes with no limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<PixelBuffer, PpmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode a buffer as P6 bytes.
pub fn encode(buf: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, PpmError> {
    ppm::encode(buf, &stop)
}

/// Apply the transform named `operation` to `buf`.
///
/// `operation` is parsed as an [`Operation`]; `factor` is required for
/// contrast and ignored otherwise. An unrecognized name is an error and
/// leaves `buf` untouched.
pub fn apply(buf: &mut PixelBuffer, operation: &str, factor: Option<f32>) -> Result<(), PpmError> {
    let op: Operation = operation.parse()?;
    Transform::new(op, factor)?.apply(buf);
    Ok(())
}
