use alloc::format;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::PpmError;

/// Channels per pixel: samples are interleaved R, G, B.
pub const CHANNELS: usize = 3;

/// Number of sample bytes for a `width` x `height` image, or `None` on overflow.
pub(crate) fn sample_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(CHANNELS))
}

/// An owned RGB image: dimensions, the declared maximum sample value, and a
/// row-major buffer of interleaved R,G,B bytes with no padding.
///
/// The buffer always holds exactly `3 * width * height` samples, each in
/// `0..=max_value`. Construction validates both, and the only mutation path
/// is [`crate::Transform::apply`], which preserves them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    max_value: u8,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Build a buffer from raw samples, checking every invariant.
    pub fn new(width: u32, height: u32, max_value: u8, samples: Vec<u8>) -> Result<Self, PpmError> {
        if width == 0 {
            return Err(PpmError::InvalidHeader("invalid width".into()));
        }
        if height == 0 {
            return Err(PpmError::InvalidHeader("invalid height".into()));
        }
        if max_value == 0 {
            return Err(PpmError::InvalidHeader("invalid max value".into()));
        }
        let needed = sample_len(width, height).ok_or(PpmError::DimensionsTooLarge { width, height })?;
        if samples.len() != needed {
            return Err(PpmError::InvalidData(format!(
                "expected {needed} samples for {width}x{height}, got {}",
                samples.len()
            )));
        }
        check_sample_range(&samples, max_value, 0)?;
        Ok(Self::from_parts(width, height, max_value, samples))
    }

    /// Caller has already validated dimensions, length, and range.
    pub(crate) fn from_parts(width: u32, height: u32, max_value: u8, samples: Vec<u8>) -> Self {
        debug_assert_eq!(sample_len(width, height), Some(samples.len()));
        Self {
            width,
            height,
            max_value,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Number of pixels (width * height).
    pub fn pixel_count(&self) -> usize {
        self.samples.len() / CHANNELS
    }

    /// Interleaved R,G,B samples, row-major.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// The (R, G, B) triple at column `x`, row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = self.samples.get(off..off + CHANNELS)?;
        Some([px[0], px[1], px[2]])
    }

    /// Take ownership of the sample buffer.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Reinterpret the samples as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        self.samples.as_pixels()
    }

    /// Borrow the image as an [`imgref::ImgRef`] of RGB pixels without copying.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(
            self.as_rgb(),
            self.width as usize,
            self.height as usize,
        )
    }
}

/// Reject any sample above `max_value`. `base` offsets the reported position
/// when `samples` is a slice of a larger buffer.
pub(crate) fn check_sample_range(samples: &[u8], max_value: u8, base: usize) -> Result<(), PpmError> {
    if max_value == u8::MAX {
        return Ok(());
    }
    match samples.iter().position(|&s| s > max_value) {
        Some(i) => Err(PpmError::InvalidData(format!(
            "sample {} at offset {} exceeds max value {max_value}",
            samples[i],
            base + i
        ))),
        None => Ok(()),
    }
}
