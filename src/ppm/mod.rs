//! Binary PPM (P6): header tokenizer, decoder, encoder.
//!
//! ```text
//! "P6" <noise> width <noise> height <noise> max_value <one whitespace byte>
//! <3 * width * height raw bytes, row-major R,G,B>
//! ```
//!
//! `<noise>` is any run of whitespace and `#` comments that end at a newline.

mod decode;
mod encode;
mod tokenizer;

use crate::error::PpmError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::{PixelBuffer, sample_len};
use alloc::vec::Vec;
use enough::Stop;

#[cfg(feature = "std")]
pub(crate) use encode::header;

/// Parsed P6 header (internal).
pub(crate) struct PpmHeader {
    pub width: u32,
    pub height: u32,
    pub max_value: u8,
    /// Offset of the first sample byte.
    pub data_offset: usize,
}

/// Probe the header for ImageInfo without touching the samples.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, PpmError> {
    let header = decode::parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        max_value: header.max_value,
        data_offset: header.data_offset,
    })
}

/// Decode P6 data into an owned buffer (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, PpmError> {
    let header = decode::parse_header(data)?;
    log::debug!(
        "P6 header: {}x{}, max value {}, samples at offset {}",
        header.width,
        header.height,
        header.max_value,
        header.data_offset
    );

    let needed = sample_len(header.width, header.height).ok_or(PpmError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    })?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height, needed)?;
    }

    stop.check()?;

    let pixel_data = data
        .get(header.data_offset..)
        .ok_or(PpmError::HeaderEof)?;
    let samples = decode::decode_samples(pixel_data, &header, stop)?;
    Ok(PixelBuffer::from_parts(
        header.width,
        header.height,
        header.max_value,
        samples,
    ))
}

/// Encode to P6 (called from the top-level `encode`).
pub(crate) fn encode(buf: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, PpmError> {
    encode::encode_ppm(buf, stop)
}
