//! P6 decoder: header fields, then exactly `3 * width * height` sample bytes.

use alloc::vec::Vec;
use enough::Stop;

use super::PpmHeader;
use super::tokenizer::{Cursor, is_space};
use crate::error::PpmError;
use crate::pixel::{CHANNELS, check_sample_range, sample_len};

const MAGIC: &[u8; 2] = b"P6";

/// Parse the header, leaving `data_offset` on the first sample byte.
pub(crate) fn parse_header(data: &[u8]) -> Result<PpmHeader, PpmError> {
    let mut cursor = Cursor::new(data);

    match cursor.take(2) {
        Some(magic) if magic == MAGIC => {}
        _ => return Err(PpmError::UnrecognizedFormat),
    }

    let width = read_field(&mut cursor, "invalid width")?;
    let height = read_field(&mut cursor, "invalid height")?;
    let max_value = read_field(&mut cursor, "invalid max value")?;
    let max_value = u8::try_from(max_value)
        .map_err(|_| PpmError::InvalidHeader("invalid max value".into()))?;

    // Exactly one separator byte; anything past it is sample data.
    match cursor.next_byte() {
        Some(b) if is_space(b) => {}
        Some(_) => {
            return Err(PpmError::InvalidHeader(
                "expected whitespace after max value".into(),
            ));
        }
        None => return Err(PpmError::HeaderEof),
    }

    Ok(PpmHeader {
        width,
        height,
        max_value,
        data_offset: cursor.position(),
    })
}

/// Skip noise, then read a strictly positive decimal field.
fn read_field(cursor: &mut Cursor<'_>, invalid: &str) -> Result<u32, PpmError> {
    cursor.skip_noise()?;
    match cursor.read_decimal() {
        Some(v) if v > 0 => Ok(v),
        _ => Err(PpmError::InvalidHeader(invalid.into())),
    }
}

/// Copy the sample payload out of `pixel_data`, validating range row by row.
pub(crate) fn decode_samples(
    pixel_data: &[u8],
    header: &PpmHeader,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PpmError> {
    let needed = sample_len(header.width, header.height).ok_or(PpmError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    })?;
    let payload = pixel_data
        .get(..needed)
        .ok_or(PpmError::TruncatedData {
            needed,
            actual: pixel_data.len(),
        })?;

    if pixel_data.len() > needed {
        log::warn!(
            "ignoring {} trailing bytes after pixel data",
            pixel_data.len() - needed
        );
    }

    let row_bytes = header.width as usize * CHANNELS;
    for (row_idx, row) in payload.chunks_exact(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        check_sample_range(row, header.max_value, row_idx * row_bytes)?;
    }

    Ok(payload.to_vec())
}
