//! P6 encoder: canonical header, then the samples verbatim.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::PpmError;
use crate::pixel::{CHANNELS, PixelBuffer};

/// `P6\n{width} {height}\n{max_value}\n`, the one header layout we write.
pub(crate) fn header(buf: &PixelBuffer) -> String {
    format!(
        "P6\n{} {}\n{}\n",
        buf.width(),
        buf.height(),
        buf.max_value()
    )
}

/// Encode a buffer to P6 bytes.
pub(crate) fn encode_ppm(buf: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, PpmError> {
    let header = header(buf);
    let samples = buf.samples();
    let mut out = Vec::with_capacity(header.len() + samples.len());
    out.extend_from_slice(header.as_bytes());

    let row_bytes = buf.width() as usize * CHANNELS;
    for (row_idx, row) in samples.chunks_exact(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    log::debug!(
        "encoded {}x{} P6 ({} header + {} sample bytes)",
        buf.width(),
        buf.height(),
        header.len(),
        samples.len()
    );
    Ok(out)
}
