use crate::error::PpmError;

/// Header facts, available without decoding the samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub max_value: u8,
    /// Byte offset of the first sample.
    pub data_offset: usize,
}

impl ImageInfo {
    /// Parse just the header. Allocates nothing and ignores whether the
    /// sample payload is complete.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PpmError> {
        crate::ppm::probe_header(data)
    }

    /// Bytes of sample payload the header declares, `None` on overflow.
    pub fn sample_len(&self) -> Option<usize> {
        crate::pixel::sample_len(self.width, self.height)
    }
}
