use crate::error::PpmError;
use alloc::format;

/// Resource caps applied while decoding.
///
/// Every cap defaults to `None` (unbounded). They are checked right after
/// the header parses, so an oversized file is rejected before its sample
/// buffer is allocated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on width * height.
    pub max_pixels: Option<u64>,
    /// Cap on the sample buffer, 3 * width * height bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = Some(max_pixels);
        self
    }

    pub fn with_max_memory_bytes(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Validate declared dimensions and the resulting sample-buffer size.
    pub(crate) fn check(&self, width: u32, height: u32, sample_len: usize) -> Result<(), PpmError> {
        let over = |what: &str, value: u64, cap: Option<u64>| match cap {
            Some(cap) if value > cap => Err(PpmError::LimitExceeded(format!(
                "{what} {value} exceeds limit {cap}"
            ))),
            _ => Ok(()),
        };
        over("width", u64::from(width), self.max_width)?;
        over("height", u64::from(height), self.max_height)?;
        over(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;
        over("sample buffer bytes", sample_len as u64, self.max_memory_bytes)
    }
}
