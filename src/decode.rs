use enough::Stop;

use crate::error::PpmError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

/// Builder for a decode with optional resource limits.
///
/// ```
/// use zenppm::{DecodeRequest, Limits, Unstoppable};
///
/// let data = b"P6\n1 1\n255\n\x01\x02\x03";
/// let limits = Limits::default().with_max_pixels(1 << 20);
/// let buf = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(buf.samples(), &[1, 2, 3]);
/// # Ok::<(), zenppm::PpmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse the header and copy out the samples.
    pub fn decode(self, stop: impl Stop) -> Result<PixelBuffer, PpmError> {
        crate::ppm::decode(self.data, self.limits, &stop)
    }
}
