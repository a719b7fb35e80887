//! In-place pixel transforms.
//!
//! Each transform is one pass over the sample buffer. None changes the
//! dimensions or buffer length, and every result stays in `0..=max_value`.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::PpmError;
use crate::pixel::{CHANNELS, PixelBuffer};

/// A transform selection without its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Negate,
    ChannelRotate,
    Grayscale,
    Contrast,
    Rotate180,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Self::Negate,
        Self::ChannelRotate,
        Self::Grayscale,
        Self::Contrast,
        Self::Rotate180,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Negate => "negate",
            Self::ChannelRotate => "channel-rotate",
            Self::Grayscale => "grayscale",
            Self::Contrast => "contrast",
            Self::Rotate180 => "rotate180",
        }
    }

    /// Whether this operation needs a `factor`.
    pub fn takes_factor(self) -> bool {
        matches!(self, Self::Contrast)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the canonical names, a few aliases, and menu numbers `1`..`5`.
impl FromStr for Operation {
    type Err = PpmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "negate" | "negative" => Self::Negate,
            "2" | "channel-rotate" | "color-rotate" | "colour-rotate" => Self::ChannelRotate,
            "3" | "grayscale" | "greyscale" | "gray" | "grey" => Self::Grayscale,
            "4" | "contrast" => Self::Contrast,
            "5" | "rotate180" | "rotate-180" => Self::Rotate180,
            _ => return Err(PpmError::UnknownOperation(s.to_string())),
        };
        Ok(op)
    }
}

/// A fully parameterized transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// `s -> max_value - s` for every sample.
    Negate,
    /// `(R, G, B) -> (B, R, G)` per pixel.
    ChannelRotate,
    /// `R = G = B = (R + G + B) / 3`, truncating.
    Grayscale,
    /// `s -> clamp((s - 128) * factor + 128, 0, max_value)`, truncating.
    Contrast { factor: f32 },
    /// Reverse the pixel order of the whole image.
    Rotate180,
}

/// Range the contrast factor is expected to fall in. Not enforced.
pub const CONTRAST_GUIDANCE: core::ops::RangeInclusive<f32> = 0.1..=3.0;

impl Transform {
    /// Pair an operation with its parameter. Contrast without a factor is an
    /// error; a factor given to any other operation is ignored.
    pub fn new(op: Operation, factor: Option<f32>) -> Result<Self, PpmError> {
        Ok(match op {
            Operation::Negate => Self::Negate,
            Operation::ChannelRotate => Self::ChannelRotate,
            Operation::Grayscale => Self::Grayscale,
            Operation::Contrast => Self::Contrast {
                factor: factor.ok_or(PpmError::MissingParameter("contrast factor"))?,
            },
            Operation::Rotate180 => Self::Rotate180,
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Negate => Operation::Negate,
            Self::ChannelRotate => Operation::ChannelRotate,
            Self::Grayscale => Operation::Grayscale,
            Self::Contrast { .. } => Operation::Contrast,
            Self::Rotate180 => Operation::Rotate180,
        }
    }

    /// Apply in place.
    pub fn apply(self, buf: &mut PixelBuffer) {
        log::trace!(
            "{} over {}x{}",
            self.operation(),
            buf.width(),
            buf.height()
        );
        let max_value = buf.max_value();
        let samples = buf.samples_mut();
        match self {
            Self::Negate => negate(samples, max_value),
            Self::ChannelRotate => channel_rotate(samples),
            Self::Grayscale => grayscale(samples),
            Self::Contrast { factor } => {
                if !CONTRAST_GUIDANCE.contains(&factor) {
                    log::warn!("contrast factor {factor} outside {CONTRAST_GUIDANCE:?}");
                }
                contrast(samples, max_value, factor)
            }
            Self::Rotate180 => rotate180(samples),
        }
    }
}

fn negate(samples: &mut [u8], max_value: u8) {
    for s in samples {
        *s = max_value - *s;
    }
}

fn channel_rotate(samples: &mut [u8]) {
    for px in samples.chunks_exact_mut(CHANNELS) {
        px.rotate_right(1);
    }
}

fn grayscale(samples: &mut [u8]) {
    for px in samples.chunks_exact_mut(CHANNELS) {
        let sum = u16::from(px[0]) + u16::from(px[1]) + u16::from(px[2]);
        // sum / 3 <= 255
        let gray = (sum / 3) as u8;
        px.fill(gray);
    }
}

fn contrast(samples: &mut [u8], max_value: u8, factor: f32) {
    let max = f32::from(max_value);
    for s in samples {
        let v = (f32::from(*s) - 128.0) * factor + 128.0;
        // NaN passes through clamp and casts to 0.
        *s = v.clamp(0.0, max) as u8;
    }
}

fn rotate180(samples: &mut [u8]) {
    let n = samples.len() / CHANNELS;
    for i in 0..n / 2 {
        let j = n - 1 - i;
        let (head, tail) = samples.split_at_mut(j * CHANNELS);
        head[i * CHANNELS..(i + 1) * CHANNELS].swap_with_slice(&mut tail[..CHANNELS]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn negate_uses_max_value() {
        let mut s = vec![0, 7, 15];
        negate(&mut s, 15);
        assert_eq!(s, [15, 8, 0]);
    }

    #[test]
    fn channel_rotate_moves_each_channel_forward() {
        let mut s = vec![1, 2, 3, 4, 5, 6];
        channel_rotate(&mut s);
        assert_eq!(s, [3, 1, 2, 6, 4, 5]);
    }

    #[test]
    fn grayscale_truncates() {
        let mut s = vec![1, 1, 0, 255, 255, 254];
        grayscale(&mut s);
        assert_eq!(s, [0, 0, 0, 254, 254, 254]);
    }

    #[test]
    fn contrast_truncates_and_clamps() {
        let mut s = vec![0, 100, 128, 129, 200, 255];
        contrast(&mut s, 255, 1.5);
        // 100 -> 86.0, 129 -> 129.5, 200 -> 236.0, 255 -> 318.5
        assert_eq!(s, [0, 86, 128, 129, 236, 255]);

        let mut s = vec![0, 100, 200];
        contrast(&mut s, 150, 2.0);
        assert_eq!(s, [0, 72, 150]);
    }

    #[test]
    fn contrast_nan_factor_zeroes() {
        let mut s = vec![10, 128, 250];
        contrast(&mut s, 255, f32::NAN);
        assert_eq!(s, [0, 0, 0]);
    }

    #[test]
    fn rotate180_reverses_pixels() {
        let mut s = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        rotate180(&mut s);
        assert_eq!(s, [7, 8, 9, 4, 5, 6, 1, 2, 3]);

        let mut s = vec![1, 2, 3, 4, 5, 6];
        rotate180(&mut s);
        assert_eq!(s, [4, 5, 6, 1, 2, 3]);

        let mut s = vec![9, 8, 7];
        rotate180(&mut s);
        assert_eq!(s, [9, 8, 7]);
    }

    #[test]
    fn operation_names_parse() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
        assert_eq!("4".parse::<Operation>().unwrap(), Operation::Contrast);
        assert_eq!(" Negative ".parse::<Operation>().unwrap(), Operation::Negate);
        assert!(matches!(
            "sharpen".parse::<Operation>(),
            Err(PpmError::UnknownOperation(s)) if s == "sharpen"
        ));
        assert!(matches!(
            "0".parse::<Operation>(),
            Err(PpmError::UnknownOperation(_))
        ));
    }

    #[test]
    fn contrast_requires_factor() {
        assert!(matches!(
            Transform::new(Operation::Contrast, None),
            Err(PpmError::MissingParameter(_))
        ));
        assert_eq!(
            Transform::new(Operation::Contrast, Some(1.2)).unwrap(),
            Transform::Contrast { factor: 1.2 }
        );
        assert_eq!(
            Transform::new(Operation::Negate, Some(9.0)).unwrap(),
            Transform::Negate
        );
    }
}
