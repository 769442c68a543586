use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(BYTES_PER_PIXEL)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        width: usize,
        height: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                width,
                height,
                buffer_size,
            } => {
                write!(
                    f,
                    "{}x{} image does not match buffer size {}",
                    width, height, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed 8-bit RGB image, row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        width: usize,
        height: usize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if buffer_size(width, height) != Some(buffer.len()) {
            return Err(PixelBufferError::BoundsMismatch {
                width,
                height,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y * self.width + x) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.buffer.chunks(self.width * BYTES_PER_PIXEL)
    }
}
