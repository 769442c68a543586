use std::error::Error;
use std::fmt;

use crate::core::data::colour_table::ColourTable;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteStripError {
    ZeroWidth,
    ZeroHeightPerColour,
    TooLarge {
        width: usize,
        height_per_colour: usize,
        colours: usize,
    },
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for PaletteStripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "palette width must be at least one pixel"),
            Self::ZeroHeightPerColour => {
                write!(f, "palette height per colour must be at least one pixel")
            }
            Self::TooLarge {
                width,
                height_per_colour,
                colours,
            } => {
                write!(
                    f,
                    "palette of {} colours at {}x{} per colour is too large",
                    colours, width, height_per_colour
                )
            }
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for PaletteStripError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelBufferError> for PaletteStripError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders `table` as horizontal bands: colour `i` fills rows
/// `i * height_per_colour .. (i + 1) * height_per_colour` across the full
/// `width`.
pub fn generate_palette_strip(
    table: &ColourTable,
    width: usize,
    height_per_colour: usize,
) -> Result<PixelBuffer, PaletteStripError> {
    if width == 0 {
        return Err(PaletteStripError::ZeroWidth);
    }

    if height_per_colour == 0 {
        return Err(PaletteStripError::ZeroHeightPerColour);
    }

    let too_large = PaletteStripError::TooLarge {
        width,
        height_per_colour,
        colours: table.len(),
    };
    let height = table
        .len()
        .checked_mul(height_per_colour)
        .ok_or_else(|| too_large.clone())?;
    let row_bytes = width.checked_mul(3).ok_or_else(|| too_large.clone())?;
    let total_bytes = row_bytes
        .checked_mul(height)
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or(too_large)?;

    let mut buffer: PixelBufferData = Vec::with_capacity(total_bytes);
    for colour in table.colours() {
        let bytes = colour.to_bytes();
        for _ in 0..width * height_per_colour {
            buffer.extend_from_slice(&bytes);
        }
    }

    Ok(PixelBuffer::from_data(width, height, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn two_colour_table() -> ColourTable {
        ColourTable::new(vec![
            Colour { r: 1, g: 2, b: 3 },
            Colour { r: 250, g: 251, b: 252 },
        ])
        .unwrap()
    }

    #[test]
    fn test_strip_dimensions() {
        let strip = generate_palette_strip(&two_colour_table(), 4, 3).unwrap();

        assert_eq!(strip.width(), 4);
        assert_eq!(strip.height(), 6);
        assert_eq!(strip.buffer().len(), 4 * 6 * 3);
    }

    #[test]
    fn test_strip_bands() {
        let strip = generate_palette_strip(&two_colour_table(), 2, 2).unwrap();
        let first = Colour { r: 1, g: 2, b: 3 };
        let second = Colour { r: 250, g: 251, b: 252 };

        for x in 0..2 {
            assert_eq!(strip.pixel(x, 0), Some(first));
            assert_eq!(strip.pixel(x, 1), Some(first));
            assert_eq!(strip.pixel(x, 2), Some(second));
            assert_eq!(strip.pixel(x, 3), Some(second));
        }
    }

    #[test]
    fn test_single_pixel_per_colour() {
        let strip = generate_palette_strip(&two_colour_table(), 1, 1).unwrap();

        assert_eq!(strip.buffer(), &vec![1, 2, 3, 250, 251, 252]);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let table = two_colour_table();

        assert_eq!(
            generate_palette_strip(&table, 0, 1),
            Err(PaletteStripError::ZeroWidth)
        );
        assert_eq!(
            generate_palette_strip(&table, 1, 0),
            Err(PaletteStripError::ZeroHeightPerColour)
        );
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        let result = generate_palette_strip(&two_colour_table(), usize::MAX, 1);

        assert!(matches!(result, Err(PaletteStripError::TooLarge { .. })));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_strip_past_allocation_limit_is_rejected() {
        let table = ColourTable::new(vec![Colour { r: 1, g: 2, b: 3 }]).unwrap();

        // 3 * 2^62 bytes fits in usize but not in a single allocation.
        let result = generate_palette_strip(&table, 1 << 31, 1 << 31);

        assert_eq!(
            result,
            Err(PaletteStripError::TooLarge {
                width: 1 << 31,
                height_per_colour: 1 << 31,
                colours: 1
            })
        );
    }
}
