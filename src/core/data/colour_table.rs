use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourTableError {
    Empty,
}

impl fmt::Display for ColourTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "colour table must contain at least one colour"),
        }
    }
}

impl Error for ColourTableError {}

/// Ordered, non-empty palette cycled by escape step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourTable {
    colours: Vec<Colour>,
}

impl ColourTable {
    pub fn new(colours: Vec<Colour>) -> Result<Self, ColourTableError> {
        if colours.is_empty() {
            return Err(ColourTableError::Empty);
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Black for a point that never escaped, otherwise the palette entry for
    /// escape step `iterations`, wrapping every `len()` steps.
    #[must_use]
    pub fn colour_for(&self, iterations: u64) -> Colour {
        if iterations == 0 {
            return Colour::BLACK;
        }

        let index = (iterations - 1) % self.colours.len() as u64;
        self.colours[index as usize]
    }
}

impl ColourMap<u64> for ColourTable {
    fn map(&self, iterations: u64) -> Colour {
        self.colour_for(iterations)
    }
}
