use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

// Widest per-cell storage derived from a plane: the `u64` escape counts.
const MAX_CELL_BYTES: usize = std::mem::size_of::<u64>();

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GridRegionError {
    InvalidCenter { center: Complex },
    InvalidScale { scale: f64 },
    ResolutionTooLarge { resolution: u64 },
}

impl fmt::Display for GridRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCenter { center } => {
                write!(
                    f,
                    "grid center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
            Self::InvalidScale { scale } => {
                write!(f, "grid scale must be a positive finite number: {}", scale)
            }
            Self::ResolutionTooLarge { resolution } => {
                write!(
                    f,
                    "resolution {} gives a plane too large to address in memory",
                    resolution
                )
            }
        }
    }
}

impl Error for GridRegionError {}

/// Square sampling window of side `2 * resolution + 1` pixels centred on
/// `center`, reaching `scale` complex units from the centre to each edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridRegion {
    center: Complex,
    scale: f64,
    resolution: u64,
    side: usize,
}

impl GridRegion {
    pub fn new(center: Complex, scale: f64, resolution: u64) -> Result<Self, GridRegionError> {
        if !(center.real.is_finite() && center.imag.is_finite()) {
            return Err(GridRegionError::InvalidCenter { center });
        }

        if !(scale.is_finite() && scale > 0.0) {
            return Err(GridRegionError::InvalidScale { scale });
        }

        let side = side_for_resolution(resolution)
            .ok_or(GridRegionError::ResolutionTooLarge { resolution })?;

        Ok(Self {
            center,
            scale,
            resolution,
            side,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn resolution(&self) -> u64 {
        self.resolution
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Distance in complex units between neighbouring pixels.
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.resolution == 0 {
            0.0
        } else {
            self.scale / self.resolution as f64
        }
    }

    /// Complex coordinate of pixel `(row, col)`, row 0 being the top edge.
    #[must_use]
    pub fn point_at(&self, row: usize, col: usize) -> Complex {
        if self.resolution == 0 {
            return self.center;
        }

        let step = self.step();

        Complex {
            real: self.center.real - self.scale + col as f64 * step,
            imag: self.center.imag + self.scale - row as f64 * step,
        }
    }
}

/// Side length of the plane for `resolution`, or `None` when the planes and
/// images built from it could not be allocated.
///
/// Allocations are capped at `isize::MAX` bytes, so the bound is the cell
/// count times the widest cell.
pub(crate) fn side_for_resolution(resolution: u64) -> Option<usize> {
    let side = resolution.checked_mul(2)?.checked_add(1)?;
    let side = usize::try_from(side).ok()?;
    let bytes = side.checked_mul(side)?.checked_mul(MAX_CELL_BYTES)?;
    if bytes > isize::MAX as usize {
        return None;
    }
    Some(side)
}
