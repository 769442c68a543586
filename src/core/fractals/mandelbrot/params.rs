use std::{error::Error, fmt};

use crate::core::data::complex::Complex;
use crate::core::data::grid_region::{GridRegion, GridRegionError};
use crate::core::data::zoom::{Zoom, ZoomError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovieParamsError {
    Algorithm(MandelbrotError),
    Zoom(ZoomError),
    Region(GridRegionError),
}

impl fmt::Display for MovieParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "{}", err),
            Self::Zoom(err) => write!(f, "{}", err),
            Self::Region(err) => write!(f, "{}", err),
        }
    }
}

impl Error for MovieParamsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Zoom(err) => Some(err),
            Self::Region(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for MovieParamsError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<ZoomError> for MovieParamsError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

impl From<GridRegionError> for MovieParamsError {
    fn from(err: GridRegionError) -> Self {
        Self::Region(err)
    }
}

/// Fully validated inputs for a Mandelbrot zoom movie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MovieParams {
    algorithm: MandelbrotAlgorithm,
    center: Complex,
    zoom: Zoom,
    resolution: u64,
}

impl MovieParams {
    pub fn new(
        threshold: f64,
        max_iterations: u64,
        center: Complex,
        initial_scale: f64,
        final_scale: f64,
        frame_count: u32,
        resolution: u64,
    ) -> Result<Self, MovieParamsError> {
        let algorithm = MandelbrotAlgorithm::new(max_iterations, threshold)?;
        let zoom = Zoom::new(initial_scale, final_scale, frame_count)?;
        GridRegion::new(center, initial_scale, resolution)?;

        Ok(Self {
            algorithm,
            center,
            zoom,
            resolution,
        })
    }

    pub fn algorithm(&self) -> &MandelbrotAlgorithm {
        &self.algorithm
    }

    pub fn center(&self) -> Complex {
        self.center
    }

    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    pub fn resolution(&self) -> u64 {
        self.resolution
    }

    /// Width and height in pixels of every frame.
    pub fn side(&self) -> u64 {
        2 * self.resolution + 1
    }
}
