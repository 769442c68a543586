use rayon::prelude::*;
use std::error::Error;
use std::fmt;

use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid_region::{GridRegion, GridRegionError};
use crate::core::data::iteration_plane::IterationPlane;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleGridError {
    Algorithm(MandelbrotError),
    Region(GridRegionError),
}

impl fmt::Display for SampleGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::Region(err) => write!(f, "region error: {}", err),
        }
    }
}

impl Error for SampleGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Region(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for SampleGridError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GridRegionError> for SampleGridError {
    fn from(err: GridRegionError) -> Self {
        Self::Region(err)
    }
}

/// Samples every pixel of `region` in parallel using rayon's work-stealing
/// scheduler.
///
/// Rows are handed out as disjoint slices of the plane, so workers never
/// share a write target.
pub fn sample_grid<Alg>(region: &GridRegion, algorithm: &Alg) -> IterationPlane
where
    Alg: FractalAlgorithm<Success = u64> + Sync,
{
    let side = region.side();
    let mut plane = IterationPlane::zeroed(side);

    plane
        .cells_mut()
        .par_chunks_mut(side)
        .enumerate()
        .for_each(|(row, cells)| {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = algorithm.compute(region.point_at(row, col));
            }
        });

    plane
}

/// Single-threaded reference implementation of [`sample_grid`].
pub fn sample_grid_serial<Alg>(region: &GridRegion, algorithm: &Alg) -> IterationPlane
where
    Alg: FractalAlgorithm<Success = u64>,
{
    let side = region.side();
    let mut plane = IterationPlane::zeroed(side);

    for (row, cells) in plane.cells_mut().chunks_mut(side).enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = algorithm.compute(region.point_at(row, col));
        }
    }

    plane
}

/// Escape-time plane for the square window of half-width `scale` around
/// `center`.
pub fn sample_mandelbrot_grid(
    threshold: f64,
    max_iterations: u64,
    center: Complex,
    scale: f64,
    resolution: u64,
) -> Result<IterationPlane, SampleGridError> {
    let algorithm = MandelbrotAlgorithm::new(max_iterations, threshold)?;
    let region = GridRegion::new(center, scale, resolution)?;

    Ok(sample_grid(&region, &algorithm))
}
