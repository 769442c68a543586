use rayon::prelude::*;
use std::error::Error;
use std::fmt;

use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::sample_grid::sample_grid::sample_grid;
use crate::core::data::complex::Complex;
use crate::core::data::frame::{Frame, FrameSequence};
use crate::core::data::grid_region::{GridRegion, GridRegionError};
use crate::core::data::zoom::Zoom;
use crate::core::fractals::mandelbrot::params::{MovieParams, MovieParamsError};

/// Error type for streamed generation.
///
/// Separates failures of the render itself from failures reported by the
/// frame sink, so callers can tell an invalid zoom from a failed write.
#[derive(Debug)]
pub enum StreamSequenceError<E> {
    Region(GridRegionError),
    Sink(E),
}

impl<E: fmt::Display> fmt::Display for StreamSequenceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "region error: {}", err),
            Self::Sink(err) => write!(f, "frame sink error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for StreamSequenceError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

/// One validated region per frame, in frame order.
fn frame_regions(
    center: Complex,
    zoom: &Zoom,
    resolution: u64,
) -> Result<Vec<GridRegion>, GridRegionError> {
    zoom.scales()
        .map(|scale| GridRegion::new(center, scale, resolution))
        .collect()
}

fn render_frame<Alg>(algorithm: &Alg, region: &GridRegion, index: u32) -> Frame
where
    Alg: FractalAlgorithm<Success = u64> + Sync,
{
    Frame::new(index, region.scale(), sample_grid(region, algorithm))
}

/// Renders every frame of `zoom` around `center`.
///
/// Frames are independent, so they are rendered in parallel on top of the
/// per-row parallelism inside each frame. The whole sequence stays resident;
/// use [`generate_sequence_streaming`] to hold one plane at a time.
pub fn generate_sequence<Alg>(
    algorithm: &Alg,
    center: Complex,
    zoom: &Zoom,
    resolution: u64,
) -> Result<FrameSequence, GridRegionError>
where
    Alg: FractalAlgorithm<Success = u64> + Sync,
{
    let regions = frame_regions(center, zoom, resolution)?;

    let frames = regions
        .par_iter()
        .enumerate()
        .map(|(index, region)| render_frame(algorithm, region, index as u32))
        .collect();

    Ok(FrameSequence::new(frames))
}

/// Renders frames one at a time in order, handing each to `sink` as soon as
/// its plane is complete.
///
/// Stops at the first sink failure. Every frame region is validated before
/// the first frame is rendered, so an invalid zoom never reaches the sink.
pub fn generate_sequence_streaming<Alg, F, E>(
    algorithm: &Alg,
    center: Complex,
    zoom: &Zoom,
    resolution: u64,
    mut sink: F,
) -> Result<(), StreamSequenceError<E>>
where
    Alg: FractalAlgorithm<Success = u64> + Sync,
    F: FnMut(Frame) -> Result<(), E>,
{
    let regions =
        frame_regions(center, zoom, resolution).map_err(StreamSequenceError::Region)?;

    for (index, region) in regions.iter().enumerate() {
        sink(render_frame(algorithm, region, index as u32)).map_err(StreamSequenceError::Sink)?;
    }

    Ok(())
}

/// Mandelbrot zoom from `initial_scale` to `final_scale` over `frame_count`
/// frames, validating every input first.
pub fn generate_mandelbrot_sequence(
    threshold: f64,
    max_iterations: u64,
    center: Complex,
    initial_scale: f64,
    final_scale: f64,
    frame_count: u32,
    resolution: u64,
) -> Result<FrameSequence, MovieParamsError> {
    let params = MovieParams::new(
        threshold,
        max_iterations,
        center,
        initial_scale,
        final_scale,
        frame_count,
        resolution,
    )?;

    Ok(generate_sequence(
        params.algorithm(),
        params.center(),
        params.zoom(),
        params.resolution(),
    )?)
}
