use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::params::{MovieParams, MovieParamsError};
use crate::storage::write_ppm::PpmEncoding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EncodingArg {
    /// Plain-text PPM (P3)
    P3,
    /// Binary PPM (P6)
    #[default]
    P6,
}

impl From<EncodingArg> for PpmEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::P3 => PpmEncoding::Plain,
            EncodingArg::P6 => PpmEncoding::Binary,
        }
    }
}

/// Renders a Mandelbrot zoom as numbered PPM frames.
#[derive(Debug, Parser)]
#[command(name = "mandel_movie", version, allow_negative_numbers = true)]
pub struct MovieArgs {
    /// Escape radius; a point escapes once |z| reaches it
    pub threshold: f64,

    /// Iteration bound per point
    pub max_iterations: u64,

    /// Real part of the zoom center
    pub center_real: f64,

    /// Imaginary part of the zoom center
    pub center_imaginary: f64,

    /// Half-width of the first frame in complex units
    pub initial_scale: f64,

    /// Half-width of the last frame in complex units
    pub final_scale: f64,

    /// Number of frames, 1 to 10000
    pub frame_count: u32,

    /// Pixels from the center to an edge; frames are 2*resolution+1 square
    pub resolution: u64,

    /// Folder receiving frame00000.ppm, frame00001.ppm, ...
    pub output_folder: PathBuf,

    /// Colour table file
    pub colour_file: PathBuf,

    /// Pixel encoding of the frames
    #[arg(long, value_enum, default_value_t = EncodingArg::P6)]
    pub encoding: EncodingArg,

    /// Worker threads for rendering; defaults to one per core
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,
}

impl MovieArgs {
    pub fn params(&self) -> Result<MovieParams, MovieParamsError> {
        MovieParams::new(
            self.threshold,
            self.max_iterations,
            Complex::new(self.center_real, self.center_imaginary),
            self.initial_scale,
            self.final_scale,
            self.frame_count,
            self.resolution,
        )
    }
}
