mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use controllers::movie::{FrameWriteError, MovieController, MovieError};
pub use controllers::palette::{PaletteController, PaletteError};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_palette_strip::generate_palette_strip::{
    PaletteStripError, generate_palette_strip,
};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_sequence::generate_sequence::{
    StreamSequenceError, generate_mandelbrot_sequence, generate_sequence,
    generate_sequence_streaming,
};
pub use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::sample_grid::sample_grid::{
    SampleGridError, sample_grid, sample_grid_serial, sample_mandelbrot_grid,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::colour_table::{ColourTable, ColourTableError};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::{Frame, FrameSequence};
pub use crate::core::data::grid_region::{GridRegion, GridRegionError};
pub use crate::core::data::iteration_plane::{IterationPlane, IterationPlaneError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::zoom::{MAX_FRAME_COUNT, Zoom, ZoomError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, iterate};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::params::{MovieParams, MovieParamsError};
pub use input::cli::movie_args::EncodingArg;
pub use input::cli::{MovieArgs, PaletteArgs};
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::colour_table_file::{ColourTableFileError, parse_colour_table, read_colour_table};
pub use storage::write_ppm::{PpmEncoding, write_ppm, write_ppm_file};
