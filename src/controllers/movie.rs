use log::{debug, info};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_sequence::generate_sequence::{
    StreamSequenceError, generate_sequence_streaming,
};
use crate::core::data::colour_table::ColourTable;
use crate::core::data::frame::Frame;
use crate::core::data::grid_region::GridRegionError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::fractals::mandelbrot::params::MovieParams;
use crate::storage::colour_table_file::{ColourTableFileError, read_colour_table};

/// Failure while turning one rendered frame into a file.
#[derive(Debug)]
pub enum FrameWriteError {
    Colour(PixelBufferError),
    Write { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for FrameWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colour(err) => write!(f, "colour mapping failed: {}", err),
            Self::Write { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for FrameWriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Colour(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

#[derive(Debug)]
pub enum MovieError {
    ColourTable(ColourTableFileError),
    OutputFolder { path: PathBuf, source: std::io::Error },
    Render(GridRegionError),
    Frame(FrameWriteError),
}

impl fmt::Display for MovieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourTable(err) => write!(f, "colour table error: {}", err),
            Self::OutputFolder { path, source } => {
                write!(f, "cannot create output folder {}: {}", path.display(), source)
            }
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::Frame(err) => write!(f, "frame error: {}", err),
        }
    }
}

impl Error for MovieError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourTable(err) => Some(err),
            Self::OutputFolder { source, .. } => Some(source),
            Self::Render(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<ColourTableFileError> for MovieError {
    fn from(err: ColourTableFileError) -> Self {
        Self::ColourTable(err)
    }
}

impl From<StreamSequenceError<FrameWriteError>> for MovieError {
    fn from(err: StreamSequenceError<FrameWriteError>) -> Self {
        match err {
            StreamSequenceError::Region(err) => Self::Render(err),
            StreamSequenceError::Sink(err) => Self::Frame(err),
        }
    }
}

/// Renders a zoom movie to a folder of numbered image files.
pub struct MovieController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> MovieController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    /// Path of frame `index` inside `output_folder`, e.g. `frame00042.ppm`.
    pub fn frame_path(&self, output_folder: &Path, index: u32) -> PathBuf {
        output_folder.join(format!("frame{:05}.{}", index, self.presenter.extension()))
    }

    /// Loads the colour table, then renders and writes every frame in order.
    ///
    /// Nothing is written if the colour table cannot be loaded. Returns the
    /// paths of the written frames.
    pub fn run(
        &self,
        params: &MovieParams,
        colour_file: &Path,
        output_folder: &Path,
    ) -> Result<Vec<PathBuf>, MovieError> {
        let colour_table = read_colour_table(colour_file)?;

        self.render(params, &colour_table, output_folder)
    }

    pub fn render(
        &self,
        params: &MovieParams,
        colour_table: &ColourTable,
        output_folder: &Path,
    ) -> Result<Vec<PathBuf>, MovieError> {
        std::fs::create_dir_all(output_folder).map_err(|source| MovieError::OutputFolder {
            path: output_folder.to_path_buf(),
            source,
        })?;

        let zoom = params.zoom();
        info!(
            "Rendering Mandelbrot zoom: {} frames of {}x{} around ({}, {}), scale {} -> {}",
            zoom.frame_count(),
            params.side(),
            params.side(),
            params.center().real,
            params.center().imag,
            zoom.initial_scale(),
            zoom.final_scale()
        );
        info!(
            "Max iterations: {}, threshold: {}, colours: {}",
            params.algorithm().max_iterations(),
            params.algorithm().threshold(),
            colour_table.len()
        );

        let start = Instant::now();
        let mut written = Vec::with_capacity(zoom.frame_count() as usize);

        generate_sequence_streaming(
            params.algorithm(),
            params.center(),
            zoom,
            params.resolution(),
            |frame| {
                let path = self.write_frame(&frame, colour_table, output_folder)?;
                written.push(path);
                Ok(())
            },
        )?;

        info!("Wrote {} frames in {:?}", written.len(), start.elapsed());

        Ok(written)
    }

    fn write_frame(
        &self,
        frame: &Frame,
        colour_table: &ColourTable,
        output_folder: &Path,
    ) -> Result<PathBuf, FrameWriteError> {
        let pixels =
            generate_pixel_buffer(frame.plane(), colour_table).map_err(FrameWriteError::Colour)?;
        let path = self.frame_path(output_folder, frame.index());

        self.presenter
            .present(&pixels, &path)
            .map_err(|source| FrameWriteError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(
            "Frame {} at scale {} written to {}",
            frame.index(),
            frame.scale(),
            path.display()
        );

        Ok(path)
    }
}
