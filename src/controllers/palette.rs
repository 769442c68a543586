use log::info;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_palette_strip::generate_palette_strip::{
    PaletteStripError, generate_palette_strip,
};
use crate::core::data::colour_table::ColourTable;
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::storage::colour_table_file::{ColourTableFileError, read_colour_table};
use crate::storage::write_ppm::PpmEncoding;

#[derive(Debug)]
pub enum PaletteError {
    ColourTable(ColourTableFileError),
    Strip(PaletteStripError),
    OutputFolder { path: PathBuf, source: std::io::Error },
    Write { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourTable(err) => write!(f, "colour table error: {}", err),
            Self::Strip(err) => write!(f, "palette error: {}", err),
            Self::OutputFolder { path, source } => {
                write!(f, "cannot create output folder {}: {}", path.display(), source)
            }
            Self::Write { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for PaletteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourTable(err) => Some(err),
            Self::Strip(err) => Some(err),
            Self::OutputFolder { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<ColourTableFileError> for PaletteError {
    fn from(err: ColourTableFileError) -> Self {
        Self::ColourTable(err)
    }
}

impl From<PaletteStripError> for PaletteError {
    fn from(err: PaletteStripError) -> Self {
        Self::Strip(err)
    }
}

/// Writes the palette strip of a colour table once per configured output.
pub struct PaletteController<P: FilePresenterPort> {
    outputs: Vec<(String, P)>,
}

impl PaletteController<PpmFilePresenter> {
    /// Plain and binary PPM strips named `colorpaletteP3.ppm` and
    /// `colorpaletteP6.ppm`.
    pub fn ppm() -> Self {
        Self::new(vec![
            (
                "colorpaletteP3".to_string(),
                PpmFilePresenter::new(PpmEncoding::Plain),
            ),
            (
                "colorpaletteP6".to_string(),
                PpmFilePresenter::new(PpmEncoding::Binary),
            ),
        ])
    }
}

impl<P: FilePresenterPort> PaletteController<P> {
    pub fn new(outputs: Vec<(String, P)>) -> Self {
        Self { outputs }
    }

    pub fn run(
        &self,
        colour_file: &Path,
        output_folder: &Path,
        width: usize,
        height_per_colour: usize,
    ) -> Result<Vec<PathBuf>, PaletteError> {
        if width == 0 {
            return Err(PaletteStripError::ZeroWidth.into());
        }
        if height_per_colour == 0 {
            return Err(PaletteStripError::ZeroHeightPerColour.into());
        }

        let colour_table = read_colour_table(colour_file)?;

        self.render(&colour_table, output_folder, width, height_per_colour)
    }

    pub fn render(
        &self,
        colour_table: &ColourTable,
        output_folder: &Path,
        width: usize,
        height_per_colour: usize,
    ) -> Result<Vec<PathBuf>, PaletteError> {
        let strip = generate_palette_strip(colour_table, width, height_per_colour)?;
        std::fs::create_dir_all(output_folder).map_err(|source| PaletteError::OutputFolder {
            path: output_folder.to_path_buf(),
            source,
        })?;
        info!(
            "Palette of {} colours, {}x{} pixels",
            colour_table.len(),
            strip.width(),
            strip.height()
        );

        let mut written = Vec::with_capacity(self.outputs.len());
        for (stem, presenter) in &self.outputs {
            let path = output_folder.join(format!("{}.{}", stem, presenter.extension()));
            presenter
                .present(&strip, &path)
                .map_err(|source| PaletteError::Write {
                    path: path.clone(),
                    source,
                })?;
            info!("Saved to {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
