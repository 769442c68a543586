use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::{PpmEncoding, write_ppm_file};

#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {
    encoding: PpmEncoding,
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        write_ppm_file(buffer, self.encoding, filepath)
    }

    fn extension(&self) -> &str {
        "ppm"
    }
}

impl PpmFilePresenter {
    pub fn new(encoding: PpmEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> PpmEncoding {
        self.encoding
    }
}
