use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;

    /// File extension, without the dot, for images this presenter writes.
    fn extension(&self) -> &str;
}
