use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Pixel encoding of a PPM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PpmEncoding {
    /// `P3`: decimal components, one image row per line.
    Plain,
    /// `P6`: packed RGB bytes.
    #[default]
    Binary,
}

impl PpmEncoding {
    #[must_use]
    pub fn magic(self) -> &'static str {
        match self {
            Self::Plain => "P3",
            Self::Binary => "P6",
        }
    }
}

pub fn write_ppm<W: Write>(
    buffer: &PixelBuffer,
    encoding: PpmEncoding,
    mut writer: W,
) -> std::io::Result<()> {
    // PPM header: magic, width, height and max_colour on one line
    writeln!(
        writer,
        "{} {} {} 255",
        encoding.magic(),
        buffer.width(),
        buffer.height()
    )?;

    match encoding {
        PpmEncoding::Binary => writer.write_all(buffer.buffer())?,
        PpmEncoding::Plain => {
            for row in buffer.rows() {
                let line = row
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(writer, "{}", line)?;
            }
        }
    }

    writer.flush()
}

pub fn write_ppm_file(
    buffer: &PixelBuffer,
    encoding: PpmEncoding,
    filepath: impl AsRef<Path>,
) -> std::io::Result<()> {
    let file = File::create(filepath)?;
    write_ppm(buffer, encoding, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buffer() -> PixelBuffer {
        PixelBuffer::from_data(2, 2, vec![0, 1, 2, 3, 4, 5, 250, 251, 252, 253, 254, 255]).unwrap()
    }

    #[test]
    fn test_binary_encoding() {
        let mut output = Vec::new();
        write_ppm(&sample_buffer(), PpmEncoding::Binary, &mut output).unwrap();

        let mut expected = b"P6 2 2 255\n".to_vec();
        expected.extend_from_slice(&[0, 1, 2, 3, 4, 5, 250, 251, 252, 253, 254, 255]);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_plain_encoding() {
        let mut output = Vec::new();
        write_ppm(&sample_buffer(), PpmEncoding::Plain, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "P3 2 2 255\n0 1 2 3 4 5\n250 251 252 253 254 255\n"
        );
    }

    #[test]
    fn test_default_encoding_is_binary() {
        assert_eq!(PpmEncoding::default(), PpmEncoding::Binary);
    }

    #[test]
    fn test_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.ppm");

        write_ppm_file(&sample_buffer(), PpmEncoding::Binary, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6 2 2 255\n"));
        assert_eq!(bytes.len(), "P6 2 2 255\n".len() + 12);
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("image.ppm");

        assert!(write_ppm_file(&sample_buffer(), PpmEncoding::Plain, &path).is_err());
    }
}
