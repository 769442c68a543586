use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_plane::IterationPlane;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

/// Maps every cell of `plane` to a colour, producing an image of the same
/// dimensions.
///
/// Each row is coloured independently, writing into its own slice of the
/// preallocated buffer.
pub fn generate_pixel_buffer<CMap>(
    plane: &IterationPlane,
    mapper: &CMap,
) -> Result<PixelBuffer, PixelBufferError>
where
    CMap: ColourMap<u64> + Sync,
{
    let side = plane.side();
    let mut buffer: PixelBufferData = vec![0; side * side * 3];

    buffer
        .par_chunks_mut(side * 3)
        .zip(plane.cells().par_chunks(side))
        .for_each(|(bytes, cells)| {
            for (pixel, &iterations) in bytes.chunks_exact_mut(3).zip(cells) {
                pixel.copy_from_slice(&mapper.map(iterations).to_bytes());
            }
        });

    PixelBuffer::from_data(side, side, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::colour_table::ColourTable;

    #[derive(Debug)]
    struct StubGreyscale {}

    impl ColourMap<u64> for StubGreyscale {
        fn map(&self, value: u64) -> Colour {
            let v = value as u8;
            Colour { r: v, g: v, b: v }
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let plane = IterationPlane::from_data(2, vec![1, 2, 3, 4]).unwrap();
        let expected = PixelBuffer::from_data(2, 2, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4])
            .unwrap();

        let results = generate_pixel_buffer(&plane, &StubGreyscale {}).unwrap();

        assert_eq!(results, expected);
    }

    #[test]
    fn test_single_pixel_plane() {
        let plane = IterationPlane::from_data(1, vec![7]).unwrap();

        let results = generate_pixel_buffer(&plane, &StubGreyscale {}).unwrap();

        assert_eq!(results.width(), 1);
        assert_eq!(results.height(), 1);
        assert_eq!(results.buffer(), &vec![7, 7, 7]);
    }

    #[test]
    fn test_palette_colours_escaped_and_bounded_points() {
        let red = Colour { r: 200, g: 10, b: 10 };
        let blue = Colour { r: 10, g: 10, b: 200 };
        let table = ColourTable::new(vec![red, blue]).unwrap();
        let plane = IterationPlane::from_data(2, vec![0, 1, 2, 3]).unwrap();

        let results = generate_pixel_buffer(&plane, &table).unwrap();

        assert_eq!(results.pixel(0, 0), Some(Colour::BLACK));
        assert_eq!(results.pixel(1, 0), Some(red));
        assert_eq!(results.pixel(0, 1), Some(blue));
        assert_eq!(results.pixel(1, 1), Some(red));
    }
}
