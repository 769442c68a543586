pub mod generate_palette_strip;
pub mod generate_pixel_buffer;
pub mod generate_sequence;
pub mod sample_grid;
