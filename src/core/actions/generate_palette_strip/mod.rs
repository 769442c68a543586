pub mod generate_palette_strip;
