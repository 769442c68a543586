pub mod colour;
pub mod colour_table;
pub mod complex;
pub mod frame;
pub mod grid_region;
pub mod iteration_plane;
pub mod pixel_buffer;
pub mod zoom;
