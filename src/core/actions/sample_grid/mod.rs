pub mod ports;
pub mod sample_grid;
