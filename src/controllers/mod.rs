pub mod movie;
pub mod palette;
pub mod ports;
