//! Command-line input adapters.
//!
//! Each argument struct parses a command line with clap and converts it into
//! the validated parameters the controllers expect.

pub mod movie_args;
pub mod palette_args;

pub use movie_args::MovieArgs;
pub use palette_args::PaletteArgs;
