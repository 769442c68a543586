use clap::Parser;
use std::path::PathBuf;

/// Renders a colour table as P3 and P6 palette strips.
#[derive(Debug, Parser)]
#[command(name = "colour_palette", version)]
pub struct PaletteArgs {
    /// Colour table file
    pub colour_file: PathBuf,

    /// Folder receiving colorpaletteP3.ppm and colorpaletteP6.ppm
    pub output_folder: PathBuf,

    /// Strip width in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of each colour band in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height_per_colour: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        PaletteArgs::command().debug_assert();
    }

    #[test]
    fn test_parses_arguments() {
        let args =
            PaletteArgs::try_parse_from(["colour_palette", "colours.txt", "out", "64", "8"]).unwrap();

        assert_eq!(args.colour_file, PathBuf::from("colours.txt"));
        assert_eq!(args.output_folder, PathBuf::from("out"));
        assert_eq!(args.width, 64);
        assert_eq!(args.height_per_colour, 8);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(PaletteArgs::try_parse_from(["colour_palette", "c.txt", "out", "0", "8"]).is_err());
        assert!(PaletteArgs::try_parse_from(["colour_palette", "c.txt", "out", "8", "0"]).is_err());
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert!(PaletteArgs::try_parse_from(["colour_palette", "c.txt", "out", "8"]).is_err());
    }
}
