//! Colour table files.
//!
//! The format is plain whitespace-separated text: a colour count `N`
//! followed by `N` red/green/blue triples, each component in `0..=255`.
//! Anything after the last triple is ignored.
//!
//! ```text
//! 3
//! 255 0 0
//! 0 255 0
//! 0 0 255
//! ```

use log::debug;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::data::colour::Colour;
use crate::core::data::colour_table::ColourTable;

#[derive(Debug)]
pub enum ColourTableFileError {
    Io { path: PathBuf, source: std::io::Error },
    MissingCount,
    InvalidCount { token: String },
    Empty,
    InvalidComponent { colour: usize, token: String },
    Truncated { expected: usize, found: usize },
}

impl fmt::Display for ColourTableFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read colour file {}: {}", path.display(), source)
            }
            Self::MissingCount => write!(f, "colour file is missing the colour count"),
            Self::InvalidCount { token } => {
                write!(f, "colour count must be a non-negative integer: {:?}", token)
            }
            Self::Empty => write!(f, "colour file declares zero colours"),
            Self::InvalidComponent { colour, token } => {
                write!(
                    f,
                    "colour {} has a component outside 0-255: {:?}",
                    colour, token
                )
            }
            Self::Truncated { expected, found } => {
                write!(
                    f,
                    "colour file declares {} colours but only {} are complete",
                    expected, found
                )
            }
        }
    }
}

impl Error for ColourTableFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub fn parse_colour_table(text: &str) -> Result<ColourTable, ColourTableFileError> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(ColourTableFileError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| ColourTableFileError::InvalidCount {
            token: count_token.to_string(),
        })?;

    if count == 0 {
        return Err(ColourTableFileError::Empty);
    }

    // The count is untrusted, so capacity is capped by what the text could hold.
    let mut colours = Vec::with_capacity(count.min(text.len() / 6 + 1));
    for colour in 0..count {
        let mut components = [0u8; 3];
        for component in &mut components {
            let token = tokens.next().ok_or(ColourTableFileError::Truncated {
                expected: count,
                found: colour,
            })?;
            *component = token
                .parse()
                .map_err(|_| ColourTableFileError::InvalidComponent {
                    colour,
                    token: token.to_string(),
                })?;
        }

        let [r, g, b] = components;
        colours.push(Colour { r, g, b });
    }

    ColourTable::new(colours).map_err(|_| ColourTableFileError::Empty)
}

pub fn read_colour_table(path: impl AsRef<Path>) -> Result<ColourTable, ColourTableFileError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ColourTableFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_colour_table(&text)?;
    debug!("Loaded {} colours from {}", table.len(), path.display());

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parses_colours_in_order() {
        let table = parse_colour_table("2\n255 0 10\n1 2 3\n").unwrap();

        assert_eq!(
            table.colours(),
            &[Colour { r: 255, g: 0, b: 10 }, Colour { r: 1, g: 2, b: 3 }]
        );
    }

    #[test]
    fn test_layout_is_whitespace_insensitive() {
        let table = parse_colour_table("  2 10 20\t30\n\n40 50 60").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.colours()[1], Colour { r: 40, g: 50, b: 60 });
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        let table = parse_colour_table("1\n9 9 9\n1 2 3 garbage").unwrap();

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_colour_table("  \n"),
            Err(ColourTableFileError::MissingCount)
        ));
    }

    #[test]
    fn test_zero_colours() {
        assert!(matches!(
            parse_colour_table("0\n"),
            Err(ColourTableFileError::Empty)
        ));
    }

    #[test]
    fn test_invalid_count() {
        assert!(matches!(
            parse_colour_table("-3\n1 2 3"),
            Err(ColourTableFileError::InvalidCount { .. })
        ));
        assert!(matches!(
            parse_colour_table("two\n1 2 3"),
            Err(ColourTableFileError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_component_out_of_range() {
        let result = parse_colour_table("2\n1 2 3\n4 256 6\n");

        match result {
            Err(ColourTableFileError::InvalidComponent { colour, token }) => {
                assert_eq!(colour, 1);
                assert_eq!(token, "256");
            }
            other => panic!("expected InvalidComponent, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_table() {
        assert!(matches!(
            parse_colour_table("3\n1 2 3\n4 5 6\n7 8"),
            Err(ColourTableFileError::Truncated {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_huge_count_with_short_body() {
        assert!(matches!(
            parse_colour_table("18446744073709551615\n1 2 3"),
            Err(ColourTableFileError::Truncated { found: 1, .. })
        ));
    }

    #[test_log::test]
    fn test_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1\n12 34 56").unwrap();

        let table = read_colour_table(file.path()).unwrap();

        assert_eq!(table.colours(), &[Colour { r: 12, g: 34, b: 56 }]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_colour_table(&path).unwrap_err();

        assert!(matches!(err, ColourTableFileError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }
}
