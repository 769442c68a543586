use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationPlaneError {
    ZeroSide,
    BoundsMismatch { expected_cells: usize, cells: usize },
}

impl fmt::Display for IterationPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSide => write!(f, "plane side must be at least one cell"),
            Self::BoundsMismatch {
                expected_cells,
                cells,
            } => {
                write!(
                    f,
                    "plane expects {} cells but {} were supplied",
                    expected_cells, cells
                )
            }
        }
    }
}

impl Error for IterationPlaneError {}

/// Square, row-major plane of escape-time counts.
///
/// A cell holds `0` for a point that never escaped, otherwise the step at
/// which it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationPlane {
    side: usize,
    cells: Vec<u64>,
}

impl IterationPlane {
    pub fn from_data(side: usize, cells: Vec<u64>) -> Result<Self, IterationPlaneError> {
        if side == 0 {
            return Err(IterationPlaneError::ZeroSide);
        }

        let expected_cells = side.saturating_mul(side);

        if cells.len() != expected_cells {
            return Err(IterationPlaneError::BoundsMismatch {
                expected_cells,
                cells: cells.len(),
            });
        }

        Ok(Self { side, cells })
    }

    /// All-zero plane; callers guarantee `side >= 1`.
    pub(crate) fn zeroed(side: usize) -> Self {
        Self {
            side,
            cells: vec![0; side * side],
        }
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.side || col >= self.side {
            return None;
        }

        Some(self.cells[row * self.side + col])
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u64] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.cells.chunks(self.side)
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<u64> {
        self.cells
    }
}
