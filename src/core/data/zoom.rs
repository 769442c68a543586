use std::error::Error;
use std::fmt;

pub const MAX_FRAME_COUNT: u32 = 10_000;

// Relative tolerance for treating the two scales of a one-frame zoom as equal.
const SINGLE_FRAME_SCALE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    InvalidInitialScale { scale: f64 },
    InvalidFinalScale { scale: f64 },
    FrameCountOutOfRange { frame_count: u32 },
    SingleFrameScaleMismatch { initial_scale: f64, final_scale: f64 },
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInitialScale { scale } => {
                write!(f, "initial scale must be a positive finite number: {}", scale)
            }
            Self::InvalidFinalScale { scale } => {
                write!(f, "final scale must be a positive finite number: {}", scale)
            }
            Self::FrameCountOutOfRange { frame_count } => {
                write!(
                    f,
                    "frame count must be between 1 and {}: {}",
                    MAX_FRAME_COUNT, frame_count
                )
            }
            Self::SingleFrameScaleMismatch {
                initial_scale,
                final_scale,
            } => {
                write!(
                    f,
                    "a single frame zoom needs equal scales, got {} and {}",
                    initial_scale, final_scale
                )
            }
        }
    }
}

impl Error for ZoomError {}

/// Geometric zoom from `initial_scale` to `final_scale` over `frame_count`
/// frames.
///
/// Frame `i` has scale `initial * (final / initial)^(i / (frame_count - 1))`,
/// so consecutive frames share a constant ratio. The first and last frames
/// are pinned to the exact input scales.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Zoom {
    initial_scale: f64,
    final_scale: f64,
    frame_count: u32,
}

impl Zoom {
    pub fn new(initial_scale: f64, final_scale: f64, frame_count: u32) -> Result<Self, ZoomError> {
        if !is_positive_finite(initial_scale) {
            return Err(ZoomError::InvalidInitialScale {
                scale: initial_scale,
            });
        }

        if !is_positive_finite(final_scale) {
            return Err(ZoomError::InvalidFinalScale { scale: final_scale });
        }

        if frame_count == 0 || frame_count > MAX_FRAME_COUNT {
            return Err(ZoomError::FrameCountOutOfRange { frame_count });
        }

        let tolerance = SINGLE_FRAME_SCALE_TOLERANCE * initial_scale.max(final_scale);
        if frame_count == 1 && (initial_scale - final_scale).abs() > tolerance {
            return Err(ZoomError::SingleFrameScaleMismatch {
                initial_scale,
                final_scale,
            });
        }

        Ok(Self {
            initial_scale,
            final_scale,
            frame_count,
        })
    }

    #[must_use]
    pub fn initial_scale(&self) -> f64 {
        self.initial_scale
    }

    #[must_use]
    pub fn final_scale(&self) -> f64 {
        self.final_scale
    }

    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Scale of frame `index`, or `None` past the last frame.
    #[must_use]
    pub fn scale_at(&self, index: u32) -> Option<f64> {
        if index >= self.frame_count {
            return None;
        }

        Some(self.interpolate(index))
    }

    /// Scales of every frame, first to last.
    pub fn scales(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.frame_count).map(move |index| self.interpolate(index))
    }

    // `index < frame_count`.
    fn interpolate(&self, index: u32) -> f64 {
        if index == 0 {
            return self.initial_scale;
        }

        let last = self.frame_count - 1;
        if index == last {
            return self.final_scale;
        }

        let ratio = self.final_scale / self.initial_scale;
        let exponent = f64::from(index) / f64::from(last);

        self.initial_scale * ratio.powf(exponent)
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
