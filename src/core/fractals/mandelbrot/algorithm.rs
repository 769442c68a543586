use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Escape-time count for a single point.
///
/// Iterates `z -> z² + point` from `z = 0` and returns the 1-based step at
/// which `|z| >= threshold` first holds, or `0` if that never happens within
/// `max_iterations` steps.
#[must_use]
pub fn iterate(point: Complex, max_iterations: u64, threshold: f64) -> u64 {
    let mut z = Complex::ZERO;

    for step in 1..=max_iterations {
        z = z * z + point;
        if z.magnitude() >= threshold {
            return step;
        }
    }

    0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u64,
    threshold: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u64;

    #[inline]
    fn compute(&self, point: Complex) -> Self::Success {
        iterate(point, self.max_iterations, self.threshold)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u64, threshold: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(MandelbrotError::InvalidThresholdError { threshold });
        }

        Ok(Self { max_iterations, threshold })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
