// file: src/summarizer/power.rs
// description: power iteration for stationary distributions of sentence graphs
// reference: https://docs.rs/nalgebra

use nalgebra::{DMatrix, DVector};
use tracing::{trace, warn};

pub const MAX_ITERATIONS: usize = 1000;

/// Iterates `p = Mᵀ·p` from the uniform vector until the step changes `p`
/// by at most `epsilon` (L2 norm) or the iteration cap is reached.
pub fn power_method(matrix: &DMatrix<f64>, epsilon: f64) -> DVector<f64> {
    let n = matrix.nrows();
    if n == 0 {
        return DVector::zeros(0);
    }

    let transposed = matrix.transpose();
    let mut p = DVector::from_element(n, 1.0 / n as f64);

    for iteration in 1..=MAX_ITERATIONS {
        let next = &transposed * &p;
        let delta = (&next - &p).norm();
        p = next;

        if delta <= epsilon {
            trace!("Power method converged after {} iterations", iteration);
            return p;
        }
    }

    warn!(
        "Power method did not converge within {} iterations",
        MAX_ITERATIONS
    );
    p
}
