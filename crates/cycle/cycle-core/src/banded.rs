//! Banded linear solver for symmetric pentadiagonal systems
//!
//! The HP filter system `(I + λ·DᵀD) τ = y` has half-bandwidth 2. It is
//! factored as `L·diag(d)·Lᵀ` with a unit lower-triangular `L` that keeps the
//! same band, so factorisation and substitution are both O(n).

use cycle_spi::{CycleError, Result};

/// Symmetric pentadiagonal matrix stored by its upper bands.
#[derive(Debug, Clone, PartialEq)]
pub struct PentadiagonalSystem {
    /// `A[i][i]`, length n
    main: Vec<f64>,
    /// `A[i][i+1]`, length n-1
    upper1: Vec<f64>,
    /// `A[i][i+2]`, length n-2
    upper2: Vec<f64>,
}

impl PentadiagonalSystem {
    /// Build a system from its diagonal and two super-diagonals.
    pub fn new(main: Vec<f64>, upper1: Vec<f64>, upper2: Vec<f64>) -> Result<Self> {
        let n = main.len();
        if upper1.len() != n.saturating_sub(1) || upper2.len() != n.saturating_sub(2) {
            return Err(CycleError::invalid(
                "bands",
                format!(
                    "expected band lengths {}, {}, {}; got {}, {}, {}",
                    n,
                    n.saturating_sub(1),
                    n.saturating_sub(2),
                    n,
                    upper1.len(),
                    upper2.len()
                ),
            ));
        }
        Ok(Self {
            main,
            upper1,
            upper2,
        })
    }

    /// The HP filter matrix `I + λ·DᵀD` for a series of length `n`.
    ///
    /// Row k of D has `[1, -2, 1]` at columns k, k+1, k+2; each row adds its
    /// outer product scaled by λ.
    pub fn hp_penalty(n: usize, lambda: f64) -> Self {
        let mut main = vec![1.0; n];
        let mut upper1 = vec![0.0; n.saturating_sub(1)];
        let mut upper2 = vec![0.0; n.saturating_sub(2)];

        for k in 0..n.saturating_sub(2) {
            main[k] += lambda;
            main[k + 1] += 4.0 * lambda;
            main[k + 2] += lambda;
            upper1[k] -= 2.0 * lambda;
            upper1[k + 1] -= 2.0 * lambda;
            upper2[k] += lambda;
        }

        Self {
            main,
            upper1,
            upper2,
        }
    }

    pub fn len(&self) -> usize {
        self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    pub fn main(&self) -> &[f64] {
        &self.main
    }

    pub fn upper1(&self) -> &[f64] {
        &self.upper1
    }

    pub fn upper2(&self) -> &[f64] {
        &self.upper2
    }

    /// Compute the banded LDLᵀ factorisation.
    ///
    /// Fails with `NumericalFailure` when a pivot is not strictly positive,
    /// i.e. the matrix is not positive definite.
    pub fn factor(&self) -> Result<LdlFactor> {
        let n = self.main.len();
        let mut d = vec![0.0; n];
        // l1[i] = L[i+1][i], l2[i] = L[i+2][i]
        let mut l1 = vec![0.0; n.saturating_sub(1)];
        let mut l2 = vec![0.0; n.saturating_sub(2)];

        for i in 0..n {
            let mut pivot = self.main[i];
            if i >= 1 {
                pivot -= l1[i - 1] * l1[i - 1] * d[i - 1];
            }
            if i >= 2 {
                pivot -= l2[i - 2] * l2[i - 2] * d[i - 2];
            }
            if !(pivot.is_finite() && pivot > 0.0) {
                return Err(CycleError::NumericalFailure(format!(
                    "non-positive pivot {} at row {}",
                    pivot, i
                )));
            }
            d[i] = pivot;

            if i + 1 < n {
                let mut off = self.upper1[i];
                if i >= 1 {
                    off -= l2[i - 1] * d[i - 1] * l1[i - 1];
                }
                l1[i] = off / pivot;
            }
            if i + 2 < n {
                l2[i] = self.upper2[i] / pivot;
            }
        }

        Ok(LdlFactor { d, l1, l2 })
    }
}

/// `L·diag(d)·Lᵀ` factor of a [`PentadiagonalSystem`].
#[derive(Debug, Clone)]
pub struct LdlFactor {
    d: Vec<f64>,
    l1: Vec<f64>,
    l2: Vec<f64>,
}

impl LdlFactor {
    /// Pivots of the factorisation
    pub fn pivots(&self) -> &[f64] {
        &self.d
    }

    /// Solve `A x = rhs` by forward substitution, diagonal scaling and back
    /// substitution.
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        let n = self.d.len();
        if rhs.len() != n {
            return Err(CycleError::invalid(
                "rhs",
                format!("length {} does not match system size {}", rhs.len(), n),
            ));
        }

        let mut x = rhs.to_vec();

        // L z = rhs
        for i in 0..n {
            if i >= 1 {
                x[i] -= self.l1[i - 1] * x[i - 1];
            }
            if i >= 2 {
                x[i] -= self.l2[i - 2] * x[i - 2];
            }
        }

        for (xi, di) in x.iter_mut().zip(&self.d) {
            *xi /= di;
        }

        // Lᵀ x = w
        for i in (0..n).rev() {
            if i + 1 < n {
                x[i] -= self.l1[i] * x[i + 1];
            }
            if i + 2 < n {
                x[i] -= self.l2[i] * x[i + 2];
            }
        }

        if let Some(i) = x.iter().position(|v| !v.is_finite()) {
            return Err(CycleError::NumericalFailure(format!(
                "non-finite solution value at row {}",
                i
            )));
        }

        Ok(x)
    }
}

/// Factor `system` and solve it for `rhs`.
pub fn solve_pentadiagonal(system: &PentadiagonalSystem, rhs: &[f64]) -> Result<Vec<f64>> {
    system.factor()?.solve(rhs)
}
