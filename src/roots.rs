//! Contains the RootSet struct, the convergence targets of the Newton
//! iteration.  The polynomial z^n - 1 = 0 has the n roots of unity as
//! its exact solutions, evenly spaced around the unit circle, so the
//! set is written down in closed form rather than discovered
//! numerically.
use num::Complex;
use std::f64::consts::PI;

/// The n roots of z^n - 1 = 0, in increasing-angle order starting at
/// angle 0 (which is always the root 1+0i).  Built once per render,
/// read-only afterwards, and therefore safe to share across render
/// threads without synchronization.
#[derive(Debug)]
pub struct RootSet {
    roots: Vec<Complex<f64>>,
}

impl RootSet {
    /// Compute the roots of unity for the given degree: root k sits at
    /// angle 2*pi*k/n on the unit circle.  The degree must already
    /// have been validated as at least 1; that is a caller contract,
    /// not something re-checked here.
    pub fn new(degree: u32) -> RootSet {
        let mut roots = Vec::with_capacity(degree as usize);
        for k in 0..degree {
            let angle = 2.0 * PI * (k as f64) / (degree as f64);
            roots.push(Complex::new(angle.cos(), angle.sin()));
        }
        RootSet { roots }
    }

    /// The number of roots in the set.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Describes that the set holds roots at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The root at the given index.
    pub fn get(&self, index: usize) -> Complex<f64> {
        self.roots[index]
    }

    /// Find the root nearest to the terminal point of an iteration, or
    /// None when no root lies within the tolerance.  Roots are scanned
    /// in index order and only a strictly smaller distance replaces
    /// the current best, so the lowest index wins exact ties.  The
    /// ordering is part of the output contract: identical inputs must
    /// classify identically from run to run.
    pub fn classify(&self, point: Complex<f64>, tolerance: f64) -> Option<usize> {
        let mut nearest = None;
        let mut nearest_dist = std::f64::MAX;
        for (index, root) in self.roots.iter().enumerate() {
            let dist = (point - root).norm();
            if dist > tolerance {
                continue;
            }
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = Some(index);
            }
        }
        nearest
    }
}
