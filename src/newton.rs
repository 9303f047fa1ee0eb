// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton fractal renderer
//!
//! Every pixel of the raster is a starting guess for Newton-Raphson
//! root finding on z^n - 1 = 0.  The iteration z <- z - f(z)/f'(z)
//! walks each guess toward one of the n roots of unity; which root it
//! reaches, and how many steps that takes, are the two values recorded
//! per pixel.  The basin boundaries between the roots form the
//! fractal.
//!
//! Unlike the escape-time fractals there is no divergence test: the
//! polynomial keeps the iteration bounded, so the loop ends either by
//! reaching the tolerance or by exhausting its step budget.
//! Exhaustion is a normal outcome and marks the boundary set.

extern crate crossbeam;

use num::Complex;

use planes::{Pixel, PlaneMapper};
use roots::RootSet;

/// Raise a complex number to a non-negative integer power by repeated
/// multiplication.
fn pow(base: Complex<f64>, exponent: u32) -> Complex<f64> {
    let mut acc = Complex::new(1.0, 0.0);
    for _ in 0..exponent {
        acc = acc * base;
    }
    acc
}

/// Renders the Newton fractal of z^n - 1 = 0 over a viewport of the
/// complex plane.  Holds everything the per-pixel computation needs;
/// once built the renderer is immutable, which is what lets the
/// threaded render share it without locking.
pub struct NewtonRenderer {
    plane: PlaneMapper,
    roots: RootSet,
    degree: u32,
    max_iterations: u32,
    tolerance: f64,
}

impl NewtonRenderer {
    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the viewport, the degree of the
    /// polynomial, the iteration budget per pixel, and the convergence
    /// tolerance.  All validation happens here; the render loops
    /// assume the configuration is sane.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        degree: u32,
        max_iterations: u32,
        tolerance: f64,
    ) -> Result<Self, String> {
        if degree < 1 {
            return Err("The polynomial degree must be at least 1.".to_string());
        }
        if max_iterations < 1 {
            return Err("The iteration budget must be at least 1.".to_string());
        }
        if tolerance <= 0.0 {
            return Err("The tolerance must be a positive distance.".to_string());
        }
        match PlaneMapper::new(width, height, leftlower, rightupper) {
            Ok(plane) => Ok(NewtonRenderer {
                plane,
                roots: RootSet::new(degree),
                degree,
                max_iterations,
                tolerance,
            }),
            Err(u) => Err(u),
        }
    }

    /// The number of pixels a render produces.  Both output buffers
    /// must be exactly this long.
    pub fn len(&self) -> usize {
        self.plane.len()
    }

    /// Describes that the raster holds pixels at all; construction
    /// forbids an empty one.
    pub fn is_empty(&self) -> bool {
        self.plane.is_empty()
    }

    /// The roots the renderer classifies against, for callers that
    /// want to relate an index in the output back to a location on the
    /// plane.
    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    /// Run the Newton iteration from a single starting point.  Returns
    /// the terminal point and the number of steps taken.  The loop has
    /// exactly two exits: the threshold test, which also fires when the
    /// slope is too small to divide by safely (near z = 0 the
    /// derivative of z^n vanishes and the step would blow up), and the
    /// step budget.  Both are ordinary terminal states.
    pub fn solve(&self, start: Complex<f64>) -> (Complex<f64>, u32) {
        let one = Complex::new(1.0, 0.0);
        let mut z = start;
        let mut iterations = 0;
        while iterations < self.max_iterations {
            // f(z) = z^n - 1 and f'(z) = n * z^(n-1) share the
            // z^(n-1) term, so it is raised once.
            let lead = pow(z, self.degree - 1);
            let value = lead * z - one;
            let slope = Complex::new(self.degree as f64, 0.0) * lead;
            if value.norm() < self.tolerance || slope.norm() < self.tolerance {
                break;
            }
            z = z - value / slope;
            iterations += 1;
        }
        (z, iterations)
    }

    /// Compute one pixel: map it onto the viewport, iterate, classify
    /// the terminal point.  Returns the root index (-1 when the point
    /// ended up within tolerance of no root) and the iteration count.
    fn compute_pixel(&self, pixel: Pixel) -> (i32, u32) {
        let (z, iterations) = self.solve(self.plane.pixel_to_point(&pixel));
        let root = match self.roots.classify(z, self.tolerance) {
            Some(index) => index as i32,
            None => -1,
        };
        (root, iterations)
    }

    // Fill a horizontal band of the raster, rows first_row onward,
    // writing row-major into the two band-local slices.  Band slices
    // are always a whole number of rows long.
    fn render_band(
        &self,
        first_row: usize,
        root_indices: &mut [i32],
        iteration_counts: &mut [u32],
    ) {
        let width = self.plane.raster.0;
        let rows = root_indices.len() / width;
        for row in 0..rows {
            for column in 0..width {
                let (root, iterations) = self.compute_pixel(Pixel(column, first_row + row));
                let offset = row * width + column;
                root_indices[offset] = root;
                iteration_counts[offset] = iterations;
            }
        }
    }

    /// Render the whole raster on the calling thread, writing into the
    /// two caller-owned buffers in row-major order.  A caller sweeping
    /// parameters can hand the same buffers back frame after frame
    /// without reallocating.
    pub fn render_into(&self, root_indices: &mut [i32], iteration_counts: &mut [u32]) {
        assert!(root_indices.len() == self.plane.len());
        assert!(iteration_counts.len() == self.plane.len());
        self.render_band(0, root_indices, iteration_counts);
    }

    /// A multi-threaded version of the render.  The row range is cut
    /// into contiguous bands, one scoped thread per band, each writing
    /// its own disjoint slice of the two outputs; no worker ever sees
    /// another worker's band, so no locking is involved.  The result
    /// is identical to `render_into` for every thread count.
    pub fn render_threaded(
        &self,
        root_indices: &mut [i32],
        iteration_counts: &mut [u32],
        threads: usize,
    ) {
        assert!(root_indices.len() == self.plane.len());
        assert!(iteration_counts.len() == self.plane.len());
        assert!(threads >= 1);

        let width = self.plane.raster.0;
        let height = self.plane.raster.1;
        let band_rows = (height / threads) + 1;
        crossbeam::scope(|spawner| {
            let bands = root_indices
                .chunks_mut(band_rows * width)
                .zip(iteration_counts.chunks_mut(band_rows * width));
            for (band, (roots_band, counts_band)) in bands.enumerate() {
                spawner.spawn(move |_| {
                    self.render_band(band * band_rows, roots_band, counts_band);
                });
            }
        })
        .unwrap();
    }

    /// Convenience wrapper that allocates the two output buffers,
    /// renders across the given number of threads, and returns them.
    pub fn render(&self, threads: usize) -> (Vec<i32>, Vec<u32>) {
        let mut root_indices = vec![-1 as i32; self.plane.len()];
        let mut iteration_counts = vec![0 as u32; self.plane.len()];
        self.render_threaded(&mut root_indices, &mut iteration_counts, threads);
        (root_indices, iteration_counts)
    }
}
