#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton fractal renderer
//!
//! Newton-Raphson root finding refines a guess z for a zero of f by
//! stepping z <- z - f(z)/f'(z).  Applied to z^n - 1 = 0, every
//! starting point on the complex plane is pulled toward one of the n
//! roots of unity, and coloring each point by the root it reaches
//! (shaded by how long that took) paints the basins of attraction.
//! The boundaries between the basins are the fractal: there,
//! neighbouring starting points land on different roots, and some
//! points never settle at all within their step budget.
//!
//! The kernel is exposed as a library.  A `PlaneMapper` relates the
//! pixel raster to a viewport on the plane, a `RootSet` holds the
//! convergence targets, and a `NewtonRenderer` fills caller-owned
//! buffers with a root index and an iteration count per pixel, on one
//! thread or banded across several.  The `newton` binary layers
//! argument parsing, color mapping, and PNG encoding on top.

extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod color;
pub mod newton;
pub mod planes;
pub mod roots;

pub use newton::NewtonRenderer;
