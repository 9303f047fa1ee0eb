//! Contains the PlaneMapper struct, which relates the pixel raster of
//! the output image to the rectangular viewport of the complex plane
//! being rendered.  The raster has its origin at 0,0; the viewport is
//! described by an arbitrary pair of corners defining its leftlower
//! and rightupper extent.
use num::Complex;

/// Describes the width and height of the pixel raster.  The raster is
/// assumed to start at 0,0 and all coordinates are assumed to be
/// non-negative integers.
#[derive(Copy, Clone, Debug)]
pub struct Raster(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// viewport on the complex plane, treating the real part of each value
/// as the x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug)]
pub struct Viewport(pub Complex<f64>, pub Complex<f64>);

/// Describes the column and row of a pixel on the raster.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on the raster to sample points on the complex plane.
/// The mapping is affine: pixel (col, row) samples the viewport at
/// leftlower + (col * xstep, row * ystep), where the steps are the
/// viewport extent divided by the raster dimensions.  Each pixel's
/// sample point depends only on its own coordinates, which is what
/// lets the render loop be partitioned freely.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the pixel raster.
    pub raster: Raster,
    /// The two corners defining the viewport, leftlower and
    /// rightupper.
    pub viewport: Viewport,
    // Complex-plane distance covered by one pixel, horizontally and
    // vertically.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the raster dimensions and the two corners
    /// of the viewport.  Degenerate rasters and inverted viewports are
    /// rejected here, once, so the render loop never re-checks them.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, String> {
        if width == 0 || height == 0 {
            return Err("The raster must be at least one pixel in each direction.".to_string());
        }

        if rightupper.re <= leftlower.re {
            return Err(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            );
        }

        if rightupper.im <= leftlower.im {
            return Err(
                "The left lower corner is not lower than the right upper corner".to_string(),
            );
        }

        let steps = (
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        );

        Ok(PlaneMapper {
            raster: Raster(width, height),
            viewport: Viewport(leftlower, rightupper),
            steps,
        })
    }

    /// The total number of pixels on the raster.  Output buffers must
    /// be exactly this long.
    pub fn len(&self) -> usize {
        self.raster.0 * self.raster.1
    }

    /// Describes that the raster is of a size.  Construction rejects
    /// empty rasters, so this holds false for every built mapper.
    pub fn is_empty(&self) -> bool {
        self.raster.0 == 0 || self.raster.1 == 0
    }

    /// Given a pixel on the raster, return the complex number at which
    /// that pixel samples the viewport.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.viewport.0.re + (pixel.0 as f64) * self.steps.0,
            self.viewport.0.im + (pixel.1 as f64) * self.steps.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_an_empty_raster() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 0, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = PlaneMapper::new(5, 5, Complex::new(0.0, 0.0), Complex::new(5.0, 5.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn pixel_to_point_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 1)), Complex::new(1.0, -1.0));
    }

    #[test]
    fn sample_points_do_not_depend_on_raster_resolution() {
        let coarse =
            PlaneMapper::new(2, 2, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        let fine =
            PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(
            coarse.pixel_to_point(&Pixel(1, 1)),
            fine.pixel_to_point(&Pixel(2, 2))
        );
        assert_eq!(
            coarse.pixel_to_point(&Pixel(0, 1)),
            fine.pixel_to_point(&Pixel(0, 2))
        );
    }
}
