extern crate clap;
extern crate image;
extern crate newton_fractal;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::png::PNGEncoder;
use image::ColorType;
use newton_fractal::color::colorize;
use newton_fractal::NewtonRenderer;
use num::Complex;
use std::fs::File;
use std::io::{Error, ErrorKind};
use std::path::Path;
use std::str::FromStr;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_positive(
    s: &str,
    isnotanumber_err: &str,
    isnotpositive_err: &str,
) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) => {
            if v > 0.0 {
                Ok(())
            } else {
                Err(isnotpositive_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const DEGREE: &str = "degree";
const SIZE: &str = "size";
const VIEWPORT: &str = "viewport";
const ITERATIONS: &str = "iterations";
const TOLERANCE: &str = "tolerance";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("newton")
        .version("0.1.0")
        .about("Newton fractal renderer for z^n - 1 = 0")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output image file"),
        )
        .arg(
            Arg::with_name(DEGREE)
                .required(false)
                .long(DEGREE)
                .short("n")
                .takes_value(true)
                .default_value("5")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        64,
                        "Could not parse polynomial degree",
                        "Polynomial degree must be between 1 and 64",
                    )
                })
                .help("Power of the polynomial whose roots are rendered"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        20_000,
                        "Could not parse image size",
                        "Image size must be between 1 and 20000 pixels",
                    )
                })
                .help("Image size in pixels, used for both width and height"),
        )
        .arg(
            Arg::with_name(VIEWPORT)
                .required(false)
                .long(VIEWPORT)
                .short("v")
                .takes_value(true)
                .default_value("2.0")
                .validator(|s| {
                    validate_positive(
                        &s,
                        "Could not parse viewport extent",
                        "Viewport extent must be a positive number",
                    )
                })
                .help("Half-extent of the viewport; the visible plane is (-v..v) squared"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("40")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration budget",
                        "Iteration budget must be between 1 and 200000",
                    )
                })
                .help("Maximum Newton steps per pixel"),
        )
        .arg(
            Arg::with_name(TOLERANCE)
                .required(false)
                .long(TOLERANCE)
                .short("t")
                .takes_value(true)
                .default_value("1e-4")
                .validator(|s| {
                    validate_positive(
                        &s,
                        "Could not parse tolerance",
                        "Tolerance must be a positive distance",
                    )
                })
                .help("Distance to a root at which a pixel counts as converged"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("j")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the render"),
        )
        .get_matches()
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (usize, usize)) -> Result<(), std::io::Error> {
    if pixels.len() != bounds.0 * bounds.1 * 4 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "Framebuffer size does not match the image dimensions",
        ));
    }
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::RGBA(8))?;
    Ok(())
}

fn main() {
    let matches = args();
    let degree = u32::from_str(matches.value_of(DEGREE).unwrap())
        .expect("Could not parse polynomial degree.");
    let size = usize::from_str(matches.value_of(SIZE).unwrap()).expect("Could not parse image size.");
    let viewport = f64::from_str(matches.value_of(VIEWPORT).unwrap())
        .expect("Could not parse viewport extent.");
    let iterations = u32::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration budget.");
    let tolerance =
        f64::from_str(matches.value_of(TOLERANCE).unwrap()).expect("Could not parse tolerance.");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");

    let renderer = match NewtonRenderer::new(
        size,
        size,
        Complex::new(-viewport, -viewport),
        Complex::new(viewport, viewport),
        degree,
        iterations,
        tolerance,
    ) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Configuration failure: {}", e);
            std::process::exit(1);
        }
    };

    let mut root_indices = vec![-1 as i32; renderer.len()];
    let mut iteration_counts = vec![0 as u32; renderer.len()];
    renderer.render_threaded(&mut root_indices, &mut iteration_counts, threads);

    let pixels = colorize(&root_indices, &iteration_counts, iterations);
    if let Err(e) = write_image(matches.value_of(OUTPUT).unwrap(), &pixels, (size, size)) {
        eprintln!("Write failure: {}", e);
        std::process::exit(2);
    }
}
