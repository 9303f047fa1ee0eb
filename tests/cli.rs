extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_a_small_image() {
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("fractal.png");
    Command::cargo_bin("newton")
        .unwrap()
        .args(&[
            "-o",
            outfile.to_str().unwrap(),
            "-s",
            "16",
            "-n",
            "3",
            "-i",
            "30",
        ])
        .assert()
        .success();

    let written = image::open(&outfile).unwrap();
    assert_eq!(written.to_rgba().dimensions(), (16, 16));
}

#[test]
fn rejects_a_zero_degree() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", "unused.png", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Polynomial degree"));
}

#[test]
fn rejects_a_garbage_tolerance() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", "unused.png", "-t", "tiny"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tolerance"));
}

#[test]
fn rejects_a_zero_viewport() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", "unused.png", "-v", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Viewport extent"));
}

#[test]
fn fails_loudly_on_an_unwritable_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("missing").join("fractal.png");
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", outfile.to_str().unwrap(), "-s", "8"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Write failure"));
}
