//! Integration tests for the graymap CLI.

use graymap_core::Image;
use graymap_test::{patterns, regout_path};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn graymap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graymap"))
        .args(args)
        .output()
        .expect("Failed to run graymap")
}

/// Write `img` as a scratch input file and return its path and the
/// matching output path.
fn scratch_files(name: &str, img: &Image) -> (PathBuf, PathBuf) {
    let input = PathBuf::from(regout_path(&format!("cli_{name}_in.pgm")));
    let output = PathBuf::from(regout_path(&format!("cli_{name}_out.pgm")));
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    graymap_io::save(img, &input).unwrap();
    let _ = fs::remove_file(&output);
    (input, output)
}

#[test]
fn test_default_steps() {
    let img = patterns::gradient(6, 4, 200);
    let (input, output) = scratch_files("default", &img);

    let out = graymap(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    // Step banners only; counter report headers also start with '#'
    let headers: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("# ") && l.ends_with(" image"))
        .collect();
    assert_eq!(
        headers,
        ["# LOAD image", "# ROTATE image", "# BRIGHTEN image", "# SAVE image"]
    );
    // One counter report per stage
    let reports = stdout.lines().filter(|l| l.contains("pixmem")).count();
    assert_eq!(reports, headers.len());

    let mut expected = graymap_transform::rotate_90_cw(&img).unwrap();
    expected.brighten(1.3);
    let result = graymap_io::load(&output).unwrap();
    assert!(result.equals(&expected));
}

#[test]
fn test_custom_steps() {
    let img = patterns::noise(9, 7, 255, 5);
    let (input, output) = scratch_files("custom", &img);

    let out = graymap(&[
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--steps",
        "mirror,blur,threshold",
        "--radius",
        "2,1",
        "--threshold",
        "100",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let mut expected = graymap_transform::flip_lr(&img).unwrap();
    graymap_filter::blur(&mut expected, 2, 1).unwrap();
    expected.threshold(100);
    let result = graymap_io::load(&output).unwrap();
    assert!(result.equals(&expected));
}

#[test]
fn test_usage_error_exit_code() {
    let out = graymap(&["only-one-arg.pgm"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());

    let out = graymap(&["a.pgm", "b.pgm", "--steps", "sharpen"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_help_exit_code() {
    let out = graymap(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
}

#[test]
fn test_missing_input_exit_code() {
    let missing = regout_path("cli_does_not_exist.pgm");
    let output = regout_path("cli_missing_out.pgm");
    let out = graymap(&[missing.as_str(), output.as_str()]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Loading"), "{stderr}");
}

#[test]
fn test_malformed_input_exit_code() {
    let input = PathBuf::from(regout_path("cli_malformed_in.pgm"));
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    fs::write(&input, b"P5 2 2 300\n\0\0\0\0").unwrap();
    let output = regout_path("cli_malformed_out.pgm");

    let out = graymap(&[input.to_str().unwrap(), output.as_str()]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("maxval"));
}
