//! graymap-test - Regression test framework for graymap
//!
//! This crate provides a small regression harness: a [`RegParams`] value
//! numbers every check, records failures instead of aborting on the first
//! one, and reports them all in [`RegParams::cleanup`]. Synthetic input
//! images come from [`patterns`].
//!
//! # Usage
//!
//! ```ignore
//! use graymap_test::{RegParams, patterns};
//!
//! let mut rp = RegParams::new("blur");
//! let img = patterns::uniform(8, 8, 255, 100);
//! rp.compare_values(100.0, img.get_pixel(3, 3) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod patterns;

pub use error::{TestError, TestResult};
pub use params::RegParams;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // graymap-test is at crates/graymap-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/target/regout", workspace_root())
}

/// Get a path inside the regout directory
pub fn regout_path(name: &str) -> String {
    format!("{}/{}", regout_dir(), name)
}
