//! graymap-io - Image I/O for graymap
//!
//! Loads and saves binary PGM (`P5`) images from files, readers or
//! memory buffers.
//!
//! # Example
//!
//! ```no_run
//! use graymap_io::{load, save};
//!
//! let mut img = load("input.pgm").unwrap();
//! img.negative();
//! save(&img, "output.pgm").unwrap();
//! ```
//!
//! Failures are reported once, to the direct caller, and never retried.
//! A failed save may leave a partial file behind.

mod error;
pub mod pgm;

pub use error::{IoError, IoResult};
pub use pgm::{read_pgm, write_pgm};

use graymap_core::{Counter, Counters, Image};
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

/// Read a PGM image from a file.
///
/// # Errors
///
/// [`IoError::Open`] if the file cannot be opened, otherwise any error
/// from [`read_pgm`].
pub fn load<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let img = read_pgm(BufReader::new(file))?;
    debug!(
        "loaded {}: {}x{} maxval {}",
        path.display(),
        img.width(),
        img.height(),
        img.maxval()
    );
    Ok(img)
}

/// Read a PGM image from a file and attach `counters` to it.
///
/// The pixel payload transfer is counted as `width * height` pixel
/// accesses.
pub fn load_with_counters<P: AsRef<Path>>(path: P, counters: &Arc<Counters>) -> IoResult<Image> {
    let img = load(path)?.with_counters(Arc::clone(counters));
    img.count(Counter::PixelAccess, img.len() as u64);
    Ok(img)
}

/// Write an image to a file as binary PGM.
///
/// If the image carries counters, the pixel payload transfer is counted
/// as `width * height` pixel accesses.
///
/// # Errors
///
/// [`IoError::Create`] if the file cannot be created, otherwise any error
/// from [`write_pgm`].
pub fn save<P: AsRef<Path>>(img: &Image, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| IoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_pgm(img, BufWriter::new(file))?;
    img.count(Counter::PixelAccess, img.len() as u64);
    debug!(
        "saved {}: {}x{} maxval {}",
        path.display(),
        img.width(),
        img.height(),
        img.maxval()
    );
    Ok(())
}

/// Read a PGM image from a memory buffer.
pub fn read_pgm_mem(data: &[u8]) -> IoResult<Image> {
    read_pgm(data)
}

/// Encode an image as binary PGM into a new buffer.
pub fn write_pgm_mem(img: &Image) -> IoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(img.len() + 32);
    write_pgm(img, &mut out)?;
    Ok(out)
}
