//! graymap-core - Basic data structures for 8-bit grayscale images
//!
//! This crate provides the raster data model and every operation that
//! works through its pixel accessors:
//!
//! - [`Image`] - the grayscale image container
//! - Pixel access - `valid_position`, `valid_rect`, `get_pixel`, `set_pixel`
//! - Pointwise transforms - `negative`, `threshold`, `brighten`
//! - Clipping - `crop`
//! - Compositing - `paste`, `blend`
//! - Subimage search - `match_subimage`, `locate_subimage`
//! - [`Counters`] - the instrumentation context images report into

pub mod counters;
pub mod error;
pub mod image;

pub use counters::{Counter, CounterReport, Counters};
pub use error::{Error, Result};
pub use image::{Image, PIX_MAX, SearchBounds, release, round_pixel};
