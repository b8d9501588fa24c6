//! graymap - 8-bit grayscale image processing
//!
//! # Overview
//!
//! graymap provides an in-memory raster type for 8-bit grayscale images
//! and the operations built on its bounds-checked pixel accessors:
//!
//! - Image I/O (binary PGM)
//! - Pointwise transforms (negative, threshold, brighten)
//! - Geometric transforms (rotate, mirror, crop)
//! - Compositing (paste, alpha blend)
//! - Subimage search
//! - Box blur via summed area tables
//! - Operation counters for instrumentation
//!
//! # Example
//!
//! ```
//! use graymap::Image;
//!
//! // Create a new black 4x3 image with maxval 255
//! let mut img = Image::new(4, 3, 255).unwrap();
//! img.set_pixel(1, 1, 200);
//! graymap::filter::blur(&mut img, 1, 1).unwrap();
//!
//! let rotated = graymap::transform::rotate_90_cw(&img).unwrap();
//! assert_eq!((rotated.width(), rotated.height()), (3, 4));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use graymap_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use graymap_filter as filter;
pub use graymap_io as io;
pub use graymap_transform as transform;
