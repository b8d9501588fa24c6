//! graymap-transform - Geometric transformations for graymap
//!
//! This crate provides index-remapping transforms that return a new
//! image and leave their input untouched:
//!
//! - 90 degree clockwise rotation
//! - Horizontal mirror (left-right flip)
//!
//! Cropping lives with the other clipping operations in
//! [`graymap_core::Image::crop`].

mod error;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use rotate::{flip_lr, rotate_90_cw};
