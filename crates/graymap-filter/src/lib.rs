//! graymap-filter - Box blur filtering for graymap
//!
//! This crate provides the mean (box) blur and the summed area table it
//! is built on:
//!
//! - [`SummedAreaTable`] - integral image with O(1) rectangle sums
//! - [`blur`] - in-place `(2dx+1) x (2dy+1)` mean filter, clipped at the
//!   image borders
//! - [`blur_with`] - the same filter with an explicit [`BlurMethod`]
//!
//! Both methods produce bit-identical results; they differ only in
//! memory use and in how many blur operations they report.

pub mod blur;
pub mod block_conv;
mod error;
pub mod windowed;

pub use block_conv::SummedAreaTable;
pub use blur::{BlurMethod, blur, blur_copy, blur_with};
pub use error::{FilterError, FilterResult};
