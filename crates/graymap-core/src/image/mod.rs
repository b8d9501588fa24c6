//! Image - The 8-bit grayscale raster container
//!
//! # Pixel layout
//!
//! - One byte per pixel, no row padding
//! - Raster-scan order: pixel `(x, y)` lives at index `y * width + x`
//! - `maxval` is the gray level of pure white (`1..=255`)
//!
//! # Ownership model
//!
//! An `Image` exclusively owns its buffer. `Clone` makes a deep copy, and
//! operations that "return a new image" never touch their input. Pixel
//! values are read and written only through the bounds-checked accessors
//! `get_pixel` / `set_pixel`.

mod access;
pub mod blend;
mod clip;
pub mod compare;
mod point;

pub use compare::SearchBounds;
pub use point::round_pixel;

use crate::counters::{Counter, Counters};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Largest gray level a pixel can hold.
pub const PIX_MAX: u8 = 255;

/// 8-bit grayscale image
///
/// # Examples
///
/// ```
/// use graymap_core::Image;
///
/// let img = Image::new(640, 480, 255).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.get_pixel(10, 10), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    maxval: u8,
    data: Vec<u8>,
    counters: Option<Arc<Counters>>,
}

impl Image {
    /// Create a new black image.
    ///
    /// Every pixel is initialized to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the pixel buffer cannot be
    /// obtained, including when `width * height` overflows.
    ///
    /// # Panics
    ///
    /// Panics if `maxval` is 0.
    pub fn new(width: u32, height: u32, maxval: u8) -> Result<Self> {
        assert!(maxval > 0, "maxval must be in 1..={PIX_MAX}, got 0");

        let len = Self::buffer_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed { width, height })?;
        data.resize(len, 0);

        Ok(Image {
            width,
            height,
            maxval,
            data,
            counters: None,
        })
    }

    /// Build an image around an already decoded pixel buffer.
    ///
    /// `data` must hold exactly `width * height` bytes in raster-scan order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] when the buffer length is wrong.
    ///
    /// # Panics
    ///
    /// Panics if `maxval` is 0.
    pub fn from_raw(width: u32, height: u32, maxval: u8, data: Vec<u8>) -> Result<Self> {
        assert!(maxval > 0, "maxval must be in 1..={PIX_MAX}, got 0");

        let expected = Self::buffer_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Image {
            width,
            height,
            maxval,
            data,
            counters: None,
        })
    }

    /// Create a black image of the given size that shares this image's
    /// counters handle.
    pub(crate) fn create_like(&self, width: u32, height: u32, maxval: u8) -> Result<Self> {
        let mut img = Image::new(width, height, maxval)?;
        img.counters = self.counters.clone();
        Ok(img)
    }

    #[inline]
    fn buffer_len(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::AllocationFailed { width, height })
    }

    /// Attach an instrumentation handle, builder style.
    pub fn with_counters(mut self, counters: Arc<Counters>) -> Self {
        self.counters = Some(counters);
        self
    }

    /// Attach or detach an instrumentation handle.
    pub fn set_counters(&mut self, counters: Option<Arc<Counters>>) {
        self.counters = counters;
    }

    /// The attached instrumentation handle, if any.
    #[inline]
    pub fn counters(&self) -> Option<&Arc<Counters>> {
        self.counters.as_ref()
    }

    /// Add `n` to one of the attached counters. No-op when uninstrumented.
    #[inline]
    pub fn count(&self, counter: Counter, n: u64) {
        if let Some(c) = &self.counters {
            c.add(counter, n);
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the maximum gray level (white).
    #[inline]
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the raster-scan buffer, for codecs.
    ///
    /// Reading through this view is not counted as pixel access; codecs
    /// account for the bytes they transfer themselves.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Find the minimum and maximum gray levels.
    ///
    /// An empty image reports `(PIX_MAX, 0)`. This is a query and is not
    /// counted as pixel access.
    pub fn stats(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((PIX_MAX, 0), |(min, max), &v| (min.min(v), max.max(v)))
    }
}

/// Release an image held in `slot`, leaving `None` behind.
///
/// Releasing an empty slot does nothing, so this may be called any number
/// of times on the same slot.
pub fn release(slot: &mut Option<Image>) {
    drop(slot.take());
}
