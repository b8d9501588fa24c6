//! Two-image compositing
//!
//! - [`Image::paste`] - unconditional overwrite of a rectangle
//! - [`Image::blend`] - alpha-weighted combine with upper saturation
//!
//! Both work in place on the destination and raise its `maxval` to
//! `max(dst.maxval, src.maxval)`.

use super::Image;
use super::point::round_pixel;

/// Saturate a blended level against `maxval`.
///
/// Only the upper bound is clamped. A negative result (from `alpha`
/// outside `[0, 1]`) is not clamped to 0 but wraps modulo 256.
#[inline]
fn saturate_upper(value: f64, maxval: u8) -> u8 {
    let v = round_pixel(value);
    if v > i64::from(maxval) {
        maxval
    } else {
        v as u8
    }
}

impl Image {
    fn assert_fits(&self, x: u32, y: u32, src: &Image, op: &str) {
        assert!(
            self.valid_rect(x, y, src.width, src.height),
            "{op}: {}x{} source does not fit at ({x}, {y}) in {}x{} image",
            src.width,
            src.height,
            self.width,
            self.height
        );
    }

    /// Paste `src` into this image with its top-left corner at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `src` does not fit inside this image at (x, y).
    pub fn paste(&mut self, x: u32, y: u32, src: &Image) {
        self.assert_fits(x, y, src, "paste");
        self.maxval = self.maxval.max(src.maxval);

        for i in 0..src.height {
            for j in 0..src.width {
                let v = src.get_pixel(j, i);
                self.set_pixel(x + j, y + i, v);
            }
        }
    }

    /// Blend `src` into this image with its top-left corner at (x, y).
    ///
    /// Each overlapped pixel becomes
    /// `round(alpha * src + (1 - alpha) * dst)`, clamped above to this
    /// image's `maxval` as it was before the call. `alpha` is usually in
    /// `[0, 1]`; values outside that range are accepted and are not clamped
    /// below.
    ///
    /// # Panics
    ///
    /// Panics if `src` does not fit inside this image at (x, y).
    pub fn blend(&mut self, x: u32, y: u32, src: &Image, alpha: f64) {
        self.assert_fits(x, y, src, "blend");
        let limit = self.maxval;
        self.maxval = limit.max(src.maxval);

        for i in 0..src.height {
            for j in 0..src.width {
                let d = f64::from(self.get_pixel(x + j, y + i));
                let s = f64::from(src.get_pixel(j, i));
                let v = saturate_upper(alpha * s + (1.0 - alpha) * d, limit);
                self.set_pixel(x + j, y + i, v);
            }
        }
    }
}
