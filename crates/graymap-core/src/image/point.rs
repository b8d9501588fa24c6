//! Pointwise transforms
//!
//! Per-pixel level maps that leave geometry untouched. All of them work
//! in place and never allocate.

use super::Image;

/// Round a gray level: add 0.5, then truncate toward zero.
///
/// This is round-half-up for non-negative input. Callers saturate the
/// result themselves.
#[inline]
pub fn round_pixel(value: f64) -> i64 {
    (value + 0.5) as i64
}

impl Image {
    /// Transform to the photographic negative: `v -> maxval - v`.
    ///
    /// Levels above `maxval` wrap, as the stored value is not required to
    /// stay below `maxval`.
    pub fn negative(&mut self) {
        let maxval = self.maxval;
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.get_pixel(x, y);
                self.set_pixel(x, y, maxval.wrapping_sub(v));
            }
        }
    }

    /// Set levels `>= thr` to `maxval` and all others to 0.
    pub fn threshold(&mut self, thr: u8) {
        let maxval = self.maxval;
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.get_pixel(x, y);
                self.set_pixel(x, y, if v >= thr { maxval } else { 0 });
            }
        }
    }

    /// Multiply every level by `factor`, saturating at `maxval`.
    ///
    /// `factor > 1.0` brightens, `factor < 1.0` darkens.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is negative or NaN.
    pub fn brighten(&mut self, factor: f64) {
        assert!(factor >= 0.0, "brighten factor must be >= 0, got {factor}");
        let maxval = i64::from(self.maxval);
        for y in 0..self.height {
            for x in 0..self.width {
                let v = round_pixel(f64::from(self.get_pixel(x, y)) * factor);
                self.set_pixel(x, y, v.min(maxval) as u8);
            }
        }
    }
}
