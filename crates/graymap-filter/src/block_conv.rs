//! Block averaging using integral images (summed area tables)
//!
//! The mean filter runs in O(1) per pixel regardless of window size, by
//! precomputing an integral image of the source.

use crate::FilterResult;
use graymap_core::{Counter, Counters, Error, Image, round_pixel};
use std::sync::Arc;

/// Integral image of an 8-bit grayscale image.
///
/// Cell `(x, y)` holds the sum of every source pixel in the rectangle from
/// `(0, 0)` to `(x, y)` inclusive. Cells are 64-bit, so no image that fits
/// in memory can overflow them.
#[derive(Debug, Clone)]
pub struct SummedAreaTable {
    width: u32,
    height: u32,
    sums: Vec<u64>,
    counters: Option<Arc<Counters>>,
}

impl SummedAreaTable {
    /// Build the integral image of `img`.
    ///
    /// The recursion is: `a(x,y) = v(x,y) + a(x-1,y) + a(x,y-1) - a(x-1,y-1)`
    /// with out-of-range terms dropped. Source pixels are read through
    /// [`Image::get_pixel`]; each cell adds the number of terms it combines
    /// to the blur-operation counter (1 for the origin, 2 along the first
    /// row and column, 4 elsewhere).
    ///
    /// # Errors
    ///
    /// [`FilterError::Core`](crate::FilterError::Core) wrapping
    /// `AllocationFailed` if the table cannot be allocated.
    pub fn build(img: &Image) -> FilterResult<Self> {
        let w = img.width();
        let h = img.height();

        let mut sums = Vec::new();
        sums.try_reserve_exact(img.len())
            .map_err(|_| Error::AllocationFailed {
                width: w,
                height: h,
            })?;

        let mut table = Self {
            width: w,
            height: h,
            sums,
            counters: img.counters().cloned(),
        };
        if img.is_empty() {
            return Ok(table);
        }

        let stride = w as usize;

        // First row: cumulative sum along x
        let mut row_sum = 0u64;
        for x in 0..w {
            row_sum += u64::from(img.get_pixel(x, 0));
            table.sums.push(row_sum);
        }

        // Remaining rows: first column seeds from the cell above
        for y in 1..h {
            let above = table.sums[(y as usize - 1) * stride];
            table.sums.push(u64::from(img.get_pixel(0, y)) + above);

            for x in 1..w {
                let i = y as usize * stride + x as usize;
                let val = u64::from(img.get_pixel(x, y)) + table.sums[i - 1]
                    + table.sums[i - stride]
                    - table.sums[i - stride - 1];
                table.sums.push(val);
            }
        }

        let interior = u64::from(w - 1) * u64::from(h - 1);
        let edges = u64::from(w - 1) + u64::from(h - 1);
        table.count(1 + 2 * edges + 4 * interior);

        Ok(table)
    }

    /// Width of the source image
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the source image
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn at(&self, x: u32, y: u32) -> u64 {
        self.sums[y as usize * self.width as usize + x as usize]
    }

    fn count(&self, n: u64) {
        if let Some(counters) = &self.counters {
            counters.add(Counter::BlurOp, n);
        }
    }

    /// Sum of the source pixels in the rectangle with inclusive corners
    /// `(x1, y1)` and `(x2, y2)`.
    ///
    /// Four-corner lookup by inclusion-exclusion; terms that fall left of
    /// column 0 or above row 0 are treated as zero. Adds 1 plus the number
    /// of in-range subtracted/added terms to the blur-operation counter.
    ///
    /// # Panics
    ///
    /// Panics if the corners are out of order or outside the table.
    pub fn window_sum(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> u64 {
        assert!(
            x1 <= x2 && y1 <= y2 && x2 < self.width && y2 < self.height,
            "window ({x1}, {y1})-({x2}, {y2}) invalid for {}x{} table",
            self.width,
            self.height
        );

        let mut ops = 1;
        let mut add = self.at(x2, y2);
        let mut sub = 0;
        if x1 > 0 {
            sub += self.at(x1 - 1, y2);
            ops += 1;
        }
        if y1 > 0 {
            sub += self.at(x2, y1 - 1);
            ops += 1;
        }
        if x1 > 0 && y1 > 0 {
            add += self.at(x1 - 1, y1 - 1);
            ops += 1;
        }
        self.count(ops);

        add - sub
    }
}

/// Clipped inclusive span `[c - r, c + r]` within `0..len`.
#[inline]
pub(crate) fn clip_span(c: u32, r: u32, len: u32) -> (u32, u32) {
    (c.saturating_sub(r), c.saturating_add(r).min(len - 1))
}

/// Rounded mean of `sum` over `count` samples.
#[inline]
pub(crate) fn mean_level(sum: u64, count: u64) -> u8 {
    round_pixel(sum as f64 / count as f64) as u8
}

/// Mean filter on an image using a summed area table.
///
/// Each pixel becomes the rounded mean of the window
/// `[x-dx, x+dx] x [y-dy, y+dy]` clipped to the image.
pub(crate) fn blockconv_gray(img: &mut Image, dx: u32, dy: u32) -> FilterResult<()> {
    if img.is_empty() {
        return Ok(());
    }

    let table = SummedAreaTable::build(img)?;
    let w = img.width();
    let h = img.height();

    for y in 0..h {
        let (y1, y2) = clip_span(y, dy, h);
        let hn = u64::from(y2 - y1 + 1);

        for x in 0..w {
            let (x1, x2) = clip_span(x, dx, w);
            let wn = u64::from(x2 - x1 + 1);

            let sum = table.window_sum(x1, y1, x2, y2);
            img.set_pixel(x, y, mean_level(sum, wn * hn));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x3:
    //   1 2 3
    //   4 5 6
    //   7 8 9
    fn create_test_image() -> Image {
        Image::from_raw(3, 3, 255, (1..=9).collect()).unwrap()
    }

    #[test]
    fn test_table_values() {
        let table = SummedAreaTable::build(&create_test_image()).unwrap();
        assert_eq!(table.at(0, 0), 1);
        assert_eq!(table.at(2, 0), 6);
        assert_eq!(table.at(0, 2), 12);
        assert_eq!(table.at(1, 1), 12);
        assert_eq!(table.at(2, 2), 45);
    }

    #[test]
    fn test_window_sum() {
        let table = SummedAreaTable::build(&create_test_image()).unwrap();
        assert_eq!(table.window_sum(0, 0, 2, 2), 45);
        assert_eq!(table.window_sum(1, 1, 1, 1), 5);
        assert_eq!(table.window_sum(1, 1, 2, 2), 5 + 6 + 8 + 9);
        assert_eq!(table.window_sum(0, 1, 2, 1), 15);
        assert_eq!(table.window_sum(2, 0, 2, 2), 18);
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn test_window_sum_out_of_range() {
        let table = SummedAreaTable::build(&create_test_image()).unwrap();
        table.window_sum(0, 0, 3, 0);
    }

    #[test]
    fn test_build_counts() {
        let counters = Arc::new(Counters::new());
        let img = create_test_image().with_counters(counters.clone());
        let table = SummedAreaTable::build(&img).unwrap();
        // 1 + 2*(2 + 2) + 4*4
        assert_eq!(counters.get(Counter::BlurOp), 25);
        assert_eq!(counters.get(Counter::PixelAccess), 9);

        counters.reset();
        table.window_sum(0, 0, 0, 0);
        table.window_sum(1, 0, 2, 0);
        table.window_sum(1, 1, 2, 2);
        assert_eq!(counters.get(Counter::BlurOp), 1 + 2 + 4);
    }

    #[test]
    fn test_blockconv_gray_3x3() {
        let mut img = create_test_image();
        blockconv_gray(&mut img, 1, 1).unwrap();
        // Corner (0,0): (1+2+4+5)/4 = 3
        assert_eq!(img.get_pixel(0, 0), 3);
        // Center: 45/9 = 5
        assert_eq!(img.get_pixel(1, 1), 5);
        // Edge (1,0): (1+2+3+4+5+6)/6 = 3.5 -> 4
        assert_eq!(img.get_pixel(1, 0), 4);
        // Corner (2,2): (5+6+8+9)/4 = 7
        assert_eq!(img.get_pixel(2, 2), 7);
    }

    #[test]
    fn test_blockconv_gray_large_radius() {
        let mut img = create_test_image();
        blockconv_gray(&mut img, 100, u32::MAX).unwrap();
        assert!(img.data().iter().all(|&v| v == 5));
    }

    #[test]
    fn test_empty_image() {
        let mut img = Image::new(0, 5, 255).unwrap();
        blockconv_gray(&mut img, 1, 1).unwrap();
        assert!(img.is_empty());
    }
}
