//! Mean filter using running window sums
//!
//! Keeps one running sum per column over the current band of rows, and a
//! horizontal running sum over those column sums. No integral image is
//! built; extra memory is one row of column sums plus the output buffer.
//!
//! Produces exactly the same levels as the summed area table path: the
//! window sums and pixel counts are identical, and so is the rounding.

use crate::FilterResult;
use crate::block_conv::{clip_span, mean_level};
use graymap_core::{Counter, Error, Image};

fn alloc<T: Clone>(len: usize, fill: T, img: &Image) -> FilterResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| Error::AllocationFailed {
        width: img.width(),
        height: img.height(),
    })?;
    v.resize(len, fill);
    Ok(v)
}

/// Mean filter over `[x-dx, x+dx] x [y-dy, y+dy]` clipped to the image,
/// computed with running sums.
///
/// Every sample added to or removed from a running sum counts as one blur
/// operation.
pub(crate) fn windowed_mean(img: &mut Image, dx: u32, dy: u32) -> FilterResult<()> {
    if img.is_empty() {
        return Ok(());
    }

    let w = img.width();
    let h = img.height();
    let mut col_sums: Vec<u64> = alloc(w as usize, 0, img)?;
    let mut out: Vec<u8> = alloc(img.len(), 0, img)?;
    let mut ops = 0u64;

    // Band of rows for y = 0
    let (mut top, mut bottom) = clip_span(0, dy, h);
    for y in top..=bottom {
        for x in 0..w {
            col_sums[x as usize] += u64::from(img.get_pixel(x, y));
        }
    }
    ops += u64::from(w) * u64::from(bottom - top + 1);

    for y in 0..h {
        let (y1, y2) = clip_span(y, dy, h);
        // The band moves down by at most one row at each end
        if y2 > bottom {
            for x in 0..w {
                col_sums[x as usize] += u64::from(img.get_pixel(x, y2));
            }
            ops += u64::from(w);
            bottom = y2;
        }
        if y1 > top {
            for x in 0..w {
                col_sums[x as usize] -= u64::from(img.get_pixel(x, top));
            }
            ops += u64::from(w);
            top = y1;
        }
        let hn = u64::from(bottom - top + 1);

        let (mut left, mut right) = clip_span(0, dx, w);
        let mut sum: u64 = col_sums[left as usize..=right as usize].iter().sum();
        ops += u64::from(right - left + 1);

        let row = y as usize * w as usize;
        for x in 0..w {
            let (x1, x2) = clip_span(x, dx, w);
            if x2 > right {
                sum += col_sums[x2 as usize];
                ops += 1;
                right = x2;
            }
            if x1 > left {
                sum -= col_sums[left as usize];
                ops += 1;
                left = x1;
            }
            let wn = u64::from(right - left + 1);
            out[row + x as usize] = mean_level(sum, wn * hn);
        }
    }

    img.count(Counter::BlurOp, ops);
    for y in 0..h {
        for x in 0..w {
            img.set_pixel(x, y, out[y as usize * w as usize + x as usize]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_conv::blockconv_gray;
    use graymap_core::Counters;
    use std::sync::Arc;

    #[test]
    fn test_windowed_3x3() {
        let mut img = Image::from_raw(3, 3, 255, (1..=9).collect()).unwrap();
        windowed_mean(&mut img, 1, 1).unwrap();
        assert_eq!(img.data(), &[3, 4, 4, 5, 5, 6, 6, 7, 7]);
    }

    #[test]
    fn test_matches_summed_area() {
        let data: Vec<u8> = (0..13 * 7).map(|i| ((i * 37 + 11) % 256) as u8).collect();
        for (dx, dy) in [(0, 0), (1, 1), (2, 0), (0, 3), (5, 2), (20, 20)] {
            let mut a = Image::from_raw(13, 7, 255, data.clone()).unwrap();
            let mut b = a.clone();
            blockconv_gray(&mut a, dx, dy).unwrap();
            windowed_mean(&mut b, dx, dy).unwrap();
            assert!(a.equals(&b), "dx={dx} dy={dy}");
        }
    }

    #[test]
    fn test_counts_blur_ops() {
        let counters = Arc::new(Counters::new());
        let mut img = Image::new(4, 1, 255).unwrap().with_counters(counters.clone());
        windowed_mean(&mut img, 1, 0).unwrap();
        // Column sums: 4 samples. Row: 2 initial, +1 at x=2, +1 at x=3,
        // -1 at x=2, -1 at x=3.
        assert_eq!(counters.get(Counter::BlurOp), 4 + 2 + 4);
    }
}
