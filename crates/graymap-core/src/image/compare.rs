//! Image comparison and subimage search
//!
//! - Whole-image equality
//! - Matching a pattern against one offset of a larger image
//! - Exhaustive search for the first offset where a pattern matches
//!
//! The search is brute force, `O((W1-W2)(H1-H2) * W2 * H2)` in the worst
//! case, with early exit on the first mismatching pixel.

use super::Image;
use crate::counters::Counter;
use log::debug;

/// Which candidate offsets [`Image::locate_subimage_with`] scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBounds {
    /// Every offset at which the pattern fits:
    /// `0..=W1-W2` by `0..=H1-H2`
    #[default]
    Inclusive,
    /// Offsets `0..W1-W2` by `0..H1-H2`, skipping the last valid row and
    /// column of offsets (the scan used by earlier releases)
    Exclusive,
}

impl Image {
    /// Check whether two images have the same size, maxval and pixels.
    pub fn equals(&self, other: &Image) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.maxval == other.maxval
            && self.data == other.data
    }

    /// Check whether `pattern` matches this image at offset (x, y).
    ///
    /// Returns `false` at once when the pattern does not fit at (x, y).
    /// Otherwise compares pixels in raster order and stops at the first
    /// mismatch. Each comparison bumps [`Counter::SubimageCompare`].
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is not a valid position in this image.
    pub fn match_subimage(&self, x: u32, y: u32, pattern: &Image) -> bool {
        assert!(
            self.valid_position(x, y),
            "match offset ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        if !self.valid_rect(x, y, pattern.width, pattern.height) {
            return false;
        }

        for i in 0..pattern.height {
            for j in 0..pattern.width {
                let a = self.get_pixel(x + j, y + i);
                let b = pattern.get_pixel(j, i);
                self.count(Counter::SubimageCompare, 1);
                if a != b {
                    return false;
                }
            }
        }
        true
    }

    /// Locate `pattern` inside this image, scanning every offset at which
    /// it fits.
    ///
    /// Returns the first matching offset `(x, y)` in row-major order
    /// (`y` outer, `x` inner), or `None`.
    pub fn locate_subimage(&self, pattern: &Image) -> Option<(u32, u32)> {
        self.locate_subimage_with(pattern, SearchBounds::Inclusive)
    }

    /// Locate `pattern` inside this image using the given scan bounds.
    ///
    /// Returns `None` when the pattern is empty or larger than this image
    /// in either dimension, or when no scanned offset matches.
    pub fn locate_subimage_with(
        &self,
        pattern: &Image,
        bounds: SearchBounds,
    ) -> Option<(u32, u32)> {
        if pattern.is_empty() || pattern.width > self.width || pattern.height > self.height {
            return None;
        }

        let span_x = self.width - pattern.width;
        let span_y = self.height - pattern.height;
        let (end_x, end_y) = match bounds {
            SearchBounds::Inclusive => (span_x + 1, span_y + 1),
            SearchBounds::Exclusive => (span_x, span_y),
        };

        for y in 0..end_y {
            for x in 0..end_x {
                if self.match_subimage(x, y, pattern) {
                    debug!(
                        "located {}x{} pattern at ({x}, {y})",
                        pattern.width, pattern.height
                    );
                    return Some((x, y));
                }
            }
        }
        debug!(
            "{}x{} pattern not found in {}x{} image",
            pattern.width, pattern.height, self.width, self.height
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Counters;
    use std::sync::Arc;

    /// Host image with distinct values; pattern copied out of it.
    fn host(w: u32, h: u32) -> Image {
        let data = (0..w * h).map(|i| (i * 7 % 251) as u8).collect();
        Image::from_raw(w, h, 255, data).unwrap()
    }

    #[test]
    fn test_equals() {
        let a = host(4, 4);
        let mut b = a.clone();
        assert!(a.equals(&b));
        b.set_pixel(3, 3, 0);
        assert!(!a.equals(&b));
        let c = Image::from_raw(4, 4, 200, a.data().to_vec()).unwrap();
        assert!(!a.equals(&c));
    }

    #[test]
    fn test_match_subimage() {
        let img = host(8, 6);
        let pat = img.crop(2, 1, 3, 3).unwrap();
        assert!(img.match_subimage(2, 1, &pat));
        assert!(!img.match_subimage(1, 1, &pat));
        // Does not fit at the right edge
        assert!(!img.match_subimage(6, 1, &pat));
    }

    #[test]
    fn test_match_counts_comparisons() {
        let counters = Arc::new(Counters::new());
        let img = Image::new(4, 4, 255).unwrap().with_counters(counters.clone());
        let mut pat = Image::new(2, 2, 255).unwrap();
        assert!(img.match_subimage(0, 0, &pat));
        assert_eq!(counters.get(Counter::SubimageCompare), 4);

        counters.reset();
        pat.set_pixel(1, 0, 1);
        assert!(!img.match_subimage(0, 0, &pat));
        // Stops on the second comparison
        assert_eq!(counters.get(Counter::SubimageCompare), 2);
    }

    #[test]
    fn test_locate_interior() {
        let img = host(12, 10);
        let pat = img.crop(5, 4, 3, 2).unwrap();
        assert_eq!(img.locate_subimage(&pat), Some((5, 4)));
        assert_eq!(
            img.locate_subimage_with(&pat, SearchBounds::Exclusive),
            Some((5, 4))
        );
    }

    #[test]
    fn test_locate_last_offset() {
        let img = host(9, 7);
        let pat = img.crop(6, 4, 3, 3).unwrap();
        assert_eq!(img.locate_subimage(&pat), Some((6, 4)));
        // The historical scan never reaches the bottom-right offset
        assert_eq!(img.locate_subimage_with(&pat, SearchBounds::Exclusive), None);
    }

    #[test]
    fn test_locate_whole_image() {
        let img = host(5, 5);
        assert_eq!(img.locate_subimage(&img.clone()), Some((0, 0)));
    }

    #[test]
    fn test_locate_too_large() {
        let img = host(5, 5);
        assert_eq!(img.locate_subimage(&host(6, 2)), None);
        assert_eq!(img.locate_subimage(&host(2, 6)), None);
    }

    #[test]
    fn test_locate_empty_pattern() {
        let img = host(5, 5);
        assert_eq!(img.locate_subimage(&Image::new(0, 2, 255).unwrap()), None);
    }

    #[test]
    fn test_locate_absent() {
        let img = Image::new(6, 6, 255).unwrap();
        let pat = Image::from_raw(2, 2, 255, vec![1, 1, 1, 1]).unwrap();
        assert_eq!(img.locate_subimage(&pat), None);
    }
}
