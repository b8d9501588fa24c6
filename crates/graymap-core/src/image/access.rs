//! Pixel access functions
//!
//! The primitive get/set operations every higher-level operation funnels
//! through. Out-of-range coordinates are a caller bug and panic; they are
//! never clamped or wrapped into the buffer.

use super::Image;
use crate::counters::Counter;

impl Image {
    /// Check if pixel position (x, y) is inside the image.
    #[inline]
    pub fn valid_position(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Check if the rectangle `(x, y, w, h)` lies completely inside the image.
    ///
    /// Only the two corners `(x, y)` and `(x + w - 1, y + h - 1)` are tested,
    /// so a zero-sized rectangle is accepted only when its far corner still
    /// resolves to a valid position (e.g. `(1, 1, 0, 0)` but not `(0, 0, 0, 0)`).
    pub fn valid_rect(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        let x2 = i64::from(x) + i64::from(w) - 1;
        let y2 = i64::from(y) + i64::from(h) - 1;
        self.valid_position(x, y)
            && (0..i64::from(self.width)).contains(&x2)
            && (0..i64::from(self.height)).contains(&y2)
    }

    /// Map (x, y) to its linear buffer index.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is not a valid position.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            self.valid_position(x, y),
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the gray level at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is not a valid position.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> u8 {
        let i = self.index(x, y);
        self.count(Counter::PixelAccess, 1);
        self.data[i]
    }

    /// Set the gray level at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is not a valid position.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, level: u8) {
        let i = self.index(x, y);
        self.count(Counter::PixelAccess, 1);
        self.data[i] = level;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Counter, Counters, Image};
    use std::sync::Arc;

    #[test]
    fn test_valid_position() {
        let img = Image::new(4, 3, 255).unwrap();
        assert!(img.valid_position(0, 0));
        assert!(img.valid_position(3, 2));
        assert!(!img.valid_position(4, 0));
        assert!(!img.valid_position(0, 3));
    }

    #[test]
    fn test_valid_rect() {
        let img = Image::new(10, 8, 255).unwrap();
        assert!(img.valid_rect(0, 0, 10, 8));
        assert!(img.valid_rect(2, 3, 8, 5));
        assert!(!img.valid_rect(2, 3, 9, 5));
        assert!(!img.valid_rect(2, 3, 8, 6));
        assert!(!img.valid_rect(10, 0, 1, 1));
        // Zero-sized rectangles follow the two-corner rule
        assert!(img.valid_rect(1, 1, 0, 0));
        assert!(!img.valid_rect(0, 0, 0, 0));
        assert!(!img.valid_rect(0, 4, 0, 1));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut img = Image::new(5, 5, 255).unwrap();
        img.set_pixel(4, 2, 77);
        assert_eq!(img.get_pixel(4, 2), 77);
        // Raster-scan layout
        assert_eq!(img.data()[2 * 5 + 4], 77);
    }

    #[test]
    fn test_access_is_counted() {
        let counters = Arc::new(Counters::new());
        let mut img = Image::new(3, 3, 255).unwrap().with_counters(counters.clone());
        img.set_pixel(1, 1, 5);
        let _ = img.get_pixel(1, 1);
        let _ = img.get_pixel(0, 0);
        assert_eq!(counters.get(Counter::PixelAccess), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let img = Image::new(3, 3, 255).unwrap();
        let _ = img.get_pixel(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut img = Image::new(3, 3, 255).unwrap();
        img.set_pixel(0, 3, 1);
    }
}
