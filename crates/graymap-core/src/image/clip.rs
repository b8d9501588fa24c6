//! Rectangular clipping

use super::Image;
use crate::error::Result;

impl Image {
    /// Extract the rectangle `(x, y, w, h)` as a new image.
    ///
    /// The result has dimensions `w x h` and the source's `maxval`; output
    /// pixel `(j, i)` is source pixel `(x + j, y + i)`. The source is not
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`](crate::Error::AllocationFailed)
    /// if the new image cannot be allocated.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle is not completely inside the image
    /// (see [`valid_rect`](Self::valid_rect)).
    ///
    /// # Examples
    ///
    /// ```
    /// use graymap_core::Image;
    ///
    /// let img = Image::new(100, 80, 255).unwrap();
    /// let cropped = img.crop(10, 20, 50, 40).unwrap();
    /// assert_eq!(cropped.width(), 50);
    /// assert_eq!(cropped.height(), 40);
    /// ```
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Image> {
        assert!(
            self.valid_rect(x, y, w, h),
            "crop rectangle ({x}, {y}, {w}, {h}) is not inside {}x{} image",
            self.width,
            self.height
        );

        let mut out = self.create_like(w, h, self.maxval)?;
        for i in 0..h {
            for j in 0..w {
                let v = self.get_pixel(x + j, y + i);
                out.set_pixel(j, i, v);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::Image;

    #[test]
    fn test_crop_contents() {
        let data = (0..20u8).collect();
        let img = Image::from_raw(5, 4, 255, data).unwrap();
        let c = img.crop(1, 2, 3, 2).unwrap();
        assert_eq!((c.width(), c.height(), c.maxval()), (3, 2, 255));
        assert_eq!(c.data(), &[11, 12, 13, 16, 17, 18]);
    }

    #[test]
    fn test_crop_full_image() {
        let data = (0..12u8).collect();
        let img = Image::from_raw(4, 3, 40, data).unwrap();
        let c = img.crop(0, 0, 4, 3).unwrap();
        assert!(c.equals(&img));
        assert_eq!(c.maxval(), 40);
    }

    #[test]
    #[should_panic(expected = "crop rectangle")]
    fn test_crop_outside_panics() {
        let img = Image::new(5, 5, 255).unwrap();
        let _ = img.crop(3, 3, 3, 1);
    }
}
