//! Rotation and flip operations
//!
//! Output images are created through the same path as the input (they
//! inherit its `maxval` and counters handle); only pixel positions change.

use crate::TransformResult;
use graymap_core::Image;

/// Black image of the given size carrying the metadata of `src`.
fn template(src: &Image, width: u32, height: u32) -> TransformResult<Image> {
    let mut out = Image::new(width, height, src.maxval())?;
    out.set_counters(src.counters().cloned());
    Ok(out)
}

/// Rotate an image 90 degrees clockwise
///
/// A `w x h` input yields an `h x w` output. Input pixel `(x, y)` lands at
/// `(y, w - 1 - x)` in the output.
///
/// # Errors
///
/// Returns [`TransformError::Core`](crate::TransformError::Core) if the
/// output image cannot be allocated.
pub fn rotate_90_cw(img: &Image) -> TransformResult<Image> {
    let w = img.width();
    let h = img.height();

    // Output dimensions are swapped
    let mut out = template(img, h, w)?;
    for y in 0..h {
        for x in 0..w {
            let val = img.get_pixel(x, y);
            out.set_pixel(y, w - 1 - x, val);
        }
    }
    Ok(out)
}

/// Flip an image left-right (horizontal mirror)
///
/// # Errors
///
/// Returns [`TransformError::Core`](crate::TransformError::Core) if the
/// output image cannot be allocated.
pub fn flip_lr(img: &Image) -> TransformResult<Image> {
    let w = img.width();
    let h = img.height();

    let mut out = template(img, w, h)?;
    for y in 0..h {
        for x in 0..w {
            let val = img.get_pixel(x, y);
            out.set_pixel(w - 1 - x, y, val);
        }
    }
    Ok(out)
}
