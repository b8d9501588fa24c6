//! Box blur entry points

use crate::FilterResult;
use crate::block_conv::blockconv_gray;
use crate::windowed::windowed_mean;
use graymap_core::Image;
use log::debug;

/// Strategy used to compute the window sums of a box blur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurMethod {
    /// Integral image built once, four lookups per pixel
    #[default]
    SummedArea,
    /// Running column and row sums, no full table
    SlidingWindow,
}

/// Blur an image in place with a `(2dx+1) x (2dy+1)` mean filter.
///
/// Each pixel is replaced by the rounded mean (add 0.5, truncate) of the
/// pixels in `[x-dx, x+dx] x [y-dy, y+dy]`, clipped to the image. Near the
/// borders the mean is taken over fewer pixels, so uniform images are left
/// unchanged by any radius. `dx = dy = 0` is the identity.
///
/// # Errors
///
/// [`FilterError::Core`](crate::FilterError::Core) if the scratch buffer
/// cannot be allocated; the image is unchanged in that case.
pub fn blur(img: &mut Image, dx: u32, dy: u32) -> FilterResult<()> {
    blur_with(img, dx, dy, BlurMethod::default())
}

/// Blur an image in place using an explicit [`BlurMethod`].
pub fn blur_with(img: &mut Image, dx: u32, dy: u32, method: BlurMethod) -> FilterResult<()> {
    debug!(
        "blur {}x{} with radius ({}, {}) using {:?}",
        img.width(),
        img.height(),
        dx,
        dy,
        method
    );
    match method {
        BlurMethod::SummedArea => blockconv_gray(img, dx, dy),
        BlurMethod::SlidingWindow => windowed_mean(img, dx, dy),
    }
}

/// Blurred copy of an image; the source is left untouched.
pub fn blur_copy(img: &Image, dx: u32, dy: u32) -> FilterResult<Image> {
    let mut out = img.clone();
    blur(&mut out, dx, dy)?;
    Ok(out)
}
