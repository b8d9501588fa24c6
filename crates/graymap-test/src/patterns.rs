//! Deterministic synthetic test images
//!
//! No binary fixtures are checked in; every test image is generated here
//! so results are identical across platforms.

use graymap_core::Image;

/// LCG pseudo-random number generator (deterministic)
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u8(&mut self) -> u8 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 33) & 0xFF) as u8
    }
}

fn build(w: u32, h: u32, maxval: u8, f: impl Fn(u32, u32) -> u8) -> Image {
    let mut data = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            data.push(f(x, y));
        }
    }
    Image::from_raw(w, h, maxval, data).expect("pattern buffer matches dimensions")
}

/// Every pixel set to `value`.
pub fn uniform(w: u32, h: u32, maxval: u8, value: u8) -> Image {
    build(w, h, maxval, |_, _| value)
}

/// Diagonal ramp `(x + 2y) mod (maxval + 1)`.
pub fn gradient(w: u32, h: u32, maxval: u8) -> Image {
    let levels = u32::from(maxval) + 1;
    build(w, h, maxval, |x, y| ((x + 2 * y) % levels) as u8)
}

/// Checkerboard of `cell`-sized squares alternating between 0 and `maxval`.
pub fn checker(w: u32, h: u32, maxval: u8, cell: u32) -> Image {
    let cell = cell.max(1);
    build(w, h, maxval, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            0
        } else {
            maxval
        }
    })
}

/// Uniform noise in `0..=maxval` from an LCG seeded with `seed`.
pub fn noise(w: u32, h: u32, maxval: u8, seed: u64) -> Image {
    let mut rng = Lcg::new(seed);
    let levels = u32::from(maxval) + 1;
    let mut data = Vec::with_capacity((w * h) as usize);
    for _ in 0..w * h {
        data.push((u32::from(rng.next_u8()) * levels / 256) as u8);
    }
    Image::from_raw(w, h, maxval, data).expect("pattern buffer matches dimensions")
}
