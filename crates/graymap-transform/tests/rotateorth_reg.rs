//! Orthogonal rotation and mirror regression test
//!
//! Rotation by 90 degrees four times and mirroring twice must both be
//! exact identities, for several image shapes and maxvals.

use graymap_core::Image;
use graymap_test::{RegParams, patterns};
use graymap_transform::{flip_lr, rotate_90_cw};

#[test]
fn rotateorth_reg() {
    let mut rp = RegParams::new("rotateorth");

    let gradient = patterns::gradient(37, 21, 255);
    test_orth_rotation(&mut rp, &gradient, "gradient");

    let noise = patterns::noise(16, 48, 63, 11);
    test_orth_rotation(&mut rp, &noise, "noise");

    let single_row = patterns::gradient(9, 1, 8);
    test_orth_rotation(&mut rp, &single_row, "1-row");

    assert!(rp.cleanup(), "rotateorth regression test failed");
}

fn test_orth_rotation(rp: &mut RegParams, img: &Image, label: &str) {
    let w = img.width();
    let h = img.height();
    eprintln!("Testing {} orthogonal rotation: {}x{}", label, w, h);

    // --- one rotation swaps dimensions ---
    let r1 = rotate_90_cw(img).expect("rotate 1");
    rp.compare_values(h as f64, r1.width() as f64, 0.0);
    rp.compare_values(w as f64, r1.height() as f64, 0.0);
    rp.compare_values(img.maxval() as f64, r1.maxval() as f64, 0.0);

    // Corner (0, 0) lands at (0, w - 1)
    rp.compare_values(
        img.get_pixel(0, 0) as f64,
        r1.get_pixel(0, w - 1) as f64,
        0.0,
    );

    // --- 4 rotations = identity ---
    let r2 = rotate_90_cw(&r1).expect("rotate 2");
    let r3 = rotate_90_cw(&r2).expect("rotate 3");
    let r4 = rotate_90_cw(&r3).expect("rotate 4");
    rp.compare_pix(img, &r4);
    eprintln!("  {}: 4x rotate == identity: {}", label, img.equals(&r4));

    // --- mirror moves column 0 to column w - 1 ---
    let mirrored = flip_lr(img).expect("mirror");
    rp.compare_values(w as f64, mirrored.width() as f64, 0.0);
    rp.compare_values(
        img.get_pixel(0, h - 1) as f64,
        mirrored.get_pixel(w - 1, h - 1) as f64,
        0.0,
    );

    // --- double mirror = identity ---
    let back = flip_lr(&mirrored).expect("mirror twice");
    rp.compare_pix(img, &back);

    // Rotated result survives a PGM round trip
    rp.write_pix_and_check(&r1).expect("write rotated");
}
