use super::*;

fn band(width: u32, height: u32, row: u32) -> Vec<u8> {
    let mut mask = vec![0u8; (width * height) as usize];
    let start = (row * width) as usize;
    mask[start..start + width as usize].fill(255);
    mask
}

#[test]
fn kernel_is_symmetric_and_normalized() {
    let k = GaussianKernel::new(5, 2.5).unwrap();
    assert_eq!(k.radius(), 5);
    let sum: f32 = k.taps.iter().sum();
    assert!((sum - 1.0).abs() < 1e-5);
    for i in 0..5 {
        assert_eq!(k.taps[i], k.taps[10 - i]);
    }
    assert!(k.taps[5] > k.taps[4]);
}

#[test]
fn kernel_rejects_degenerate_sigma() {
    assert!(GaussianKernel::new(5, 0.0).is_err());
    assert!(GaussianKernel::new(5, f32::NAN).is_err());
}

#[test]
fn stroke_band_glows_evenly_above_and_below() {
    let (w, h) = (9u32, 11u32);
    let mut mask = band(w, h, 5);
    let mut scratch = Vec::new();
    let k = GaussianKernel::new(3, 1.5).unwrap();
    blur_mask_in_place(&mut mask, &mut scratch, w, h, &k).unwrap();

    let at = |x: u32, y: u32| mask[(y * w + x) as usize];
    assert!(at(4, 5) < 255);
    assert!(at(4, 4) > 0);
    assert_eq!(at(4, 4), at(4, 6));
    assert!(at(4, 4) > at(4, 3));
    assert_eq!(at(4, 0), 0);
    // Edge clamping keeps the band uniform along its length.
    assert_eq!(at(0, 4), at(8, 4));
}

#[test]
fn zero_radius_and_empty_masks_are_untouched() {
    let mut mask = band(4, 3, 1);
    let before = mask.clone();
    let mut scratch = Vec::new();
    let k = GaussianKernel::new(0, 1.0).unwrap();
    blur_mask_in_place(&mut mask, &mut scratch, 4, 3, &k).unwrap();
    assert_eq!(mask, before);

    let k = GaussianKernel::new(5, 2.5).unwrap();
    blur_mask_in_place(&mut [], &mut scratch, 0, 7, &k).unwrap();
}

#[test]
fn mask_size_must_match_dimensions() {
    let k = GaussianKernel::new(2, 1.0).unwrap();
    let mut scratch = Vec::new();
    assert!(blur_mask_in_place(&mut [0u8; 5], &mut scratch, 2, 2, &k).is_err());
}
