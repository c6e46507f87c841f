//! Gaussian blur of single-channel coverage masks.
//!
//! The glow only needs the shape of the animated pass, so it blurs one alpha byte per
//! pixel and tints afterwards. Each pass blurs rows and writes them transposed, so the
//! second pass walks the original columns as contiguous rows.

use crate::foundation::error::{RevealError, RevealResult};

/// Normalized 1D gaussian taps, `2 * radius + 1` long.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Kernel of `radius` taps on each side of the center.
    pub fn new(radius: u32, sigma: f32) -> RevealResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(RevealError::validation("glow blur sigma must be > 0"));
        }
        let r = radius as i32;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let raw: Vec<f32> = (-r..=r)
            .map(|i| (-((i * i) as f32) / two_sigma_sq).exp())
            .collect();
        let total: f32 = raw.iter().sum();
        Ok(Self {
            taps: raw.into_iter().map(|w| w / total).collect(),
        })
    }

    /// Taps on each side of the center.
    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }
}

/// Blur a `width * height` mask in place. `scratch` is resized as needed and may be
/// reused across calls.
pub fn blur_mask_in_place(
    mask: &mut [u8],
    scratch: &mut Vec<u8>,
    width: u32,
    height: u32,
    kernel: &GaussianKernel,
) -> RevealResult<()> {
    let (w, h) = (width as usize, height as usize);
    if w.checked_mul(h) != Some(mask.len()) {
        return Err(RevealError::render("glow mask must hold width*height bytes"));
    }
    if mask.is_empty() || kernel.radius() == 0 {
        return Ok(());
    }

    scratch.clear();
    scratch.resize(mask.len(), 0);
    blur_rows_transposed(mask, scratch, w, h, kernel);
    blur_rows_transposed(scratch, mask, h, w, kernel);
    Ok(())
}

// Reads `height` rows of `width` bytes from `src`; writes `width` rows of `height` bytes.
fn blur_rows_transposed(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    kernel: &GaussianKernel,
) {
    let r = kernel.radius();
    let last = width - 1;
    for (y, row) in src.chunks_exact(width).enumerate() {
        for x in 0..width {
            let acc: f32 = kernel
                .taps
                .iter()
                .enumerate()
                .map(|(i, &w)| w * f32::from(row[(x + i).saturating_sub(r).min(last)]))
                .sum();
            dst[x * height + y] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
