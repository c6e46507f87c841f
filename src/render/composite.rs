//! Premultiplied RGBA8 buffer operations used between rasterized layers.

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{RevealError, RevealResult};

pub type PremulRgba8 = [u8; 4];

/// Source-over of one premultiplied pixel, with `src` faded by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    over_scaled(dst, src, unit_to_u8(f64::from(opacity)))
}

/// Source-over of a whole buffer. Both buffers must be the same RGBA8 length.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> RevealResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(RevealError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    let fade = unit_to_u8(f64::from(opacity));
    if fade == 0 {
        return Ok(());
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over_scaled([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], fade);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn over_scaled(dst: PremulRgba8, src: PremulRgba8, fade: u8) -> PremulRgba8 {
    let src_alpha = scale(src[3], fade);
    if src_alpha == 0 {
        return dst;
    }
    let keep = 255 - src_alpha;
    std::array::from_fn(|i| scale(src[i], fade).saturating_add(scale(dst[i], keep)))
}

/// Keep columns left of `clip_width`, scale the edge column by its covered fraction and
/// clear everything to the right.
pub fn clip_columns_in_place(
    buf: &mut [u8],
    width: u32,
    height: u32,
    clip_width: f64,
) -> RevealResult<()> {
    check_len(buf, width, height, "clip_columns_in_place")?;
    let clip = clip_width.max(0.0);
    let row_bytes = width as usize * 4;
    if row_bytes == 0 {
        return Ok(());
    }
    for row in buf.chunks_exact_mut(row_bytes) {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let coverage = (clip - x as f64).clamp(0.0, 1.0);
            if coverage >= 1.0 {
                continue;
            }
            let cov = unit_to_u8(coverage);
            for c in px.iter_mut() {
                *c = scale(*c, cov);
            }
        }
    }
    Ok(())
}

/// Recolor a white coverage mask with a horizontal two-stop gradient sampled at pixel
/// centers.
pub fn tint_linear_x_in_place(
    buf: &mut [u8],
    width: u32,
    height: u32,
    start: Rgba8Premul,
    end: Rgba8Premul,
    x0: f64,
    x1: f64,
) -> RevealResult<()> {
    check_len(buf, width, height, "tint_linear_x_in_place")?;
    let row_bytes = width as usize * 4;
    if row_bytes == 0 {
        return Ok(());
    }
    let span = x1 - x0;
    let colors: Vec<PremulRgba8> = (0..width)
        .map(|x| {
            let cx = f64::from(x) + 0.5;
            let t = if span > 0.0 {
                ((cx - x0) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            lerp_premul(start.to_array(), end.to_array(), t)
        })
        .collect();

    for row in buf.chunks_exact_mut(row_bytes) {
        for (px, color) in row.chunks_exact_mut(4).zip(&colors) {
            let coverage = px[3];
            for (c, v) in px.iter_mut().zip(color) {
                *c = scale(*v, coverage);
            }
        }
    }
    Ok(())
}

/// Copy the alpha channel of an RGBA8 buffer into `mask`, one byte per pixel.
pub fn alpha_mask_into(rgba: &[u8], mask: &mut Vec<u8>) {
    mask.clear();
    mask.extend(rgba.chunks_exact(4).map(|px| px[3]));
}

/// Expand a coverage mask into premultiplied RGBA8 of a single color.
pub fn tint_mask_into(mask: &[u8], color: Rgba8Premul, out: &mut Vec<u8>) {
    let color = color.to_array();
    out.clear();
    out.reserve(mask.len() * 4);
    for &coverage in mask {
        out.extend(color.map(|v| scale(v, coverage)));
    }
}

fn lerp_premul(a: PremulRgba8, b: PremulRgba8, t: f64) -> PremulRgba8 {
    std::array::from_fn(|i| {
        let (av, bv) = (f64::from(a[i]), f64::from(b[i]));
        (av + (bv - av) * t).round().clamp(0.0, 255.0) as u8
    })
}

fn check_len(buf: &[u8], width: u32, height: u32, what: &str) -> RevealResult<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| RevealError::render(format!("{what}: buffer size overflow")))?;
    if buf.len() != expected {
        return Err(RevealError::render(format!(
            "{what} expects a width*height*4 buffer"
        )));
    }
    Ok(())
}

fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

// Exact round(v * s / 255) without a division.
fn scale(v: u8, s: u8) -> u8 {
    let t = u32::from(v) * u32::from(s) + 128;
    ((t + (t >> 8)) >> 8) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
