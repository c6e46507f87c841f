use crate::foundation::error::{RevealError, RevealResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Chart drawing area supplied by the coordinate/scale engine.
///
/// `width`/`height` size the whole drawing surface; `path_width` is the horizontal extent
/// actually covered by the computed line path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawingArea {
    /// Surface width in logical pixels.
    pub width: f64,
    /// Surface height in logical pixels.
    pub height: f64,
    /// Width covered by the line path.
    pub path_width: f64,
}

impl DrawingArea {
    /// Create a drawing area whose path spans the full surface width.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            path_width: width,
        }
    }

    /// Return a copy with a different path width.
    pub fn with_path_width(self, path_width: f64) -> Self {
        Self { path_width, ..self }
    }

    /// Rectangle covering the full surface, anchored at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width.max(0.0), self.height.max(0.0))
    }

    /// Pixel canvas large enough to hold the drawing area.
    pub fn canvas(self) -> RevealResult<Canvas> {
        fn dim(v: f64, what: &str) -> RevealResult<u32> {
            if !v.is_finite() || v < 0.0 {
                return Err(RevealError::validation(format!(
                    "drawing area {what} must be finite and >= 0"
                )));
            }
            Ok(v.ceil() as u32)
        }
        Ok(Canvas {
            width: dim(self.width, "width")?,
            height: dim(self.height, "height")?,
        })
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> RevealResult<Self> {
        if den == 0 {
            return Err(RevealError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RevealError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one display refresh in milliseconds.
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Multiply every channel by `opacity` (clamped to `0..=1`).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        let scale = |c: u8| -> u8 { (f32::from(c) * o).round().clamp(0.0, 255.0) as u8 };
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: scale(self.a),
        }
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
