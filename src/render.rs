pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod compose;
pub(crate) mod cpu;
pub(crate) mod plan;

/// Rendered frame pixels, tightly packed RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, row-major.
    pub data: Vec<u8>,
    /// `true` when color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy with premultiplication undone, as image encoders expect.
    pub fn to_straight_alpha(&self) -> Self {
        if !self.premultiplied {
            return self.clone();
        }
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        Self {
            data,
            premultiplied: false,
            ..*self
        }
    }
}

/// Backend settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Straight-alpha background color; transparent when `None`.
    pub clear_rgba: Option<[u8; 4]>,
}
