use crate::foundation::core::{BezPath, Canvas, Point, Rgba8Premul};
use crate::foundation::error::{RevealError, RevealResult};
use crate::render::blur::{GaussianKernel, blur_mask_in_place};
use crate::render::composite::{
    alpha_mask_into, clip_columns_in_place, over_in_place, tint_linear_x_in_place,
    tint_mask_into,
};
use crate::render::plan::{CompositePlan, DrawOp, Glow, Layer, Paint};
use crate::render::{FrameRGBA, RenderSettings};

/// Rasterizes [`CompositePlan`]s on the CPU with `vello_cpu`.
///
/// Each layer is rasterized into its own buffer, clipped by column, and composited over
/// its pass; passes are then composited over the cleared frame in order. The render
/// context and scratch buffers are kept between frames of the same size.
pub struct CpuBackend {
    settings: RenderSettings,
    raster: Option<Raster>,
    scratch: Scratch,
}

impl CpuBackend {
    /// Backend with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            raster: None,
            scratch: Scratch::default(),
        }
    }

    /// Render one frame.
    #[tracing::instrument(level = "debug", skip_all, fields(reveal_width = plan.reveal_width))]
    pub fn render(&mut self, plan: &CompositePlan) -> RevealResult<FrameRGBA> {
        let canvas = plan.area.canvas()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| RevealError::render("frame width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| RevealError::render("frame height exceeds u16"))?;
        let len = canvas.rgba8_len();

        let clear = self
            .settings
            .clear_rgba
            .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
            .unwrap_or_else(Rgba8Premul::transparent)
            .to_array();
        let mut frame = clear.repeat(canvas.width as usize * canvas.height as usize);

        let raster = Raster::acquire(&mut self.raster, width, height);
        let scratch = &mut self.scratch;
        for pass in plan.passes() {
            zeroed(&mut scratch.pass, len);
            for layer in &pass.layers {
                if layer.ops.is_empty() {
                    continue;
                }
                zeroed(&mut scratch.layer, len);
                raster.draw_layer(layer, &mut scratch.layer, canvas)?;
                over_in_place(&mut scratch.pass, &scratch.layer, 1.0)?;
            }
            if let Some(glow) = pass.glow {
                scratch.build_glow(glow, canvas)?;
                over_in_place(&mut frame, &scratch.glow_rgba, glow.opacity)?;
            }
            over_in_place(&mut frame, &scratch.pass, 1.0)?;
        }

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: frame,
            premultiplied: true,
        })
    }
}

#[derive(Default)]
struct Scratch {
    pass: Vec<u8>,
    layer: Vec<u8>,
    mask: Vec<u8>,
    blur: Vec<u8>,
    glow_rgba: Vec<u8>,
}

impl Scratch {
    // Blurs the alpha of the current pass and tints it, leaving the result in `glow_rgba`.
    fn build_glow(&mut self, glow: Glow, canvas: Canvas) -> RevealResult<()> {
        let sigma = (glow.radius_px as f32 / 2.0).max(0.5);
        let kernel = GaussianKernel::new(glow.radius_px, sigma)?;
        alpha_mask_into(&self.pass, &mut self.mask);
        blur_mask_in_place(
            &mut self.mask,
            &mut self.blur,
            canvas.width,
            canvas.height,
            &kernel,
        )?;
        tint_mask_into(&self.mask, glow.color.to_rgba8_premul(), &mut self.glow_rgba);
        Ok(())
    }
}

struct Raster {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl Raster {
    fn acquire(slot: &mut Option<Self>, width: u16, height: u16) -> &mut Self {
        let fits = slot
            .as_ref()
            .is_some_and(|r| r.ctx.width() == width && r.ctx.height() == height);
        if !fits {
            tracing::debug!(width, height, "allocating cpu render context");
            *slot = None;
        }
        slot.get_or_insert_with(|| Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    fn draw_layer(&mut self, layer: &Layer, out: &mut [u8], canvas: Canvas) -> RevealResult<()> {
        let mut run_start = 0;
        for (i, op) in layer.ops.iter().enumerate() {
            if matches!(op.paint(), Paint::LinearX { .. }) {
                self.draw_run(&layer.ops[run_start..i], out, canvas)?;
                self.draw_run(std::slice::from_ref(op), out, canvas)?;
                run_start = i + 1;
            }
        }
        self.draw_run(&layer.ops[run_start..], out, canvas)?;

        if let Some(clip) = layer.clip_width {
            clip_columns_in_place(out, canvas.width, canvas.height, clip)?;
        }
        Ok(())
    }

    // Solid ops share one raster. A gradient op arrives alone, is drawn as a white
    // coverage mask and recolored afterwards.
    fn draw_run(&mut self, ops: &[DrawOp], out: &mut [u8], canvas: Canvas) -> RevealResult<()> {
        if ops.is_empty() {
            return Ok(());
        }
        let ctx = &mut self.ctx;
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let mut gradient = None;
        for op in ops {
            let [r, g, b, a] = match op.paint() {
                Paint::Solid(c) => c.to_rgba8_straight(),
                paint @ Paint::LinearX { .. } => {
                    gradient = Some(paint);
                    [255, 255, 255, 255]
                }
            };
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            match op {
                DrawOp::StrokePath { path, width, .. } => {
                    if !(width.is_finite() && *width > 0.0) {
                        continue;
                    }
                    ctx.set_stroke(
                        vello_cpu::kurbo::Stroke::new(*width)
                            .with_caps(vello_cpu::kurbo::Cap::Round)
                            .with_join(vello_cpu::kurbo::Join::Round),
                    );
                    ctx.stroke_path(&bezpath_to_cpu(path));
                }
                DrawOp::FillPath { path, .. } => ctx.fill_path(&bezpath_to_cpu(path)),
            }
        }
        ctx.flush();

        self.pixmap.data_as_u8_slice_mut().fill(0);
        ctx.render_to_pixmap(&mut self.pixmap);
        let bytes = self.pixmap.data_as_u8_slice_mut();
        if let Some(Paint::LinearX { start, end, x0, x1 }) = gradient {
            tint_linear_x_in_place(
                bytes,
                canvas.width,
                canvas.height,
                start.to_rgba8_premul(),
                end.to_rgba8_premul(),
                x0,
                x1,
            )?;
        }
        over_in_place(out, bytes, 1.0)
    }
}

fn zeroed(buf: &mut Vec<u8>, len: usize) {
    buf.clear();
    buf.resize(len, 0);
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
