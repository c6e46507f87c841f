use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use line_reveal::{
    ActivitySignal, BezPath, Child, Children, CpuBackend, DrawingArea, Dot, Fps, FrameInput,
    HorizontalLine, Point, RenderSettings, RevealFrame, RevealOptions, RevealSession,
};

#[derive(Parser, Debug)]
#[command(name = "line-reveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print reveal widths and timings for a simulated mount followed by a scrub.
    Plan(PlanArgs),
    /// Render PNG frames of a demo series.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct SimArgs {
    /// Reveal options as inline JSON or a path to a JSON file; defaults when omitted.
    #[arg(long)]
    options: Option<String>,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Drawing area width.
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Drawing area height.
    #[arg(long, default_value_t = 160)]
    height: u32,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// First frame of the simulated scrub.
    #[arg(long)]
    scrub_start: Option<u64>,

    /// Length of the simulated scrub in frames.
    #[arg(long, default_value_t = 20)]
    scrub_len: u64,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    sim: SimArgs,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    sim: SimArgs,

    /// Output directory for `frame_NNNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_options(arg: Option<&str>) -> anyhow::Result<RevealOptions> {
    let Some(arg) = arg else {
        return Ok(RevealOptions::default());
    };
    if arg.trim_start().starts_with('{') {
        return RevealOptions::from_json_str(arg).with_context(|| "parse inline options JSON");
    }
    let f = File::open(arg).with_context(|| format!("open options '{arg}'"))?;
    let opts: RevealOptions =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse options JSON")?;
    opts.validate()?;
    Ok(opts)
}

struct Demo {
    area: DrawingArea,
    path: BezPath,
    children: Children,
}

fn demo_series(width: u32, height: u32) -> Demo {
    let w = f64::from(width);
    let h = f64::from(height);
    let margin = 8.0;
    let samples = 48;

    let mut path = BezPath::new();
    let mut last = Point::new(margin, h / 2.0);
    for i in 0..=samples {
        let t = f64::from(i) / f64::from(samples);
        let x = margin + t * (w - 2.0 * margin);
        let y = h / 2.0 - (t * std::f64::consts::TAU * 1.5).sin() * (h / 2.0 - 2.0 * margin) * t;
        last = Point::new(x, y);
        if i == 0 {
            path.move_to(last);
        } else {
            path.line_to(last);
        }
    }

    let children = Children::new(vec![
        Child::from(HorizontalLine::new(h / 2.0).overlay()),
        Child::from(Dot::new(last).overlay()),
    ]);

    Demo {
        area: DrawingArea::new(w, h).with_path_width(w - 2.0 * margin),
        path,
        children,
    }
}

fn activity_at(sim: &SimArgs, frame: u64, area: DrawingArea) -> ActivitySignal {
    let Some(start) = sim.scrub_start else {
        return ActivitySignal::idle();
    };
    if frame < start || frame >= start + sim.scrub_len {
        return ActivitySignal::idle();
    }
    let t = (frame - start) as f64 / sim.scrub_len.max(1) as f64;
    ActivitySignal::scrubbing(t * area.path_width)
}

fn simulate(
    sim: &SimArgs,
    mut on_frame: impl FnMut(u64, &line_reveal::SessionFrame) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let options = read_options(sim.options.as_deref())?;
    let fps = Fps::new(sim.fps, 1)?;
    let demo = demo_series(sim.width, sim.height);
    let mut session = RevealSession::new(options)?;

    for frame in 0..sim.frames {
        let dt_ms = if frame == 0 {
            0.0
        } else {
            fps.frame_duration_ms()
        };
        let out = session.frame(FrameInput {
            activity: activity_at(sim, frame, demo.area),
            area: demo.area,
            path: &demo.path,
            children: &demo.children,
            dt_ms,
        });
        on_frame(frame, &out)?;
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct PlanLine {
    frame: u64,
    #[serde(flatten)]
    reveal: RevealFrame,
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let mut lines = Vec::new();
    simulate(&args.sim, |frame, out| {
        lines.push(PlanLine {
            frame,
            reveal: out.reveal,
        });
        Ok(())
    })?;
    let json = serde_json::to_string_pretty(&lines).with_context(|| "serialize plan")?;
    println!("{json}");
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut backend = CpuBackend::new(RenderSettings {
        clear_rgba: Some([18, 20, 28, 255]),
    });

    let mut written = 0u64;
    simulate(&args.sim, |frame, out| {
        let rgba = backend.render(&out.plan)?.to_straight_alpha();
        let path = args.out_dir.join(format!("frame_{frame:05}.png"));
        image::save_buffer_with_format(
            &path,
            &rgba.data,
            rgba.width,
            rgba.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        written += 1;
        Ok(())
    })?;

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}
