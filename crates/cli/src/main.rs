use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use geo2d::noise::perlin_octave;
use geo2d::noise::shake::{Shake, ShakeCfg};
use geo2d::{Circle, Ray, Rect, Vec2};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "geo2d")]
#[command(about = "Sample noise fields, shake curves and ray casts from the geo2d library")]
struct Cmd {
    /// Optional run tag; recorded in provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample a perlin_octave grid and write it as CSV or Parquet
    Noise {
        #[arg(long, default_value_t = 64)]
        width: u32,
        #[arg(long, default_value_t = 64)]
        height: u32,
        /// Noise units per grid cell
        #[arg(long, default_value_t = 0.05)]
        scale: f64,
        #[arg(long, default_value_t = 0.0)]
        z: f64,
        #[arg(long, default_value_t = 4)]
        octaves: u32,
        #[arg(long, default_value_t = 0.5)]
        persistence: f64,
        #[arg(long)]
        out: String,
    },
    /// Write a time series of shake offsets
    Shake {
        #[arg(long, default_value_t = 1.0)]
        duration: f64,
        #[arg(long, default_value_t = 60)]
        fps: u32,
        #[arg(long, default_value_t = 8.0)]
        amplitude_x: f64,
        #[arg(long, default_value_t = 8.0)]
        amplitude_y: f64,
        #[arg(long, default_value_t = 12.0)]
        frequency: f64,
        #[arg(long, default_value_t = 2)]
        octaves: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Fade the offset to zero over the duration
        #[arg(long)]
        decay: bool,
        #[arg(long)]
        out: String,
    },
    /// Intersect one ray with one shape and print the result as JSON
    Ray {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        origin: Vec<f64>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        dir: Vec<f64>,
        /// X,Y,R
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        circle: Option<Vec<f64>>,
        /// X,Y,W,H
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        rect: Option<Vec<f64>>,
        /// X1,Y1,X2,Y2
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        segment: Option<Vec<f64>>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Noise {
            width,
            height,
            scale,
            z,
            octaves,
            persistence,
            out,
        } => noise(
            NoiseArgs {
                width,
                height,
                scale,
                z,
                octaves,
                persistence,
            },
            &out,
            cmd.tag,
        ),
        Action::Shake {
            duration,
            fps,
            amplitude_x,
            amplitude_y,
            frequency,
            octaves,
            seed,
            decay,
            out,
        } => {
            let cfg = ShakeCfg {
                amplitude: Vec2::new(amplitude_x, amplitude_y),
                frequency,
                octaves,
                seed,
                ..ShakeCfg::default()
            };
            shake(cfg, duration, fps, decay, &out, cmd.tag)
        }
        Action::Ray {
            origin,
            dir,
            circle,
            rect,
            segment,
        } => {
            let ray = Ray::new(vec_arg("origin", &origin)?, vec_arg("dir", &dir)?);
            let target = shape_arg(circle, rect, segment)?;
            tracing::info!(%ray, ?target, "ray");
            let result = cast(&ray, target);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Action::Report => report(cmd.tag),
    }
}

#[derive(Clone, Copy, Debug)]
struct NoiseArgs {
    width: u32,
    height: u32,
    scale: f64,
    z: f64,
    octaves: u32,
    persistence: f64,
}

fn noise(args: NoiseArgs, out: &str, tag: Option<String>) -> Result<()> {
    tracing::info!(?args, out, tag = ?tag, "noise");
    if args.width == 0 || args.height == 0 {
        bail!("noise grid must be at least 1x1");
    }
    let mut df = noise_frame(args)?;
    let summary = table::summarize(&df, &["value"])?;
    tracing::info!(%summary, "noise_summary");

    let out_path = Path::new(out);
    table::write_frame(&mut df, out_path)?;
    let params = json!({
        "width": args.width,
        "height": args.height,
        "scale": args.scale,
        "z": args.z,
        "octaves": args.octaves,
        "persistence": args.persistence,
    });
    write_sidecar(out_path, Payload::new("noise", params).with_tag(tag))?;
    Ok(())
}

fn noise_frame(args: NoiseArgs) -> Result<DataFrame> {
    let n = (args.width as usize) * (args.height as usize);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    for y in 0..args.height {
        for x in 0..args.width {
            xs.push(x);
            ys.push(y);
            values.push(perlin_octave(
                x as f64 * args.scale,
                y as f64 * args.scale,
                args.z,
                args.octaves,
                args.persistence,
            ));
        }
    }
    Ok(df!("x" => xs, "y" => ys, "value" => values)?)
}

fn shake(
    cfg: ShakeCfg,
    duration: f64,
    fps: u32,
    decay: bool,
    out: &str,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(?cfg, duration, fps, decay, out, tag = ?tag, "shake");
    let mut df = shake_frame(cfg, duration, fps, decay)?;
    let summary = table::summarize(&df, &["dx", "dy"])?;
    tracing::info!(%summary, "shake_summary");

    let out_path = Path::new(out);
    table::write_frame(&mut df, out_path)?;
    let params = json!({
        "amplitude": [cfg.amplitude.x, cfg.amplitude.y],
        "frequency": cfg.frequency,
        "octaves": cfg.octaves,
        "persistence": cfg.persistence,
        "seed": cfg.seed,
        "duration": duration,
        "fps": fps,
        "decay": decay,
    });
    write_sidecar(out_path, Payload::new("shake", params).with_tag(tag))?;
    Ok(())
}

/// Upper bound on rows in a `shake` table.
const MAX_SHAKE_FRAMES: u32 = 10_000_000;

fn shake_frame(cfg: ShakeCfg, duration: f64, fps: u32, decay: bool) -> Result<DataFrame> {
    if fps == 0 {
        bail!("fps must be > 0");
    }
    if !(duration.is_finite() && duration > 0.0) {
        bail!("duration must be finite and > 0");
    }
    let mut s = Shake::new(cfg)?;
    if decay {
        s = s.decaying(duration)?;
    }
    let frames = (duration * fps as f64).round() + 1.0;
    if !(frames <= MAX_SHAKE_FRAMES as f64) {
        bail!("duration * fps yields {frames} frames, more than {MAX_SHAKE_FRAMES}");
    }
    let frames = frames as u32;
    let mut ts = Vec::with_capacity(frames as usize);
    let mut dxs = Vec::with_capacity(frames as usize);
    let mut dys = Vec::with_capacity(frames as usize);
    for i in 0..frames {
        let t = i as f64 / fps as f64;
        let o = s.offset_at(t);
        ts.push(t);
        dxs.push(o.x);
        dys.push(o.y);
    }
    Ok(df!("t" => ts, "dx" => dxs, "dy" => dys)?)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Target {
    Circle(Circle),
    Rect(Rect),
    Segment(Vec2<f64>, Vec2<f64>),
}

fn vec_arg(name: &str, vals: &[f64]) -> Result<Vec2<f64>> {
    match vals {
        [x, y] => Ok(Vec2::new(*x, *y)),
        _ => bail!("--{name} expects X,Y (got {} values)", vals.len()),
    }
}

fn shape_arg(
    circle: Option<Vec<f64>>,
    rect: Option<Vec<f64>>,
    segment: Option<Vec<f64>>,
) -> Result<Target> {
    match (circle, rect, segment) {
        (Some(c), None, None) => match c[..] {
            [x, y, r] => Ok(Target::Circle(Circle::new(x, y, r))),
            _ => bail!("--circle expects X,Y,R (got {} values)", c.len()),
        },
        (None, Some(r), None) => match r[..] {
            [x, y, w, h] => Ok(Target::Rect(Rect::new(x, y, w, h))),
            _ => bail!("--rect expects X,Y,W,H (got {} values)", r.len()),
        },
        (None, None, Some(s)) => match s[..] {
            [x1, y1, x2, y2] => Ok(Target::Segment(Vec2::new(x1, y1), Vec2::new(x2, y2))),
            _ => bail!("--segment expects X1,Y1,X2,Y2 (got {} values)", s.len()),
        },
        _ => bail!("pass exactly one of --circle, --rect, --segment"),
    }
}

#[derive(Debug, Serialize, PartialEq)]
struct CastResult {
    ray: String,
    target: String,
    hit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    t_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    t_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    t: Option<f64>,
    /// First forward contact point, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    point: Option<[f64; 2]>,
}

fn cast(ray: &Ray, target: Target) -> CastResult {
    let mut res = CastResult {
        ray: ray.to_string(),
        target: String::new(),
        hit: false,
        t_min: None,
        t_max: None,
        t: None,
        point: None,
    };
    let hit = match target {
        Target::Circle(c) => {
            res.target = c.to_string();
            ray.intersect_circle(&c)
        }
        Target::Rect(r) => {
            res.target = r.to_string();
            ray.intersect_rect(&r)
        }
        Target::Segment(a, b) => {
            res.target = format!("Segment(Vec({}, {}), Vec({}, {}))", a.x, a.y, b.x, b.y);
            let h = ray.intersect_segment(a, b);
            res.hit = h.hit;
            res.t = Some(h.t);
            if h.hit && h.t >= 0.0 {
                let p = ray.at(h.t);
                res.point = Some([p.x, p.y]);
            }
            return res;
        }
    };
    if let Some(h) = hit {
        res.hit = true;
        res.t_min = Some(h.t_min);
        res.t_max = Some(h.t_max);
        res.point = h.entry_t().map(|t| {
            let p = ray.at(t);
            [p.x, p.y]
        });
    }
    res
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::document(&Payload::new("report", json!({})).with_tag(tag), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
