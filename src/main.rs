use anyhow::{Context, Result, bail};
use autoscribe::annotate::{Annotation, StrokeStyle, TextBlock};
use autoscribe::draw::CairoSurface;
use autoscribe::geometry::BoundingBox;
use autoscribe::scale::scale_for_display;
use autoscribe::{Config, Surface};
use clap::{ArgAction, Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autoscribe")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("AUTOSCRIBE_GIT_HASH"), ")"),
    about = "Render a single annotation to a PNG image"
)]
struct Cli {
    /// Annotation to draw
    #[arg(long, short = 's', value_enum)]
    shape: ShapeKind,

    /// Drag corners as x1,y1,x2,y2 in display pixels
    #[arg(long, short = 'b', value_name = "X1,Y1,X2,Y2", allow_hyphen_values = true)]
    bounds: String,

    /// Color name (red, blue, ...) or #rrggbb[aa]
    #[arg(long, short = 'c', default_value = "red")]
    color: String,

    /// Line thickness in pixels
    #[arg(long, short = 't', default_value_t = 3.0)]
    thickness: f64,

    /// Draw the edit-mode variant with selection handles
    #[arg(long, short = 'e', action = ArgAction::SetTrue)]
    edit: bool,

    /// Device pixel ratio (overrides the config file)
    #[arg(long, short = 'r')]
    ratio: Option<f64>,

    /// Image width in display pixels
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Image height in display pixels
    #[arg(long, default_value_t = 300)]
    height: u32,

    /// JSON file with pre-measured text lines (required for --shape text)
    #[arg(long, value_name = "FILE")]
    text: Option<PathBuf>,

    /// Config file to use instead of ~/.config/autoscribe/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, short = 'o', value_name = "FILE")]
    output: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeKind {
    Circle,
    Arrow,
    Rect,
    #[value(name = "option")]
    OptionMarker,
    Text,
}

fn parse_bounds(raw: &str) -> Result<BoundingBox> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid coordinate '{}'", part.trim()))
        })
        .collect::<Result<Vec<_>>>()?;

    let [x1, y1, x2, y2] = values[..] else {
        bail!("Expected 4 comma-separated coordinates, got {}", values.len());
    };
    Ok(BoundingBox::new(x1, y1, x2, y2))
}

fn build_annotation(cli: &Cli) -> Result<Annotation> {
    let bbox = parse_bounds(&cli.bounds)?;
    let style = StrokeStyle::parse(&cli.color, cli.thickness)?;

    Ok(match cli.shape {
        ShapeKind::Circle => Annotation::Circle { bbox, style },
        ShapeKind::Arrow => Annotation::Arrow { bbox, style },
        ShapeKind::Rect => Annotation::Rect { bbox, style },
        ShapeKind::OptionMarker => Annotation::Option { bbox, style },
        ShapeKind::Text => {
            let path = cli
                .text
                .as_ref()
                .context("--shape text needs --text FILE with the laid-out lines")?;
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read text block from {}", path.display()))?;
            let text: TextBlock = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse text block from {}", path.display()))?;
            Annotation::Text { bbox, style, text }
        }
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ratio = cli.ratio.unwrap_or(config.display.device_pixel_ratio);

    let annotation = build_annotation(&cli)?;

    let surface = CairoSurface::new(cli.width, cli.height)?;
    let mut surface = scale_for_display(surface, ratio)?;
    log::info!(
        "Drawing {:?} on {}x{} surface (ratio {})",
        cli.shape,
        surface.width(),
        surface.height(),
        ratio
    );

    config
        .annotator()
        .draw(&mut surface, &annotation, cli.edit)
        .context("Failed to draw annotation")?;

    surface.inner().write_png(&cli.output)?;
    println!("Wrote {}", cli.output.display());

    Ok(())
}
