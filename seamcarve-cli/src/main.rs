use clap::{Parser, ValueEnum};
use seamcarve::io::{load_rgb_image, save_rgb_image};
use seamcarve::{CarveConfig, CarveMode, Carver};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Content-aware image resizing (seam carving)")]
struct Cli {
    /// Input image path.
    input: PathBuf,
    /// Number of seams to remove or insert.
    #[arg(short = 'n', long)]
    pixels: usize,
    /// Output image path.
    #[arg(short, long, value_name = "FILE", default_value = "output.png")]
    output: PathBuf,
    /// Whether to shrink or enlarge the image width.
    #[arg(short, long, value_enum, default_value_t = Mode::Shrink)]
    mode: Mode,
    /// Fill energy maps in parallel (needs the library's `rayon` feature).
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output for per-seam profiling.
    #[arg(long)]
    trace: bool,
    /// Print a JSON summary instead of plain progress lines.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Shrink,
    Enlarge,
}

impl From<Mode> for CarveMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Shrink => CarveMode::Shrink,
            Mode::Enlarge => CarveMode::Enlarge,
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    input: PathBuf,
    output: PathBuf,
    input_width: usize,
    output_width: usize,
    height: usize,
    seams: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("seamcarve=info".parse()?))
            .with_target(false)
            .init();
    }

    let image = load_rgb_image(&cli.input)?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        "loaded input image"
    );
    if !cli.json {
        println!("width = {}, height = {}", image.width(), image.height());
    }

    let carver = Carver::new(CarveConfig {
        mode: cli.mode.into(),
        pixels: cli.pixels,
        parallel: cli.parallel,
    });

    // In enlarge mode the observer fires once more for the final widened
    // image, so clamp the counter to the seam count.
    let mut carved = 0usize;
    let result = carver.resize_with_progress(&image, |_| {
        carved = (carved + 1).min(cli.pixels);
        if !cli.json {
            print!("{carved:3} seams carved\r");
            let _ = io::stdout().flush();
        }
    })?;
    if !cli.json {
        println!();
    }

    save_rgb_image(&cli.output, &result)?;

    if cli.json {
        let summary = Summary {
            input: cli.input,
            output: cli.output,
            input_width: image.width(),
            output_width: result.width(),
            height: result.height(),
            seams: cli.pixels,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
