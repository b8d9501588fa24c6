//! graymap - apply a sequence of operations to a PGM image
//!
//! Loads `INPUT`, runs the requested steps in order, saves `OUTPUT`, and
//! prints the instrumentation counters after every stage.
//!
//! Exit status: 0 on success, 1 on a usage error, 2 if any operation fails.

use clap::{Parser, ValueEnum};
use graymap_core::{Counters, Image};
use log::{LevelFilter, info};
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "graymap")]
#[command(version, about = "8-bit grayscale PGM image processor", long_about = None)]
struct Cli {
    /// Input PGM file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PGM file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Operations to apply, in order (comma-separated)
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values = ["rotate", "brighten"]
    )]
    steps: Vec<Step>,

    /// Brighten factor
    #[arg(long, value_name = "FACTOR", default_value = "1.3", value_parser = parse_factor)]
    factor: f64,

    /// Threshold level; pixels at or above it become white
    #[arg(long, value_name = "LEVEL", default_value = "128")]
    threshold: u8,

    /// Blur half-window sizes
    #[arg(long, value_name = "DX,DY", default_value = "1,1", value_parser = parse_radius)]
    radius: Radius,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Step {
    /// Rotate 90 degrees clockwise
    Rotate,
    /// Flip left-right
    Mirror,
    /// Invert gray levels
    Negative,
    /// Binarize at --threshold
    Threshold,
    /// Multiply levels by --factor
    Brighten,
    /// Mean filter with --radius
    Blur,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Rotate => "ROTATE",
            Step::Mirror => "MIRROR",
            Step::Negative => "NEGATIVE",
            Step::Threshold => "THRESHOLD",
            Step::Brighten => "BRIGHTEN",
            Step::Blur => "BLUR",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Radius {
    dx: u32,
    dy: u32,
}

fn parse_radius(s: &str) -> Result<Radius, String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid radius '{v}': {e}"))
    };
    Ok(Radius {
        dx: parse(dx)?,
        dy: parse(dy)?,
    })
}

fn parse_factor(s: &str) -> Result<f64, String> {
    let factor: f64 = s.parse().map_err(|e| format!("invalid factor '{s}': {e}"))?;
    if !factor.is_finite() || factor < 0.0 {
        return Err(format!("factor must be a non-negative number, got {s}"));
    }
    Ok(factor)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::from(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("graymap: {msg}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let counters = Arc::new(Counters::new());

    println!("# LOAD image");
    counters.reset();
    let mut img = graymap_io::load_with_counters(&cli.input, &counters)
        .map_err(|e| format!("Loading {}: {e}", cli.input.display()))?;
    println!("{}", counters.report());

    for &step in &cli.steps {
        println!("# {step} image");
        counters.reset();
        img = apply(cli, step, img)?;
        println!("{}", counters.report());
    }

    println!("# SAVE image");
    counters.reset();
    graymap_io::save(&img, &cli.output).map_err(|e| format!("{}: {e}", cli.output.display()))?;
    println!("{}", counters.report());

    info!(
        "wrote {} ({}x{}, maxval {})",
        cli.output.display(),
        img.width(),
        img.height(),
        img.maxval()
    );
    Ok(())
}

fn apply(cli: &Cli, step: Step, mut img: Image) -> Result<Image, String> {
    match step {
        Step::Rotate => {
            img = graymap_transform::rotate_90_cw(&img).map_err(|e| format!("Rotating: {e}"))?
        }
        Step::Mirror => {
            img = graymap_transform::flip_lr(&img).map_err(|e| format!("Mirroring: {e}"))?
        }
        Step::Negative => img.negative(),
        Step::Threshold => img.threshold(cli.threshold),
        Step::Brighten => img.brighten(cli.factor),
        Step::Blur => graymap_filter::blur(&mut img, cli.radius.dx, cli.radius.dy)
            .map_err(|e| format!("Blurring: {e}"))?,
    }
    Ok(img)
}
