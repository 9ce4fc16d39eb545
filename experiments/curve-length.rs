// Build Bezier curves from control points and print their approximate arc length
// at several accuracies.
//
// Without arguments the two demonstration curves are used: a symmetric quadratic
// (0,0),(1,1),(2,0) and a cubic (0,0),(0,1),(1,1),(1,0).
//
//     curve-length --point 0,0 --point 2,3 --point 4,0 --accuracy 0.1 --path

use std::path::PathBuf;

use anyhow::{Context, Result};
use bezier_arclen::{bezier, BezierCurve, LengthConfig, Point2};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_ACCURACIES: [f64; 2] = [0.01, 0.001];

#[derive(Debug, Parser)]
#[command(name = "curve-length", about = "Approximate the arc length of Bezier curves")]
struct Args {
    /// Control point as `x,y`; repeat for every point of a custom curve
    #[arg(long = "point", value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    points: Vec<Point2>,

    /// Requested accuracy; repeat to compare several
    #[arg(long = "accuracy", value_name = "A")]
    accuracies: Vec<f64>,

    /// JSON file with length estimation settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also print the adaptively flattened path
    #[arg(long)]
    path: bool,

    /// Log refinement rounds
    #[arg(short, long)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<Point2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{}`: {}", s, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{}`: {}", s, e))?;
    Ok(Point2::new(x, y))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn demo_curves() -> Result<Vec<BezierCurve<2>>> {
    Ok(vec![
        bezier!([(0, 0), (1, 1), (2, 0)])?,
        bezier!([(0, 0), (0, 1), (1, 1), (1, 0)])?,
    ])
}

fn report(
    curve: &BezierCurve<2>,
    accuracies: &[f64],
    config: &LengthConfig,
    path: bool,
) -> Result<()> {
    println!("{}", curve);
    for &acc in accuracies {
        let length = curve
            .length_with_config(acc, config)
            .with_context(|| format!("length({}) failed", acc))?;
        println!("length({}) = {}", acc, length);
        if path {
            let flattened = curve
                .create_path_with_config(acc, config)
                .with_context(|| format!("create_path({}) failed", acc))?;
            println!(
                "create_path({}) = {} points, polyline length {}",
                acc,
                flattened.len(),
                flattened.length()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(file) => LengthConfig::from_json_file(file)
            .with_context(|| format!("failed to load config {}", file.display()))?,
        None => LengthConfig::default(),
    };
    debug!(?config, "length settings");

    let accuracies = if args.accuracies.is_empty() {
        DEFAULT_ACCURACIES.to_vec()
    } else {
        args.accuracies.clone()
    };

    let curves = if args.points.is_empty() {
        demo_curves()?
    } else {
        vec![BezierCurve::new(&args.points).context("failed to build curve")?]
    };
    info!(curves = curves.len(), "estimating arc lengths");

    for curve in &curves {
        report(curve, &accuracies, &config, args.path)?;
    }
    Ok(())
}
