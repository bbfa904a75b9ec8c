use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kochflake::render::{default_output_path, save_image, Rasterizer, RenderOptions};
use kochflake::{BuildSnowflake, Depth};

/// Generates a Koch snowflake and saves it as an image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Recursion depth
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    depth: i64,

    /// Output image path (default: snowflake_d<depth>.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Width and height of the image in pixels
    #[arg(long, default_value_t = 600)]
    size: u32,

    /// Stroke width in pixels
    #[arg(long, default_value_t = 1.0)]
    line_width: f64,
}

fn run(args: &Args) -> kochflake::Result<PathBuf> {
    let depth = Depth::new(args.depth)?;
    let curve = BuildSnowflake::new(depth).execute();
    let options = RenderOptions::default()
        .with_size(args.size)
        .with_line_width(args.line_width);
    let image = Rasterizer::new(options).render(&curve)?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(depth));
    save_image(&image, &path)?;
    Ok(path)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(path) => {
            info!(path = %path.display(), depth = args.depth, "snowflake written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
