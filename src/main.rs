//! `zenppm`: load a P6 image, apply one transform, write the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use zenppm::{Limits, Operation, PpmError, Transform};

#[derive(Parser, Debug)]
#[command(version, about = "Apply a pixel transform to a binary PPM (P6) image")]
struct Args {
    /// Source P6 file.
    src: PathBuf,

    /// Destination file; only written when every step succeeds.
    dst: PathBuf,

    /// negate, channel-rotate, grayscale, contrast, rotate180 (or 1-5).
    #[arg(short, long, value_parser = parse_operation)]
    op: Operation,

    /// Contrast scale factor, usually 0.1-3.0. Required for contrast.
    #[arg(short, long, allow_negative_numbers = true)]
    factor: Option<f32>,

    /// Refuse images with more pixels than this.
    #[arg(long)]
    max_pixels: Option<u64>,
}

fn parse_operation(s: &str) -> Result<Operation, String> {
    s.parse().map_err(|e: PpmError| e.to_string())
}

fn run(args: &Args) -> Result<(), PpmError> {
    let transform = Transform::new(args.op, args.factor)?;
    let limits = Limits {
        max_pixels: args.max_pixels,
        ..Default::default()
    };

    let mut image = zenppm::load_with_limits(&args.src, &limits)?;
    log::info!(
        "Image loaded: {}x{} pixels, max value: {}",
        image.width(),
        image.height(),
        image.max_value()
    );

    transform.apply(&mut image);

    zenppm::save(&args.dst, &image)?;
    log::info!("Image processed and saved to {}", args.dst.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // Usage errors exit 1 like every other failure, not clap's 2.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
