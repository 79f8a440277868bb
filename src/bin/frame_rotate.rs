//! Reference Frame Rotation Tool
//!
//! Rotates a single vector into or out of an Euler-angle reference frame, or
//! moves it between two frames defined in a JSON registry file.
//!
//! Usage:
//!   cargo run --bin frame_rotate -- --order XYZ --angles 30 45 60 --degrees 1 2 3
//!   cargo run --bin frame_rotate -- --order ZXZ --angles 0.1 0.2 0.3 \
//!       --offset 10 20 30 --direction from 1 2 3
//!   cargo run --bin frame_rotate -- --frames frames.json --from body --to sensor 1 2 3

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use evspace::{EulerAngles, FrameRegistry, ReferenceFrame, RotationOrder, RotationType, Vector};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Which way to move the vector relative to the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Direction {
    /// Inertial frame into the rotated frame
    To,
    /// Rotated frame out to the inertial frame
    From,
}

/// Reference Frame Rotation Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rotates a vector between Euler-angle reference frames",
    long_about = None
)]
struct Args {
    /// Euler sequence such as XYZ or ZXZ
    #[arg(long, default_value = "XYZ")]
    order: RotationOrder,

    /// intrinsic or extrinsic
    #[arg(long, default_value = "intrinsic")]
    rotation_type: RotationType,

    /// The three Euler angles (radians unless --degrees)
    #[arg(
        long,
        num_args = 3,
        value_names = ["ALPHA", "BETA", "GAMMA"],
        allow_negative_numbers = true
    )]
    angles: Option<Vec<f64>>,

    /// Interpret --angles in degrees
    #[arg(long, action = ArgAction::SetTrue)]
    degrees: bool,

    /// Frame origin in the inertial basis
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    offset: Option<Vec<f64>>,

    /// Rotate into (to) or out of (from) the frame
    #[arg(long, value_enum, default_value_t = Direction::To)]
    direction: Direction,

    /// JSON file of named frame definitions
    #[arg(long, conflicts_with = "angles")]
    frames: Option<PathBuf>,

    /// Source frame name when using --frames
    #[arg(long, default_value = "inertial", requires = "frames")]
    from: String,

    /// Target frame name when using --frames
    #[arg(long, default_value = "inertial", requires = "frames")]
    to: String,

    /// The vector to transform
    #[arg(
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        required = true,
        allow_negative_numbers = true
    )]
    vector: Vec<f64>,
}

/// Builds a vector from exactly three parsed components
fn to_vector(values: &[f64]) -> Result<Vector> {
    match values {
        [x, y, z] => Ok(Vector::new(*x, *y, *z)),
        _ => Err(format!("Expected 3 components, got {}", values.len()).into()),
    }
}

/// Builds the single frame described by --order, --rotation-type and --angles
fn frame_from_args(args: &Args, angles: &[f64]) -> Result<ReferenceFrame> {
    let [alpha, beta, gamma] = to_vector(angles)?.to_array();
    let angles = if args.degrees {
        EulerAngles::from_degrees(alpha, beta, gamma)
    } else {
        EulerAngles::new(alpha, beta, gamma)
    };

    let offset = match &args.offset {
        Some(values) => to_vector(values)?,
        None => Vector::zeros(),
    };

    Ok(ReferenceFrame::with_offset(args.order, args.rotation_type, angles, offset))
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{}: {}", name, value);
}

fn main() -> Result<()> {
    let args = Args::parse();
    let input = to_vector(&args.vector)?;

    if let Some(path) = &args.frames {
        let registry = FrameRegistry::from_json_file(path)?;
        let output = registry.transform(&args.from, &args.to, &input)?;

        print_named_value("Frames", path.display());
        print_named_value("From", &args.from);
        print_named_value("To", &args.to);
        print_named_value("Input", input);
        print_named_value("Output", output);
        return Ok(());
    }

    let angles = args
        .angles
        .as_deref()
        .ok_or("Either --angles or --frames is required")?;
    let frame = frame_from_args(&args, angles)?;

    let output = match args.direction {
        Direction::To => frame.rotate_to(&input),
        Direction::From => frame.rotate_from(&input),
    };

    print_named_value("Order", format!("{} ({})", frame.order(), frame.rotation_type()));
    print_named_value("Angles (rad)", format!("{:?}", frame.angles().to_array()));
    print_named_value("Offset", frame.offset());
    print_named_value("Matrix", frame.matrix());
    print_named_value("Input", input);
    print_named_value("Output", output);

    Ok(())
}
