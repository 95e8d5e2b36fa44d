//! CLI driver: landmark list in, feature values out.
//!
//! Usage:
//!   face-features landmarks.json --width 640 --height 480
//!   face-features landmarks.json --width 640 --height 480 --json
//!   face-features landmarks.json --width 640 --height 480 -o features.json
//!
//! The landmark file is a JSON array of 468 `{"x": .., "y": .., "z": ..}`
//! objects in MediaPipe face-mesh index order, with coordinates normalized
//! to [0, 1], as produced by an external detector.

use clap::Parser;
use face_features::{
    EyeAnalyzer, FaceAnalyzer, Landmark, LandmarkSet, MouthAnalyzer, Point,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "face-features")]
#[command(author, version, about = "Facial-expression features from face-mesh landmarks", long_about = None)]
struct Args {
    /// JSON file with 468 normalized landmarks
    #[arg(required = true)]
    landmarks: PathBuf,

    /// Pixel width of the image the landmarks were detected against
    #[arg(long)]
    width: u32,

    /// Pixel height of the image the landmarks were detected against
    #[arg(long)]
    height: u32,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output structure for JSON serialization
#[derive(Serialize)]
struct Output {
    landmarks: String,
    width: u32,
    height: u32,
    features: FeaturesOutput,
}

#[derive(Serialize)]
struct FeaturesOutput {
    /// Areas in square pixels
    mouth_outer_area: f64,
    eye_inner_area: f64,
    face_area: f64,
    /// Scale-normalized distance metrics
    mouth_corner_distance: f64,
    eyebrow_activity: f64,
    /// Center of mass, raw pixels
    face_com: f64,
    face_center_of_mass: Point,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.verbose {
        eprintln!("Loading landmarks from {:?}...", args.landmarks);
    }
    let raw = std::fs::read_to_string(&args.landmarks)?;
    let points: Vec<Landmark> = serde_json::from_str(&raw)?;
    let landmarks = LandmarkSet::new(points)?;

    if args.verbose {
        eprintln!("Analyzing {} landmarks...", landmarks.len());
    }

    let mouth = MouthAnalyzer::with_landmarks(landmarks.clone(), args.width, args.height)?;
    let eye = EyeAnalyzer::with_landmarks(landmarks.clone(), args.width, args.height)?;
    let face = FaceAnalyzer::with_landmarks(landmarks, args.width, args.height)?;

    let output = Output {
        landmarks: args.landmarks.display().to_string(),
        width: args.width,
        height: args.height,
        features: FeaturesOutput {
            mouth_outer_area: mouth.mouth_outer_area()?,
            eye_inner_area: eye.eye_inner_area()?,
            face_area: face.face_area()?,
            mouth_corner_distance: mouth.mouth_corner_distance()?,
            eyebrow_activity: eye.eyebrow_activity()?,
            face_com: face.face_com()?,
            face_center_of_mass: face.face_center_of_mass()?,
        },
    };

    let output_str = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        format_human_readable(&output)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        if args.verbose {
            eprintln!("Output written to {:?}", path);
        }
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(output: &Output) -> String {
    let mut s = String::new();
    let f = &output.features;

    s.push_str(&format!(
        "Landmarks: {} ({}x{} image)\n",
        output.landmarks, output.width, output.height
    ));

    s.push_str("\nAreas (px^2):\n");
    s.push_str(&format!("  Mouth outer: {:.1}\n", f.mouth_outer_area));
    s.push_str(&format!("  Eye inner:   {:.1}\n", f.eye_inner_area));
    s.push_str(&format!("  Face:        {:.1}\n", f.face_area));

    s.push_str("\nNormalized distances:\n");
    s.push_str(&format!("  Mouth corner:     {:.4}\n", f.mouth_corner_distance));
    s.push_str(&format!("  Eyebrow activity: {:.4}\n", f.eyebrow_activity));

    s.push_str("\nCenter of mass:\n");
    s.push_str(&format!(
        "  ({:.1}, {:.1}) px, |com| = {:.1}\n",
        f.face_center_of_mass.x, f.face_center_of_mass.y, f.face_com
    ));

    s
}
