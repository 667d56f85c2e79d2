//! Generate grid background images for Quarto presentations.
//!
//! Renders one dark 1920x1080 PNG per grid pattern, plus a diagonal and a
//! random-opacity variant.
//!
//! ```sh
//! generate-grid-backgrounds                 # writes into ./backgrounds
//! generate-grid-backgrounds -o assets/bg    # custom directory
//! ```

use clap::Parser;
use slidegrid::backgrounds::{OUTPUT_DIR, generate_backgrounds};
use slidegrid::common::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate grid background images
#[derive(Parser, Debug)]
#[command(
    name = "generate-grid-backgrounds",
    about = "Generate grid background images for Quarto presentations",
    version
)]
struct Args {
    /// Directory to write the PNG files into
    #[arg(short, long, value_name = "DIR", default_value = OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    println!("Generating grid background images...");
    let written = match generate_backgrounds(&args.output_dir) {
        Ok(written) => written,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    for path in &written {
        println!("  Created {}", path.display());
    }

    println!(
        "\nDone! Generated {} background images in '{}/' directory",
        written.len(),
        args.output_dir.display()
    );
    println!("\nTo use these images in your slides:");
    println!("1. Add the following to your YAML header:");
    println!("   background-image: {}/grid_fine.png", args.output_dir.display());
    println!("   background-size: cover");
    println!("\n2. Or use per-slide backgrounds:");
    println!(
        "   ## Slide Title {{background-image='{}/grid_medium.png'}}",
        args.output_dir.display()
    );

    ExitCode::SUCCESS
}
