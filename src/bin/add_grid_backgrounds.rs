//! Add grid background states to Quarto reveal.js slides.
//!
//! Every level-2 heading gets a `{data-state="grid-..."}` attribute. Slides
//! with figures or iframes get `grid-none`; the others get a random grid
//! pattern. Running the tool again updates the attributes in place.
//!
//! # Usage
//!
//! ```sh
//! add-grid-backgrounds slides.qmd              # Update file in place
//! add-grid-backgrounds slides.qmd -o new.qmd   # Write to new file
//! add-grid-backgrounds slides.qmd --seed 42    # Use seed for reproducibility
//! ```

use clap::Parser;
use slidegrid::annotate::{AnnotateOptions, process_file};
use slidegrid::common::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

/// Add random grid backgrounds to Quarto reveal.js slides
#[derive(Parser, Debug)]
#[command(
    name = "add-grid-backgrounds",
    about = "Add random grid backgrounds to Quarto reveal.js slides",
    version
)]
struct Args {
    /// Input .qmd file
    #[arg(value_name = "INPUT")]
    input_file: PathBuf,

    /// Output file (default: overwrite input file)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Log each slide decision to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut options = AnnotateOptions::new().with_optional_seed(args.seed);
    if let Some(output) = args.output {
        options = options.with_output(output);
    }

    match process_file(&args.input_file, &options) {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        },
        Err(e) if e.is_input_rejection() => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("Error processing file: {}", e);
            ExitCode::FAILURE
        },
    }
}
