// src/main.rs
mod utils;
mod discovery;
mod extractors;
mod composer;
mod render;
mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use pipeline::Converter;
use render::ToolConfig;
use utils::AppError;

/// Command Line Interface for rendering LaTeX tables to cropped PNGs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory scanned recursively for .tex files
    #[arg(default_value = "../../Results")]
    root_dir: PathBuf,

    /// pdflatex binary used to typeset each table
    #[arg(long, env = "PDFLATEX_PATH", default_value = "pdflatex")]
    pdflatex: PathBuf,

    /// ImageMagick binary used to rasterize and crop the PDF
    #[arg(long, env = "MAGICK_PATH", default_value = "magick")]
    magick: PathBuf,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Find the .tex files; a missing root stops here before any process runs
    let tex_files = discovery::find_tex_files(&args.root_dir)?;
    if tex_files.is_empty() {
        return Err(AppError::Config(format!(
            "No .tex files found in {}",
            args.root_dir.display()
        )));
    }
    tracing::info!("Found {} LaTeX files.", tex_files.len());

    // 4. Convert each file, one at a time
    let converter = Converter::new(ToolConfig {
        pdflatex: args.pdflatex,
        magick: args.magick,
    });
    let summary = converter.run(&tex_files);

    tracing::info!(
        "Done. Successful: {}, Failed: {}, Total: {}",
        summary.succeeded,
        summary.failed(),
        summary.total
    );
    tracing::info!("Total time: {:.2} seconds", summary.elapsed.as_secs_f64());
    for (kind, count) in &summary.failures {
        tracing::debug!("{:?}: {}", kind, count);
    }

    if summary.succeeded == 0 && summary.failed() > 0 {
        return Err(AppError::Processing(format!(
            "Failed to render any table from {} files",
            summary.failed()
        )));
    }

    Ok(())
}
