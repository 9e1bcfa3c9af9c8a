// src/render/mod.rs
pub mod latex;
pub mod magick;

use std::path::PathBuf;
use std::process::{Command, Output};

pub use latex::compile_latex_to_pdf;
pub use magick::{output_png_path, rasterize};

/// Locations of the external binaries the pipeline shells out to.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub pdflatex: PathBuf,
    pub magick: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            pdflatex: PathBuf::from("pdflatex"),
            magick: PathBuf::from("magick"),
        }
    }
}

/// Runs a command to completion with stdout and stderr captured.
///
/// The exit status is not inspected here; callers judge success by the
/// artifacts the tool leaves behind. A launch failure (binary missing, not
/// executable) comes back as its message for use as diagnostic text.
pub(crate) fn run_captured(cmd: &mut Command) -> Result<Output, String> {
    tracing::debug!("Running {:?}", cmd);
    cmd.output().map_err(|e| {
        let program = cmd.get_program().to_string_lossy().into_owned();
        if e.kind() == std::io::ErrorKind::NotFound {
            format!("{} not found", program)
        } else {
            format!("failed to launch {}: {}", program, e)
        }
    })
}
