// src/render/magick.rs
use crate::render::{run_captured, ToolConfig};
use crate::utils::error::RenderError;
use std::path::{Path, PathBuf};
use std::process::Command;

const DENSITY: &str = "450";
const BORDER: &str = "150x150";

/// `results/table1.tex` -> `results/table1.png`
pub fn output_png_path(tex_path: &Path) -> PathBuf {
    tex_path.with_extension("png")
}

/// Rasterizes `pdf_path` and crops it into `output_png`.
///
/// Two ImageMagick passes: render at 450 DPI flattened onto white, then trim
/// the uniform border and pad with 150px of white. The intermediate PNG lives
/// in `work_dir` and is removed once the final image exists. Success is judged
/// only by `output_png` existing afterwards; any previous file at that path is
/// removed first.
pub fn rasterize(
    pdf_path: &Path,
    output_png: &Path,
    work_dir: &Path,
    tools: &ToolConfig,
) -> Result<(), RenderError> {
    let stem = output_png
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());
    let raw_png = work_dir.join(format!("{}_raw.png", stem));

    // A PNG left by an earlier run would otherwise pass the existence check below
    match std::fs::remove_file(output_png) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
            tracing::warn!("Could not remove stale {}: {}", output_png.display(), e)
        }
        _ => {}
    }

    let mut diagnostics = Vec::new();

    // Step 1: PDF -> high resolution PNG
    let mut render = Command::new(&tools.magick);
    render
        .arg("-density")
        .arg(DENSITY)
        .arg(pdf_path)
        .args(["-background", "white", "-alpha", "remove", "-alpha", "off"])
        .arg(format!("PNG:{}", raw_png.display()));
    collect_stderr(run_captured(&mut render), &mut diagnostics);

    // Step 2: trim and add white border
    let mut crop = Command::new(&tools.magick);
    crop.arg(&raw_png)
        .args(["-trim", "-bordercolor", "white", "-border", BORDER])
        .arg(output_png);
    collect_stderr(run_captured(&mut crop), &mut diagnostics);

    if !output_png.exists() {
        return Err(RenderError::PngConversionFailed {
            diagnostics: diagnostics.join("; "),
        });
    }

    if let Err(e) = std::fs::remove_file(&raw_png) {
        tracing::debug!("Could not remove intermediate {}: {}", raw_png.display(), e);
    }
    Ok(())
}

fn collect_stderr(result: Result<std::process::Output, String>, into: &mut Vec<String>) {
    match result {
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if !stderr.is_empty() {
                into.push(stderr);
            }
        }
        Err(launch) => into.push(launch),
    }
}
