// src/render/latex.rs
use crate::render::{run_captured, ToolConfig};
use crate::utils::error::RenderError;
use std::path::{Path, PathBuf};
use std::process::Command;

const SOURCE_NAME: &str = "table.tex";
const PDF_NAME: &str = "table.pdf";

/// Compiles `document` with pdflatex inside `work_dir`.
///
/// The source is written to `work_dir/table.tex` and every compiler artifact
/// lands in `work_dir`. Success is judged only by `table.pdf` existing
/// afterwards; missing binaries, syntax errors and missing packages all end
/// up as `PdfNotGenerated`.
pub fn compile_latex_to_pdf(
    document: &str,
    work_dir: &Path,
    tools: &ToolConfig,
) -> Result<PathBuf, RenderError> {
    let tex_path = work_dir.join(SOURCE_NAME);
    std::fs::write(&tex_path, document).map_err(|source| RenderError::WriteSource {
        path: tex_path.clone(),
        source,
    })?;

    let mut cmd = Command::new(&tools.pdflatex);
    cmd.arg("-interaction=nonstopmode")
        .arg("-output-directory")
        .arg(work_dir)
        .arg(&tex_path);
    let diagnostics = match run_captured(&mut cmd) {
        Ok(output) => first_latex_error(&String::from_utf8_lossy(&output.stdout))
            .unwrap_or_else(|| {
                let code = output.status.code().unwrap_or(-1);
                format!("pdflatex exited with code {}", code)
            }),
        Err(launch) => launch,
    };

    let pdf_path = work_dir.join(PDF_NAME);
    if pdf_path.exists() {
        Ok(pdf_path)
    } else {
        Err(RenderError::PdfNotGenerated { diagnostics })
    }
}

/// pdflatex reports errors on stdout as lines starting with `!`.
fn first_latex_error(transcript: &str) -> Option<String> {
    transcript
        .lines()
        .find(|line| line.starts_with('!'))
        .map(|line| line.trim().to_string())
}
