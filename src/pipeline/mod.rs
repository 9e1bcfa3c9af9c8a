// src/pipeline/mod.rs
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::composer::compose_document;
use crate::extractors::extract_table_from_file;
use crate::render::{compile_latex_to_pdf, output_png_path, rasterize, ToolConfig};
use crate::utils::error::{ConvertError, FailureKind};

const WORK_DIR_PREFIX: &str = "tex_table_png";

/// Outcome of a whole batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failures: BTreeMap<FailureKind, usize>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.failures.values().sum()
    }

    fn record(&mut self, outcome: &Result<PathBuf, ConvertError>) {
        self.total += 1;
        match outcome {
            Ok(_) => self.succeeded += 1,
            Err(e) => *self.failures.entry(e.kind()).or_insert(0) += 1,
        }
    }
}

/// Converts `.tex` files into cropped PNGs of their first table, one at a time.
pub struct Converter {
    tools: ToolConfig,
}

impl Converter {
    pub fn new(tools: ToolConfig) -> Self {
        Self { tools }
    }

    /// Runs extract -> compose -> compile -> rasterize for one file.
    ///
    /// Returns the path of the written PNG. The per-file working directory is
    /// removed before this returns, whatever the outcome. No external process
    /// is started when the file has no table.
    pub fn convert_file(&self, tex_path: &Path) -> Result<PathBuf, ConvertError> {
        let fragment = extract_table_from_file(tex_path)?.ok_or(ConvertError::NoTableFound)?;

        let work_dir = tempfile::Builder::new()
            .prefix(WORK_DIR_PREFIX)
            .tempdir()
            .map_err(ConvertError::WorkDir)?;

        let document = compose_document(&fragment);
        let pdf_path = compile_latex_to_pdf(&document, work_dir.path(), &self.tools)?;

        let output_png = output_png_path(tex_path);
        rasterize(&pdf_path, &output_png, work_dir.path(), &self.tools)?;

        Ok(output_png)
    }

    /// Processes every file serially. Per-file failures are logged and counted,
    /// never propagated.
    pub fn run(&self, files: &[PathBuf]) -> BatchSummary {
        let start = Instant::now();
        let mut summary = BatchSummary::default();

        for tex_file in files {
            tracing::info!("Processing: {}", tex_file.display());
            let outcome = self.convert_file(tex_file);

            match &outcome {
                Ok(png) => tracing::info!("PNG saved: {}", png.display()),
                Err(e) => {
                    tracing::error!("{}", e.kind().message());
                    if !matches!(e, ConvertError::NoTableFound) {
                        tracing::warn!("{}: {}", tex_file.display(), e);
                    }
                }
            }
            summary.record(&outcome);
        }

        summary.elapsed = start.elapsed();
        summary
    }
}
