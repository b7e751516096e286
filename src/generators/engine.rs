//! WeasyPrint rendering engine.
//!
//! Handles the low-level details of writing the rendered HTML to a
//! per-request scratch directory, invoking the converter binary, and
//! reading back the output PDF.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;
use uuid::Uuid;

use super::common::get_static_dir;
use super::GeneratorError;

/// Converts a complete HTML document string into PDF bytes.
pub trait HtmlPdfEngine: Send + Sync {
    fn convert(&self, html: &str) -> Result<Vec<u8>, GeneratorError>;
}

/// Engine that shells out to the WeasyPrint CLI.
///
/// Each conversion runs in its own temporary directory, which is removed
/// when the conversion finishes; no generated file outlives its request.
pub struct WeasyPrintEngine {
    binary: String,
    base_url: PathBuf,
}

impl WeasyPrintEngine {
    /// Create an engine invoking the given binary, resolving relative
    /// assets in the generated HTML against the static directory.
    pub fn new(binary: String) -> Self {
        Self {
            binary,
            base_url: get_static_dir().to_path_buf(),
        }
    }
}

impl HtmlPdfEngine for WeasyPrintEngine {
    fn convert(&self, html: &str) -> Result<Vec<u8>, GeneratorError> {
        let temp_dir = tempdir().map_err(GeneratorError::TempDir)?;
        let html_path = temp_dir.path().join("orcamento.html");
        fs::write(&html_path, html).map_err(GeneratorError::WriteHtml)?;

        // The on-disk output name carries a UUID so concurrent conversions
        // can never collide on a path.
        let output_path = temp_dir
            .path()
            .join(format!("orcamento-{}.pdf", Uuid::new_v4()));

        let output = Command::new(&self.binary)
            .arg("--base-url")
            .arg(&self.base_url)
            .arg(&html_path)
            .arg(&output_path)
            .current_dir(temp_dir.path())
            .output()
            .map_err(GeneratorError::ConverterIo)?;

        if !output.status.success() {
            return Err(GeneratorError::ConverterExit {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        fs::read(&output_path).map_err(GeneratorError::ReadPdf)
    }
}
