//! Document generation: renders the orçamento HTML layout and converts it
//! to a PDF through an external HTML-to-PDF engine.

pub mod common;
pub mod engine;
pub mod orcamento;

pub use engine::{HtmlPdfEngine, WeasyPrintEngine};
pub use orcamento::OrcamentoGenerator;

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to load HTML template: {0}")]
    TemplateIo(#[source] std::io::Error),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write HTML source: {0}")]
    WriteHtml(#[source] std::io::Error),
    #[error("PDF converter execution failed: {0}")]
    ConverterIo(#[source] std::io::Error),
    #[error("PDF converter exited with status {status}: {stderr}")]
    ConverterExit { status: i32, stderr: String },
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    pub data_emissao: String,
}
